/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ──▶ │ summary   │  per-site rates, outcome counts
///   └──────────┘      └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;

/// Small launch table shared by the unit tests.
#[cfg(test)]
pub(crate) const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version
0,1,CCAFS LC-40,0,0.0,F9 v1.0 B0003
1,2,CCAFS LC-40,0,525.0,F9 v1.0 B0005
2,3,VAFB SLC-4E,0,500.0,F9 v1.1
3,4,CCAFS LC-40,1,2000.0,F9 v1.1
4,5,KSC LC-39A,1,2490.0,F9 FT
5,6,KSC LC-39A,1,5300.0,F9 FT
6,7,CCAFS SLC-40,1,3669.0,F9 B4
7,8,VAFB SLC-4E,1,9600.0,F9 B4
8,9,KSC LC-39A,0,6070.0,F9 B4
9,10,CCAFS SLC-40,1,2000.0,F9 B5
";

#[cfg(test)]
pub(crate) fn sample_dataset() -> model::LaunchDataset {
    loader::parse_csv(SAMPLE_CSV.as_bytes()).unwrap()
}
