use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Landing outcome of a single launch (`class` column: 0 = failure, 1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` cell. Only exactly 0 or 1 are accepted.
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 0.0 {
            Some(Outcome::Failure)
        } else if class == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    /// Numeric value as plotted on the scatter y axis and averaged per site.
    pub fn class(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Always finite and `>= 0` once loaded.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded record set
// ---------------------------------------------------------------------------

/// The immutable record set plus the derived values used to seed the controls.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    /// All records, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct site names in order of first appearance.
    pub sites: Vec<String>,
    /// Distinct booster versions in order of first appearance.
    pub booster_versions: Vec<String>,
    payload_bounds: Option<(f64, f64)>,
}

impl LaunchDataset {
    /// Build the derived indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites = distinct_in_order(records.iter().map(|r| r.site.as_str()));
        let booster_versions =
            distinct_in_order(records.iter().map(|r| r.booster_version.as_str()));

        let payload_bounds = records.iter().map(|r| r.payload_mass_kg).fold(
            None,
            |acc: Option<(f64, f64)>, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            },
        );

        LaunchDataset {
            records,
            sites,
            booster_versions,
            payload_bounds,
        }
    }

    /// Observed `(min, max)` payload mass, `None` when there are no records.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.payload_bounds
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dataset;

    #[test]
    fn outcome_accepts_only_zero_and_one() {
        assert_eq!(Outcome::from_class(0.0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0.5), None);
        assert_eq!(Outcome::from_class(2.0), None);
        assert_eq!(Outcome::from_class(f64::NAN), None);
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let ds = sample_dataset();
        assert_eq!(
            ds.sites,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn payload_bounds_are_observed_min_and_max() {
        let ds = sample_dataset();
        assert_eq!(ds.payload_bounds(), Some((0.0, 9600.0)));
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
        assert!(ds.sites.is_empty());
    }
}
