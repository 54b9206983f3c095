use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Site selection: the dropdown value
// ---------------------------------------------------------------------------

/// Either every launch site or one concrete site name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Value the dropdown reports for the sentinel entry.
    pub const ALL_VALUE: &'static str = "ALL";
    /// Label shown for the sentinel entry.
    pub const ALL_LABEL: &'static str = "All Sites";

    /// Map a raw dropdown value to a selection.
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Map a configured value to a selection, accepting only the sentinel or a
    /// site present in the dataset. Anything else falls back to `All`.
    pub fn from_dataset_value(value: &str, dataset: &LaunchDataset) -> Self {
        match Self::from_value(value) {
            SiteSelection::Site(site) if !dataset.sites.contains(&site) => {
                log::warn!("Unknown launch site '{site}', showing all sites instead");
                SiteSelection::All
            }
            selection => selection,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", Self::ALL_LABEL),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range: the range-slider value
// ---------------------------------------------------------------------------

/// Payload bounds in kilograms. Both ends are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// `low < payload < high`. A record sitting exactly on a bound is excluded,
    /// and an inverted range (`low >= high`) contains nothing.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg > self.low && payload_mass_kg < self.high
    }
}

/// Sites whose name contains `query`, ignoring case. An empty query keeps all.
pub fn matching_sites<'a>(sites: &'a [String], query: &str) -> Vec<&'a String> {
    let query = query.trim().to_lowercase();
    sites
        .iter()
        .filter(|s| s.to_lowercase().contains(&query))
        .collect()
}

/// Return indices of records that match the site and, if given, lie inside the
/// payload range. Indices are in file order.
pub fn filtered_indices(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: Option<PayloadRange>,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(rec))
        .filter(|(_, rec)| range.map_or(true, |r| r.contains(rec.payload_mass_kg)))
        .map(|(i, _)| i)
        .collect()
}

/// Records selected by [`filtered_indices`], borrowed from the dataset.
pub fn filtered_records<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    range: Option<PayloadRange>,
) -> Vec<&'a LaunchRecord> {
    filtered_indices(dataset, site, range)
        .into_iter()
        .map(|i| &dataset.records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dataset;

    #[test]
    fn sentinel_value_maps_to_all() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        assert_eq!(SiteSelection::default(), SiteSelection::All);
    }

    #[test]
    fn configured_site_must_exist_in_dataset() {
        let ds = sample_dataset();
        assert_eq!(
            SiteSelection::from_dataset_value("Boca Chica", &ds),
            SiteSelection::All
        );
        assert_eq!(
            SiteSelection::from_dataset_value("ALL", &ds),
            SiteSelection::All
        );
        assert_eq!(
            SiteSelection::from_dataset_value("VAFB SLC-4E", &ds),
            SiteSelection::Site("VAFB SLC-4E".into())
        );
    }

    #[test]
    fn site_search_is_case_insensitive_substring() {
        let ds = sample_dataset();
        assert_eq!(matching_sites(&ds.sites, "ccafs"), vec!["CCAFS LC-40", "CCAFS SLC-40"]);
        assert_eq!(matching_sites(&ds.sites, " slc").len(), 2);
        assert_eq!(matching_sites(&ds.sites, "").len(), ds.sites.len());
        assert!(matching_sites(&ds.sites, "boca").is_empty());
    }

    #[test]
    fn all_sites_without_range_selects_everything() {
        let ds = sample_dataset();
        let idx = filtered_indices(&ds, &SiteSelection::All, None);
        assert_eq!(idx, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn site_filter_keeps_only_that_site() {
        let ds = sample_dataset();
        let site = SiteSelection::Site("KSC LC-39A".into());
        assert_eq!(filtered_indices(&ds, &site, None), vec![4, 5, 8]);
    }

    #[test]
    fn payload_bounds_are_exclusive() {
        let ds = sample_dataset();
        let range = PayloadRange::new(2000.0, 6070.0);
        let recs = filtered_records(&ds, &SiteSelection::All, Some(range));
        assert!(recs.iter().all(|r| r.payload_mass_kg > 2000.0 && r.payload_mass_kg < 6070.0));
        // 2000 (two records) and 6070 sit on the bounds.
        assert_eq!(filtered_indices(&ds, &SiteSelection::All, Some(range)), vec![4, 5, 6]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let ds = sample_dataset();
        let range = PayloadRange::new(8000.0, 1000.0);
        assert!(filtered_indices(&ds, &SiteSelection::All, Some(range)).is_empty());
    }

    #[test]
    fn unknown_site_yields_empty_selection() {
        let ds = sample_dataset();
        let site = SiteSelection::Site("Boca Chica".into());
        assert!(filtered_indices(&ds, &site, None).is_empty());
    }
}
