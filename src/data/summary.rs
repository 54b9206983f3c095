use std::collections::BTreeMap;

use super::model::{LaunchRecord, Outcome};

/// Mean outcome (success rate in `[0, 1]`) per site, sites in ascending name order.
pub fn success_rate_by_site(records: &[&LaunchRecord]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in records {
        let (sum, n) = groups.entry(rec.site.as_str()).or_default();
        *sum += rec.outcome.class();
        *n += 1;
    }
    groups
        .into_iter()
        .map(|(site, (sum, n))| (site.to_string(), sum / n as f64))
        .collect()
}

/// Count of each outcome actually present, largest count first.
///
/// Outcomes that never occur are not listed, so a site that never failed
/// yields a single entry. Equal counts put `Success` first.
pub fn outcome_counts(records: &[&LaunchRecord]) -> Vec<(Outcome, usize)> {
    let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
    for rec in records {
        *counts.entry(rec.outcome).or_default() += 1;
    }
    let mut counts: Vec<(Outcome, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    counts
}
