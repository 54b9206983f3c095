use crate::data::filter::{PayloadRange, SiteSelection, filtered_records};
use crate::data::loader::{CLASS_COLUMN, PAYLOAD_COLUMN};
use crate::data::model::LaunchDataset;
use crate::data::summary::{outcome_counts, success_rate_by_site};

// ---------------------------------------------------------------------------
// Figure descriptions, independent of any rendering backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Proportion chart: slice sizes are relative to [`PieFigure::total`].
#[derive(Debug, Clone, PartialEq)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Points of one booster version, `[payload, class]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster_version: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterFigure {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------
// View-update functions
// ---------------------------------------------------------------------------

/// Success proportions for the selected site.
///
/// * `All`: one slice per site whose value is that site's success rate.
/// * A concrete site: one slice per outcome observed at that site, valued by count.
pub fn success_pie(dataset: &LaunchDataset, site: &SiteSelection) -> PieFigure {
    let records = filtered_records(dataset, site, None);
    match site {
        SiteSelection::All => PieFigure {
            title: "All launch sites success rate".to_string(),
            slices: success_rate_by_site(&records)
                .into_iter()
                .map(|(label, value)| PieSlice { label, value })
                .collect(),
        },
        SiteSelection::Site(name) => PieFigure {
            title: format!("Success rate for {name} site"),
            slices: outcome_counts(&records)
                .into_iter()
                .map(|(outcome, n)| PieSlice {
                    label: outcome.to_string(),
                    value: n as f64,
                })
                .collect(),
        },
    }
}

/// Payload vs. outcome for the selected site within the exclusive payload range,
/// one series per booster version in order of first appearance.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterFigure {
    let title = match site {
        SiteSelection::All => "All sites payload success rate".to_string(),
        SiteSelection::Site(name) => format!("{name} site payload success rate"),
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    for rec in filtered_records(dataset, site, Some(range)) {
        let point = [rec.payload_mass_kg, rec.outcome.class()];
        match series
            .iter_mut()
            .find(|s| s.booster_version == rec.booster_version)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                booster_version: rec.booster_version.clone(),
                points: vec![point],
            }),
        }
    }

    ScatterFigure {
        title,
        x_label: PAYLOAD_COLUMN.to_string(),
        y_label: CLASS_COLUMN.to_string(),
        series,
    }
}
