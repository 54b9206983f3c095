use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::SliderConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::figure::{PieFigure, ScatterFigure, payload_scatter, success_pie};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Control values only change through the setters, which recompute exactly the
/// figures that depend on the changed control.
pub struct AppState {
    /// Launch records, loaded once before the window opens.
    pub dataset: Arc<LaunchDataset>,

    /// Fixed range and marks of the payload selector.
    pub slider: SliderConfig,

    /// Booster version colours for the scatter chart.
    pub booster_colors: ColorMap,

    /// Text typed into the site dropdown's search box.
    pub site_query: String,

    site: SiteSelection,
    payload_range: PayloadRange,

    pie: PieFigure,
    scatter: ScatterFigure,

    pie_updates: usize,
    scatter_updates: usize,
}

impl AppState {
    /// Seed the controls from the dataset and compute the initial figures.
    ///
    /// The payload range starts at the observed min/max payload; an empty
    /// dataset falls back to the full slider range.
    pub fn new(dataset: Arc<LaunchDataset>, slider: SliderConfig, site: SiteSelection) -> Self {
        let (low, high) = dataset.payload_bounds().unwrap_or((slider.min, slider.max));
        let payload_range = PayloadRange::new(low, high);

        let pie = success_pie(&dataset, &site);
        let scatter = payload_scatter(&dataset, &site, payload_range);
        let booster_colors = ColorMap::new(&dataset.booster_versions);

        Self {
            dataset,
            slider,
            booster_colors,
            site_query: String::new(),
            site,
            payload_range,
            pie,
            scatter,
            pie_updates: 1,
            scatter_updates: 1,
        }
    }

    pub fn site(&self) -> &SiteSelection {
        &self.site
    }

    pub fn payload_range(&self) -> PayloadRange {
        self.payload_range
    }

    pub fn pie(&self) -> &PieFigure {
        &self.pie
    }

    pub fn scatter(&self) -> &ScatterFigure {
        &self.scatter
    }

    /// Change the site selector. Both charts depend on it.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("Site changed to {site}");
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Change the payload range. Only the scatter chart depends on it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        log::debug!("Payload range changed to ({}, {})", range.low, range.high);
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = success_pie(&self.dataset, &self.site);
        self.pie_updates += 1;
        log::debug!(
            "Recomputed proportion chart #{}: {} slices",
            self.pie_updates,
            self.pie.slices.len()
        );
    }

    fn refresh_scatter(&mut self) {
        self.scatter = payload_scatter(&self.dataset, &self.site, self.payload_range);
        self.scatter_updates += 1;
        log::debug!(
            "Recomputed scatter chart #{}: {} points",
            self.scatter_updates,
            self.scatter.point_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dataset;

    fn state() -> AppState {
        AppState::new(
            Arc::new(sample_dataset()),
            SliderConfig::default(),
            SiteSelection::default(),
        )
    }

    #[test]
    fn starts_on_all_sites_with_observed_payload_bounds() {
        let st = state();
        assert_eq!(st.site(), &SiteSelection::All);
        assert_eq!(st.payload_range(), PayloadRange::new(0.0, 9600.0));
        assert_eq!(st.pie().slices.len(), 4);
        // The records at exactly 0 and 9600 kg sit on the default bounds.
        assert_eq!(st.scatter().point_count(), 8);
    }

    #[test]
    fn empty_dataset_uses_slider_range() {
        let st = AppState::new(
            Arc::new(LaunchDataset::from_records(Vec::new())),
            SliderConfig::default(),
            SiteSelection::All,
        );
        assert_eq!(st.payload_range(), PayloadRange::new(0.0, 10_000.0));
        assert!(st.pie().is_empty());
        assert!(st.scatter().is_empty());
    }

    #[test]
    fn site_change_recomputes_both_charts_once() {
        let mut st = state();
        st.set_site(SiteSelection::Site("KSC LC-39A".into()));
        assert_eq!((st.pie_updates, st.scatter_updates), (2, 2));
        assert_eq!(st.pie().title, "Success rate for KSC LC-39A site");
        assert_eq!(st.scatter().title, "KSC LC-39A site payload success rate");
    }

    #[test]
    fn payload_change_recomputes_only_scatter() {
        let mut st = state();
        st.set_payload_range(PayloadRange::new(2000.0, 10_000.0));
        assert_eq!((st.pie_updates, st.scatter_updates), (1, 2));
        assert_eq!(st.scatter().point_count(), 5);
    }

    #[test]
    fn unknown_configured_site_starts_on_all_sites() {
        let ds = sample_dataset();
        let site = SiteSelection::from_dataset_value("Boca Chica", &ds);
        let st = AppState::new(Arc::new(ds), SliderConfig::default(), site);
        assert_eq!(st.site(), &SiteSelection::All);
        assert_eq!(st.pie().slices.len(), 4);
        assert_eq!(st.scatter().point_count(), 8);
    }

    #[test]
    fn initial_site_comes_from_caller() {
        let st = AppState::new(
            Arc::new(sample_dataset()),
            SliderConfig::default(),
            SiteSelection::from_value("VAFB SLC-4E"),
        );
        assert_eq!(st.pie().title, "Success rate for VAFB SLC-4E site");
        assert_eq!((st.pie_updates, st.scatter_updates), (1, 1));
    }

    #[test]
    fn unchanged_value_does_not_recompute() {
        let mut st = state();
        st.set_site(SiteSelection::All);
        st.set_payload_range(st.payload_range());
        assert_eq!((st.pie_updates, st.scatter_updates), (1, 1));
    }
}
