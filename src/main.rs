mod app;
mod color;
mod config;
mod data;
mod figure;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use app::LaunchDashApp;
use config::{CONFIG_FILE, DashboardConfig};
use data::filter::SiteSelection;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))?;

    // The dataset is loaded once, before any control exists; failure is fatal.
    let dataset = match data::loader::load_file(&config.data_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load launch data: {e:#}");
            return Err(e);
        }
    };
    if dataset.is_empty() {
        log::warn!("{} contains no launch records", config.data_path.display());
    }
    log::info!(
        "Loaded {} launch records from {} ({} sites, payload range {:?})",
        dataset.len(),
        config.data_path.display(),
        dataset.sites.len(),
        dataset.payload_bounds()
    );

    let site = SiteSelection::from_dataset_value(&config.default_site, &dataset);
    let state = AppState::new(Arc::new(dataset), config.payload_slider.clone(), site);
    let title = config.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state, title)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running dashboard window")
}
