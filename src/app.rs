use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
    title: String,
}

impl LaunchDashApp {
    pub fn new(state: AppState, title: String) -> Self {
        Self { state, title }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: page title ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.title);
        });

        // ---- Bottom panel: record counts ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: controls and both charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = (ui.available_height() * 0.4).max(260.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::site_selector(ui, &mut self.state);
                    ui.add_space(8.0);

                    plot::success_pie_chart(ui, self.state.pie(), chart_height);
                    ui.add_space(8.0);

                    panels::payload_selector(ui, &mut self.state);
                    ui.add_space(8.0);

                    plot::payload_scatter_chart(ui, &self.state, chart_height);
                });
        });
    }
}
