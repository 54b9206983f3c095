use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Ui, vec2};

use crate::config::SliderConfig;
use crate::data::filter::{PayloadRange, SiteSelection, matching_sites};
use crate::state::AppState;

const TITLE_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Render the centred page title.
pub fn header(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).size(40.0).color(TITLE_COLOR).strong());
    });
}

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// "All Sites" followed by every site present in the dataset, narrowed by a
/// search box at the top of the popup.
pub fn site_selector(ui: &mut Ui, state: &mut AppState) {
    let mut picked = state.site().clone();
    let mut query = std::mem::take(&mut state.site_query);

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Launch Site");
        egui::ComboBox::from_id_salt("site_dropdown")
            .selected_text(picked.to_string())
            .width(240.0)
            .show_ui(ui, |ui: &mut Ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Select a Launch Site")
                        .desired_width(220.0),
                );
                ui.selectable_value(&mut picked, SiteSelection::All, SiteSelection::ALL_LABEL);
                for site in matching_sites(&state.dataset.sites, &query) {
                    ui.selectable_value(&mut picked, SiteSelection::Site(site.clone()), site);
                }
            });
    });

    state.site_query = query;
    state.set_site(picked);
}

// ---------------------------------------------------------------------------
// Payload range selector
// ---------------------------------------------------------------------------

/// Two handles (low, high) over the fixed slider range. The handles may cross;
/// an inverted range simply selects nothing.
pub fn payload_selector(ui: &mut Ui, state: &mut AppState) {
    let cfg = state.slider.clone();
    let PayloadRange { mut low, mut high } = state.payload_range();

    ui.label("Payload range (Kg):");
    ui.add(
        egui::Slider::new(&mut low, cfg.min..=cfg.max)
            .step_by(cfg.step)
            .text("low"),
    );
    ui.add(
        egui::Slider::new(&mut high, cfg.min..=cfg.max)
            .step_by(cfg.step)
            .text("high"),
    );
    slider_marks(ui, &cfg);

    state.set_payload_range(PayloadRange::new(low, high));
}

/// Tick labels under the sliders, aligned with the slider track.
fn slider_marks(ui: &mut Ui, cfg: &SliderConfig) {
    let width = ui.spacing().slider_width;
    let (rect, _) = ui.allocate_exact_size(vec2(width, 14.0), Sense::hover());
    let span = cfg.max - cfg.min;
    if span <= 0.0 {
        return;
    }

    let painter = ui.painter();
    let color = ui.visuals().weak_text_color();
    for &mark in &cfg.marks {
        let t = ((mark - cfg.min) / span) as f32;
        let x = rect.left() + t * rect.width();
        painter.text(
            egui::pos2(x, rect.top()),
            Align2::CENTER_TOP,
            format!("{mark}"),
            FontId::proportional(11.0),
            color,
        );
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} launch records loaded", state.dataset.len()));
        ui.separator();
        ui.label(format!("{} sites", state.dataset.sites.len()));
        ui.separator();
        ui.label(format!("{} points in scatter", state.scatter().point_count()));
    });
}
