use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, PlotUi, Points, Polygon, Text};

use crate::color::generate_palette;
use crate::figure::PieFigure;
use crate::state::AppState;

/// egui fills polygons as convex shapes, so wedges are split into pieces no
/// wider than a quarter turn.
const MAX_WEDGE_PIECE: f64 = FRAC_PI_2;
const ARC_STEPS_PER_TURN: f64 = 128.0;
const LABEL_RADIUS: f64 = 0.65;

// ---------------------------------------------------------------------------
// Proportion chart
// ---------------------------------------------------------------------------

/// Render the success proportion chart as a pie made of wedge polygons.
pub fn success_pie_chart(ui: &mut Ui, fig: &PieFigure, height: f32) {
    ui.strong(&fig.title);

    let total = fig.total();
    let colors = generate_palette(fig.slices.len());

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            if fig.is_empty() || total <= 0.0 {
                no_data(plot_ui, PlotPoint::new(0.0, 0.0));
                return;
            }

            // Start at twelve o'clock and go clockwise.
            let mut start = FRAC_PI_2;
            for (slice, &color) in fig.slices.iter().zip(colors.iter()) {
                let frac = slice.value / total;
                let sweep = frac * TAU;
                wedge(plot_ui, &slice.label, color, start, start - sweep);

                if let Some([x, y]) = label_anchor(start, sweep) {
                    plot_ui.text(Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(format!("{:.1}%", frac * 100.0)).color(Color32::WHITE),
                    ));
                }
                start -= sweep;
            }
        });
}

/// Where a slice's percentage label goes. Zero-width slices get no label.
fn label_anchor(start: f64, sweep: f64) -> Option<[f64; 2]> {
    if sweep <= 0.0 {
        return None;
    }
    let mid = start - sweep / 2.0;
    Some([LABEL_RADIUS * mid.cos(), LABEL_RADIUS * mid.sin()])
}

fn wedge(plot_ui: &mut PlotUi, name: &str, color: Color32, from: f64, to: f64) {
    let sweep = from - to;
    if sweep <= 0.0 {
        return;
    }
    let pieces = (sweep / MAX_WEDGE_PIECE).ceil() as usize;
    let piece = sweep / pieces as f64;

    for i in 0..pieces {
        let a0 = from - piece * i as f64;
        let steps = ((piece / TAU) * ARC_STEPS_PER_TURN).ceil().max(2.0) as usize;
        let mut pts = Vec::with_capacity(steps + 2);
        pts.push([0.0, 0.0]);
        for s in 0..=steps {
            let a = a0 - piece * s as f64 / steps as f64;
            pts.push([a.cos(), a.sin()]);
        }
        plot_ui.polygon(
            Polygon::new(PlotPoints::from(pts))
                .name(name)
                .fill_color(color)
                .stroke(Stroke::new(1.0, Color32::WHITE)),
        );
    }
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter
// ---------------------------------------------------------------------------

/// Render the payload/outcome scatter, one colour per booster version.
pub fn payload_scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let fig = state.scatter();
    ui.strong(&fig.title);

    Plot::new("payload_scatter_chart")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(fig.x_label.as_str())
        .y_axis_label(fig.y_label.as_str())
        .include_x(state.slider.min)
        .include_x(state.slider.max)
        .include_y(-0.1)
        .include_y(1.1)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if fig.is_empty() {
                let mid = (state.slider.min + state.slider.max) / 2.0;
                no_data(plot_ui, PlotPoint::new(mid, 0.5));
                return;
            }
            for series in &fig.series {
                plot_ui.points(
                    Points::new(series.points.clone())
                        .name(&series.booster_version)
                        .color(state.booster_colors.color_for(&series.booster_version))
                        .radius(4.0),
                );
            }
        });
}

fn no_data(plot_ui: &mut PlotUi, at: PlotPoint) {
    plot_ui.text(Text::new(at, RichText::new("No data").size(16.0)));
}
