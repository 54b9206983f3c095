use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// First hue of every palette; starts the pie and legend on a blue.
const HUE_OFFSET: f32 = 210.0;
const SATURATION: f32 = 0.65;
const LIGHTNESS: f32 = 0.5;

/// `n` colours with hues spread evenly around the wheel from [`HUE_OFFSET`].
pub fn generate_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let hsl = Hsl::new(HUE_OFFSET + step * i as f32, SATURATION, LIGHTNESS);
            let rgb: Srgb<u8> = Srgb::from_color(hsl).into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (booster versions) to distinct colours.
///
/// Built once from the whole dataset so a booster keeps its colour no matter
/// which subset the scatter chart is showing.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(labels: &[String]) -> Self {
        let palette = generate_palette(labels.len());
        let mapping = labels.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        let p = generate_palette(6);
        assert_eq!(p.len(), 6);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_label_falls_back_to_gray() {
        let cm = ColorMap::new(&["F9 FT".to_string(), "F9 B4".to_string()]);
        assert_ne!(cm.color_for("F9 FT"), cm.color_for("F9 B4"));
        assert_eq!(cm.color_for("Falcon 1"), Color32::GRAY);
    }
}
