use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Optional override file, looked up in the working directory.
pub const CONFIG_FILE: &str = "launch_dash.json";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Static dashboard settings. Every field has a default, so an override file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Launch table read once at startup.
    pub data_path: PathBuf,
    pub title: String,
    /// Initial site selector value; `"ALL"` selects every site.
    pub default_site: String,
    pub window_size: [f32; 2],
    pub payload_slider: SliderConfig,
}

/// Fixed range, step and tick marks of the payload range selector (kg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            title: "SpaceX Launch Records Dashboard".to_string(),
            default_site: "ALL".to_string(),
            window_size: [1000.0, 900.0],
            payload_slider: SliderConfig::default(),
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            marks: vec![0.0, 2_000.0, 5_000.0, 8_000.0, 10_000.0],
        }
    }
}

impl DashboardConfig {
    /// Read the override file if present, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No {} found, using default settings", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse an override file and reject slider settings the selector cannot use.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.payload_slider.validate().context("invalid payload_slider")?;
        Ok(cfg)
    }
}

impl SliderConfig {
    /// The range must be finite and non-empty, and the step positive.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min.is_finite() && self.max.is_finite(),
            "slider bounds must be finite, got [{}, {}]",
            self.min,
            self.max
        );
        ensure!(
            self.min < self.max,
            "slider min {} must be below max {}",
            self.min,
            self.max
        );
        ensure!(
            self.step.is_finite() && self.step > 0.0,
            "slider step must be positive, got {}",
            self.step
        );
        Ok(())
    }
}
