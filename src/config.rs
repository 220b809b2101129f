//! Label generation settings
//!
//! A [`LabelConfig`] is built once per batch (from JSON or in code), validated,
//! and passed to the batch driver. Nothing here is global.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LabelError, LabelResult};
use crate::types::{FontName, MM};

pub const DEFAULT_WIDTH_MM: f64 = 50.0;
pub const DEFAULT_HEIGHT_MM: f64 = 30.0;
pub const MIN_DIMENSION_MM: f64 = 10.0;
pub const MAX_DIMENSION_MM: f64 = 500.0;
pub const MIN_FONT_OVERRIDE: i32 = -5;
pub const MAX_FONT_OVERRIDE: i32 = 5;

/// Settings shared by every label of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub font: FontName,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Signed adjustment applied after the printer safety margin
    pub font_override: i32,
    pub remove_duplicates: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font: FontName::default(),
            width_mm: DEFAULT_WIDTH_MM,
            height_mm: DEFAULT_HEIGHT_MM,
            font_override: 0,
            remove_duplicates: true,
        }
    }
}

impl LabelConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    ///
    /// An unknown font is reported as [`LabelError::InvalidFont`] rather than
    /// a generic JSON error.
    pub fn from_json(json: &str) -> LabelResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        if let Some(font) = value.get("font").and_then(Value::as_str) {
            font.parse::<FontName>()?;
        }
        let config: LabelConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LabelResult<()> {
        check_dimension("width_mm", self.width_mm)?;
        check_dimension("height_mm", self.height_mm)?;
        if !(MIN_FONT_OVERRIDE..=MAX_FONT_OVERRIDE).contains(&self.font_override) {
            return Err(LabelError::InvalidConfig(format!(
                "font_override must be between {} and {}, got {}",
                MIN_FONT_OVERRIDE, MAX_FONT_OVERRIDE, self.font_override
            )));
        }
        Ok(())
    }

    /// Canvas size in points (width, height)
    pub fn page_size(&self) -> (f64, f64) {
        (self.width_mm * MM, self.height_mm * MM)
    }
}

fn check_dimension(key: &str, value: f64) -> LabelResult<()> {
    if value.is_finite() && (MIN_DIMENSION_MM..=MAX_DIMENSION_MM).contains(&value) {
        Ok(())
    } else {
        Err(LabelError::InvalidConfig(format!(
            "{} must be between {} and {} mm, got {}",
            key, MIN_DIMENSION_MM, MAX_DIMENSION_MM, value
        )))
    }
}
