//! TOML configuration for a sliding text widget.
//!
//! Every field is optional and falls back to the widget defaults:
//!
//! ```toml
//! texts = "Welcome|n Swipe to browse|n Enjoy"
//! label_color = "#FAFAFA"
//! label_font_name = "Avenir Next"
//! label_font_size = 17.0
//! indicator_tint_color = "#555555"
//! indicator_active_tint_color = "#00FF00"
//! slide_interval = 4.0
//! gestures_enabled = true
//! width = 40
//! height = 6
//! ```
//!
//! `texts` also accepts an array of strings.

use crate::error::{Error, Result};
use crate::label::{valid_font_size, DEFAULT_COLOR, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use crate::paginator::{DEFAULT_ACTIVE_TINT_COLOR, DEFAULT_TINT_COLOR};
use crate::slidingtext::DEFAULT_SLIDE_INTERVAL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Texts as either a raw delimited source or an explicit list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Texts {
    /// Entries separated by `|n`.
    Source(String),
    /// Entries given one by one.
    List(Vec<String>),
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Texts to rotate through. `None` keeps the placeholder.
    pub texts: Option<Texts>,
    /// Label foreground color.
    pub label_color: String,
    /// Label font family.
    pub label_font_name: String,
    /// Label font size in points.
    pub label_font_size: f64,
    /// Inactive indicator dot color.
    pub indicator_tint_color: String,
    /// Active indicator dot color.
    pub indicator_active_tint_color: String,
    /// Seconds between automatic advances.
    pub slide_interval: f64,
    /// Whether swipe bindings are honored.
    pub gestures_enabled: bool,
    /// Widget width in cells; 0 sizes to content.
    pub width: usize,
    /// Widget height in rows; 0 sizes to content.
    pub height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            texts: None,
            label_color: DEFAULT_COLOR.to_string(),
            label_font_name: DEFAULT_FONT_NAME.to_string(),
            label_font_size: DEFAULT_FONT_SIZE,
            indicator_tint_color: DEFAULT_TINT_COLOR.to_string(),
            indicator_active_tint_color: DEFAULT_ACTIVE_TINT_COLOR.to_string(),
            slide_interval: DEFAULT_SLIDE_INTERVAL,
            gestures_enabled: false,
            width: 0,
            height: 0,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(?path, "loaded sliding text config");
        Ok(config)
    }

    /// Checks values serde cannot rule out.
    pub fn validate(&self) -> Result<()> {
        if !(self.slide_interval.is_finite() && self.slide_interval > 0.0) {
            return Err(Error::config(format!(
                "slide_interval must be positive, got {}",
                self.slide_interval
            )));
        }
        if !valid_font_size(self.label_font_size) {
            return Err(Error::config(format!(
                "label_font_size must be positive, got {}",
                self.label_font_size
            )));
        }
        Ok(())
    }
}
