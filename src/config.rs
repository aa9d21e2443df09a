//! Configuration types and defaults for PortfolioCore

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::carousel::BoundaryPolicy;
use crate::error::PortfolioError;

/// localStorage key holding the theme flag
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class toggled on `<html>` for dark mode
pub const DARK_CLASS: &str = "dark";
/// Fraction of a section that must be visible before it becomes active
pub const VISIBILITY_THRESHOLD: f64 = 0.3;
pub const METRIC_CLASS: &str = "metric-highlight";
pub const KEYWORD_CLASS: &str = "keyword-highlight";

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Storage key for the theme flag. Default: "theme"
    pub storage_key: String,
    /// Document root class for dark mode. Default: "dark"
    pub dark_class: String,
    /// Intersection ratio in (0, 1]. Default: 0.3
    pub visibility_threshold: f64,
    /// Carousel behavior at the ends of the project list. Default: Wrap
    pub carousel_policy: BoundaryPolicy,
    pub metric_class: String,
    pub keyword_class: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            dark_class: DARK_CLASS.to_string(),
            visibility_threshold: VISIBILITY_THRESHOLD,
            carousel_policy: BoundaryPolicy::Wrap,
            metric_class: METRIC_CLASS.to_string(),
            keyword_class: KEYWORD_CLASS.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Non-circular carousel with disabled controls at the ends
    pub fn clamped() -> Self {
        Self {
            carousel_policy: BoundaryPolicy::Clamp,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PortfolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JS object passed across the wasm boundary
    pub fn from_js(value: JsValue) -> Result<Self, PortfolioError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| PortfolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PortfolioError> {
        if !(self.visibility_threshold > 0.0 && self.visibility_threshold <= 1.0) {
            return Err(PortfolioError::Config(format!(
                "visibility_threshold must be in (0, 1], got {}",
                self.visibility_threshold
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(PortfolioError::Config("storage_key must not be empty".into()));
        }
        for (name, class) in [
            ("dark_class", &self.dark_class),
            ("metric_class", &self.metric_class),
            ("keyword_class", &self.keyword_class),
        ] {
            if class.is_empty() || class.chars().any(|c| c.is_whitespace() || c == '"') {
                return Err(PortfolioError::Config(format!("{} is not a valid class name", name)));
            }
        }
        Ok(())
    }
}
