//! Gradient configuration.
//!
//! Holds every parameter the preview binds to a widget, with the stock
//! defaults (`#a05151` -> `#14151A`, 50 stops, mean 0, std dev 0.2). Loadable
//! from TOML; missing keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::is_hex_color;
use crate::error::{GradientError, Result};
use crate::gaussian::GaussianCurve;
use crate::gradient::{build_color_gradient, build_mask_gradient, GaussGradient, GradientShape};

pub const DEFAULT_START_COLOR: &str = "#a05151";
pub const DEFAULT_END_COLOR: &str = "#14151A";
pub const DEFAULT_STOP_COUNT: usize = 50;
pub const DEFAULT_MEAN: f64 = 0.0;
pub const DEFAULT_STD_DEV: f64 = 0.2;

/// Largest stop count the preview slider offers. Larger values are accepted.
pub const MAX_SUGGESTED_STOPS: usize = 200;

/// Errors from loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] GradientError),
}

/// All parameters of a Gaussian gradient and its preview layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Color at the curve's peak.
    pub start_color: String,
    /// Color the curve falls off toward.
    pub end_color: String,
    pub stop_count: usize,
    pub mean: f64,
    pub std_dev: f64,
    #[serde(with = "shape_tag")]
    pub shape: GradientShape,
    /// Background offset in `cqw` units.
    pub position_x: f64,
    pub position_y: f64,
    pub repeat: bool,
    /// Layer opacity in [0, 1].
    pub opacity: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            start_color: DEFAULT_START_COLOR.to_string(),
            end_color: DEFAULT_END_COLOR.to_string(),
            stop_count: DEFAULT_STOP_COUNT,
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
            shape: GradientShape::default(),
            position_x: 0.0,
            position_y: 0.0,
            repeat: true,
            opacity: 1.0,
        }
    }
}

impl GradientConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        let config: GradientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded gradient config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Check colors, curve parameters, and opacity.
    pub fn validate(&self) -> Result<()> {
        for color in [&self.start_color, &self.end_color] {
            if !is_hex_color(color) {
                return Err(GradientError::InvalidColor(color.clone()));
            }
        }
        GaussianCurve::new(self.stop_count, self.mean, self.std_dev)?;
        if self.stop_count > MAX_SUGGESTED_STOPS {
            log::warn!(
                "stop_count {} exceeds the suggested maximum of {}",
                self.stop_count,
                MAX_SUGGESTED_STOPS
            );
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(GradientError::invalid_parameter(
                "opacity",
                format!("must be within [0, 1], got {}", self.opacity),
            ));
        }
        for (name, v) in [("position_x", self.position_x), ("position_y", self.position_y)] {
            if !v.is_finite() {
                return Err(GradientError::invalid_parameter(
                    name,
                    format!("must be a finite number, got {}", v),
                ));
            }
        }
        Ok(())
    }

    /// Copy with start and end colors swapped, flipping which end of the
    /// curve carries which color.
    pub fn reversed(&self) -> Self {
        Self {
            start_color: self.end_color.clone(),
            end_color: self.start_color.clone(),
            ..self.clone()
        }
    }

    pub fn build_color_gradient(&self) -> Result<GaussGradient> {
        build_color_gradient(
            &self.start_color,
            &self.end_color,
            self.stop_count,
            self.mean,
            self.std_dev,
            self.shape,
        )
    }

    pub fn build_mask_gradient(&self) -> Result<GaussGradient> {
        build_mask_gradient(self.stop_count, self.mean, self.std_dev, self.shape)
    }
}

/// Serializes `GradientShape` as its CSS function name.
mod shape_tag {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::gradient::GradientShape;

    pub fn serialize<S: Serializer>(shape: &GradientShape, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(shape.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<GradientShape, D::Error> {
        let tag = String::deserialize(d)?;
        tag.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GradientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stop_count, 50);
        assert_eq!(config.shape, GradientShape::Radial);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GradientConfig::from_toml_str(
            r##"
            start_color = "#ff0000"
            stop_count = 12
            shape = "linear-gradient"
            "##,
        )
        .unwrap();
        assert_eq!(config.start_color, "#ff0000");
        assert_eq!(config.end_color, DEFAULT_END_COLOR);
        assert_eq!(config.stop_count, 12);
        assert_eq!(config.shape, GradientShape::Linear);
        assert_eq!(config.std_dev, DEFAULT_STD_DEV);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            GradientConfig::from_toml_str("std_dev = 0.0"),
            Err(ConfigError::Invalid(GradientError::InvalidParameter { .. }))
        ));
        assert!(matches!(
            GradientConfig::from_toml_str("end_color = \"blue\""),
            Err(ConfigError::Invalid(GradientError::InvalidColor(_)))
        ));
        assert!(matches!(
            GradientConfig::from_toml_str("shape = \"spiral-gradient\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GradientConfig::from_toml_str("opacity = 1.5"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GradientConfig {
            mean: 0.35,
            shape: GradientShape::RepeatingConic,
            ..GradientConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("shape = \"repeating-conic-gradient\""));
        assert_eq!(GradientConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GradientConfig::load_from_file("/nonexistent/gradient.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_reversed_swaps_colors() {
        let config = GradientConfig::default();
        let rev = config.reversed();
        assert_eq!(rev.start_color, config.end_color);
        assert_eq!(rev.end_color, config.start_color);
        assert_eq!(rev.reversed(), config);
    }

    #[test]
    fn test_build_from_config() {
        let g = GradientConfig::default().build_color_gradient().unwrap();
        assert_eq!(g.stops.len(), 50);
        assert_eq!(g.stops[0].value, "#a05151");
        let m = GradientConfig::default().build_mask_gradient().unwrap();
        assert_eq!(m.weights, g.weights);
    }
}
