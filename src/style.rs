//! CSS declaration block for the preview layer.
//!
//! Renders the descriptor together with the background properties the
//! preview applies to it, producing text that can be pasted into a
//! stylesheet as-is.

use core::fmt;

use crate::config::GradientConfig;
use crate::error::Result;

/// Blend mode the gradient layer is composited with.
pub const BLEND_MODE: &str = "lighten";

/// A ready-to-print set of CSS declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct CssStyle {
    pub background_image: String,
    pub position_x: f64,
    pub position_y: f64,
    pub repeat: bool,
    pub opacity: f64,
    /// Mask descriptor, when an opacity mask is layered on top.
    pub mask_image: Option<String>,
}

impl CssStyle {
    /// Build the color gradient for `config` and wrap it in a style block.
    pub fn from_config(config: &GradientConfig) -> Result<Self> {
        config.validate()?;
        let gradient = config.build_color_gradient()?;
        Ok(Self {
            background_image: gradient.descriptor,
            position_x: config.position_x,
            position_y: config.position_y,
            repeat: config.repeat,
            opacity: config.opacity,
            mask_image: None,
        })
    }

    /// Same as [`CssStyle::from_config`], plus a `mask-image` built from the
    /// same curve.
    pub fn with_mask(config: &GradientConfig) -> Result<Self> {
        let mut style = Self::from_config(config)?;
        style.mask_image = Some(config.build_mask_gradient()?.descriptor);
        Ok(style)
    }

    fn repeat_value(&self) -> &'static str {
        if self.repeat {
            "repeat"
        } else {
            "no-repeat"
        }
    }
}

impl fmt::Display for CssStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "background-image: {};", self.background_image)?;
        writeln!(f, "background-position-x: {}cqw;", self.position_x)?;
        writeln!(f, "background-position-y: {}cqw;", self.position_y)?;
        writeln!(f, "background-repeat: {};", self.repeat_value())?;
        writeln!(f, "mix-blend-mode: {};", BLEND_MODE)?;
        write!(f, "opacity: {};", self.opacity)?;
        if let Some(mask) = &self.mask_image {
            write!(f, "\nmask-image: {};", mask)?;
        }
        Ok(())
    }
}
