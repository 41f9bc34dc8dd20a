//! # gauss-gradient
//!
//! CSS gradients whose color stops follow a Gaussian (normal) curve instead
//! of a linear ramp.
//!
//! Given two colors, a stop count, a mean, and a standard deviation, the
//! crate produces:
//!
//! - a color gradient descriptor such as
//!   `radial-gradient(#a05151 0%, #9f5050 2%, ...)`
//! - an opacity mask descriptor with white stops whose alpha follows the
//!   same curve
//! - the raw density samples, for plotting the curve next to the preview
//!
//! ## Pipeline
//!
//! 1. **Sample**: evaluate the density at `i / N` for every stop
//! 2. **Scale**: map the highest sample to weight 100
//! 3. **Mix**: turn each scaled weight into a color (or an alpha)
//! 4. **Assemble**: join `"<value> <percent>%"` stops inside the shape tag
//!
//! All functions are pure: every call allocates its own output and shares
//! nothing, so they can be called from any thread.
//!
//! ```
//! use gauss_gradient::{build_color_gradient, GradientShape};
//!
//! let g = build_color_gradient("#ffffff", "#000000", 3, 0.0, 1.0, GradientShape::Radial)?;
//! assert!(g.descriptor.starts_with("radial-gradient(#ffffff 0%, "));
//! assert_eq!(g.weights.len(), 3);
//! # Ok::<(), gauss_gradient::GradientError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod gaussian;
pub mod gradient;
pub mod style;

pub use color::{decode_color, encode_channel, mix, Rgb8};
pub use config::{ConfigError, GradientConfig};
pub use error::{GradientError, Result};
pub use gaussian::{gaussian_density, normalize, sample_weights, scaled_weights, GaussianCurve};
pub use gradient::{
    build_color_gradient, build_mask_gradient, GaussGradient, GradientShape, GradientStop,
};
pub use style::CssStyle;
