//! Gaussian gradient builder.
//!
//! Turns a sampled bell curve into a CSS gradient descriptor of the form
//! `<shape>(<value> <percent>%, <value> <percent>%, ...)`. Two output modes
//! share the same sampling and scaling:
//!
//! - color gradients: each stop mixes two colors by the scaled weight
//! - mask gradients: each stop is white with an alpha taken from the
//!   scaled weight
//!
//! Stop `i` of `N` sits at `round2(i / N * 100)` percent; the first stop is
//! always written as `0%`.

use core::fmt;
use core::str::FromStr;

use crate::color::{mix_rgb, white_with_alpha, Rgb8};
use crate::error::{GradientError, Result};
use crate::gaussian::{normalize, scaled_weights, GaussianCurve, PEAK_WEIGHT};

// ============================================================================
// GradientShape
// ============================================================================

/// CSS gradient function wrapping the stop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientShape {
    #[default]
    Radial,
    Linear,
    Conic,
    RepeatingRadial,
    RepeatingLinear,
    RepeatingConic,
}

impl GradientShape {
    pub const ALL: [GradientShape; 6] = [
        GradientShape::Radial,
        GradientShape::Linear,
        GradientShape::Conic,
        GradientShape::RepeatingRadial,
        GradientShape::RepeatingLinear,
        GradientShape::RepeatingConic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradientShape::Radial => "radial-gradient",
            GradientShape::Linear => "linear-gradient",
            GradientShape::Conic => "conic-gradient",
            GradientShape::RepeatingRadial => "repeating-radial-gradient",
            GradientShape::RepeatingLinear => "repeating-linear-gradient",
            GradientShape::RepeatingConic => "repeating-conic-gradient",
        }
    }
}

impl fmt::Display for GradientShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientShape {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        GradientShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| {
                GradientError::invalid_parameter("shape", format!("unknown gradient shape {:?}", s))
            })
    }
}

// ============================================================================
// Stops
// ============================================================================

/// Percentage position of stop `index` out of `stop_count`, rounded to
/// two decimals.
#[inline]
pub fn stop_percent(index: usize, stop_count: usize) -> f64 {
    if index == 0 {
        return 0.0;
    }
    let percent = (index as f64 / stop_count as f64) * 100.0;
    (percent * 100.0).round() / 100.0
}

/// A single `(value, percentage)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// `#rrggbb` for color gradients, `#ffffffAA` for masks.
    pub value: String,
    pub percent: f64,
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display gives the shortest round-trip form: 0, 50, 33.33.
        write!(f, "{} {}%", self.value, self.percent)
    }
}

// ============================================================================
// GaussGradient
// ============================================================================

/// A built gradient: its descriptor plus the raw, unscaled weights.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussGradient {
    pub shape: GradientShape,
    pub stops: Vec<GradientStop>,
    /// Density samples before scaling, one per stop.
    pub weights: Vec<f64>,
    pub descriptor: String,
}

impl GaussGradient {
    fn assemble(shape: GradientShape, stops: Vec<GradientStop>, weights: Vec<f64>) -> Self {
        let list = stops
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let descriptor = format!("{}({})", shape, list);
        Self {
            shape,
            stops,
            weights,
            descriptor,
        }
    }

    /// `(descriptor, weights)`.
    pub fn into_parts(self) -> (String, Vec<f64>) {
        (self.descriptor, self.weights)
    }
}

impl fmt::Display for GaussGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

/// Sample, scale, and map every scaled weight through `stop_value`.
fn build_with<F>(
    curve: &GaussianCurve,
    shape: GradientShape,
    mut stop_value: F,
) -> Result<GaussGradient>
where
    F: FnMut(f64) -> Result<String>,
{
    let weights = curve.samples();
    let scale = normalize(&weights)?;
    log::debug!(
        "building {} with {} stops (mean={}, std_dev={}, scale={})",
        shape,
        curve.stop_count(),
        curve.mean(),
        curve.std_dev(),
        scale
    );

    let n = curve.stop_count();
    let mut stops = Vec::with_capacity(n);
    for (i, w) in scaled_weights(&weights)?.into_iter().enumerate() {
        stops.push(GradientStop {
            value: stop_value(w)?,
            percent: stop_percent(i, n),
        });
    }
    Ok(GaussGradient::assemble(shape, stops, weights))
}

/// Build a two-color gradient whose mix follows the Gaussian curve.
///
/// At the peak sample the stop equals `start_color`; where the curve falls
/// toward zero the stop approaches `end_color`.
pub fn build_color_gradient(
    start_color: &str,
    end_color: &str,
    stop_count: usize,
    mean: f64,
    std_dev: f64,
    shape: GradientShape,
) -> Result<GaussGradient> {
    let start = Rgb8::parse(start_color)?;
    let end = Rgb8::parse(end_color)?;
    let curve = GaussianCurve::new(stop_count, mean, std_dev)?;
    build_with(&curve, shape, |scaled| mix_rgb(&start, &end, scaled))
}

/// Build an opacity mask: white stops whose alpha follows the curve.
pub fn build_mask_gradient(
    stop_count: usize,
    mean: f64,
    std_dev: f64,
    shape: GradientShape,
) -> Result<GaussGradient> {
    let curve = GaussianCurve::new(stop_count, mean, std_dev)?;
    build_with(&curve, shape, |scaled| {
        let alpha = ((scaled / PEAK_WEIGHT) * 255.0).floor() as i64;
        Ok(white_with_alpha(alpha))
    })
}
