//! Conversions between JS-side primitives and library inputs.
//!
//! Slider values arrive as JS numbers (f64) and shape tags as strings; both
//! are checked here so the library only ever sees well-typed input.

use gauss_gradient::gaussian::MAX_STOP_COUNT;
use gauss_gradient::{GradientError, GradientShape};

/// Convert a JS number into a stop count.
///
/// Accepts whole numbers in `1..=MAX_STOP_COUNT`; `3.5`, `0`, `-1`, NaN,
/// and counts large enough to exhaust wasm memory are rejected instead of
/// being truncated.
pub fn stop_count_from_f64(v: f64) -> Result<usize, GradientError> {
    if !v.is_finite() || v < 1.0 || v.fract() != 0.0 || v > MAX_STOP_COUNT as f64 {
        return Err(GradientError::InvalidParameter {
            name: "stop_count",
            reason: format!("must be a whole number in 1..={}, got {}", MAX_STOP_COUNT, v),
        });
    }
    Ok(v as usize)
}

/// Parse an optional shape tag; empty or missing means the default shape.
pub fn shape_from_tag(tag: Option<String>) -> Result<GradientShape, GradientError> {
    match tag.as_deref().map(str::trim) {
        None | Some("") => Ok(GradientShape::default()),
        Some(t) => t.parse(),
    }
}

/// Comma-separated list of every shape tag.
pub fn shape_list() -> String {
    GradientShape::ALL
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
