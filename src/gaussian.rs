//! Gaussian weight sampling.
//!
//! The bell curve is sampled at `i / N` for `i` in `0..N`, covering the
//! stop domain [0, 1). The mean may lie anywhere on the real line; a mean
//! outside [0, 1) puts the peak off-domain and yields a monotonic
//! partial curve.

use core::f64::consts::PI;

use crate::error::{GradientError, Result};

/// The weight the highest sample is scaled to.
pub const PEAK_WEIGHT: f64 = 100.0;

/// Upper bound on stops per gradient. Keeps a stray huge count from a
/// caller (a JS number, a config file) from allocating without limit.
pub const MAX_STOP_COUNT: usize = 10_000;

/// Normal probability density at `x`.
///
/// No validation: `std_dev <= 0` yields infinities or NaN. Use
/// [`sample_weights`] for checked input.
#[inline]
pub fn gaussian_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let factor = 1.0 / (std_dev * (2.0 * PI).sqrt());
    let z = (x - mean) / std_dev;
    factor * (-0.5 * z * z).exp()
}

// ============================================================================
// GaussianCurve
// ============================================================================

/// Validated Gaussian sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianCurve {
    stop_count: usize,
    mean: f64,
    std_dev: f64,
}

impl GaussianCurve {
    /// Rejects `stop_count` outside `1..=MAX_STOP_COUNT`, non-positive or
    /// non-finite `std_dev`, and a non-finite `mean`.
    pub fn new(stop_count: usize, mean: f64, std_dev: f64) -> Result<Self> {
        if stop_count == 0 {
            return Err(GradientError::invalid_parameter(
                "stop_count",
                "must be at least 1",
            ));
        }
        if stop_count > MAX_STOP_COUNT {
            return Err(GradientError::invalid_parameter(
                "stop_count",
                format!("must be at most {}, got {}", MAX_STOP_COUNT, stop_count),
            ));
        }
        if std_dev <= 0.0 || !std_dev.is_finite() {
            return Err(GradientError::invalid_parameter(
                "std_dev",
                format!("must be a positive finite number, got {}", std_dev),
            ));
        }
        if !mean.is_finite() {
            return Err(GradientError::invalid_parameter(
                "mean",
                format!("must be a finite number, got {}", mean),
            ));
        }
        Ok(Self {
            stop_count,
            mean,
            std_dev,
        })
    }

    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Sample position of stop `i`.
    #[inline]
    pub fn position(&self, i: usize) -> f64 {
        i as f64 / self.stop_count as f64
    }

    /// Density samples at every stop position, in order.
    pub fn samples(&self) -> Vec<f64> {
        (0..self.stop_count)
            .map(|i| {
                let w = gaussian_density(self.position(i), self.mean, self.std_dev);
                log::trace!("sample {} at x={}: {}", i, self.position(i), w);
                w
            })
            .collect()
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Sample `stop_count` density values at `i / stop_count`.
pub fn sample_weights(stop_count: usize, mean: f64, std_dev: f64) -> Result<Vec<f64>> {
    Ok(GaussianCurve::new(stop_count, mean, std_dev)?.samples())
}

fn peak(weights: &[f64]) -> Result<f64> {
    let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // A subnormal peak passes `max > 0` but overflows the factor below.
    if max <= 0.0 || !max.is_finite() || !(PEAK_WEIGHT / max).is_finite() {
        return Err(GradientError::invalid_parameter(
            "weights",
            format!("peak sample {} is too small to scale", max),
        ));
    }
    Ok(max)
}

/// Scale factor mapping the largest weight to [`PEAK_WEIGHT`].
///
/// Fails when the sequence is empty or the peak underflowed to zero or to a
/// subnormal (a narrow curve centred far outside the domain), since no
/// finite factor exists then.
pub fn normalize(weights: &[f64]) -> Result<f64> {
    Ok(PEAK_WEIGHT / peak(weights)?)
}

/// Weights mapped onto `0..=PEAK_WEIGHT`, the peak landing on exactly
/// [`PEAK_WEIGHT`].
///
/// Computed as `w / max * PEAK_WEIGHT` rather than `w * normalize(..)`:
/// `max * (100 / max)` can round to `100.00000000000001`, which pushes the
/// peak stop one past the start color when mixing.
pub fn scaled_weights(weights: &[f64]) -> Result<Vec<f64>> {
    let max = peak(weights)?;
    Ok(weights.iter().map(|w| w / max * PEAK_WEIGHT).collect())
}
