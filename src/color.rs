//! Color arithmetic on `#RRGGBB` strings.
//!
//! Provides:
//! - `Rgb8`: 24-bit RGB value decoded from a hex string
//! - `decode_color` / `encode_channel`: hex string <-> channel conversion
//! - `mix`: weighted interpolation between two colors, SCSS `mix()` style
//!
//! Colors cross the public API as strings because that is what the
//! presentation layer hands over; `Rgb8` is the internal working form.

use core::fmt;
use core::str::FromStr;

use crate::error::{GradientError, Result};

// ============================================================================
// Rgb8
// ============================================================================

/// Opaque RGB color with u8 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// White, the base color of every mask stop.
pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (hex digits case-insensitive).
    pub fn parse(hex: &str) -> Result<Self> {
        let (r, g, b) = decode_color(hex)?;
        Ok(Self { r, g, b })
    }

    /// Channels in (red, green, blue) order.
    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Per-channel `floor(other + (self - other) * weight / 100)`.
    ///
    /// `weight` measures the influence of `self`: 100 yields `self`, 0 yields
    /// `other`. Weights outside [0, 100] extrapolate, so the result is
    /// returned unclamped as signed integers.
    pub fn mix_channels(&self, other: &Rgb8, weight: f64) -> [i64; 3] {
        let k = weight / 100.0;
        let a = self.channels();
        let b = other.channels();
        let mut out = [0i64; 3];
        for (o, (&c1, &c2)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
            let (c1, c2) = (c1 as f64, c2 as f64);
            *o = (c2 + (c1 - c2) * k).floor() as i64;
        }
        out
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb8::parse(s)
    }
}

impl TryFrom<&str> for Rgb8 {
    type Error = GradientError;

    fn try_from(value: &str) -> Result<Self> {
        Rgb8::parse(value)
    }
}

// ============================================================================
// Hex conversion
// ============================================================================

/// Returns true when `s` matches `^#[0-9A-Fa-f]{6}$`.
pub fn is_hex_color(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(|c| c.is_ascii_hexdigit())
}

/// Decode a `#RRGGBB` string into its (red, green, blue) channels.
///
/// Anything that is not exactly `#` plus six hex digits is rejected with
/// `GradientError::InvalidColor` carrying the offending input.
pub fn decode_color(hex: &str) -> Result<(u8, u8, u8)> {
    if !is_hex_color(hex) {
        return Err(GradientError::InvalidColor(hex.to_string()));
    }

    // All seven bytes are ASCII here, so the slices are on char boundaries.
    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| GradientError::InvalidColor(hex.to_string()))
    };

    Ok((byte(1)?, byte(3)?, byte(5)?))
}

/// Encode a channel value as lowercase hex, zero-padded to two digits.
///
/// Values in [0, 255] always give exactly two digits. Values outside that
/// range come from extrapolated mixes; they are written as-is (a leading
/// `-` for negatives, three digits above 255) rather than clamped.
pub fn encode_channel(v: i64) -> String {
    let digits = if v < 0 {
        format!("-{:x}", v.unsigned_abs())
    } else {
        format!("{:x}", v)
    };
    format!("{:0>2}", digits)
}

// ============================================================================
// Mixing
// ============================================================================

/// Mix two hex colors, returning a `#rrggbb` string.
///
/// `weight` is the percentage influence of `color1`: `mix(a, b, 100) == a`,
/// `mix(a, b, 0) == b`. Each channel is floored independently.
pub fn mix(color1: &str, color2: &str, weight: f64) -> Result<String> {
    let c1 = Rgb8::parse(color1)?;
    let c2 = Rgb8::parse(color2)?;
    mix_rgb(&c1, &c2, weight)
}

/// Same as [`mix`] for already decoded colors.
pub fn mix_rgb(c1: &Rgb8, c2: &Rgb8, weight: f64) -> Result<String> {
    if !weight.is_finite() {
        return Err(GradientError::invalid_parameter(
            "weight",
            format!("must be a finite number, got {}", weight),
        ));
    }

    let mut out = String::with_capacity(7);
    out.push('#');
    for v in c1.mix_channels(c2, weight) {
        out.push_str(&encode_channel(v));
    }
    Ok(out)
}

/// White with an alpha channel, as `#ffffffAA`.
pub fn white_with_alpha(alpha: i64) -> String {
    format!("{}{}", WHITE, encode_channel(alpha))
}
