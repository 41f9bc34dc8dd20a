//! Error types shared by the color and gradient modules.

use thiserror::Error;

/// Errors produced while decoding colors or building gradients.
///
/// Nothing in the crate recovers from these locally; every failure is
/// returned to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    /// Input string does not match `#RRGGBB`.
    #[error("invalid color {0:?}: expected '#' followed by 6 hex digits")]
    InvalidColor(String),

    /// A numeric parameter is outside its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

impl GradientError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        GradientError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GradientError>;
