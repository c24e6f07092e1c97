//! Boundary validation errors

use thiserror::Error;

/// Rejection of an out-of-domain configuration value.
///
/// Raised before any synthesis runs; the engine itself is total over its
/// documented domain and never surfaces numeric failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value must be strictly greater than zero (radii, intensity, durations, periods).
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// Value must be zero or greater (offsets and the moon radius).
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    /// NaN or infinity in any field.
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}
