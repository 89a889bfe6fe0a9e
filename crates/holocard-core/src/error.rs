use std::time::Duration;

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("animation speed must be non-zero")]
    ZeroAnimationSpeed,
    #[error("animation speed {0:?} exceeds the 5s limit")]
    AnimationSpeedTooLong(Duration),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidThreshold { field: &'static str, value: f32 },
}

/// Failure of a single environment probe. The profiler substitutes the
/// field's safe default and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("{0} is not available in this environment")]
    Unavailable(&'static str),
    #[error("{probe} probe failed: {message}")]
    Failed { probe: &'static str, message: String },
}
