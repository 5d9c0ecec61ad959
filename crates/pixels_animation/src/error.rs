//! Animation error types

use thiserror::Error;

/// Errors raised while constructing an animation
///
/// Per-frame operations never fail; everything that can go wrong is caught
/// when the strategy is built.
#[derive(Error, Debug)]
pub enum AnimationError {
    /// Duration was zero, negative or not finite
    #[error("Invalid animation duration: {0} (must be finite and > 0)")]
    InvalidDuration(f32),

    /// Timing curve without keyframe values
    #[error("Timing curve needs at least one keyframe value")]
    EmptyKeyframes,

    /// Timing curve without easing functions
    #[error("Timing curve needs at least one easing function")]
    EmptyEasings,

    /// Easing name not recognised
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    /// Transition configuration could not be parsed
    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

/// Result type for animation construction
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Check the duration precondition shared by every timed strategy
pub(crate) fn check_duration(duration: f32) -> Result<f32> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        tracing::warn!("rejecting animation duration {}", duration);
        Err(AnimationError::InvalidDuration(duration))
    }
}
