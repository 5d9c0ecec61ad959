//! Primitive time-based animation

use crate::animation::Animation;
use crate::easing::Easing;
use crate::error::{check_duration, Result};
use crate::interpolate::Interpolate;

/// Eases progress from 0 to 1 over a fixed duration
///
/// Elapsed time is clamped to `[0, duration]`, so negative time steps (from a
/// negative speed factor) rewind the animation without ever leaving its range.
#[derive(Clone, Debug)]
pub struct TimedAnimation {
    easing: Easing,
    duration: f32,
    elapsed: f32,
    forward: bool,
    progress: f32,
}

impl TimedAnimation {
    /// Duration used when none is given, in seconds
    pub const DEFAULT_DURATION: f32 = 1.0;

    /// Create a timed animation
    ///
    /// `duration` is in seconds and must be finite and greater than zero.
    pub fn new(easing: Easing, duration: f32) -> Result<Self> {
        let duration = check_duration(duration)?;
        Ok(Self {
            easing,
            duration,
            elapsed: 0.0,
            forward: true,
            progress: 0.0,
        })
    }

    /// Create a timed animation lasting [`DEFAULT_DURATION`](Self::DEFAULT_DURATION)
    pub fn with_easing(easing: Easing) -> Self {
        Self {
            easing,
            duration: Self::DEFAULT_DURATION,
            elapsed: 0.0,
            forward: true,
            progress: 0.0,
        }
    }

    /// Easing applied to the raw progress
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Total duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Elapsed time in seconds, within `[0, duration]`
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Eased progress as of the last update
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the animation currently plays forward
    pub fn is_forward(&self) -> bool {
        self.forward
    }
}

impl Default for TimedAnimation {
    fn default() -> Self {
        Self::with_easing(Easing::Linear)
    }
}

impl Animation for TimedAnimation {
    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn update<T: Interpolate>(&mut self, _initial: &T, _target: &T, _current: &T, dt: f32) {
        self.elapsed = (self.elapsed + dt).clamp(0.0, self.duration);

        let raw = self.elapsed / self.duration;
        let x = if self.forward { raw } else { 1.0 - raw };
        self.progress = self.easing.apply(x);
    }

    fn value<T: Interpolate>(&self, initial: &T, target: &T, _current: &T) -> T {
        T::lerp(initial, target, self.progress)
    }

    fn repeat(&mut self) {
        self.elapsed = 0.0;
    }

    fn reverse(&mut self) {
        self.forward = !self.forward;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnimationError;

    fn step(animation: &mut TimedAnimation, dt: f32) -> f32 {
        animation.update(&0.0f32, &10.0, &0.0, dt);
        animation.value(&0.0f32, &10.0, &0.0)
    }

    #[test]
    fn test_linear_progress() {
        let mut animation = TimedAnimation::new(Easing::Linear, 2.0).unwrap();

        assert_eq!(step(&mut animation, 0.5), 2.5);
        assert!(!animation.is_done());
        assert_eq!(step(&mut animation, 1.5), 10.0);
        assert!(animation.is_done());
    }

    #[test]
    fn test_elapsed_is_clamped() {
        let mut animation = TimedAnimation::new(Easing::Linear, 1.0).unwrap();

        assert_eq!(step(&mut animation, 5.0), 10.0);
        assert_eq!(animation.elapsed(), 1.0);

        assert_eq!(step(&mut animation, -3.0), 0.0);
        assert_eq!(animation.elapsed(), 0.0);
    }

    #[test]
    fn test_eased_value_matches_curve() {
        let mut animation = TimedAnimation::new(Easing::InQuad, 4.0).unwrap();
        let value = step(&mut animation, 1.0);
        assert!((value - 10.0 * crate::easing::in_quad(0.25)).abs() < 1e-5);
    }

    #[test]
    fn test_reverse_keeps_elapsed() {
        let mut animation = TimedAnimation::new(Easing::Linear, 1.0).unwrap();
        step(&mut animation, 0.25);

        animation.reverse();
        assert!(!animation.is_forward());
        assert_eq!(animation.elapsed(), 0.25);

        // Mirrored: raw 0.5 -> 1 - 0.5
        assert_eq!(step(&mut animation, 0.25), 5.0);
        assert_eq!(step(&mut animation, 0.5), 0.0);
        assert!(animation.is_done());
    }

    #[test]
    fn test_repeat_resets_elapsed_only() {
        let mut animation = TimedAnimation::new(Easing::Linear, 1.0).unwrap();
        animation.reverse();
        step(&mut animation, 1.0);
        assert!(animation.is_done());

        animation.repeat();
        assert!(!animation.is_done());
        assert!(!animation.is_forward());
        assert_eq!(step(&mut animation, 0.25), 7.5);
    }

    #[test]
    fn test_default_duration() {
        let mut animation = TimedAnimation::with_easing(Easing::OutQuad);
        assert_eq!(animation.duration(), TimedAnimation::DEFAULT_DURATION);
        assert_eq!(TimedAnimation::default().easing(), Easing::Linear);

        step(&mut animation, TimedAnimation::DEFAULT_DURATION);
        assert!(animation.is_done());
    }

    #[test]
    fn test_rejects_bad_duration() {
        assert!(matches!(
            TimedAnimation::new(Easing::Linear, 0.0),
            Err(AnimationError::InvalidDuration(_))
        ));
        assert!(TimedAnimation::new(Easing::Linear, -2.0).is_err());
    }
}
