//! Fixed-behavior strategies

use crate::animation::Animation;
use crate::interpolate::Interpolate;

/// Jumps straight to the target
///
/// Done from the start; goes through the same assignment path as any other
/// animation, so the value lands on the target on the next update.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantAnimation;

impl Animation for InstantAnimation {
    fn is_done(&self) -> bool {
        true
    }

    fn update<T: Interpolate>(&mut self, _: &T, _: &T, _: &T, _: f32) {}

    fn value<T: Interpolate>(&self, _initial: &T, target: &T, _current: &T) -> T {
        target.clone()
    }

    fn repeat(&mut self) {}

    fn reverse(&mut self) {}
}

/// Holds the initial value forever
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverAnimation;

impl Animation for NeverAnimation {
    fn is_done(&self) -> bool {
        false
    }

    fn update<T: Interpolate>(&mut self, _: &T, _: &T, _: &T, _: f32) {}

    fn value<T: Interpolate>(&self, initial: &T, _target: &T, _current: &T) -> T {
        initial.clone()
    }

    fn repeat(&mut self) {}

    fn reverse(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant() {
        let mut animation = InstantAnimation;
        assert!(animation.is_done());
        animation.update(&1.0f32, &5.0, &1.0, 0.0);
        assert_eq!(animation.value(&1.0f32, &5.0, &1.0), 5.0);
    }

    #[test]
    fn test_never() {
        let mut animation = NeverAnimation;
        for _ in 0..10 {
            animation.update(&1.0f32, &5.0, &3.0, 100.0);
            assert!(!animation.is_done());
        }
        assert_eq!(animation.value(&1.0f32, &5.0, &3.0), 1.0);
    }
}
