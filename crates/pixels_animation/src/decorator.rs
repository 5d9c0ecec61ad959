//! Decorators that wrap another strategy and change one aspect of it
//!
//! Each decorator owns its inner strategy and is itself an [`Animation`], so
//! decorators nest freely: `Repeat(Speed(Delay(Timed)))` is one concrete type.

use crate::animation::Animation;
use crate::interpolate::Interpolate;
use crate::predicate::Predicate;

/// Waits before letting the inner strategy start
///
/// The wait happens once. Repeating the inner strategy does not re-arm it;
/// put the delay inside a repeat to get a delay per cycle.
#[derive(Clone, Debug)]
pub struct DelayDecorator<A> {
    remaining: f32,
    animation: A,
}

impl<A> DelayDecorator<A> {
    /// Wait `delay` seconds before running `animation`
    pub fn new(animation: A, delay: f32) -> Self {
        Self {
            remaining: delay,
            animation,
        }
    }

    /// Seconds left to wait
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Whether the delay is still running
    pub fn is_waiting(&self) -> bool {
        self.remaining > 0.0
    }

    /// The delayed strategy
    pub fn inner(&self) -> &A {
        &self.animation
    }
}

impl<A: Animation> Animation for DelayDecorator<A> {
    fn is_done(&self) -> bool {
        !self.is_waiting() && self.animation.is_done()
    }

    fn on_done(&mut self) {
        self.animation.on_done();
    }

    fn update<T: Interpolate>(&mut self, initial: &T, target: &T, current: &T, dt: f32) {
        if self.is_waiting() {
            self.remaining -= dt;
            return;
        }

        self.animation.update(initial, target, current, dt);
    }

    fn value<T: Interpolate>(&self, initial: &T, target: &T, current: &T) -> T {
        if self.is_waiting() {
            return initial.clone();
        }

        self.animation.value(initial, target, current)
    }

    fn repeat(&mut self) {
        self.animation.repeat();
    }

    fn reverse(&mut self) {
        self.animation.reverse();
    }
}

/// Scales elapsed time before it reaches the inner strategy
///
/// A factor of `0.0` freezes the animation; a negative factor runs time
/// backwards without touching the inner direction.
#[derive(Clone, Debug)]
pub struct SpeedDecorator<A> {
    factor: f32,
    animation: A,
}

impl<A> SpeedDecorator<A> {
    /// Run `animation` with time scaled by `factor`
    pub fn new(animation: A, factor: f32) -> Self {
        Self { factor, animation }
    }

    /// Time scale applied to every update
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// The scaled strategy
    pub fn inner(&self) -> &A {
        &self.animation
    }
}

impl<A: Animation> Animation for SpeedDecorator<A> {
    fn is_done(&self) -> bool {
        self.animation.is_done()
    }

    fn on_done(&mut self) {
        self.animation.on_done();
    }

    fn update<T: Interpolate>(&mut self, initial: &T, target: &T, current: &T, dt: f32) {
        self.animation.update(initial, target, current, dt * self.factor);
    }

    fn value<T: Interpolate>(&self, initial: &T, target: &T, current: &T) -> T {
        self.animation.value(initial, target, current)
    }

    fn repeat(&mut self) {
        self.animation.repeat();
    }

    fn reverse(&mut self) {
        self.animation.reverse();
    }
}

/// Restarts and optionally reverses the inner strategy when it completes
///
/// On every completion `repeat` is checked; when it holds the inner strategy
/// restarts and `reverse` is checked to decide whether it also flips
/// direction. `reverse` is only consulted for completions that repeat.
#[derive(Clone, Debug)]
pub struct RepeatDecorator<A, R, V> {
    animation: A,
    repeat: R,
    reverse: V,
}

impl<A, R, V> RepeatDecorator<A, R, V> {
    /// Repeat `animation` while `repeat` holds, reversing while `reverse` holds
    pub fn new(animation: A, repeat: R, reverse: V) -> Self {
        Self {
            animation,
            repeat,
            reverse,
        }
    }

    /// The repeated strategy
    pub fn inner(&self) -> &A {
        &self.animation
    }
}

impl<A, R, V> Animation for RepeatDecorator<A, R, V>
where
    A: Animation,
    R: Predicate,
    V: Predicate,
{
    fn is_done(&self) -> bool {
        self.animation.is_done()
    }

    fn on_done(&mut self) {
        // A nested repeat gets the first chance to restart.
        self.animation.on_done();
        if !self.animation.is_done() {
            return;
        }

        if self.repeat.check() {
            self.animation.repeat();
            if self.reverse.check() {
                self.animation.reverse();
            }
        }
    }

    fn update<T: Interpolate>(&mut self, initial: &T, target: &T, current: &T, dt: f32) {
        self.animation.update(initial, target, current, dt);
    }

    fn value<T: Interpolate>(&self, initial: &T, target: &T, current: &T) -> T {
        self.animation.value(initial, target, current)
    }

    fn repeat(&mut self) {
        self.animation.repeat();
    }

    fn reverse(&mut self) {
        self.animation.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::predicate::{Always, Never, Times};
    use crate::timed::TimedAnimation;

    fn linear(duration: f32) -> TimedAnimation {
        TimedAnimation::new(Easing::Linear, duration).unwrap()
    }

    fn step<A: Animation>(animation: &mut A, dt: f32) -> f32 {
        animation.update(&0.0f32, &1.0, &0.0, dt);
        animation.value(&0.0f32, &1.0, &0.0)
    }

    #[test]
    fn test_delay_holds_initial_value() {
        let mut animation = DelayDecorator::new(linear(1.0), 1.0);

        assert_eq!(step(&mut animation, 0.5), 0.0);
        assert!(animation.is_waiting());
        assert_eq!(step(&mut animation, 0.5), 0.0);
        assert!(!animation.is_waiting());
        assert!(!animation.is_done());

        assert_eq!(step(&mut animation, 0.5), 0.5);
        assert_eq!(step(&mut animation, 0.5), 1.0);
        assert!(animation.is_done());
    }

    #[test]
    fn test_delay_is_not_done_while_waiting() {
        let mut inner = linear(1.0);
        step(&mut inner, 1.0);
        assert!(inner.is_done());

        let animation = DelayDecorator::new(inner, 0.25);
        assert!(!animation.is_done());
    }

    #[test]
    fn test_delay_not_rearmed_on_repeat() {
        let mut animation = DelayDecorator::new(linear(1.0), 0.5);
        step(&mut animation, 0.5);
        step(&mut animation, 1.0);
        assert!(animation.is_done());

        animation.repeat();
        assert_eq!(step(&mut animation, 0.5), 0.5);
    }

    #[test]
    fn test_speed_scales_time() {
        let mut animation = SpeedDecorator::new(linear(1.0), 2.0);
        assert_eq!(step(&mut animation, 0.25), 0.5);
        assert_eq!(step(&mut animation, 0.25), 1.0);
        assert!(animation.is_done());
    }

    #[test]
    fn test_speed_zero_freezes() {
        let mut animation = SpeedDecorator::new(linear(1.0), 0.0);
        for _ in 0..5 {
            assert_eq!(step(&mut animation, 1.0), 0.0);
        }
        assert!(!animation.is_done());
    }

    #[test]
    fn test_negative_speed_runs_backwards() {
        let mut animation = SpeedDecorator::new(linear(1.0), 1.0);
        step(&mut animation, 0.75);

        let mut animation = SpeedDecorator::new(animation, -1.0);
        assert_eq!(step(&mut animation, 0.25), 0.5);
        assert!(animation.inner().inner().is_forward());
    }

    #[test]
    fn test_repeat_restarts_inner() {
        let mut animation = RepeatDecorator::new(linear(1.0), Times::new(1), Never);

        step(&mut animation, 1.0);
        assert!(animation.is_done());
        animation.on_done();
        assert!(!animation.is_done());

        step(&mut animation, 1.0);
        assert!(animation.is_done());
        animation.on_done();
        assert!(animation.is_done());
    }

    #[test]
    fn test_repeat_with_reverse_ping_pongs() {
        let mut animation = RepeatDecorator::new(linear(1.0), Always, Always);

        assert_eq!(step(&mut animation, 1.0), 1.0);
        animation.on_done();
        assert_eq!(step(&mut animation, 0.25), 0.75);
        assert_eq!(step(&mut animation, 0.75), 0.0);
        animation.on_done();
        assert_eq!(step(&mut animation, 0.5), 0.5);
        assert!(animation.inner().is_forward());
    }

    #[test]
    fn test_reverse_only_checked_after_repeat() {
        let mut reverse_checks = 0;
        let reverse = || {
            reverse_checks += 1;
            false
        };
        let mut animation = RepeatDecorator::new(linear(1.0), Times::new(1), reverse);

        step(&mut animation, 1.0);
        animation.on_done();
        step(&mut animation, 1.0);
        animation.on_done();
        drop(animation);

        assert_eq!(reverse_checks, 1);
    }

    #[test]
    fn test_nested_repeat_inner_goes_first() {
        let inner = RepeatDecorator::new(linear(1.0), Times::new(1), Never);
        let mut animation = RepeatDecorator::new(inner, Times::new(1), Never);

        let mut completions = 0;
        for _ in 0..10 {
            step(&mut animation, 1.0);
            if animation.is_done() {
                completions += 1;
                animation.on_done();
                if animation.is_done() {
                    break;
                }
            }
        }

        // Inner runs twice, the outer repeat restarts it once more
        assert_eq!(completions, 3);
    }
}
