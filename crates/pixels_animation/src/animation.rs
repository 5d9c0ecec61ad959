//! The animation capability set
//!
//! [`Animation`] is the compile-time interface every strategy implements.
//! Its methods are generic over the animated value, so chains of decorators
//! compose into a single concrete type without any dynamic dispatch.
//!
//! [`DynAnimation`] is the object-safe counterpart used by
//! [`Animatable`](crate::Animatable) to hold whichever chain is active. It is
//! blanket-implemented for every `Animation`, so there is nothing to implement
//! by hand.

use crate::interpolate::Interpolate;

/// A composable animation strategy
///
/// The value arguments are read-only context: a strategy keeps its own timing
/// state and never mutates the values it animates.
pub trait Animation {
    /// Whether the strategy has nothing left to contribute
    fn is_done(&self) -> bool;

    /// Called once in the frame `is_done` first turns true
    ///
    /// May reset internal state (repeat decorators do); `is_done` is checked
    /// again afterwards.
    fn on_done(&mut self) {}

    /// Advance internal timing state by `dt` seconds
    fn update<T: Interpolate>(&mut self, initial: &T, target: &T, current: &T, dt: f32);

    /// Interpolated value for the current progress
    fn value<T: Interpolate>(&self, initial: &T, target: &T, current: &T) -> T;

    /// Restart from the beginning, keeping the current direction
    fn repeat(&mut self);

    /// Flip the playback direction
    fn reverse(&mut self);
}

/// Object-safe form of [`Animation`] for a fixed value type
pub trait DynAnimation<T> {
    fn is_done(&self) -> bool;
    fn on_done(&mut self);
    fn update(&mut self, initial: &T, target: &T, current: &T, dt: f32);
    fn value(&self, initial: &T, target: &T, current: &T) -> T;
    fn repeat(&mut self);
    fn reverse(&mut self);
}

impl<T: Interpolate, A: Animation> DynAnimation<T> for A {
    #[inline]
    fn is_done(&self) -> bool {
        Animation::is_done(self)
    }

    #[inline]
    fn on_done(&mut self) {
        Animation::on_done(self)
    }

    #[inline]
    fn update(&mut self, initial: &T, target: &T, current: &T, dt: f32) {
        Animation::update(self, initial, target, current, dt)
    }

    #[inline]
    fn value(&self, initial: &T, target: &T, current: &T) -> T {
        Animation::value(self, initial, target, current)
    }

    #[inline]
    fn repeat(&mut self) {
        Animation::repeat(self)
    }

    #[inline]
    fn reverse(&mut self) {
        Animation::reverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Finishes after a fixed number of updates, reporting how far it got
    struct Steps {
        taken: u32,
        total: u32,
    }

    impl Animation for Steps {
        fn is_done(&self) -> bool {
            self.taken >= self.total
        }

        fn update<T: Interpolate>(&mut self, _: &T, _: &T, _: &T, _: f32) {
            self.taken += 1;
        }

        fn value<T: Interpolate>(&self, initial: &T, target: &T, _: &T) -> T {
            T::lerp(initial, target, self.taken as f32 / self.total as f32)
        }

        fn repeat(&mut self) {
            self.taken = 0;
        }

        fn reverse(&mut self) {}
    }

    #[test]
    fn test_boxed_animation_dispatches_to_strategy() {
        let mut boxed: Box<dyn DynAnimation<f32>> = Box::new(Steps { taken: 0, total: 2 });

        boxed.update(&0.0, &4.0, &0.0, 0.016);
        assert_eq!(boxed.value(&0.0, &4.0, &0.0), 2.0);
        assert!(!boxed.is_done());

        boxed.update(&0.0, &4.0, &2.0, 0.016);
        assert!(boxed.is_done());

        boxed.repeat();
        assert!(!boxed.is_done());
        assert_eq!(boxed.value(&0.0, &4.0, &4.0), 0.0);
    }
}
