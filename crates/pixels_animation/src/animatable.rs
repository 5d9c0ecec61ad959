//! Animated values
//!
//! [`Animatable`] owns one value and at most one running animation. The host
//! loop calls [`Animatable::update`] once per frame with the frame's elapsed
//! seconds and reads the value back through [`Animatable::get`] or `Deref`.
//!
//! ```
//! use pixels_animation::builder::ease_linear;
//! use pixels_animation::Animatable;
//!
//! let mut x = Animatable::new(0.0f32);
//! x.animate(ease_linear(2.0).unwrap(), 10.0);
//!
//! x.update(1.0);
//! assert_eq!(*x, 5.0);
//!
//! x.update(1.0);
//! assert_eq!(*x, 10.0);
//! assert!(!x.is_animating());
//! ```

use std::fmt;
use std::ops::Deref;

use crate::animation::{Animation, DynAnimation};
use crate::builder::AnimationBuilder;
use crate::interpolate::Interpolate;

/// A value that eases towards its target over time
pub struct Animatable<T: Interpolate> {
    initial: T,
    target: T,
    current: T,
    animation: Option<Box<dyn DynAnimation<T>>>,
}

impl<T: Interpolate> Animatable<T> {
    /// Create an idle value
    pub fn new(value: T) -> Self {
        Self {
            initial: value.clone(),
            target: value.clone(),
            current: value,
            animation: None,
        }
    }

    /// Animate from the current value towards `target`
    ///
    /// Whatever was running before is dropped; its progress does not carry
    /// over.
    pub fn animate<A>(&mut self, builder: AnimationBuilder<A>, target: T)
    where
        A: Animation + 'static,
    {
        if self.animation.is_some() {
            tracing::debug!("replacing running animation");
        }

        self.initial = self.current.clone();
        self.target = target;
        self.animation = Some(Box::new(builder.into_animation()));
        tracing::trace!("animation started");
    }

    /// Jump to `value` immediately and stop animating
    pub fn set(&mut self, value: T) {
        self.initial = value.clone();
        self.target = value.clone();
        self.current = value;
        self.animation = None;
    }

    /// Advance the running animation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        animation.update(&self.initial, &self.target, &self.current, dt);
        self.current = animation.value(&self.initial, &self.target, &self.current);

        if !animation.is_done() {
            return;
        }

        animation.on_done();
        if animation.is_done() {
            self.animation = None;
            tracing::trace!("animation finished");
        } else {
            tracing::trace!("animation restarted");
        }
    }

    /// Whether an animation is running
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Value the running animation started from
    pub fn initial(&self) -> &T {
        &self.initial
    }

    /// Value the running animation heads towards
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Value as of the last update
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Alias for [`current`](Self::current)
    pub fn get(&self) -> &T {
        &self.current
    }
}

impl<T: Interpolate> Default for Animatable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Interpolate> From<T> for Animatable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Interpolate> Deref for Animatable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.current
    }
}

impl<T: Interpolate + fmt::Debug> fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animatable")
            .field("initial", &self.initial)
            .field("target", &self.target)
            .field("current", &self.current)
            .field("animating", &self.is_animating())
            .finish()
    }
}
