//! Fluent animation composition
//!
//! Every modifier wraps the current strategy in a decorator and hands back a
//! new builder; the builder it was called on is left as it was, so a base
//! animation can be shared between several variations.
//!
//! # Example
//!
//! ```
//! use pixels_animation::builder::{ease_out_cubic, timing_curve};
//! use pixels_animation::Easing;
//!
//! let base = ease_out_cubic(0.3).unwrap();
//! let delayed = base.delay(0.1);
//! let pulsing = base.speed(2.0).reverse_for(3);
//!
//! let wobble = timing_curve(
//!     1.0,
//!     [0.25, 0.75, 1.0],
//!     [Easing::InOutBack, Easing::OutBounce],
//! )
//! .unwrap();
//! ```

use crate::decorator::{DelayDecorator, RepeatDecorator, SpeedDecorator};
use crate::easing::Easing;
use crate::error::Result;
use crate::predicate::{Always, Never, Predicate, Times};
use crate::special::{InstantAnimation, NeverAnimation};
use crate::timed::TimedAnimation;
use crate::timing_curve::TimingCurveAnimation;

/// Immutable builder around a composed animation strategy
///
/// `AnimationBuilder::<TimedAnimation>::default()` is a linear animation
/// lasting [`TimedAnimation::DEFAULT_DURATION`].
#[derive(Clone, Debug, Default)]
pub struct AnimationBuilder<A> {
    animation: A,
}

impl<A> AnimationBuilder<A> {
    /// Wrap an existing strategy
    pub fn new(animation: A) -> Self {
        Self { animation }
    }

    /// Borrow the composed strategy
    pub fn animation(&self) -> &A {
        &self.animation
    }

    /// Take the composed strategy out of the builder
    pub fn into_animation(self) -> A {
        self.animation
    }
}

impl<A: Clone> AnimationBuilder<A> {
    /// Wait `seconds` before the animation starts
    pub fn delay(&self, seconds: f32) -> AnimationBuilder<DelayDecorator<A>> {
        AnimationBuilder::new(DelayDecorator::new(self.animation.clone(), seconds))
    }

    /// Scale elapsed time by `factor`
    pub fn speed(&self, factor: f32) -> AnimationBuilder<SpeedDecorator<A>> {
        AnimationBuilder::new(SpeedDecorator::new(self.animation.clone(), factor))
    }

    /// Restart on completion while `repeat` holds, reversing while `reverse` holds
    pub fn repeat<R, V>(&self, repeat: R, reverse: V) -> AnimationBuilder<RepeatDecorator<A, R, V>>
    where
        R: Predicate,
        V: Predicate,
    {
        AnimationBuilder::new(RepeatDecorator::new(
            self.animation.clone(),
            repeat,
            reverse,
        ))
    }

    /// Play `count` more times after the first run
    pub fn repeat_for(&self, count: u32) -> AnimationBuilder<RepeatDecorator<A, Times, Never>> {
        self.repeat(Times::new(count), Never)
    }

    /// Play `count` more times after the first run, flipping direction each time
    pub fn reverse_for(&self, count: u32) -> AnimationBuilder<RepeatDecorator<A, Times, Times>> {
        self.repeat(Times::new(count), Times::new(count))
    }

    /// Restart forever
    pub fn repeat_forever(&self) -> AnimationBuilder<RepeatDecorator<A, Always, Never>> {
        self.repeat(Always, Never)
    }

    /// Play back and forth forever
    pub fn ping_pong(&self) -> AnimationBuilder<RepeatDecorator<A, Always, Always>> {
        self.repeat(Always, Always)
    }
}

impl<A> From<A> for AnimationBuilder<A> {
    fn from(animation: A) -> Self {
        Self::new(animation)
    }
}

/// Timed animation with an arbitrary easing
pub fn eased(easing: Easing, duration: f32) -> Result<AnimationBuilder<TimedAnimation>> {
    TimedAnimation::new(easing, duration).map(AnimationBuilder::new)
}

/// Timed animation lasting [`TimedAnimation::DEFAULT_DURATION`]
pub fn eased_default(easing: Easing) -> AnimationBuilder<TimedAnimation> {
    AnimationBuilder::new(TimedAnimation::with_easing(easing))
}

/// Snap to the target on the next update
pub fn instant() -> AnimationBuilder<InstantAnimation> {
    AnimationBuilder::new(InstantAnimation)
}

/// Hold the initial value until replaced
pub fn never() -> AnimationBuilder<NeverAnimation> {
    AnimationBuilder::new(NeverAnimation)
}

/// Multi-keyframe curve, see [`TimingCurveAnimation`]
pub fn timing_curve<V, E>(
    duration: f32,
    values: V,
    easings: E,
) -> Result<AnimationBuilder<TimingCurveAnimation>>
where
    V: IntoIterator<Item = f32>,
    E: IntoIterator<Item = Easing>,
{
    TimingCurveAnimation::new(duration, values, easings).map(AnimationBuilder::new)
}

macro_rules! named_curves {
    ($($name:ident => $easing:ident),* $(,)?) => {
        $(
            #[doc = concat!("Timed animation eased with [`Easing::", stringify!($easing), "`]")]
            ///
            /// `duration` is in seconds; use [`eased_default`] for the default length.
            pub fn $name(duration: f32) -> Result<AnimationBuilder<TimedAnimation>> {
                eased(Easing::$easing, duration)
            }
        )*
    };
}

named_curves! {
    ease_linear => Linear,
    ease_in_sine => InSine,
    ease_out_sine => OutSine,
    ease_in_out_sine => InOutSine,
    ease_in_quad => InQuad,
    ease_out_quad => OutQuad,
    ease_in_out_quad => InOutQuad,
    ease_in_cubic => InCubic,
    ease_out_cubic => OutCubic,
    ease_in_out_cubic => InOutCubic,
    ease_in_quart => InQuart,
    ease_out_quart => OutQuart,
    ease_in_out_quart => InOutQuart,
    ease_in_quint => InQuint,
    ease_out_quint => OutQuint,
    ease_in_out_quint => InOutQuint,
    ease_in_expo => InExpo,
    ease_out_expo => OutExpo,
    ease_in_out_expo => InOutExpo,
    ease_in_circ => InCirc,
    ease_out_circ => OutCirc,
    ease_in_out_circ => InOutCirc,
    ease_in_back => InBack,
    ease_out_back => OutBack,
    ease_in_out_back => InOutBack,
    ease_in_elastic => InElastic,
    ease_out_elastic => OutElastic,
    ease_in_out_elastic => InOutElastic,
    ease_in_bounce => InBounce,
    ease_out_bounce => OutBounce,
    ease_in_out_bounce => InOutBounce,
}
