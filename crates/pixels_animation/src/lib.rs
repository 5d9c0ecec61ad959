//! Pixels Animation System
//!
//! Easing curves, composable tween strategies, and animated values driven by
//! a frame loop.
//!
//! # Features
//!
//! - **Easing**: the standard sine/quad/cubic/quart/quint/expo/circ/back/elastic/bounce
//!   families plus CSS-style cubic beziers
//! - **Composable strategies**: delay, speed and repeat decorators wrap a timed
//!   animation or a multi-keyframe timing curve into one concrete type
//! - **Animatable values**: any `T` with `+`, `-` and `* f32` can be animated;
//!   the running strategy is swapped at runtime behind a single handle
//! - **Config**: transitions can be described in TOML
//!
//! # Example
//!
//! ```rust
//! use pixels_animation::builder::ease_out_quad;
//! use pixels_animation::Animatable;
//!
//! let mut opacity = Animatable::new(0.0f32);
//! opacity.animate(ease_out_quad(0.5).unwrap().delay(0.1).reverse_for(1), 1.0);
//!
//! // Host loop
//! while opacity.is_animating() {
//!     opacity.update(1.0 / 60.0);
//! }
//! assert!(opacity.get().abs() < 1e-3);
//! ```

pub mod animatable;
pub mod animation;
pub mod builder;
pub mod config;
pub mod decorator;
pub mod easing;
pub mod error;
pub mod interpolate;
pub mod predicate;
pub mod special;
pub mod timed;
pub mod timing_curve;

pub use animatable::Animatable;
pub use animation::{Animation, DynAnimation};
pub use builder::AnimationBuilder;
pub use config::{ConfiguredAnimation, TransitionConfig};
pub use decorator::{DelayDecorator, RepeatDecorator, SpeedDecorator};
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use interpolate::Interpolate;
pub use predicate::{Always, Never, Predicate, Times};
pub use special::{InstantAnimation, NeverAnimation};
pub use timed::TimedAnimation;
pub use timing_curve::TimingCurveAnimation;
