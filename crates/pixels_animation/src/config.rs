//! Data-driven transitions
//!
//! A [`TransitionConfig`] describes a timed animation with the usual
//! modifiers so transitions can live in TOML files next to the rest of an
//! application's styling:
//!
//! ```toml
//! easing = "out_cubic"
//! duration = 0.25
//! delay = 0.1
//! repeat = 2
//! reverse = true
//! ```
//!
//! Every field is optional.

use serde::{Deserialize, Serialize};

use crate::builder::{eased, AnimationBuilder};
use crate::decorator::{DelayDecorator, RepeatDecorator, SpeedDecorator};
use crate::easing::Easing;
use crate::error::Result;
use crate::predicate::Times;
use crate::timed::TimedAnimation;

/// Strategy produced by [`TransitionConfig::builder`]
pub type ConfiguredAnimation =
    RepeatDecorator<SpeedDecorator<DelayDecorator<TimedAnimation>>, Times, Times>;

/// Serializable description of a timed transition
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionConfig {
    /// Easing curve name, e.g. `"in_out_sine"` or `"cubic_bezier(0.25, 0.1, 0.25, 1)"`
    #[serde(default)]
    pub easing: Easing,
    /// Duration in seconds
    #[serde(default = "default_duration")]
    pub duration: f32,
    /// Delay before starting, in seconds
    #[serde(default)]
    pub delay: f32,
    /// Time scale factor
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Extra runs after the first one
    #[serde(default)]
    pub repeat: u32,
    /// Flip direction on every repeat
    #[serde(default)]
    pub reverse: bool,
}

fn default_duration() -> f32 {
    TimedAnimation::DEFAULT_DURATION
}

fn default_speed() -> f32 {
    1.0
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            easing: Easing::default(),
            duration: default_duration(),
            delay: 0.0,
            speed: default_speed(),
            repeat: 0,
            reverse: false,
        }
    }
}

impl TransitionConfig {
    /// Parse a transition from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        tracing::debug!(
            "loaded transition: {} over {}s (delay {}s, speed {}, repeat {})",
            config.easing,
            config.duration,
            config.delay,
            config.speed,
            config.repeat
        );
        Ok(config)
    }

    /// Build the described animation
    ///
    /// Fails when `duration` is not a positive, finite number of seconds.
    pub fn builder(&self) -> Result<AnimationBuilder<ConfiguredAnimation>> {
        let reverse = if self.reverse { self.repeat } else { 0 };
        let builder = eased(self.easing, self.duration)?
            .delay(self.delay)
            .speed(self.speed)
            .repeat(Times::new(self.repeat), Times::new(reverse));
        Ok(builder)
    }
}
