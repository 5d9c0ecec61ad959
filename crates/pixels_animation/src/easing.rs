//! Easing functions for animations
//!
//! Every curve is a pure `fn(f32) -> f32` over normalized progress. The in/out
//! families satisfy `f(0) == 0` and `f(1) == 1`; back, elastic and bounce curves
//! leave `[0, 1]` between the endpoints on purpose.
//!
//! The free functions can be used directly (`easing::in_out_cubic(0.3)`), or
//! through the [`Easing`] enum, which is what the builders and the timing curve
//! store.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AnimationError;

/// Plain easing function pointer
pub type EaseFn = fn(f32) -> f32;

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f32 = (2.0 * PI) / 4.5;
const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;

#[inline]
pub fn linear(x: f32) -> f32 {
    x
}

pub fn in_sine(x: f32) -> f32 {
    1.0 - (x * PI / 2.0).cos()
}

pub fn out_sine(x: f32) -> f32 {
    (x * PI / 2.0).sin()
}

pub fn in_out_sine(x: f32) -> f32 {
    -((PI * x).cos() - 1.0) / 2.0
}

pub fn in_quad(x: f32) -> f32 {
    x * x
}

pub fn out_quad(x: f32) -> f32 {
    1.0 - (1.0 - x) * (1.0 - x)
}

pub fn in_out_quad(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

pub fn in_cubic(x: f32) -> f32 {
    x * x * x
}

pub fn out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

pub fn in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

pub fn in_quart(x: f32) -> f32 {
    x * x * x * x
}

pub fn out_quart(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(4)
}

pub fn in_out_quart(x: f32) -> f32 {
    if x < 0.5 {
        8.0 * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
    }
}

pub fn in_quint(x: f32) -> f32 {
    x * x * x * x * x
}

pub fn out_quint(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(5)
}

pub fn in_out_quint(x: f32) -> f32 {
    if x < 0.5 {
        16.0 * x * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
    }
}

pub fn in_expo(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else {
        2f32.powf(10.0 * x - 10.0)
    }
}

pub fn out_expo(x: f32) -> f32 {
    if x == 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * x)
    }
}

pub fn in_out_expo(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        2f32.powf(20.0 * x - 10.0) / 2.0
    } else {
        (2.0 - 2f32.powf(-20.0 * x + 10.0)) / 2.0
    }
}

// The square roots are clamped so inputs outside [0, 1] stay finite.

pub fn in_circ(x: f32) -> f32 {
    1.0 - (1.0 - x * x).max(0.0).sqrt()
}

pub fn out_circ(x: f32) -> f32 {
    (1.0 - (x - 1.0).powi(2)).max(0.0).sqrt()
}

pub fn in_out_circ(x: f32) -> f32 {
    if x < 0.5 {
        (1.0 - (1.0 - (2.0 * x).powi(2)).max(0.0).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * x + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
    }
}

pub fn in_back(x: f32) -> f32 {
    BACK_C3 * x * x * x - BACK_C1 * x * x
}

pub fn out_back(x: f32) -> f32 {
    1.0 + BACK_C3 * (x - 1.0).powi(3) + BACK_C1 * (x - 1.0).powi(2)
}

pub fn in_out_back(x: f32) -> f32 {
    if x < 0.5 {
        ((2.0 * x).powi(2) * ((BACK_C2 + 1.0) * 2.0 * x - BACK_C2)) / 2.0
    } else {
        ((2.0 * x - 2.0).powi(2) * ((BACK_C2 + 1.0) * (x * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
    }
}

pub fn in_elastic(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        -(2f32.powf(10.0 * x - 10.0)) * ((x * 10.0 - 10.75) * ELASTIC_C4).sin()
    }
}

pub fn out_elastic(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        2f32.powf(-10.0 * x) * ((x * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
    }
}

pub fn in_out_elastic(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        -(2f32.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * ELASTIC_C5).sin()) / 2.0
    } else {
        (2f32.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * ELASTIC_C5).sin()) / 2.0 + 1.0
    }
}

pub fn in_bounce(x: f32) -> f32 {
    1.0 - out_bounce(1.0 - x)
}

pub fn out_bounce(x: f32) -> f32 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984375
    }
}

pub fn in_out_bounce(x: f32) -> f32 {
    if x < 0.5 {
        (1.0 - out_bounce(1.0 - 2.0 * x)) / 2.0
    } else {
        (1.0 + out_bounce(2.0 * x - 1.0)) / 2.0
    }
}

/// Easing function type
///
/// Named curves map onto the free functions of this module. `CubicBezier`
/// follows the CSS `cubic-bezier()` definition and `Custom` wraps any
/// caller-supplied function.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
    CubicBezier(f32, f32, f32, f32),
    Custom(EaseFn),
}

/// Every named curve, in declaration order
static NAMED: [(&str, Easing); 31] = [
    ("linear", Easing::Linear),
    ("in_sine", Easing::InSine),
    ("out_sine", Easing::OutSine),
    ("in_out_sine", Easing::InOutSine),
    ("in_quad", Easing::InQuad),
    ("out_quad", Easing::OutQuad),
    ("in_out_quad", Easing::InOutQuad),
    ("in_cubic", Easing::InCubic),
    ("out_cubic", Easing::OutCubic),
    ("in_out_cubic", Easing::InOutCubic),
    ("in_quart", Easing::InQuart),
    ("out_quart", Easing::OutQuart),
    ("in_out_quart", Easing::InOutQuart),
    ("in_quint", Easing::InQuint),
    ("out_quint", Easing::OutQuint),
    ("in_out_quint", Easing::InOutQuint),
    ("in_expo", Easing::InExpo),
    ("out_expo", Easing::OutExpo),
    ("in_out_expo", Easing::InOutExpo),
    ("in_circ", Easing::InCirc),
    ("out_circ", Easing::OutCirc),
    ("in_out_circ", Easing::InOutCirc),
    ("in_back", Easing::InBack),
    ("out_back", Easing::OutBack),
    ("in_out_back", Easing::InOutBack),
    ("in_elastic", Easing::InElastic),
    ("out_elastic", Easing::OutElastic),
    ("in_out_elastic", Easing::InOutElastic),
    ("in_bounce", Easing::InBounce),
    ("out_bounce", Easing::OutBounce),
    ("in_out_bounce", Easing::InOutBounce),
];

impl Easing {
    /// All named curves (everything except `CubicBezier` and `Custom`)
    pub fn named() -> impl Iterator<Item = Easing> {
        NAMED.iter().map(|(_, easing)| *easing)
    }

    /// Apply the easing function to a progress value
    pub fn apply(&self, t: f32) -> f32 {
        self.function().map_or_else(
            || match *self {
                Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, x1, y1, x2, y2),
                _ => t,
            },
            |f| f(t),
        )
    }

    /// The plain function behind this easing, if there is one
    pub fn function(&self) -> Option<EaseFn> {
        let f: EaseFn = match self {
            Easing::Linear => linear,
            Easing::InSine => in_sine,
            Easing::OutSine => out_sine,
            Easing::InOutSine => in_out_sine,
            Easing::InQuad => in_quad,
            Easing::OutQuad => out_quad,
            Easing::InOutQuad => in_out_quad,
            Easing::InCubic => in_cubic,
            Easing::OutCubic => out_cubic,
            Easing::InOutCubic => in_out_cubic,
            Easing::InQuart => in_quart,
            Easing::OutQuart => out_quart,
            Easing::InOutQuart => in_out_quart,
            Easing::InQuint => in_quint,
            Easing::OutQuint => out_quint,
            Easing::InOutQuint => in_out_quint,
            Easing::InExpo => in_expo,
            Easing::OutExpo => out_expo,
            Easing::InOutExpo => in_out_expo,
            Easing::InCirc => in_circ,
            Easing::OutCirc => out_circ,
            Easing::InOutCirc => in_out_circ,
            Easing::InBack => in_back,
            Easing::OutBack => out_back,
            Easing::InOutBack => in_out_back,
            Easing::InElastic => in_elastic,
            Easing::OutElastic => out_elastic,
            Easing::InOutElastic => in_out_elastic,
            Easing::InBounce => in_bounce,
            Easing::OutBounce => out_bounce,
            Easing::InOutBounce => in_out_bounce,
            Easing::Custom(f) => *f,
            Easing::CubicBezier(..) => return None,
        };
        Some(f)
    }

    /// Snake-case name of a named curve
    pub fn name(&self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(_, easing)| easing == self)
            .map(|(name, _)| *name)
    }
}

impl From<EaseFn> for Easing {
    fn from(f: EaseFn) -> Self {
        Easing::Custom(f)
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::CubicBezier(a1, b1, c1, d1), Easing::CubicBezier(a2, b2, c2, d2)) => {
                a1 == a2 && b1 == b2 && c1 == c2 && d1 == d2
            }
            (Easing::Custom(a), Easing::Custom(b)) => *a as usize == *b as usize,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic_bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            Easing::Custom(_) => f.write_str("custom"),
            named => f.write_str(named.name().unwrap_or("custom")),
        }
    }
}

impl FromStr for Easing {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((_, easing)) = NAMED.iter().find(|(name, _)| *name == s) {
            return Ok(*easing);
        }

        let unknown = || AnimationError::UnknownEasing(s.to_string());
        let args = s
            .strip_prefix("cubic_bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(unknown)?;
        let points = args
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| unknown())?;
        match points[..] {
            [x1, y1, x2, y2] => Ok(Easing::CubicBezier(x1, y1, x2, y2)),
            _ => Err(unknown()),
        }
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Easing::Custom(_) => Err(serde::ser::Error::custom(
                "custom easing functions cannot be serialized",
            )),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// Cubic bezier easing calculation, matching the CSS `cubic-bezier()` timing function.
///
/// Uses Newton-Raphson with binary-search fallback for robustness.
/// Computes in f64 internally to avoid f32 precision jitter at high frame rates.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are always exact
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    // Newton-Raphson for the parameter `p` with bezier_x(p) == x; bail out to
    // bisection when the curve is too flat for the slope to be trusted.
    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break; // flat, switch to bisection
        }
        p -= err / slope;
    }

    // Binary search fallback (always converges)
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// One axis of the curve at parameter t: B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    // Horner form of the polynomial above
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// B'(t) = 3(1-t)²·p1 + 6(1-t)t·(p2-p1) + 3t²·(1-p2)
#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
