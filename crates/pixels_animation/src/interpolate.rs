//! Value algebra required by animated values

use std::ops::{Add, Mul, Sub};

/// A value that can be linearly interpolated by an animation
///
/// Blanket-implemented for every type with a default value, addition,
/// subtraction and scaling by an `f32`, so `f32` and most vector types work
/// out of the box.
///
/// # Example
///
/// ```
/// use pixels_animation::Interpolate;
///
/// assert_eq!(Interpolate::lerp(&0.0f32, &10.0, 0.25), 2.5);
/// ```
pub trait Interpolate:
    Clone + Default + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    /// `initial + (target - initial) * progress`
    ///
    /// `progress` is not clamped; overshooting easings rely on that.
    fn lerp(initial: &Self, target: &Self, progress: f32) -> Self {
        initial.clone() + (target.clone() - initial.clone()) * progress
    }
}

impl<T> Interpolate for T where
    T: Clone + Default + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>
{
}
