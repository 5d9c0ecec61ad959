//! Multi-keyframe timing curves
//!
//! A timing curve moves progress through a list of keyframe values, one
//! equally long segment per value. Keyframe 0 is implicit and sits at
//! progress `0.0`; segment `i` runs from keyframe `i - 1` to keyframe `i`.
//!
//! ```text
//! values   = [0.25, 1.0, 0.5]      duration = 3.0
//! segments = 0.0 -> 0.25 -> 1.0 -> 0.5   (1 second each)
//! ```
//!
//! Easings are picked per segment by index; when there are fewer easings than
//! segments the last easing is reused for the rest.

use smallvec::SmallVec;

use crate::animation::Animation;
use crate::easing::Easing;
use crate::error::{check_duration, AnimationError, Result};
use crate::interpolate::Interpolate;

/// Keyframe-driven progress curve
#[derive(Clone, Debug)]
pub struct TimingCurveAnimation {
    values: Vec<f32>,
    easings: SmallVec<[Easing; 4]>,
    duration: f32,
    segment_duration: f32,
    /// Total time into the curve, within `[0, duration]`
    elapsed: f32,
    /// 1-based index of the running segment; `values.len() + 1` once done
    segment: usize,
    progress: f32,
}

impl TimingCurveAnimation {
    /// Create a timing curve spanning `duration` seconds
    ///
    /// Needs a positive duration, at least one value and at least one easing.
    pub fn new<V, E>(duration: f32, values: V, easings: E) -> Result<Self>
    where
        V: IntoIterator<Item = f32>,
        E: IntoIterator<Item = Easing>,
    {
        let duration = check_duration(duration)?;
        let values: Vec<f32> = values.into_iter().collect();
        let easings: SmallVec<[Easing; 4]> = easings.into_iter().collect();

        if values.is_empty() {
            tracing::warn!("timing curve created without keyframe values");
            return Err(AnimationError::EmptyKeyframes);
        }
        if easings.is_empty() {
            tracing::warn!("timing curve created without easings");
            return Err(AnimationError::EmptyEasings);
        }

        Ok(Self {
            duration,
            segment_duration: duration / values.len() as f32,
            values,
            easings,
            elapsed: 0.0,
            segment: 1,
            progress: 0.0,
        })
    }

    /// Keyframe values in playback order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Easings in playback order
    pub fn easings(&self) -> &[Easing] {
        &self.easings
    }

    /// Total duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Elapsed time in seconds, within `[0, duration]`
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Duration of a single segment in seconds
    pub fn segment_duration(&self) -> f32 {
        self.segment_duration
    }

    /// 1-based index of the running segment
    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Progress as of the last update
    pub fn progress(&self) -> f32 {
        self.progress
    }

    fn keyframe(&self, index: usize) -> f32 {
        match index {
            0 => 0.0,
            i => self.values[i - 1],
        }
    }

    /// Segment containing `elapsed`
    ///
    /// Completion is decided against the exact total duration, never against
    /// accumulated segment lengths.
    fn segment_at(&self, elapsed: f32) -> usize {
        let count = self.values.len();
        if elapsed >= self.duration {
            return count + 1;
        }
        let index = (elapsed / self.segment_duration).floor() as usize;
        (index + 1).min(count)
    }

    fn easing_for(&self, segment: usize) -> Easing {
        let last = self.easings.len() - 1;
        self.easings[(segment - 1).min(last)]
    }
}

impl Animation for TimingCurveAnimation {
    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn update<T: Interpolate>(&mut self, _initial: &T, _target: &T, _current: &T, dt: f32) {
        let count = self.values.len();
        self.elapsed = (self.elapsed + dt).clamp(0.0, self.duration);
        self.segment = self.segment_at(self.elapsed);

        if self.segment > count {
            self.progress = self.keyframe(count);
            return;
        }

        let start = (self.segment - 1) as f32 * self.segment_duration;
        let local = ((self.elapsed - start) / self.segment_duration).clamp(0.0, 1.0);
        let eased = self.easing_for(self.segment).apply(local);
        let from = self.keyframe(self.segment - 1);
        let to = self.keyframe(self.segment);
        self.progress = from + (to - from) * eased;
    }

    fn value<T: Interpolate>(&self, initial: &T, target: &T, _current: &T) -> T {
        T::lerp(initial, target, self.progress)
    }

    fn repeat(&mut self) {
        self.elapsed = 0.0;
        self.segment = 1;
    }

    fn reverse(&mut self) {
        self.values.reverse();
        self.easings.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn step(curve: &mut TimingCurveAnimation, dt: f32) -> f32 {
        curve.update(&0.0f32, &1.0, &0.0, dt);
        curve.value(&0.0f32, &1.0, &0.0)
    }

    #[test]
    fn test_segments_split_duration_evenly() {
        let curve =
            TimingCurveAnimation::new(3.0, [0.25, 0.5, 1.0], [Easing::Linear]).unwrap();
        assert!((curve.segment_duration() - 1.0).abs() < EPS);
        assert_eq!(curve.segment(), 1);
    }

    #[test]
    fn test_linear_segments() {
        let mut curve =
            TimingCurveAnimation::new(2.0, [0.5, 1.0], [Easing::Linear]).unwrap();

        assert!((step(&mut curve, 0.5) - 0.25).abs() < EPS);
        assert!((step(&mut curve, 0.5) - 0.5).abs() < EPS);
        assert_eq!(curve.segment(), 2);
        assert!((step(&mut curve, 0.5) - 0.75).abs() < EPS);
        assert!(!curve.is_done());
        assert!((step(&mut curve, 0.5) - 1.0).abs() < EPS);
        assert!(curve.is_done());
    }

    #[test]
    fn test_leftover_time_carries_into_next_segment() {
        let mut curve =
            TimingCurveAnimation::new(3.0, [1.0, 0.0, 1.0], [Easing::Linear]).unwrap();

        // 1.5 s: segment 2 (1.0 -> 0.0) halfway
        assert!((step(&mut curve, 1.5) - 0.5).abs() < EPS);
        assert_eq!(curve.segment(), 2);
    }

    #[test]
    fn test_finishes_on_full_duration_with_uneven_segments() {
        let mut curve = TimingCurveAnimation::new(
            1.0,
            [1.0 / 3.0, 2.0 / 3.0, 1.0],
            [Easing::Linear],
        )
        .unwrap();

        curve.update(&0.0f32, &1.0, &0.0, 1.0);
        assert!(curve.is_done());
        assert_eq!(curve.segment(), 4);
        assert_eq!(curve.progress(), 1.0);
    }

    #[test]
    fn test_finishes_after_many_small_frames() {
        let mut curve =
            TimingCurveAnimation::new(1.0, [0.2, 0.4, 0.6, 0.8, 0.9, 1.0, 0.5], [Easing::Linear])
                .unwrap();

        for _ in 0..60 {
            curve.update(&0.0f32, &1.0, &0.0, 1.0 / 60.0);
        }
        curve.update(&0.0f32, &1.0, &0.0, 1e-3);
        assert!(curve.is_done());
        assert_eq!(curve.progress(), 0.5);
        assert_eq!(curve.elapsed(), curve.duration());
    }

    #[test]
    fn test_final_progress_is_last_keyframe() {
        let mut curve = TimingCurveAnimation::new(
            3.0,
            [0.25, 0.75, 0.5],
            [Easing::InOutBounce, Easing::OutBack],
        )
        .unwrap();

        assert!((step(&mut curve, 10.0) - 0.5).abs() < EPS);
        assert!(curve.is_done());
        assert!((step(&mut curve, 1.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_easings_clamp_to_last() {
        let curve = TimingCurveAnimation::new(
            4.0,
            [0.25, 0.5, 0.75, 1.0],
            [Easing::InQuad, Easing::OutQuad],
        )
        .unwrap();

        assert_eq!(curve.easing_for(1), Easing::InQuad);
        assert_eq!(curve.easing_for(2), Easing::OutQuad);
        assert_eq!(curve.easing_for(4), Easing::OutQuad);
    }

    #[test]
    fn test_segment_easing_shapes_progress() {
        let mut curve =
            TimingCurveAnimation::new(1.0, [1.0], [Easing::InQuad]).unwrap();
        assert!((step(&mut curve, 0.5) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_repeat_restarts_at_first_segment() {
        let mut curve =
            TimingCurveAnimation::new(2.0, [0.5, 1.0], [Easing::Linear]).unwrap();
        step(&mut curve, 5.0);
        assert!(curve.is_done());

        curve.repeat();
        assert!(!curve.is_done());
        assert_eq!(curve.segment(), 1);
        assert!((step(&mut curve, 0.5) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_reverse_flips_sequences() {
        let mut curve = TimingCurveAnimation::new(
            2.0,
            [0.5, 1.0],
            [Easing::InQuad, Easing::OutQuad],
        )
        .unwrap();

        curve.reverse();
        assert_eq!(curve.values(), &[1.0, 0.5]);
        assert_eq!(curve.easings(), &[Easing::OutQuad, Easing::InQuad]);

        // First segment now 0.0 -> 1.0 with out_quad
        assert!((step(&mut curve, 0.5) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_negative_time_walks_back() {
        let mut curve =
            TimingCurveAnimation::new(2.0, [0.5, 1.0], [Easing::Linear]).unwrap();
        step(&mut curve, 1.5);
        assert_eq!(curve.segment(), 2);

        assert!((step(&mut curve, -1.0) - 0.25).abs() < EPS);
        assert_eq!(curve.segment(), 1);

        assert_eq!(step(&mut curve, -5.0), 0.0);
        assert_eq!(curve.segment(), 1);
    }

    #[test]
    fn test_rejects_empty_sequences() {
        assert!(matches!(
            TimingCurveAnimation::new(1.0, Vec::new(), [Easing::Linear]),
            Err(AnimationError::EmptyKeyframes)
        ));
        assert!(matches!(
            TimingCurveAnimation::new(1.0, [1.0], Vec::new()),
            Err(AnimationError::EmptyEasings)
        ));
        assert!(matches!(
            TimingCurveAnimation::new(0.0, [1.0], [Easing::Linear]),
            Err(AnimationError::InvalidDuration(_))
        ));
    }
}
