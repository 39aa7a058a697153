// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis delta trackers: turn absolute gesture readings into per-frame deltas.
//!
//! Gesture recognizers usually report *cumulative* values for the whole
//! gesture: the current focal point, the total scale since the gesture began,
//! and the total rotation. The composer needs the *incremental* change since
//! the previous frame. Each tracker stores one baseline and replaces it on
//! every observation.
//!
//! | Tracker | Baseline at start | Delta |
//! |---|---|---|
//! | [`TranslationTracker`] | unset | `new - previous` |
//! | [`ScaleTracker`] | `1.0` | `new / previous` |
//! | [`RotationTracker`] | unset | `new - previous` |
//!
//! An unset baseline is seeded by the first observation, which reports no delta.
//!
//! ## Minimal example
//!
//! ```
//! use understory_gesture::tracker::{RotationTracker, ScaleTracker};
//!
//! let mut scale = ScaleTracker::default();
//! assert_eq!(scale.update(2.0), 2.0);
//! assert_eq!(scale.update(3.0), 1.5);
//!
//! let mut rotation = RotationTracker::default();
//! // The first reading only seeds the baseline.
//! assert_eq!(rotation.update(0.25), None);
//! assert_eq!(rotation.update(0.5), Some(0.25));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the focal point and reports its movement between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TranslationTracker {
    previous: Option<Point>,
}

impl TranslationTracker {
    /// Clears the baseline so the next observation seeds it.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Sets the baseline directly, e.g. from the focal point of a gesture start.
    pub fn seed(&mut self, focal_point: Point) {
        self.previous = Some(focal_point);
    }

    /// Returns the stored baseline, if any.
    #[must_use]
    pub fn baseline(&self) -> Option<Point> {
        self.previous
    }

    /// Records `focal_point` and returns the movement since the last observation.
    ///
    /// Returns `None` when there was no baseline yet. A non-finite point is
    /// ignored and leaves the baseline in place.
    pub fn update(&mut self, focal_point: Point) -> Option<Vec2> {
        if !focal_point.is_finite() {
            return None;
        }
        let delta = self.previous.map(|previous| focal_point - previous);
        self.previous = Some(focal_point);
        delta
    }
}

/// Tracks the cumulative scale factor and reports the ratio between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTracker {
    previous: f64,
}

impl Default for ScaleTracker {
    fn default() -> Self {
        Self { previous: 1.0 }
    }
}

impl ScaleTracker {
    /// Restores the neutral baseline of `1.0`.
    pub fn reset(&mut self) {
        self.previous = 1.0;
    }

    /// Sets the baseline directly.
    pub fn seed(&mut self, scale: f64) {
        self.previous = scale;
    }

    /// Returns the stored baseline.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.previous
    }

    /// Records `scale` and returns `scale / previous`.
    ///
    /// A zero or non-finite baseline yields the neutral ratio `1.0`. A
    /// non-finite reading also yields `1.0` and is not recorded.
    pub fn update(&mut self, scale: f64) -> f64 {
        if !scale.is_finite() {
            return 1.0;
        }
        let previous = self.previous;
        self.previous = scale;
        if previous == 0.0 || !previous.is_finite() {
            return 1.0;
        }
        scale / previous
    }
}

/// Tracks the cumulative rotation angle and reports the angular change between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationTracker {
    previous: Option<f64>,
}

impl RotationTracker {
    /// Clears the baseline so the next observation seeds it.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Sets the baseline directly.
    pub fn seed(&mut self, radians: f64) {
        self.previous = Some(radians);
    }

    /// Returns the stored baseline, if seeded.
    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.previous
    }

    /// Returns `true` once a baseline has been recorded.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.previous.is_some()
    }

    /// Records `radians` and returns the change since the last observation.
    ///
    /// The first observation after a reset seeds the baseline and returns `None`,
    /// so that a gesture never jumps from an undefined previous angle. A
    /// non-finite reading is ignored.
    pub fn update(&mut self, radians: f64) -> Option<f64> {
        if !radians.is_finite() {
            return None;
        }
        let delta = self.previous.map(|previous| radians - previous);
        self.previous = Some(radians);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_first_observation_seeds() {
        let mut t = TranslationTracker::default();
        assert_eq!(t.update(Point::new(10.0, 20.0)), None);
        assert_eq!(t.baseline(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn translation_tracks_incremental_deltas() {
        let mut t = TranslationTracker::default();
        t.seed(Point::new(0.0, 0.0));

        assert_eq!(t.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(t.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(t.update(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
    }

    #[test]
    fn translation_reset_clears_baseline() {
        let mut t = TranslationTracker::default();
        t.seed(Point::new(1.0, 1.0));
        t.reset();
        assert_eq!(t.baseline(), None);
        assert_eq!(t.update(Point::new(4.0, 4.0)), None);
    }

    #[test]
    fn scale_first_sample_is_absolute() {
        let mut s = ScaleTracker::default();
        assert_eq!(s.update(1.25), 1.25);
    }

    #[test]
    fn scale_reports_ratios() {
        let mut s = ScaleTracker::default();
        s.update(2.0);
        assert_eq!(s.update(4.0), 2.0);
        assert_eq!(s.update(1.0), 0.25);
        assert_eq!(s.baseline(), 1.0);
    }

    #[test]
    fn scale_zero_baseline_is_neutral() {
        let mut s = ScaleTracker::default();
        s.seed(0.0);
        assert_eq!(s.update(3.0), 1.0);
        // The baseline still advances.
        assert_eq!(s.update(6.0), 2.0);
    }

    #[test]
    fn scale_non_finite_baseline_is_neutral() {
        let mut s = ScaleTracker::default();
        s.seed(f64::NAN);
        assert_eq!(s.update(2.0), 1.0);
    }

    #[test]
    fn rotation_first_sample_seeds_without_delta() {
        let mut r = RotationTracker::default();
        assert!(!r.is_seeded());
        assert_eq!(r.update(0.7), None);
        assert!(r.is_seeded());
        assert_eq!(r.baseline(), Some(0.7));
    }

    #[test]
    fn rotation_reports_differences() {
        let mut r = RotationTracker::default();
        r.seed(0.5);
        let d = r.update(0.75).unwrap();
        assert!((d - 0.25).abs() < 1e-12);
        let d = r.update(0.25).unwrap();
        assert!((d + 0.5).abs() < 1e-12);
    }

    #[test]
    fn non_finite_readings_keep_baselines() {
        let mut t = TranslationTracker::default();
        t.seed(Point::new(1.0, 2.0));
        assert_eq!(t.update(Point::new(f64::NAN, 0.0)), None);
        assert_eq!(t.baseline(), Some(Point::new(1.0, 2.0)));

        let mut s = ScaleTracker::default();
        s.update(2.0);
        assert_eq!(s.update(f64::INFINITY), 1.0);
        assert_eq!(s.baseline(), 2.0);

        let mut r = RotationTracker::default();
        r.seed(0.1);
        assert_eq!(r.update(f64::NAN), None);
        assert_eq!(r.baseline(), Some(0.1));
        let mut unseeded = RotationTracker::default();
        assert_eq!(unseeded.update(f64::NAN), None);
        assert!(!unseeded.is_seeded());
    }

    #[test]
    fn rotation_reset_restores_sentinel() {
        let mut r = RotationTracker::default();
        r.update(1.0);
        r.update(2.0);
        r.reset();
        assert_eq!(r.update(3.0), None);
    }
}
