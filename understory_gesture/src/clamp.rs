// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

/// Edge bounds for the translation component of a content transform.
///
/// Content of `size` is laid out at the origin of its box. After scaling, its
/// leading (left/top) edge may never move past the box's leading edge, and its
/// trailing (right/bottom) edge may never retreat inside the box's trailing
/// edge. `padding` loosens both stops by the same amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeBounds {
    /// Unscaled content size.
    pub size: Size,
    /// Extra slack allowed beyond each edge.
    pub padding: f64,
}

impl EdgeBounds {
    /// Creates bounds for content of `size` with `padding` slack.
    #[must_use]
    pub fn new(size: Size, padding: f64) -> Self {
        Self { size, padding }
    }

    /// Returns `translation` clamped for a matrix with the given axis scale coefficients.
    ///
    /// `scale` holds the `x` (coefficient `a`) and `y` (coefficient `d`) scale
    /// components of the matrix.
    #[must_use]
    pub fn clamp_translation(&self, translation: Vec2, scale: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(translation.x, self.size.width, scale.x, self.padding),
            clamp_axis(translation.y, self.size.height, scale.y, self.padding),
        )
    }

    /// Returns `matrix` with its translation clamped; the linear part is untouched.
    ///
    /// A negative offset is raised until the scaled trailing edge reaches the
    /// box's trailing edge (`w * a + tx >= w`). That lower bound is capped at
    /// `0`: content scaled below its box would otherwise be pushed to a
    /// positive offset, so shrunk content is instead pinned at the leading
    /// edge. Padding widens both stops.
    ///
    /// ```
    /// use kurbo::{Affine, Size, Vec2};
    /// use understory_gesture::EdgeBounds;
    ///
    /// let bounds = EdgeBounds::new(Size::new(100.0, 100.0), 0.0);
    /// let zoomed = Affine::translate((-300.0, -50.0)) * Affine::scale(2.0);
    /// assert_eq!(bounds.clamp(zoomed).translation(), Vec2::new(-100.0, -50.0));
    /// let shrunk = Affine::translate((-30.0, 0.0)) * Affine::scale(0.5);
    /// assert_eq!(bounds.clamp(shrunk).translation(), Vec2::ZERO);
    /// ```
    #[must_use]
    pub fn clamp(&self, matrix: Affine) -> Affine {
        let [a, _, _, d, _, _] = matrix.as_coeffs();
        let clamped = self.clamp_translation(matrix.translation(), Vec2::new(a, d));
        matrix.with_translation(clamped)
    }
}

/// Clamps one translation coordinate.
///
/// A negative offset may grow until the scaled trailing edge meets the
/// unscaled one (`extent * scale + t >= extent`); a non-negative offset snaps
/// back to the leading edge.
fn clamp_axis(t: f64, extent: f64, scale: f64, padding: f64) -> f64 {
    let scaled = extent * scale;
    if t < 0.0 {
        let lower = (extent - scaled).min(0.0) - padding;
        t.max(lower)
    } else {
        t.min(padding)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Size, Vec2};

    use super::EdgeBounds;

    const BOUNDS: EdgeBounds = EdgeBounds {
        size: Size::new(100.0, 100.0),
        padding: 0.0,
    };

    #[test]
    fn positive_offset_snaps_to_zero() {
        let m = BOUNDS.clamp(Affine::translate((10.0, 0.0)));
        assert_eq!(m.translation(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn negative_offset_bounded_by_scaled_size() {
        // At 2x the content is 200 wide, so it may move left by at most 100.
        let m = Affine::translate((-150.0, -40.0)) * Affine::scale(2.0);
        let m = BOUNDS.clamp(m);
        assert_eq!(m.translation(), Vec2::new(-100.0, -40.0));
    }

    #[test]
    fn unscaled_content_cannot_move() {
        let m = BOUNDS.clamp(Affine::translate((-5.0, 7.0)));
        assert_eq!(m.translation(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn shrunk_content_pins_at_leading_edge() {
        let m = Affine::translate((-30.0, -30.0)) * Affine::scale(0.5);
        let m = BOUNDS.clamp(m);
        assert_eq!(m.translation(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn axes_clamp_independently() {
        let bounds = EdgeBounds::new(Size::new(100.0, 50.0), 0.0);
        let t = bounds.clamp_translation(Vec2::new(-500.0, 20.0), Vec2::new(3.0, 3.0));
        assert_eq!(t, Vec2::new(-200.0, 0.0));
    }

    #[test]
    fn padding_loosens_both_edges() {
        let bounds = EdgeBounds::new(Size::new(100.0, 100.0), 8.0);
        let t = bounds.clamp_translation(Vec2::new(20.0, -20.0), Vec2::new(1.0, 1.0));
        assert_eq!(t, Vec2::new(8.0, -8.0));
    }

    #[test]
    fn clamp_preserves_linear_part() {
        let m = Affine::translate((40.0, 40.0)) * Affine::scale(1.5);
        let clamped = BOUNDS.clamp(m);
        let [a, b, c, d, _, _] = clamped.as_coeffs();
        assert_eq!([a, b, c, d], [1.5, 0.0, 0.0, 1.5]);
    }
}
