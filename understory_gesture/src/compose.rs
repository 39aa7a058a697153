// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elementary delta matrices and their composition with a running transform.
//!
//! Every builder here returns a similarity transform (translation, uniform
//! scale and rotation only), so any product of them stays decomposable by
//! [`decompose`](crate::decompose). Deltas are applied by *left*
//! multiplication: `matrix = delta * matrix`, which expresses the delta in the
//! parent (view) space of the content.
//!
//! ```
//! use kurbo::{Affine, Point, Vec2};
//! use understory_gesture::compose;
//!
//! let pivot = Point::new(50.0, 50.0);
//! let mut m = Affine::IDENTITY;
//! m = compose::apply(compose::translate(Vec2::new(10.0, 0.0)), m);
//! m = compose::apply(compose::scale_about(2.0, pivot), m);
//! assert_eq!(m.translation(), Vec2::new(-30.0, -50.0));
//!
//! // The pivot is a fixed point of the scale step.
//! assert_eq!(compose::scale_about(2.0, pivot) * pivot, pivot);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::decomposition::decompose;

/// Pure translation by `delta`.
#[must_use]
pub fn translate(delta: Vec2) -> Affine {
    Affine::new([1.0, 0.0, 0.0, 1.0, delta.x, delta.y])
}

/// Uniform scale by `factor` that leaves `pivot` in place.
///
/// The translation component is `(1 - factor) * pivot`.
#[must_use]
pub fn scale_about(factor: f64, pivot: Point) -> Affine {
    let k = 1.0 - factor;
    Affine::new([factor, 0.0, 0.0, factor, k * pivot.x, k * pivot.y])
}

/// Rotation by `radians` that leaves `pivot` in place.
///
/// The translation component is `(1 - cos θ) * pivot + sin θ * perp(pivot)`
/// with `perp(p) = (p.y, -p.x)`.
#[must_use]
pub fn rotate_about(radians: f64, pivot: Point) -> Affine {
    let (s, c) = radians.sin_cos();
    let k = 1.0 - c;
    Affine::new([
        c,
        s,
        -s,
        c,
        k * pivot.x + s * pivot.y,
        k * pivot.y - s * pivot.x,
    ])
}

/// Applies `delta` on top of `matrix` (left multiplication).
#[must_use]
pub fn apply(delta: Affine, matrix: Affine) -> Affine {
    delta * matrix
}

/// A tentative scale step, validated before it replaces the running matrix.
///
/// Building the candidate never touches the caller's state; [`commit`](Self::commit)
/// decides whether the result is accepted:
///
/// ```
/// use kurbo::{Affine, Point};
/// use understory_gesture::compose::ScaleCandidate;
///
/// let current = Affine::scale(4.0);
/// let candidate = ScaleCandidate::propose(current, 2.0, Point::ORIGIN);
/// assert!((candidate.resulting_scale() - 8.0).abs() < 1e-12);
/// assert_eq!(candidate.commit(0.2, 5.0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleCandidate {
    delta: Affine,
    matrix: Affine,
    resulting_scale: f64,
}

impl ScaleCandidate {
    /// Computes the matrix that would result from scaling `current` by `factor` about `pivot`.
    #[must_use]
    pub fn propose(current: Affine, factor: f64, pivot: Point) -> Self {
        let delta = scale_about(factor, pivot);
        let matrix = apply(delta, current);
        Self {
            delta,
            matrix,
            resulting_scale: decompose(matrix).scale,
        }
    }

    /// The delta matrix of this step.
    #[must_use]
    pub fn delta(&self) -> Affine {
        self.delta
    }

    /// The tentative matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Uniform scale of the tentative matrix.
    #[must_use]
    pub fn resulting_scale(&self) -> f64 {
        self.resulting_scale
    }

    /// Returns `true` when the resulting scale lies in `[min_scale, max_scale]`.
    #[must_use]
    pub fn is_within(&self, min_scale: f64, max_scale: f64) -> bool {
        (min_scale..=max_scale).contains(&self.resulting_scale)
    }

    /// Returns the tentative matrix if its scale is within limits, else `None`.
    #[must_use]
    pub fn commit(self, min_scale: f64, max_scale: f64) -> Option<Affine> {
        self.is_within(min_scale, max_scale).then_some(self.matrix)
    }
}
