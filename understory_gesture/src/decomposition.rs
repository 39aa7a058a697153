// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

/// Translation, uniform scale and rotation recovered from a similarity transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    /// Image of the local origin.
    pub translation: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in radians, normalized into `(-π, π]`.
    pub rotation: f64,
}

impl Decomposed {
    /// Values of the identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };
}

impl Default for Decomposed {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Decomposes `matrix` into translation, scale and rotation.
///
/// The origin and the unit X point are mapped through the matrix. The image of
/// the origin is the translation; the vector between the two images carries the
/// scale as its length and the rotation as its angle. For a similarity
/// transform this single probe is exact whatever order the matrix was built in.
///
/// ```
/// use kurbo::{Affine, Vec2};
/// use understory_gesture::decompose;
///
/// let m = Affine::translate((3.0, 4.0)) * Affine::rotate(0.5) * Affine::scale(2.0);
/// let d = decompose(m);
/// assert!((d.translation - Vec2::new(3.0, 4.0)).hypot() < 1e-12);
/// assert!((d.scale - 2.0).abs() < 1e-12);
/// assert!((d.rotation - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn decompose(matrix: Affine) -> Decomposed {
    let origin = matrix * Point::ORIGIN;
    let unit = matrix * Point::new(1.0, 0.0);
    let axis = unit - origin;
    Decomposed {
        translation: origin.to_vec2(),
        scale: axis.hypot(),
        rotation: normalize_angle(axis.y.atan2(axis.x)),
    }
}

/// Wraps an angle in radians into `(-π, π]`.
#[must_use]
pub fn normalize_angle(radians: f64) -> f64 {
    if !radians.is_finite() {
        return radians;
    }
    let two_pi = 2.0 * PI;
    let mut r = radians % two_pi;
    if r <= -PI {
        r += two_pi;
    } else if r > PI {
        r -= two_pi;
    }
    r
}
