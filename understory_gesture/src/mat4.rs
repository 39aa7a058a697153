// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

/// Expands a 2D affine transform into a column-major 4×4 matrix.
///
/// The z axis is left as identity, which is the layout most UI toolkits and
/// GPU uniforms expect for planar transforms.
///
/// ```
/// use kurbo::Affine;
/// use understory_gesture::to_mat4;
///
/// let m = to_mat4(Affine::translate((3.0, 4.0)));
/// assert_eq!(&m[12..14], &[3.0, 4.0]);
/// ```
#[must_use]
pub fn to_mat4(affine: Affine) -> [f64; 16] {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    [
        a, b, 0.0, 0.0, //
        c, d, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        e, f, 0.0, 1.0,
    ]
}

/// Reads the planar part of a column-major 4×4 matrix.
///
/// The z row/column and the perspective terms are ignored.
#[must_use]
pub fn from_mat4(m: &[f64; 16]) -> Affine {
    Affine::new([m[0], m[1], m[4], m[5], m[12], m[13]])
}
