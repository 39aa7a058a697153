// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// Error returned when a gesture update cannot resolve its scale/rotation pivot.
///
/// Both variants are configuration errors: the session was built without the
/// context needed to turn a gesture into a local pivot. A failed update leaves
/// the session unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureError {
    /// A global focal point was supplied, but there is no content space to map
    /// it into local coordinates and no fixed alignment is configured.
    UnresolvedFocalPoint {
        /// The focal point in global coordinates.
        focal_point: Point,
    },
    /// No focal point was supplied, and neither an alignment nor a content
    /// space is available to fall back on.
    MissingPivot,
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedFocalPoint { focal_point } => write!(
                f,
                "cannot map focal point ({}, {}) to local coordinates: no content space or alignment configured",
                focal_point.x, focal_point.y
            ),
            Self::MissingPivot => f.write_str(
                "gesture update has no focal point and no content space or alignment to derive a pivot from",
            ),
        }
    }
}

impl core::error::Error for GestureError {}
