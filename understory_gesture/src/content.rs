// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// Coordinate context of the content area receiving the gesture.
///
/// Gesture focal points arrive in global (window) coordinates; scale and
/// rotation pivots are expressed in the content's local coordinates. Hosts
/// implement this for whatever their layout system uses to place the content.
pub trait ContentSpace {
    /// Size of the content area in local coordinates.
    fn size(&self) -> Size;

    /// Maps a point from global into local coordinates.
    fn global_to_local(&self, point: Point) -> Point;
}

/// Axis-aligned content placed at a global rectangle.
impl ContentSpace for Rect {
    fn size(&self) -> Size {
        Self::size(self)
    }

    fn global_to_local(&self, point: Point) -> Point {
        point - self.origin().to_vec2()
    }
}

/// Content placed by an arbitrary local-to-global transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBox {
    local_to_global: Affine,
    global_to_local: Affine,
    size: Size,
}

impl ContentBox {
    /// Creates a content box of `size`, placed in global space by `local_to_global`.
    ///
    /// `local_to_global` must be invertible.
    #[must_use]
    pub fn new(local_to_global: Affine, size: Size) -> Self {
        Self {
            local_to_global,
            global_to_local: local_to_global.inverse(),
            size,
        }
    }

    /// The transform from local into global coordinates.
    #[must_use]
    pub fn local_to_global(&self) -> Affine {
        self.local_to_global
    }
}

impl ContentSpace for ContentBox {
    fn size(&self) -> Size {
        self.size
    }

    fn global_to_local(&self, point: Point) -> Point {
        self.global_to_local * point
    }
}

impl<T: ContentSpace + ?Sized> ContentSpace for &T {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn global_to_local(&self, point: Point) -> Point {
        (**self).global_to_local(point)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size};

    use super::{ContentBox, ContentSpace};

    #[test]
    fn rect_subtracts_origin() {
        let r = Rect::new(20.0, 30.0, 120.0, 80.0);
        assert_eq!(ContentSpace::size(&r), Size::new(100.0, 50.0));
        assert_eq!(r.global_to_local(Point::new(25.0, 40.0)), Point::new(5.0, 10.0));
    }

    #[test]
    fn content_box_inverts_its_placement() {
        let placement = Affine::translate((10.0, 10.0)) * Affine::scale(2.0);
        let content = ContentBox::new(placement, Size::new(50.0, 50.0));
        let local = Point::new(7.0, 3.0);
        let global = content.local_to_global() * local;
        let back = content.global_to_local(global);
        assert!((back - local).hypot() < 1e-12);
    }
}
