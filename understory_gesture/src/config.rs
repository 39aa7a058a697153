// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// A point within a rectangle, in fractional coordinates.
///
/// `(-1, -1)` is the top-left corner, `(0, 0)` the center and `(1, 1)` the
/// bottom-right corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alignment {
    /// Horizontal position, `-1.0` (left) to `1.0` (right).
    pub x: f64,
    /// Vertical position, `-1.0` (top) to `1.0` (bottom).
    pub y: f64,
}

impl Alignment {
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self::new(-1.0, -1.0);
    /// Center of the top edge.
    pub const TOP_CENTER: Self = Self::new(0.0, -1.0);
    /// Top-right corner.
    pub const TOP_RIGHT: Self = Self::new(1.0, -1.0);
    /// Center of the left edge.
    pub const CENTER_LEFT: Self = Self::new(-1.0, 0.0);
    /// Center.
    pub const CENTER: Self = Self::new(0.0, 0.0);
    /// Center of the right edge.
    pub const CENTER_RIGHT: Self = Self::new(1.0, 0.0);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self::new(-1.0, 1.0);
    /// Center of the bottom edge.
    pub const BOTTOM_CENTER: Self = Self::new(0.0, 1.0);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    /// Creates an alignment from fractional coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Resolves this alignment to a point inside a box of `size` at the origin.
    #[must_use]
    pub fn along_size(self, size: Size) -> Point {
        Point::new(
            (self.x + 1.0) * 0.5 * size.width,
            (self.y + 1.0) * 0.5 * size.height,
        )
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Configuration of a [`GestureSession`](crate::GestureSession).
///
/// All fields are public; the `with_*` methods allow building a configuration
/// fluently from [`GestureConfig::default`]:
///
/// ```
/// use kurbo::Size;
/// use understory_gesture::{Alignment, GestureConfig};
///
/// let config = GestureConfig::default()
///     .with_rotate(false)
///     .with_scale_limits(0.5, 4.0)
///     .with_content_size(Size::new(320.0, 240.0))
///     .with_focal_point_alignment(Some(Alignment::CENTER));
/// assert!(!config.should_rotate);
/// assert_eq!(config.min_scale, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Apply focal point movement as translation.
    pub should_translate: bool,
    /// Apply the gesture scale factor.
    pub should_scale: bool,
    /// Apply the gesture rotation.
    pub should_rotate: bool,
    /// Whether the host should clip the transformed content to its box.
    ///
    /// This is carried for the host's renderer and has no effect on the
    /// transform itself.
    pub clip_content: bool,
    /// Fixed pivot for scale and rotation, overriding the gesture focal point.
    pub focal_point_alignment: Option<Alignment>,
    /// Smallest committed scale.
    pub min_scale: f64,
    /// Largest committed scale.
    pub max_scale: f64,
    /// Unscaled content size used for edge clamping and alignment.
    pub content_size: Size,
    /// Slack allowed beyond the content edges when clamping translation.
    pub content_padding: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            should_translate: true,
            should_scale: true,
            should_rotate: true,
            clip_content: true,
            focal_point_alignment: None,
            min_scale: 0.2,
            max_scale: 5.0,
            content_size: Size::ZERO,
            content_padding: 0.0,
        }
    }
}

impl GestureConfig {
    /// Enables or disables translation.
    #[must_use]
    pub fn with_translate(mut self, enabled: bool) -> Self {
        self.should_translate = enabled;
        self
    }

    /// Enables or disables scaling.
    #[must_use]
    pub fn with_scale(mut self, enabled: bool) -> Self {
        self.should_scale = enabled;
        self
    }

    /// Enables or disables rotation.
    #[must_use]
    pub fn with_rotate(mut self, enabled: bool) -> Self {
        self.should_rotate = enabled;
        self
    }

    /// Sets the clipping hint.
    #[must_use]
    pub fn with_clip_content(mut self, clip: bool) -> Self {
        self.clip_content = clip;
        self
    }

    /// Sets a fixed pivot for scale and rotation.
    #[must_use]
    pub fn with_focal_point_alignment(mut self, alignment: Option<Alignment>) -> Self {
        self.focal_point_alignment = alignment;
        self
    }

    /// Sets the scale limits.
    ///
    /// The pair is normalized so that `min_scale <= max_scale`.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the unscaled content size.
    #[must_use]
    pub fn with_content_size(mut self, size: Size) -> Self {
        self.content_size = size;
        self
    }

    /// Sets the edge clamping slack.
    #[must_use]
    pub fn with_content_padding(mut self, padding: f64) -> Self {
        self.content_padding = padding;
        self
    }
}
