// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::clamp::EdgeBounds;
use crate::compose::{self, ScaleCandidate};
use crate::config::GestureConfig;
use crate::content::{ContentBox, ContentSpace};
use crate::decomposition::{Decomposed, decompose};
use crate::error::GestureError;
use crate::tracker::{RotationTracker, ScaleTracker, TranslationTracker};

/// One reading from the host's scale/rotate gesture recognizer.
///
/// `scale` and `rotation` are cumulative since the gesture started, as most
/// recognizers report them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Current focal point in global coordinates, if the recognizer has one.
    pub focal_point: Option<Point>,
    /// Cumulative scale factor (`1.0` = unchanged).
    pub scale: f64,
    /// Cumulative rotation in radians (`0.0` = unchanged).
    pub rotation: f64,
}

impl Default for GestureSample {
    fn default() -> Self {
        Self {
            focal_point: None,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl GestureSample {
    /// A sample at `focal_point` with neutral scale and rotation.
    #[must_use]
    pub fn at(focal_point: Point) -> Self {
        Self {
            focal_point: Some(focal_point),
            ..Self::default()
        }
    }

    /// Returns this sample with the given cumulative scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this sample with the given cumulative rotation.
    #[must_use]
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }
}

/// Result of one update: the running matrix and the steps applied to reach it.
///
/// Each delta is the identity when its axis did not change during the update,
/// including a scale step that was discarded by the scale limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixUpdate {
    /// The running content transform after this update.
    pub matrix: Affine,
    /// Translation applied this update.
    pub translation_delta: Affine,
    /// Scale applied this update.
    pub scale_delta: Affine,
    /// Rotation applied this update.
    pub rotation_delta: Affine,
    /// `matrix` decomposed into translation, scale and rotation.
    pub decomposed: Decomposed,
}

impl MatrixUpdate {
    /// Identity matrix with identity deltas.
    pub const IDENTITY: Self = Self {
        matrix: Affine::IDENTITY,
        translation_delta: Affine::IDENTITY,
        scale_delta: Affine::IDENTITY,
        rotation_delta: Affine::IDENTITY,
        decomposed: Decomposed::IDENTITY,
    };
}

/// Completion notification returned by [`GestureSession::end`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEnd {
    /// The running matrix when the gesture ended.
    pub matrix: Affine,
    /// `matrix` decomposed.
    pub decomposed: Decomposed,
}

/// Turns a stream of gesture samples into a running content transform.
///
/// Each [`update`](Self::update) applies, in order and by left multiplication:
/// 1. the focal point movement as a translation, followed by edge clamping;
/// 2. the scale change about the pivot, committed only if the resulting scale
///    stays within the configured limits;
/// 3. the rotation change about the pivot.
///
/// The pivot is the configured [`Alignment`](crate::Alignment) resolved along
/// the content size, or else the focal point mapped into local coordinates
/// through the session's [`ContentSpace`].
///
/// [`start`](Self::start) reseeds the per-axis trackers for a new gesture; the
/// matrix carries over from earlier gestures. [`reset`](Self::reset) returns
/// everything to identity.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use understory_gesture::{GestureConfig, GestureSample, GestureSession};
///
/// let config = GestureConfig::default().with_content_size(Size::new(100.0, 100.0));
/// let mut session = GestureSession::with_content_space(config, Rect::new(0.0, 0.0, 100.0, 100.0));
///
/// session.start_at(Point::new(50.0, 50.0));
/// let update = session
///     .update(&GestureSample::at(Point::new(50.0, 50.0)).with_scale(2.0))
///     .unwrap();
/// assert!((update.decomposed.scale - 2.0).abs() < 1e-12);
/// session.end();
/// ```
#[derive(Clone, Debug)]
pub struct GestureSession<S = ContentBox> {
    config: GestureConfig,
    content: Option<S>,
    matrix: Affine,
    decomposed: Decomposed,
    translation: TranslationTracker,
    scale: ScaleTracker,
    rotation: RotationTracker,
    active: bool,
}

impl<S: ContentSpace> GestureSession<S> {
    /// Creates a session without a content space.
    ///
    /// Such a session can only scale and rotate about a configured alignment.
    /// The handle type still has to be named, e.g.
    /// `GestureSession::<ContentBox>::new(config)`.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            content: None,
            matrix: Affine::IDENTITY,
            decomposed: Decomposed::IDENTITY,
            translation: TranslationTracker::default(),
            scale: ScaleTracker::default(),
            rotation: RotationTracker::default(),
            active: false,
        }
    }

    /// Creates a session that resolves focal points through `content`.
    #[must_use]
    pub fn with_content_space(config: GestureConfig, content: S) -> Self {
        let mut session = Self::new(config);
        session.content = Some(content);
        session
    }

    /// Replaces the content space, e.g. after the host re-laid out the content.
    pub fn set_content_space(&mut self, content: Option<S>) {
        self.content = content;
    }

    /// Returns the content space, if any.
    #[must_use]
    pub fn content_space(&self) -> Option<&S> {
        self.content.as_ref()
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns `true` between [`start`](Self::start) and [`end`](Self::end).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begins a gesture, reseeding all trackers.
    ///
    /// The first focal point of the gesture seeds the translation tracker.
    pub fn start(&mut self) {
        self.reset_trackers();
        self.active = true;
        tracing::debug!("gesture started");
    }

    /// Begins a gesture whose initial focal point is already known.
    pub fn start_at(&mut self, focal_point: Point) {
        self.reset_trackers();
        self.translation.seed(focal_point);
        self.active = true;
        tracing::debug!(x = focal_point.x, y = focal_point.y, "gesture started");
    }

    /// Ends the current gesture. The matrix is kept.
    pub fn end(&mut self) -> GestureEnd {
        self.active = false;
        tracing::debug!(
            scale = self.decomposed.scale,
            rotation = self.decomposed.rotation,
            "gesture ended"
        );
        GestureEnd {
            matrix: self.matrix,
            decomposed: self.decomposed,
        }
    }

    /// Applies one gesture sample.
    ///
    /// Fails without changing any state when a scale or rotation step needs a
    /// pivot that cannot be resolved; see [`GestureError`].
    pub fn update(&mut self, sample: &GestureSample) -> Result<MatrixUpdate, GestureError> {
        let config = self.config;
        // Neutral readings leave their tracker untouched.
        let wants_scale = config.should_scale && sample.scale != 1.0;
        let wants_rotation = config.should_rotate && sample.rotation != 0.0;
        let pivot = if wants_scale || wants_rotation {
            self.resolve_pivot(sample.focal_point)?
        } else {
            Point::ORIGIN
        };

        let mut matrix = self.matrix;

        let mut translation_delta = Affine::IDENTITY;
        if config.should_translate
            && let Some(focal_point) = sample.focal_point
            && let Some(delta) = self.translation.update(focal_point)
        {
            translation_delta = compose::translate(delta);
            matrix = self.clamp_edges(compose::apply(translation_delta, matrix));
        }

        let mut scale_delta = Affine::IDENTITY;
        if wants_scale {
            // The tracker baseline advances even if the step is discarded below.
            let factor = self.scale.update(sample.scale);
            if let Some((m, delta)) = self.scale_step(matrix, factor, pivot) {
                matrix = m;
                scale_delta = delta;
            }
        }

        let mut rotation_delta = Affine::IDENTITY;
        if wants_rotation && let Some(delta) = self.rotation.update(sample.rotation) {
            rotation_delta = compose::rotate_about(delta, pivot);
            matrix = compose::apply(rotation_delta, matrix);
        }

        Ok(self.commit(matrix, translation_delta, scale_delta, rotation_delta))
    }

    /// Returns the running matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Returns the running matrix decomposed.
    #[must_use]
    pub fn decomposed(&self) -> Decomposed {
        self.decomposed
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.decomposed.translation
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.decomposed.scale
    }

    /// Returns the current rotation in radians, in `(-π, π]`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.decomposed.rotation
    }

    /// Scales the content to `scale` about the fallback pivot.
    ///
    /// This runs the scale step of [`update`](Self::update) with the factor
    /// `scale / self.scale()`, so scale limits apply and nothing happens when
    /// scaling is disabled. The gesture trackers are not touched.
    pub fn set_scale(&mut self, scale: f64) -> Result<MatrixUpdate, GestureError> {
        let current = self.decomposed.scale;
        if !self.config.should_scale
            || scale <= 0.0
            || !scale.is_finite()
            || current == 0.0
            || scale == current
        {
            return Ok(self.unchanged());
        }
        let pivot = self.resolve_pivot(None)?;
        let mut matrix = self.matrix;
        let mut scale_delta = Affine::IDENTITY;
        if let Some((m, delta)) = self.scale_step(matrix, scale / current, pivot) {
            matrix = m;
            scale_delta = delta;
        }
        Ok(self.commit(matrix, Affine::IDENTITY, scale_delta, Affine::IDENTITY))
    }

    /// Rotates the content to `radians` about the fallback pivot.
    ///
    /// This runs the rotation step of [`update`](Self::update) with the delta
    /// `radians - self.rotation()`; nothing happens when rotation is disabled.
    pub fn set_rotation(&mut self, radians: f64) -> Result<MatrixUpdate, GestureError> {
        let delta = radians - self.decomposed.rotation;
        if !self.config.should_rotate || delta == 0.0 || !delta.is_finite() {
            return Ok(self.unchanged());
        }
        let pivot = self.resolve_pivot(None)?;
        let rotation_delta = compose::rotate_about(delta, pivot);
        let matrix = compose::apply(rotation_delta, self.matrix);
        Ok(self.commit(matrix, Affine::IDENTITY, Affine::IDENTITY, rotation_delta))
    }

    /// Returns the matrix to identity and reseeds all trackers.
    pub fn reset(&mut self) -> MatrixUpdate {
        self.matrix = Affine::IDENTITY;
        self.decomposed = Decomposed::IDENTITY;
        self.reset_trackers();
        tracing::debug!("gesture transform reset");
        MatrixUpdate::IDENTITY
    }

    /// Content size used for edge clamping and alignment.
    ///
    /// The configured size wins; otherwise the content space's size is used.
    fn content_size(&self) -> Size {
        let configured = self.config.content_size;
        if configured.width > 0.0 && configured.height > 0.0 {
            return configured;
        }
        self.content
            .as_ref()
            .map_or(Size::ZERO, ContentSpace::size)
    }

    fn resolve_pivot(&self, focal_point: Option<Point>) -> Result<Point, GestureError> {
        if let Some(alignment) = self.config.focal_point_alignment {
            return Ok(alignment.along_size(self.content_size()));
        }
        match (focal_point, self.content.as_ref()) {
            (Some(focal_point), Some(content)) => Ok(content.global_to_local(focal_point)),
            (Some(focal_point), None) => Err(GestureError::UnresolvedFocalPoint { focal_point }),
            (None, Some(content)) => Ok(content.size().to_rect().center()),
            (None, None) => Err(GestureError::MissingPivot),
        }
    }

    fn clamp_edges(&self, matrix: Affine) -> Affine {
        let size = self.content_size();
        if size.width <= 0.0 || size.height <= 0.0 {
            return matrix;
        }
        let clamped = EdgeBounds::new(size, self.config.content_padding).clamp(matrix);
        if clamped != matrix {
            let t = clamped.translation();
            tracing::debug!(x = t.x, y = t.y, "translation clamped to content edges");
        }
        clamped
    }

    /// Proposes a scale step and returns `(matrix, delta)` if it stays within limits.
    fn scale_step(&self, matrix: Affine, factor: f64, pivot: Point) -> Option<(Affine, Affine)> {
        let GestureConfig {
            min_scale,
            max_scale,
            ..
        } = self.config;
        let candidate = ScaleCandidate::propose(matrix, factor, pivot);
        match candidate.commit(min_scale, max_scale) {
            Some(m) => Some((m, candidate.delta())),
            None => {
                tracing::debug!(
                    scale = candidate.resulting_scale(),
                    min_scale,
                    max_scale,
                    "discarding scale step outside limits"
                );
                None
            }
        }
    }

    fn commit(
        &mut self,
        matrix: Affine,
        translation_delta: Affine,
        scale_delta: Affine,
        rotation_delta: Affine,
    ) -> MatrixUpdate {
        self.matrix = matrix;
        self.decomposed = decompose(matrix);
        tracing::trace!(
            tx = self.decomposed.translation.x,
            ty = self.decomposed.translation.y,
            scale = self.decomposed.scale,
            rotation = self.decomposed.rotation,
            "gesture transform updated"
        );
        MatrixUpdate {
            matrix,
            translation_delta,
            scale_delta,
            rotation_delta,
            decomposed: self.decomposed,
        }
    }

    fn unchanged(&self) -> MatrixUpdate {
        MatrixUpdate {
            matrix: self.matrix,
            decomposed: self.decomposed,
            ..MatrixUpdate::IDENTITY
        }
    }

    fn reset_trackers(&mut self) {
        self.translation.reset();
        self.scale.reset();
        self.rotation.reset();
    }
}
