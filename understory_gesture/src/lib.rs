// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: multi-touch pan/scale/rotate composed into a 2D transform.
//!
//! This crate turns the stream of samples produced by a scale/rotate gesture
//! recognizer (focal point, cumulative scale, cumulative rotation) into a
//! single running content transform, plus the per-update delta matrices that
//! produced it. It focuses on:
//! - Per-axis delta tracking ([`tracker`]).
//! - Elementary similarity matrices and their composition order ([`compose`]).
//! - Scale limits and edge clamping of the translation ([`EdgeBounds`]).
//! - Decomposition of the result into translation, scale and rotation ([`decompose`]).
//!
//! It does **not** recognize gestures, render, clip, or hit test. Callers are
//! expected to:
//! - Feed recognizer output into a [`GestureSession`] as [`GestureSample`]s.
//! - Provide a [`ContentSpace`] so global focal points can be mapped into the
//!   content's local coordinates.
//! - Apply the resulting [`MatrixUpdate::matrix`] to their content, for
//!   example with [`to_mat4`] for toolkits that take a 4×4 matrix.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_gesture::{GestureConfig, GestureSample, GestureSession};
//!
//! let content = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let config = GestureConfig::default().with_content_size(content.size());
//! let mut session = GestureSession::with_content_space(config, content);
//!
//! session.start();
//! for (i, scale) in [1.0, 1.5, 2.0].into_iter().enumerate() {
//!     let focal = Point::new(200.0 - 10.0 * i as f64, 150.0);
//!     let update = session
//!         .update(&GestureSample::at(focal).with_scale(scale))
//!         .unwrap();
//!     // Hosts apply `update.matrix` and may inspect the deltas.
//!     let _ = update.scale_delta;
//! }
//! session.end();
//!
//! assert!((session.scale() - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Every elementary matrix is a similarity transform, so the running matrix
//!   never picks up shear and [`decompose`] recovers it exactly.
//! - Deltas are left-multiplied in a fixed order: translation, scale, rotation.
//! - A scale step is computed as a candidate and only committed when its
//!   result lies within the configured limits. The scale tracker has already
//!   moved on to the new raw reading, so the gesture resumes from there.
//! - The first rotation reading of a gesture only seeds the rotation tracker.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
pub mod compose;
mod config;
mod content;
mod decomposition;
mod error;
mod mat4;
mod session;
pub mod tracker;

pub use clamp::EdgeBounds;
pub use config::{Alignment, GestureConfig};
pub use content::{ContentBox, ContentSpace};
pub use decomposition::{Decomposed, decompose, normalize_angle};
pub use error::GestureError;
pub use mat4::{from_mat4, to_mat4};
pub use session::{GestureEnd, GestureSample, GestureSession, MatrixUpdate};
