// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Viewer: the image-viewer transform engine.
//!
//! This crate fuses three concurrently recognized gesture streams (pan,
//! pinch, tap) into one translate+uniform-scale view transform over a
//! displayed image, with boundary clamping, fling decay, and spring
//! settling. It is the orchestration layer over the rest of the workspace:
//! `loupe_gestures` runs the per-stream state machines, `loupe_geometry`
//! supplies the legal pan range, and `loupe_motion` produces the settling
//! trajectories.
//!
//! It does **not** load, decode, or draw images, and it owns no event loop.
//! Embedders are expected to:
//! - Classify raw touches into phase-tagged pan/pinch/tap events (for
//!   example with a platform gesture-recognition layer) and feed them in.
//! - Call [`Viewer::frame`] at display refresh cadence and hand the returned
//!   [`ViewTransform`] to their renderer.
//! - Forward the per-frame neutrality signal to a sibling pager if one
//!   exists.
//!
//! Everything runs synchronously with no I/O or blocking work, so both the
//! event entry points and the frame evaluator are safe to call from an
//! animation-priority context.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_viewer::{Phase, PinchEvent, Viewer, ViewerConfig};
//!
//! let mut viewer = Viewer::new(ViewerConfig::new(
//!     "asset://photo.jpg",
//!     Size::new(800.0, 600.0),   // source image, pixels
//!     Size::new(400.0, 800.0),   // device viewport, pixels
//! ));
//!
//! // Pinch to 2x around the viewport center.
//! let focal = Point::new(200.0, 400.0);
//! viewer.on_pinch(&PinchEvent { phase: Phase::Began, scale: 1.0, focal });
//! viewer.on_pinch(&PinchEvent { phase: Phase::Active, scale: 2.0, focal });
//! viewer.on_pinch(&PinchEvent { phase: Phase::Ended, scale: 2.0, focal });
//!
//! let out = viewer.frame(1.0 / 60.0);
//! assert_eq!(out.transform.scale, 2.0);
//! assert!(!out.is_neutral);
//! ```
//!
//! ## Settling
//!
//! When the last finger lifts, the viewer decides per axis how the committed
//! offset comes to rest: a spring pulls an out-of-bounds value back onto the
//! legal range (or everything back to center when the scale is at or below
//! 1), while a fling that is still inside bounds decays along its residual
//! velocity until it dies out or lands on a boundary. Starting a new gesture
//! cancels in-flight settling immediately.

mod config;
mod viewer;

pub use config::{GestureSet, ViewerConfig};
pub use viewer::{FrameOutput, ViewTransform, Viewer, ViewerDebugInfo};

// The event vocabulary embedders speak is re-exported so typical users only
// depend on this crate.
pub use loupe_gestures::{PanEvent, Phase, PinchEvent, TapEvent, TransformState};
