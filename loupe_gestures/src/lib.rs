// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gestures: per-stream state machines over one shared transform.
//!
//! Three independently recognized gesture streams drive the image viewer:
//! pan, pinch, and tap. Each stream delivers ordered, phase-tagged events
//! ([`Phase`]), and each has its own small state machine here:
//!
//! - [`PanGesture`]: one-finger translation while zoomed in, with a
//!   multi-pointer freeze so a second finger joining and leaving mid-pan
//!   never causes a jump.
//! - [`PinchGesture`]: focal-preserving zoom with rubber-band overshoot
//!   beyond the resting scale range.
//! - [`TapGesture`]: interrupts settling on press, re-triggers the settle
//!   decision on release.
//!
//! All three mutate one shared [`TransformState`], borrowed per event. Each
//! transient field has exactly one writing machine (`translation` for pan,
//! `scale`/`scale_translation` for pinch); the committed `offset` is only
//! written in terminal phases. Per-gesture context (the pan freeze cache,
//! the pinch origin and multiplier) lives inside the machine and is reset at
//! every terminal phase, so nothing leaks between gesture sessions.
//!
//! Machines never call upward. Each handler returns an [`Outcome`] telling
//! the orchestrator what the event implies: keep going, cancel in-flight
//! settling, or run the settle decision.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use loupe_gestures::{Outcome, PanEvent, PanGesture, Phase, TransformState};
//!
//! let mut state = TransformState::default();
//! state.scale = 2.0; // panning only moves a zoomed-in image
//! let mut pan = PanGesture::default();
//!
//! pan.handle(&mut state, &PanEvent {
//!     phase: Phase::Began,
//!     pointer_count: 1,
//!     translation: Vec2::ZERO,
//!     velocity: Vec2::ZERO,
//! });
//! pan.handle(&mut state, &PanEvent {
//!     phase: Phase::Active,
//!     pointer_count: 1,
//!     translation: Vec2::new(50.0, 0.0),
//!     velocity: Vec2::new(400.0, 0.0),
//! });
//! assert_eq!(state.translation, Vec2::new(50.0, 0.0));
//!
//! let outcome = pan.handle(&mut state, &PanEvent {
//!     phase: Phase::Ended,
//!     pointer_count: 0,
//!     translation: Vec2::new(50.0, 0.0),
//!     velocity: Vec2::new(400.0, 0.0),
//! });
//! assert_eq!(outcome, Outcome::Settle);
//! assert_eq!(state.offset, Vec2::new(50.0, 0.0));
//! assert_eq!(state.translation, Vec2::ZERO);
//! ```
//!
//! The machines are defensive about phase order: an `Active` event without a
//! preceding `Began` runs against zero-initialized context instead of
//! failing, per the engine's no-error-surface policy.
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod pan;
mod pinch;
mod state;
mod tap;

pub use event::{Outcome, PanEvent, Phase, PinchEvent, TapEvent};
pub use pan::PanGesture;
pub use pinch::PinchGesture;
pub use state::TransformState;
pub use tap::TapGesture;
