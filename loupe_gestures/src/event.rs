// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Recognizer phase attached to every gesture event.
///
/// Each stream's events are strictly ordered among themselves:
/// `Began → Active* → Ended | Cancelled`. Streams interleave arbitrarily.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The recognizer committed to this gesture.
    Began,
    /// The gesture is in flight; zero or more of these.
    Active,
    /// The gesture completed normally.
    Ended,
    /// The recognizer gave up on the gesture (for example, a sibling won).
    Cancelled,
}

impl Phase {
    /// Returns `true` for the phases that end a gesture session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One event from the pan recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    /// Recognizer phase.
    pub phase: Phase,
    /// Number of pointers currently down.
    pub pointer_count: u32,
    /// Raw translation since the gesture began, in viewport pixels.
    pub translation: Vec2,
    /// Current pointer velocity in pixels/second.
    pub velocity: Vec2,
}

/// One event from the pinch recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    /// Recognizer phase.
    pub phase: Phase,
    /// Raw scale multiplier since the gesture began.
    pub scale: f64,
    /// Focal point between the pointers, in viewport coordinates.
    pub focal: Point,
}

/// One event from the tap recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapEvent {
    /// Recognizer phase.
    pub phase: Phase,
}

/// What the orchestrator should do after a machine consumed an event.
///
/// Machines mutate the shared [`TransformState`](crate::TransformState)
/// directly but never reach into animations or sibling streams; those
/// decisions are reported upward through this enum, in the same spirit as a
/// responder chain handler returning a propagation outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing to do beyond the state mutation already applied.
    Continue,
    /// A new gesture took over; cancel any in-flight offset settling.
    Interrupt,
    /// The gesture ended; run the settle decision.
    Settle,
    /// The pinch ended outside the resting scale range; spring the scale to
    /// the given target, then run the settle decision.
    SettleWithScale(f64),
}

/// Gesture-session progress tracked by each machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Session {
    /// No gesture in flight.
    #[default]
    Idle,
    /// `Began` seen, no `Active` yet.
    Began,
    /// At least one `Active` seen.
    Active,
}
