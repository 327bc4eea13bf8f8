// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale ranges for the viewer transform.
//!
//! Two ranges are in play:
//!
//! - The *resting* range from [`MIN_SCALE`] to [`MAX_SCALE`] that a committed
//!   scale settles into once a pinch ends.
//! - The *overshoot* range from [`MIN_SCALE_OVERSHOOT`] to
//!   [`MAX_SCALE_OVERSHOOT`] that a live pinch may transiently occupy, giving
//!   the gesture a rubber-band feel before it springs back.

/// Smallest scale a committed transform settles at.
pub const MIN_SCALE: f64 = 1.0;

/// Largest scale a committed transform settles at.
pub const MAX_SCALE: f64 = 3.0;

/// Hard lower limit for the scale while a pinch is in flight.
pub const MIN_SCALE_OVERSHOOT: f64 = 0.7;

/// Hard upper limit for the scale while a pinch is in flight.
pub const MAX_SCALE_OVERSHOOT: f64 = 3.5;

/// Clamps a live pinch scale into the overshoot range.
#[must_use]
pub fn clamp_overshoot(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE_OVERSHOOT, MAX_SCALE_OVERSHOOT)
}

/// Clamps a committed scale into the resting range.
#[must_use]
pub fn clamp_resting(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
