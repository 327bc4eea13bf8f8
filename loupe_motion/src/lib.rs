// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Motion: settling trajectories for scalar axes.
//!
//! This crate produces the two kinds of post-gesture motion the viewer uses,
//! one value per axis:
//!
//! - [`Spring`]: a damped-harmonic spring toward a fixed target, with
//!   overshoot clamping and rest thresholds. Used to pull an offset back onto
//!   its legal range, or a scale back into its resting range.
//! - [`Decay`]: exponential velocity decay, optionally clamped to a range.
//!   Used for fling-to-edge motion when the offset is still inside bounds and
//!   residual velocity remains.
//!
//! [`AxisAnimation`] wraps either so callers can hold "whatever is settling
//! this axis" in one slot.
//!
//! The crate is host-agnostic: nothing here owns a clock or schedules work.
//! The embedder calls [`AxisAnimation::tick`] with the elapsed seconds on its
//! own frame cadence, writes the returned value into its state, and drops the
//! animation when [`AxisAnimation::is_finished`] reports `true`. Dropping an
//! animation early *is* the cancellation contract: it is immediate, cheap,
//! and trivially idempotent.
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_motion::{AxisAnimation, Spring};
//!
//! let mut anim = AxisAnimation::from(Spring::new(250.0, 200.0));
//! let mut value = 250.0;
//! while !anim.is_finished() {
//!     value = anim.tick(1.0 / 60.0);
//! }
//! // Rest thresholds snap the final value exactly onto the target.
//! assert_eq!(value, 200.0);
//! ```
//!
//! Both animations advance by closed-form solutions, so results depend only
//! on total elapsed time, not on tick granularity. This also keeps the
//! heavily overdamped default spring stable at any frame rate.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("loupe_motion requires either the `std` or `libm` feature");

mod axis;
mod decay;
mod float;
mod spring;

pub use axis::AxisAnimation;
pub use decay::{Decay, DecayConfig};
pub use spring::{Spring, SpringConfig};
