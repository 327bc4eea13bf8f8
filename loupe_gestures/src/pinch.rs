// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use loupe_geometry::scale::{
    MAX_SCALE_OVERSHOOT, MIN_SCALE_OVERSHOOT, clamp_overshoot, clamp_resting,
};

use crate::event::{Outcome, Phase, PinchEvent, Session};
use crate::state::TransformState;

/// State machine for the pinch stream.
///
/// Scaling composes multiplicatively across sessions: the raw recognizer
/// scale is multiplied by the `scale_offset` committed by the previous pinch,
/// then clamped into the overshoot range. The point under the fingers stays
/// visually stationary via the focal-preserving translation
/// `scale_translation = adjust_focal - gesture_scale * origin`, where
/// `origin` is the focal point at gesture start expressed relative to the
/// image's current visual center.
///
/// Once the clamped scale pins against a hard limit, the multiplier freezes
/// at its last in-range value so further finger travel stops feeding the
/// focal translation; without this, the translation would keep drifting
/// while the scale cannot follow.
#[derive(Clone, Copy, Debug)]
pub struct PinchGesture {
    viewport_center: Vec2,
    session: Session,
    origin: Vec2,
    gesture_scale: f64,
}

impl PinchGesture {
    /// Creates an idle pinch machine for a viewport centered at
    /// `viewport_center` (in viewport coordinates).
    #[must_use]
    pub fn new(viewport_center: Vec2) -> Self {
        Self {
            viewport_center,
            session: Session::Idle,
            origin: Vec2::ZERO,
            gesture_scale: 1.0,
        }
    }

    /// Returns `true` while a pinch session is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session != Session::Idle
    }

    /// Consumes one pinch event, mutating `state`.
    pub fn handle(&mut self, state: &mut TransformState, event: &PinchEvent) -> Outcome {
        let next_scale = clamp_overshoot(event.scale * state.scale_offset);
        if next_scale > MIN_SCALE_OVERSHOOT && next_scale < MAX_SCALE_OVERSHOOT {
            self.gesture_scale = event.scale;
        }
        let adjust_focal = event.focal.to_vec2() - (self.viewport_center + state.offset);

        match event.phase {
            Phase::Began => {
                self.session = Session::Began;
                self.origin = adjust_focal;
                state.scale = next_scale;
                Outcome::Continue
            }
            Phase::Active => {
                self.session = Session::Active;
                let pinch_delta = adjust_focal - self.origin;
                state.scale_translation =
                    pinch_delta + self.origin - self.gesture_scale * self.origin;
                state.scale = next_scale;
                Outcome::Continue
            }
            Phase::Ended | Phase::Cancelled => {
                self.session = Session::Idle;
                self.origin = Vec2::ZERO;
                self.gesture_scale = 1.0;

                state.scale_offset = state.scale;
                state.offset += state.scale_translation;
                state.scale_translation = Vec2::ZERO;

                // A pinch may transiently rest outside [1, 3]; the committed
                // scale rubber-bands back in.
                let resting = clamp_resting(state.scale_offset);
                if resting == state.scale_offset {
                    Outcome::Settle
                } else {
                    state.scale_offset = resting;
                    Outcome::SettleWithScale(resting)
                }
            }
        }
    }
}
