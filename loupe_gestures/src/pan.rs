// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::event::{Outcome, PanEvent, Phase, Session};
use crate::state::TransformState;

/// State machine for the pan stream.
///
/// Pan contributes `TransformState::translation` while the image is zoomed
/// in (`scale > 1`); at scale 1 and below the image already fits the
/// viewport width and panning is a pager concern, so pan events mutate
/// nothing but the recorded velocity.
///
/// While more than one pointer is down the pinch stream owns the visual
/// movement. The pan machine freezes `translation` and keeps caching the raw
/// pan vector into its `pan_offset` context, so that when the extra finger
/// lifts, the single-finger continuation `translation = pan - pan_offset`
/// resumes from zero instead of jumping by the two-finger episode's travel.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanGesture {
    session: Session,
    pan_offset: Vec2,
}

impl PanGesture {
    /// Creates an idle pan machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a pan session is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session != Session::Idle
    }

    /// Consumes one pan event, mutating `state`.
    ///
    /// The velocity is recorded on every event regardless of phase, so the
    /// terminal velocity is available to the settle decision even when the
    /// recognizer ends without a final `Active` step.
    pub fn handle(&mut self, state: &mut TransformState, event: &PanEvent) -> Outcome {
        let pan = event.translation;
        state.pan_velocity = event.velocity;

        match event.phase {
            Phase::Began => {
                self.session = Session::Began;
                self.pan_offset = Vec2::ZERO;
                // New input preempts settling.
                Outcome::Interrupt
            }
            Phase::Active => {
                self.session = Session::Active;
                if state.scale > 1.0 {
                    if event.pointer_count > 1 {
                        // Freeze translation; remember where the raw pan was
                        // so a later single-finger continuation lines up.
                        self.pan_offset = pan;
                    } else {
                        state.translation = pan - self.pan_offset;
                    }
                }
                Outcome::Continue
            }
            Phase::Ended | Phase::Cancelled => {
                self.session = Session::Idle;
                self.pan_offset = Vec2::ZERO;
                state.offset += state.translation;
                state.translation = Vec2::ZERO;
                Outcome::Settle
            }
        }
    }
}
