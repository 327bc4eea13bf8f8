// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::{Outcome, Phase, Session, TapEvent};

/// State machine for the tap stream.
///
/// A tap never moves the transform. Its press interrupts any in-flight
/// settling (so a follow-up gesture, such as a double-tap zoom extension,
/// starts from a frozen view), and its release re-runs the settle decision
/// so an interrupted animation resumes toward a legal resting position.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapGesture {
    session: Session,
}

impl TapGesture {
    /// Creates an idle tap machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between press and release.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session != Session::Idle
    }

    /// Consumes one tap event.
    pub fn handle(&mut self, event: &TapEvent) -> Outcome {
        match event.phase {
            Phase::Began => {
                self.session = Session::Began;
                Outcome::Interrupt
            }
            Phase::Active => {
                self.session = Session::Active;
                Outcome::Continue
            }
            Phase::Ended | Phase::Cancelled => {
                self.session = Session::Idle;
                Outcome::Settle
            }
        }
    }
}
