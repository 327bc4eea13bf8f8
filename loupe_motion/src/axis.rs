// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::decay::Decay;
use crate::spring::Spring;

/// Whatever is currently settling one scalar axis.
///
/// The viewer picks spring or decay per axis at gesture end; holding the
/// choice in one slot lets the owner tick and cancel either uniformly.
/// Cancellation is simply dropping the value (for example
/// `Option::<AxisAnimation>::take`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisAnimation {
    /// Spring toward a fixed target.
    Spring(Spring),
    /// Velocity decay, optionally clamped.
    Decay(Decay),
}

impl AxisAnimation {
    /// Advances the animation by `dt` seconds and returns the new value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        match self {
            Self::Spring(spring) => spring.tick(dt),
            Self::Decay(decay) => decay.tick(dt),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Spring(spring) => spring.value(),
            Self::Decay(decay) => decay.value(),
        }
    }

    /// Returns `true` once the animation has come to rest.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match self {
            Self::Spring(spring) => spring.is_finished(),
            Self::Decay(decay) => decay.is_finished(),
        }
    }
}

impl From<Spring> for AxisAnimation {
    fn from(spring: Spring) -> Self {
        Self::Spring(spring)
    }
}

impl From<Decay> for AxisAnimation {
    fn from(decay: Decay) -> Self {
        Self::Decay(decay)
    }
}

#[cfg(test)]
mod tests {
    use super::AxisAnimation;
    use crate::decay::Decay;
    use crate::spring::Spring;

    #[test]
    fn dispatches_to_the_wrapped_animation() {
        let mut spring = AxisAnimation::from(Spring::new(10.0, 0.0));
        let mut decay = AxisAnimation::from(Decay::new(0.0, 500.0));

        let dt = 1.0 / 60.0;
        assert!(spring.tick(dt) < 10.0, "spring must move toward its target");
        assert!(decay.tick(dt) > 0.0, "decay must move along its velocity");
        assert_eq!(spring.value(), spring.tick(0.0));
    }

    #[test]
    fn cancellation_by_drop_is_idempotent() {
        let mut slot = Some(AxisAnimation::from(Spring::new(10.0, 0.0)));
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
        assert!(slot.take().is_none());
    }
}
