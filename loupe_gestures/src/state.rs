// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// The shared transform state, mutated by the gesture machines and read by
/// the per-frame evaluator.
///
/// The rendered transform is always
/// `translate(scale_translation + translation + offset) * scale(scale)`.
/// The two transient translations are additive by construction, so a
/// simultaneous two-finger pan+pinch composes without special cases; in
/// practice at most one is non-zero at a time.
///
/// Field ownership at any instant:
/// - `translation`, `pan_velocity`: written by the pan machine.
/// - `scale`, `scale_translation`, `scale_offset`: written by the pinch
///   machine (the settle path may also spring `scale` back into range).
/// - `offset`: written only in terminal phases and by the settle animations.
///
/// Lifetime is one viewer instance; there is no cross-session persistence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Current uniform scale.
    pub scale: f64,
    /// Scale committed by the previous pinch session; seed for the next
    /// pinch's multiplicative composition.
    pub scale_offset: f64,
    /// Settled translation (committed at gesture end, animated by settling).
    pub offset: Vec2,
    /// Transient translation contributed by an in-progress pan.
    pub translation: Vec2,
    /// Transient translation contributed by an in-progress pinch, keeping
    /// the focal point visually stationary while the scale changes.
    pub scale_translation: Vec2,
    /// Last observed pan velocity, seeding post-gesture deceleration.
    pub pan_velocity: Vec2,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            scale_offset: 1.0,
            offset: Vec2::ZERO,
            translation: Vec2::ZERO,
            scale_translation: Vec2::ZERO,
            pan_velocity: Vec2::ZERO,
        }
    }
}

impl TransformState {
    /// Sum of all translation contributions, the `translate` part of the
    /// rendered transform.
    #[must_use]
    pub fn total_translation(&self) -> Vec2 {
        self.scale_translation + self.translation + self.offset
    }

    /// Returns `true` iff the view is unzoomed and ungestured: scale exactly
    /// 1 and every translation contribution exactly zero.
    ///
    /// This is the neutrality signal handed to an external pager; it uses
    /// exact equality, so any single non-zero component flips it.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.scale == 1.0
            && self.offset == Vec2::ZERO
            && self.translation == Vec2::ZERO
            && self.scale_translation == Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::TransformState;

    #[test]
    fn default_state_is_neutral() {
        let state = TransformState::default();
        assert!(state.is_neutral());
        assert_eq!(state.total_translation(), Vec2::ZERO);
        assert_eq!(state.scale_offset, 1.0);
    }

    #[test]
    fn any_single_component_breaks_neutrality() {
        let neutral = TransformState::default();

        let mut s = neutral;
        s.scale = 1.01;
        assert!(!s.is_neutral());

        let mut s = neutral;
        s.offset = Vec2::new(0.0, 0.1);
        assert!(!s.is_neutral());

        let mut s = neutral;
        s.translation = Vec2::new(0.1, 0.0);
        assert!(!s.is_neutral());

        let mut s = neutral;
        s.scale_translation = Vec2::new(0.1, 0.0);
        assert!(!s.is_neutral());

        // Velocity alone does not affect neutrality.
        let mut s = neutral;
        s.pan_velocity = Vec2::new(500.0, 0.0);
        assert!(s.is_neutral());
    }

    #[test]
    fn translation_contributions_are_additive() {
        let state = TransformState {
            offset: Vec2::new(10.0, 0.0),
            translation: Vec2::new(5.0, -2.0),
            scale_translation: Vec2::new(-1.0, 1.0),
            ..TransformState::default()
        };
        assert_eq!(state.total_translation(), Vec2::new(14.0, -1.0));
    }
}
