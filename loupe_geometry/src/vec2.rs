// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component-wise [`Vec2`] helpers.
//!
//! Kurbo already supplies addition, subtraction, negation, and scalar
//! multiplication/division on [`Vec2`]; this module adds the component-wise
//! operations the transform engine needs on top of those. All comparisons
//! are exact (no epsilon).

use kurbo::Vec2;

/// Clamps each component of `v` into the corresponding `[min, max]` range.
///
/// ```
/// use kurbo::Vec2;
/// use loupe_geometry::vec2::clamp;
///
/// let min = Vec2::new(-100.0, 0.0);
/// let max = Vec2::new(100.0, 0.0);
/// assert_eq!(clamp(Vec2::new(130.0, -5.0), min, max), Vec2::new(100.0, 0.0));
/// ```
#[must_use]
pub fn clamp(v: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(v.x.clamp(min.x, max.x), v.y.clamp(min.y, max.y))
}

/// Multiplies two vectors component-wise.
#[must_use]
pub fn mul(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

/// Returns `true` iff both components of `v` equal `value` exactly.
///
/// Used for rest/neutrality checks, where offsets are written back as exact
/// zeros rather than approached asymptotically.
#[must_use]
pub fn eq_scalar(v: Vec2, value: f64) -> bool {
    v.x == value && v.y == value
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{clamp, eq_scalar, mul};

    #[test]
    fn clamp_is_component_wise() {
        let min = Vec2::new(-10.0, -20.0);
        let max = Vec2::new(10.0, 20.0);

        assert_eq!(clamp(Vec2::new(5.0, -30.0), min, max), Vec2::new(5.0, -20.0));
        assert_eq!(clamp(Vec2::new(15.0, 25.0), min, max), Vec2::new(10.0, 20.0));
        assert_eq!(clamp(Vec2::new(0.0, 0.0), min, max), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn clamp_with_degenerate_range_pins_to_bound() {
        let bounds = Vec2::new(0.0, 0.0);
        assert_eq!(clamp(Vec2::new(3.0, -4.0), bounds, bounds), Vec2::ZERO);
    }

    #[test]
    fn mul_is_component_wise() {
        let a = Vec2::new(2.0, -3.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(mul(a, b), Vec2::new(8.0, -15.0));
    }

    #[test]
    fn eq_scalar_requires_both_components() {
        assert!(eq_scalar(Vec2::ZERO, 0.0));
        assert!(eq_scalar(Vec2::new(2.0, 2.0), 2.0));
        assert!(!eq_scalar(Vec2::new(0.0, 0.1), 0.0));
        assert!(!eq_scalar(Vec2::new(0.1, 0.0), 0.0));
    }
}
