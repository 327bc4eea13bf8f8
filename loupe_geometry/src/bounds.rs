// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::scale::{MAX_SCALE, MIN_SCALE_OVERSHOOT};
use crate::vec2;

/// Legal pan range for a committed offset, symmetric around the center.
///
/// An offset is legal iff it lies within `[min, max]` component-wise.
/// `min` is always the negation of `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslationBounds {
    /// Most negative legal offset.
    pub min: Vec2,
    /// Most positive legal offset.
    pub max: Vec2,
}

impl TranslationBounds {
    /// Clamps `offset` into the legal range component-wise.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        vec2::clamp(offset, self.min, self.max)
    }

    /// Returns `true` iff `offset` lies within the legal range.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        self.clamp(offset) == offset
    }
}

/// Computes the legal pan range at `scale` for an image fitted to the viewport.
///
/// The rendered image spans the full viewport width at scale 1, so the
/// horizontal range is purely a function of the overscale amount:
/// `viewport.width / 2 * (scale - 1)`. The vertical range is the scaled
/// image's overhang past the viewport, or zero when the scaled image is
/// shorter than the viewport (a short image stays vertically centered).
///
/// `scale` is clamped into `[0.7, 3.0]` before use; callers may pass a live
/// mid-gesture scale without pre-clamping it.
///
/// ```
/// use kurbo::Size;
/// use loupe_geometry::translation_bounds;
///
/// let viewport = Size::new(400.0, 800.0);
/// let image = Size::new(400.0, 600.0);
///
/// // Below 4/3 zoom the scaled image is still shorter than the viewport.
/// let bounds = translation_bounds(1.2, image, viewport);
/// assert_eq!(bounds.max.y, 0.0);
///
/// let bounds = translation_bounds(2.0, image, viewport);
/// assert_eq!(bounds.max.x, 200.0);
/// assert_eq!(bounds.max.y, 200.0);
/// ```
#[must_use]
pub fn translation_bounds(scale: f64, image: Size, viewport: Size) -> TranslationBounds {
    let scale = scale.clamp(MIN_SCALE_OVERSHOOT, MAX_SCALE);
    let scaled_height = image.height * scale;
    let right = viewport.width / 2.0 * (scale - 1.0);
    let top = if scaled_height > viewport.height {
        (scaled_height - viewport.height) / 2.0
    } else {
        0.0
    };
    let max = Vec2::new(right.max(0.0), top);
    TranslationBounds { min: -max, max }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::translation_bounds;

    const VIEWPORT: Size = Size::new(400.0, 800.0);
    const IMAGE: Size = Size::new(400.0, 600.0);

    #[test]
    fn bounds_are_symmetric_and_non_negative() {
        for scale in [0.7, 1.0, 1.5, 2.0, 3.0] {
            let b = translation_bounds(scale, IMAGE, VIEWPORT);
            assert_eq!(b.min, -b.max, "bounds must mirror around zero");
            assert!(b.max.x >= 0.0, "horizontal bound must be non-negative");
            assert!(b.max.y >= 0.0, "vertical bound must be non-negative");
        }
    }

    #[test]
    fn no_horizontal_slack_at_or_below_scale_one() {
        for scale in [0.7, 0.9, 1.0] {
            let b = translation_bounds(scale, IMAGE, VIEWPORT);
            assert_eq!(b.max.x, 0.0);
        }
    }

    #[test]
    fn horizontal_bound_grows_strictly_with_scale() {
        let mut previous = translation_bounds(1.0, IMAGE, VIEWPORT).max.x;
        for scale in [1.25, 1.5, 2.0, 2.5, 3.0] {
            let current = translation_bounds(scale, IMAGE, VIEWPORT).max.x;
            assert!(current > previous, "bound must grow with scale");
            previous = current;
        }
    }

    #[test]
    fn vertical_bound_is_zero_until_scaled_image_overflows() {
        // 600 * s > 800 only once s > 4/3.
        assert_eq!(translation_bounds(1.0, IMAGE, VIEWPORT).max.y, 0.0);
        assert_eq!(translation_bounds(4.0 / 3.0, IMAGE, VIEWPORT).max.y, 0.0);

        let b = translation_bounds(1.5, IMAGE, VIEWPORT);
        assert_eq!(b.max.y, (600.0 * 1.5 - 800.0) / 2.0);
    }

    #[test]
    fn scale_input_is_clamped_to_resting_max() {
        let at_max = translation_bounds(3.0, IMAGE, VIEWPORT);
        let beyond = translation_bounds(3.5, IMAGE, VIEWPORT);
        assert_eq!(at_max, beyond);
    }

    #[test]
    fn clamp_and_contains_agree() {
        let b = translation_bounds(2.0, IMAGE, VIEWPORT);
        assert!(b.contains(Vec2::ZERO));
        assert!(b.contains(b.max));
        assert!(!b.contains(b.max + Vec2::new(1.0, 0.0)));

        let clamped = b.clamp(Vec2::new(1000.0, -1000.0));
        assert_eq!(clamped, Vec2::new(b.max.x, b.min.y));
    }
}
