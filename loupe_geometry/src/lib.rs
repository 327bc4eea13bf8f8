// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Geometry: headless geometry primitives for an image-viewer transform engine.
//!
//! This crate provides the pure math underneath Loupe's pan/pinch transform:
//! - Component-wise [`Vec2`](kurbo::Vec2) helpers that Kurbo does not supply
//!   ([`vec2`]).
//! - Fit-to-viewport-width sizing of a source image ([`rendered_size`]).
//! - The legal pan range at a given zoom level ([`translation_bounds`]).
//! - The resting and mid-gesture scale ranges ([`scale`]).
//!
//! It does **not** own any gesture or animation state. Callers are expected
//! to:
//! - Track their own transform state and feed the current scale in.
//! - Clamp committed pan offsets into the returned [`TranslationBounds`].
//! - Drive settling animations toward the clamped values at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use loupe_geometry::{rendered_size, translation_bounds};
//!
//! // A 4:3 source photo displayed on a 400x800 viewport.
//! let viewport = Size::new(400.0, 800.0);
//! let image = rendered_size(Size::new(800.0, 600.0), viewport);
//! assert_eq!(image, Size::new(400.0, 300.0));
//!
//! // At 2x zoom the image may pan 200px left/right of center.
//! let bounds = translation_bounds(2.0, image, viewport);
//! assert_eq!(bounds.max.x, 200.0);
//! assert_eq!(bounds.min, -bounds.max);
//!
//! // A fling that overshoots is pulled back onto the legal range.
//! let clamped = bounds.clamp(Vec2::new(350.0, -10.0));
//! assert_eq!(clamped, Vec2::new(200.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - The rendered image always spans the full viewport width at scale 1, so
//!   the horizontal pan range is purely a function of the overscale amount.
//! - The vertical pan range collapses to zero whenever the scaled image is
//!   shorter than the viewport (the image centers with no slack).
//! - All math is exact `f64`; no epsilons are applied here.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod fit;
pub mod scale;
pub mod vec2;

pub use bounds::{TranslationBounds, translation_bounds};
pub use fit::rendered_size;
