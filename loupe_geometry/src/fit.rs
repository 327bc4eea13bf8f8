// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Computes the rendered size of a source image fitted to the viewport width.
///
/// The image is scaled so that its width exactly spans the viewport while
/// preserving aspect ratio: `height = source.height * (viewport.width /
/// source.width)`. The rendered height may be shorter or taller than the
/// viewport; vertical slack is handled by
/// [`translation_bounds`](crate::translation_bounds).
///
/// The caller guarantees a positive `source.width`; this function does not
/// validate its inputs.
///
/// ```
/// use kurbo::Size;
/// use loupe_geometry::rendered_size;
///
/// let viewport = Size::new(400.0, 800.0);
/// let rendered = rendered_size(Size::new(1000.0, 1500.0), viewport);
/// assert_eq!(rendered, Size::new(400.0, 600.0));
/// ```
#[must_use]
pub fn rendered_size(source: Size, viewport: Size) -> Size {
    let ratio = viewport.width / source.width;
    Size::new(viewport.width, source.height * ratio)
}
