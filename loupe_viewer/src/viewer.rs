// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Size, Vec2};

use loupe_geometry::scale::MAX_SCALE;
use loupe_geometry::{rendered_size, translation_bounds};
use loupe_gestures::{
    Outcome, PanEvent, PanGesture, PinchEvent, PinchGesture, TapEvent, TapGesture, TransformState,
};
use loupe_motion::{AxisAnimation, Decay, Spring};

use crate::config::{GestureSet, ViewerConfig};

/// The affine view transform handed to the rendering collaborator each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Total translation in viewport pixels.
    pub translation: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ViewTransform {
    /// The transform as a Kurbo affine: translate, then scale.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }
}

/// Result of one [`Viewer::frame`] evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// The transform to render this frame.
    pub transform: ViewTransform,
    /// The neutrality signal, also delivered to the registered listener.
    pub is_neutral: bool,
}

/// The image-viewer transform engine.
///
/// A `Viewer` fuses three independently recognized gesture streams into one
/// translate+scale view transform. Feed it phase-tagged events through
/// [`on_pan`](Viewer::on_pan), [`on_pinch`](Viewer::on_pinch), and
/// [`on_tap`](Viewer::on_tap), and call [`frame`](Viewer::frame) at display
/// refresh cadence; everything runs synchronously with no I/O, so both entry
/// points are safe to call from an animation-priority context.
///
/// When a pan or pinch ends, the viewer decides per axis whether the
/// committed offset springs onto its legal range or decays along the
/// residual fling velocity toward a boundary. Starting a new gesture cancels
/// in-flight settling; the cancellation is immediate and idempotent.
pub struct Viewer {
    config: ViewerConfig,
    image: Size,
    state: TransformState,
    pan: PanGesture,
    pinch: PinchGesture,
    tap: TapGesture,
    offset_x: Option<AxisAnimation>,
    offset_y: Option<AxisAnimation>,
    scale_anim: Option<AxisAnimation>,
    on_page_state_change: Option<Box<dyn FnMut(bool)>>,
}

impl fmt::Debug for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer")
            .field("config", &self.config)
            .field("image", &self.image)
            .field("state", &self.state)
            .field("pan", &self.pan)
            .field("pinch", &self.pinch)
            .field("tap", &self.tap)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("scale_anim", &self.scale_anim)
            .field("on_page_state_change", &self.on_page_state_change.is_some())
            .finish()
    }
}

impl Viewer {
    /// Creates a viewer at the neutral transform.
    ///
    /// The source image is fitted to the viewport width up front; the
    /// rendered size stays fixed for the viewer's lifetime.
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        let image = rendered_size(config.source, config.viewport);
        let center = config.viewport.to_vec2() / 2.0;
        Self {
            image,
            state: TransformState::default(),
            pan: PanGesture::new(),
            pinch: PinchGesture::new(center),
            tap: TapGesture::new(),
            offset_x: None,
            offset_y: None,
            scale_anim: None,
            on_page_state_change: None,
            config,
        }
    }

    /// Registers the neutrality listener, invoked on every frame.
    ///
    /// The listener fires every frame rather than on change; a pager that
    /// only cares about transitions is expected to debounce.
    pub fn set_page_state_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_page_state_change = Some(Box::new(listener));
    }

    /// The opaque image locator, untouched.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.config.uri
    }

    /// Device viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.config.viewport
    }

    /// The image's rendered size at scale 1 (fitted to viewport width).
    #[must_use]
    pub fn rendered_image(&self) -> Size {
        self.image
    }

    /// The simultaneity declaration handed to the recognition layer.
    #[must_use]
    pub fn simultaneous_gestures(&self) -> GestureSet {
        self.config.simultaneous
    }

    /// Read-only view of the shared transform state.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Returns `true` while any settling animation is in flight.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.offset_x.is_some() || self.offset_y.is_some() || self.scale_anim.is_some()
    }

    /// Returns `true` iff the view is at the neutral transform.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.state.is_neutral()
    }

    /// The transform as of the latest state, without advancing time.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            translation: self.state.total_translation(),
            scale: self.state.scale,
        }
    }

    /// Feeds one pan event into the engine.
    pub fn on_pan(&mut self, event: &PanEvent) {
        let outcome = self.pan.handle(&mut self.state, event);
        self.apply(outcome);
    }

    /// Feeds one pinch event into the engine.
    ///
    /// A pinch writes `scale` on every phase and commits into `offset` when
    /// it ends, so any settling animation still in flight is dropped before
    /// the event lands; a stale tick would overwrite the gesture's writes on
    /// the next frame.
    pub fn on_pinch(&mut self, event: &PinchEvent) {
        self.offset_x = None;
        self.offset_y = None;
        self.scale_anim = None;
        let outcome = self.pinch.handle(&mut self.state, event);
        self.apply(outcome);
    }

    /// Feeds one tap event into the engine.
    pub fn on_tap(&mut self, event: &TapEvent) {
        let outcome = self.tap.handle(event);
        self.apply(outcome);
    }

    /// Advances settling animations by `dt` seconds, emits the neutrality
    /// signal, and returns the transform to render.
    pub fn frame(&mut self, dt: f64) -> FrameOutput {
        if let Some(anim) = self.offset_x.as_mut() {
            self.state.offset.x = anim.tick(dt);
            if anim.is_finished() {
                self.offset_x = None;
            }
        }
        if let Some(anim) = self.offset_y.as_mut() {
            self.state.offset.y = anim.tick(dt);
            if anim.is_finished() {
                self.offset_y = None;
            }
        }
        if let Some(anim) = self.scale_anim.as_mut() {
            self.state.scale = anim.tick(dt);
            if anim.is_finished() {
                self.scale_anim = None;
            }
        }

        let is_neutral = self.state.is_neutral();
        if let Some(listener) = self.on_page_state_change.as_mut() {
            listener(is_neutral);
        }
        FrameOutput {
            transform: ViewTransform {
                translation: self.state.total_translation(),
                scale: self.state.scale,
            },
            is_neutral,
        }
    }

    /// Returns the viewer to the neutral transform, dropping any in-flight
    /// gesture context and settling animations.
    pub fn reset(&mut self) {
        let center = self.config.viewport.to_vec2() / 2.0;
        self.state = TransformState::default();
        self.pan = PanGesture::new();
        self.pinch = PinchGesture::new(center);
        self.tap = TapGesture::new();
        self.offset_x = None;
        self.offset_y = None;
        self.scale_anim = None;
    }

    /// Snapshot of the current viewer state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewerDebugInfo {
        ViewerDebugInfo {
            viewport: self.config.viewport,
            image: self.image,
            state: self.state,
            settling: self.is_settling(),
            neutral: self.is_neutral(),
            simultaneous: self.config.simultaneous,
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Continue => {}
            Outcome::Interrupt => {
                self.offset_x = None;
                self.offset_y = None;
            }
            Outcome::Settle => self.maybe_settle(),
            Outcome::SettleWithScale(target) => {
                self.scale_anim = Some(Spring::new(self.state.scale, target).into());
                self.maybe_settle();
            }
        }
    }

    /// The shared settle decision, run whenever any gesture ends.
    ///
    /// Deferred while a sibling stream is still mid-gesture (the other
    /// finger keeps control until every stream is terminal), and a no-op at
    /// exact rest so releasing an untouched view never starts a spring.
    fn maybe_settle(&mut self) {
        if self.pan.is_active() || self.pinch.is_active() {
            return;
        }
        let state = self.state;
        if state.offset == Vec2::ZERO
            && state.translation == Vec2::ZERO
            && state.scale_translation == Vec2::ZERO
            && state.scale == 1.0
        {
            return;
        }

        let bounds = translation_bounds(state.scale, self.image, self.config.viewport);
        let target = if state.scale <= 1.0 {
            Vec2::ZERO
        } else {
            bounds.clamp(state.offset)
        };

        self.offset_x = Some(settle_axis(
            state.offset.x,
            target.x,
            state.pan_velocity.x,
            state.scale,
            bounds.min.x,
            bounds.max.x,
        ));
        self.offset_y = Some(settle_axis(
            state.offset.y,
            target.y,
            state.pan_velocity.y,
            state.scale,
            bounds.min.y,
            bounds.max.y,
        ));
        // The velocity has been consumed; a re-run with no new input must
        // not seed another fling.
        self.state.pan_velocity = Vec2::ZERO;
    }
}

/// Picks the settling mode for one axis.
///
/// Decay only applies when the value is already at its boundary-clamped
/// position (still inside bounds), residual velocity remains, and the scale
/// is within the resting maximum; the fling then glides toward whichever
/// bound the velocity points at. Everything else springs to the target.
fn settle_axis(
    value: f64,
    target: f64,
    velocity: f64,
    scale: f64,
    min: f64,
    max: f64,
) -> AxisAnimation {
    if target == value && velocity != 0.0 && scale <= MAX_SCALE {
        Decay::new(value, velocity).with_clamp(min, max).into()
    } else {
        Spring::new(value, target).into()
    }
}

/// Debug snapshot of a [`Viewer`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewerDebugInfo {
    /// Device viewport size.
    pub viewport: Size,
    /// Rendered image size at scale 1.
    pub image: Size,
    /// The shared transform state.
    pub state: TransformState,
    /// Whether any settling animation is in flight.
    pub settling: bool,
    /// Whether the view is at the neutral transform.
    pub neutral: bool,
    /// The simultaneity declaration.
    pub simultaneous: GestureSet,
}
