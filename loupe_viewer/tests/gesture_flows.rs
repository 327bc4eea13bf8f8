// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end flows across interleaved gesture streams.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};

use loupe_viewer::{PanEvent, Phase, PinchEvent, TapEvent, Viewer, ViewerConfig};

const DT: f64 = 1.0 / 60.0;

fn viewer() -> Viewer {
    Viewer::new(ViewerConfig::new(
        "https://example.com/photo.jpg",
        Size::new(400.0, 1200.0),
        Size::new(400.0, 800.0),
    ))
}

fn pan_event(phase: Phase, pointer_count: u32, translation: Vec2, velocity: Vec2) -> PanEvent {
    PanEvent {
        phase,
        pointer_count,
        translation,
        velocity,
    }
}

fn run_until_settled(viewer: &mut Viewer) {
    let mut frames = 0;
    while viewer.is_settling() {
        viewer.frame(DT);
        frames += 1;
        assert!(frames < 5_000, "viewer failed to settle");
    }
}

fn pinch_to(viewer: &mut Viewer, scale: f64) {
    let focal = Point::new(200.0, 400.0);
    viewer.on_pinch(&PinchEvent { phase: Phase::Began, scale: 1.0, focal });
    viewer.on_pinch(&PinchEvent { phase: Phase::Active, scale, focal });
    viewer.on_pinch(&PinchEvent { phase: Phase::Ended, scale, focal });
    run_until_settled(viewer);
}

/// A two-finger zoom that hands off to a one-finger drag: the pinch owns the
/// movement while both fingers are down, the pan freeze cache keeps the
/// handoff continuous, and nothing settles until every stream is terminal.
#[test]
fn two_finger_zoom_hands_off_to_single_finger_drag() {
    let mut v = viewer();
    let focal = Point::new(250.0, 400.0);

    v.on_pinch(&PinchEvent { phase: Phase::Began, scale: 1.0, focal });
    v.on_pan(&pan_event(Phase::Began, 2, Vec2::ZERO, Vec2::ZERO));

    // Doubling around a focal 50px right of center shifts the image left so
    // the pinched point stays put on screen.
    v.on_pinch(&PinchEvent { phase: Phase::Active, scale: 2.0, focal });
    assert_eq!(v.state().scale_translation, Vec2::new(-50.0, 0.0));

    // Pan activity with two fingers down only feeds the freeze cache.
    v.on_pan(&pan_event(Phase::Active, 2, Vec2::new(20.0, 0.0), Vec2::ZERO));
    assert_eq!(v.state().translation, Vec2::ZERO);

    // First finger lifts: the pinch commits its shift, but the pan is still
    // down, so the settle decision defers.
    v.on_pinch(&PinchEvent { phase: Phase::Ended, scale: 2.0, focal });
    assert_eq!(v.state().offset, Vec2::new(-50.0, 0.0));
    assert!(!v.is_settling());

    // The remaining finger keeps dragging, measured against the cache.
    v.on_pan(&pan_event(Phase::Active, 1, Vec2::new(30.0, 0.0), Vec2::ZERO));
    assert_eq!(v.state().translation, Vec2::new(10.0, 0.0));

    v.on_pan(&pan_event(Phase::Ended, 0, Vec2::new(30.0, 0.0), Vec2::ZERO));
    run_until_settled(&mut v);

    // -40px is well inside the 200px bound at scale 2, so it sticks.
    assert_eq!(v.state().offset, Vec2::new(-40.0, 0.0));
    let out = v.frame(DT);
    assert_eq!(out.transform.translation, Vec2::new(-40.0, 0.0));
    assert_eq!(out.transform.scale, 2.0);
}

/// Zooming in, flinging to an edge, and pinching back out returns the view
/// to the exact neutral transform, and the pager signal tracks it per frame.
#[test]
fn full_zoom_cycle_returns_to_neutral() {
    let mut v = viewer();
    let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
    let sink = Rc::clone(&seen);
    v.set_page_state_listener(move |neutral| sink.borrow_mut().push(neutral));

    assert!(v.frame(DT).is_neutral);

    pinch_to(&mut v, 2.0);

    // Fling to the right edge.
    v.on_pan(&pan_event(Phase::Began, 1, Vec2::ZERO, Vec2::ZERO));
    v.on_pan(&pan_event(
        Phase::Active,
        1,
        Vec2::new(50.0, 0.0),
        Vec2::new(2000.0, 0.0),
    ));
    v.on_pan(&pan_event(
        Phase::Ended,
        0,
        Vec2::new(50.0, 0.0),
        Vec2::new(2000.0, 0.0),
    ));
    run_until_settled(&mut v);
    assert_eq!(v.state().offset.x, 200.0);
    assert!(!v.frame(DT).is_neutral);

    // Pinch out: the raw multiplier composes onto the committed 2x, lands
    // below 1, and rubber-bands back to neutral.
    let focal = Point::new(200.0, 400.0);
    v.on_pinch(&PinchEvent { phase: Phase::Began, scale: 1.0, focal });
    v.on_pinch(&PinchEvent { phase: Phase::Active, scale: 0.4, focal });
    v.on_pinch(&PinchEvent { phase: Phase::Ended, scale: 0.4, focal });
    run_until_settled(&mut v);

    assert_eq!(v.state().scale, 1.0);
    assert_eq!(v.state().offset, Vec2::ZERO);
    assert!(v.frame(DT).is_neutral);

    // The listener saw one emission per frame, never per event.
    assert!(seen.borrow().len() > 3, "every frame must emit the signal");
    assert_eq!(seen.borrow().first(), Some(&true));
    assert_eq!(seen.borrow().last(), Some(&true));
}

/// A tap between gestures neither moves the transform nor starts settling
/// when the view is already at rest.
#[test]
fn tap_on_a_zoomed_resting_view_changes_nothing() {
    let mut v = viewer();
    pinch_to(&mut v, 2.0);
    let before = v.frame(DT);

    v.on_tap(&TapEvent { phase: Phase::Began });
    v.on_tap(&TapEvent { phase: Phase::Ended });
    run_until_settled(&mut v);

    assert_eq!(v.frame(DT), before);
}
