//! Integration tests for the popup host
//!
//! These tests verify the full popup workflow including:
//! - Opening centered and re-centering on reopen
//! - Resize gestures from every handle
//! - Header drag with the close button excluded
//! - Pointer capture acquisition and release

use std::cell::RefCell;
use std::rc::Rc;

use assist_popup::{
    Cursor, Geometry, GestureState, PointerCapture, PointerOutcome, PopupConfig,
    PopupGeometryController, PopupHost, PopupRegion, Rect, ResizeHandle, Size, Vec2,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Counts live capture guards
#[derive(Clone, Default)]
struct CountingCapture {
    live: Rc<RefCell<i32>>,
    cursors: Rc<RefCell<Vec<Cursor>>>,
}

struct CountingGuard {
    live: Rc<RefCell<i32>>,
}

impl Drop for CountingGuard {
    fn drop(&mut self) {
        *self.live.borrow_mut() -= 1;
    }
}

impl PointerCapture for CountingCapture {
    type Guard = CountingGuard;

    fn acquire(&mut self, cursor: Cursor) -> CountingGuard {
        *self.live.borrow_mut() += 1;
        self.cursors.borrow_mut().push(cursor);
        CountingGuard {
            live: Rc::clone(&self.live),
        }
    }
}

fn open_host() -> (PopupHost<CountingCapture>, CountingCapture) {
    init_tracing();
    let capture = CountingCapture::default();
    let mut host = PopupHost::new(PopupConfig::new(800.0, 600.0, 400.0, 300.0), capture.clone());
    host.open(Size::new(1200.0, 800.0));
    (host, capture)
}

// =============================================================================
// Controller scenarios
// =============================================================================

#[test]
fn test_controller_scenarios() {
    init_tracing();
    let mut popup = PopupGeometryController::new(PopupConfig::new(800.0, 600.0, 400.0, 300.0));

    popup.open(1200.0, 800.0);
    assert_eq!(popup.geometry(), Geometry::new(800.0, 600.0, 200.0, 100.0));

    let rect = Rect::from_edges(200.0, 100.0, 1000.0, 700.0);

    popup.begin_resize(ResizeHandle::BottomRight);
    popup.on_pointer_move(900.0, 500.0, rect);
    assert_eq!(popup.geometry(), Geometry::new(700.0, 400.0, 200.0, 100.0));
    popup.end_gesture();

    popup.open(1200.0, 800.0);
    popup.begin_resize(ResizeHandle::Left);
    popup.on_pointer_move(950.0, 400.0, rect);
    assert_eq!(popup.geometry(), Geometry::new(800.0, 600.0, 200.0, 100.0));
    popup.end_gesture();

    popup.begin_drag();
    popup.on_pointer_move(500.0, 300.0, rect);
    assert_eq!(popup.geometry(), Geometry::new(800.0, 600.0, 100.0, 280.0));
    popup.end_gesture();

    popup.on_pointer_move(10.0, 10.0, rect);
    assert_eq!(popup.geometry(), Geometry::new(800.0, 600.0, 100.0, 280.0));
}

#[test]
fn test_left_handles_freeze_below_minimum() {
    let rect = Rect::from_edges(200.0, 100.0, 1000.0, 700.0);
    for handle in ResizeHandle::ALL.into_iter().filter(|h| h.has_left()) {
        let mut popup = PopupGeometryController::default();
        popup.open(1200.0, 800.0);
        let before = popup.geometry();

        popup.begin_resize(handle);
        popup.on_pointer_move(700.0, 400.0, rect);
        let after = popup.geometry();

        assert!((after.x - before.x).abs() < 0.001, "{handle}");
        assert!((after.width - before.width).abs() < 0.001, "{handle}");
    }
}

// =============================================================================
// Host workflow
// =============================================================================

#[test]
fn test_every_handle_region_starts_matching_resize() {
    let (mut host, capture) = open_host();
    let points = [
        (Vec2::new(205.0, 105.0), ResizeHandle::TopLeft),
        (Vec2::new(995.0, 105.0), ResizeHandle::TopRight),
        (Vec2::new(205.0, 695.0), ResizeHandle::BottomLeft),
        (Vec2::new(995.0, 695.0), ResizeHandle::BottomRight),
        (Vec2::new(600.0, 101.0), ResizeHandle::Top),
        (Vec2::new(600.0, 698.0), ResizeHandle::Bottom),
        (Vec2::new(201.0, 400.0), ResizeHandle::Left),
        (Vec2::new(998.0, 400.0), ResizeHandle::Right),
    ];

    for (point, handle) in points {
        assert_eq!(host.region_at(point), Some(PopupRegion::Resize(handle)));
        assert_eq!(host.pointer_down(point), PointerOutcome::Handled);
        assert_eq!(host.controller().gesture(), GestureState::Resizing(handle));
        assert_eq!(*capture.live.borrow(), 1);
        assert_eq!(host.pointer_up(point), PointerOutcome::Handled);
        assert_eq!(*capture.live.borrow(), 0);
    }

    let cursors = capture.cursors.borrow();
    assert_eq!(
        &cursors[..4],
        &[Cursor::NwResize, Cursor::NeResize, Cursor::SwResize, Cursor::SeResize]
    );
    assert_eq!(
        &cursors[4..],
        &[Cursor::NsResize, Cursor::NsResize, Cursor::EwResize, Cursor::EwResize]
    );
}

#[test]
fn test_drag_then_resize_session() {
    let (mut host, capture) = open_host();

    host.pointer_down(Vec2::new(400.0, 130.0));
    host.pointer_move(Vec2::new(450.0, 200.0));
    host.pointer_move(Vec2::new(600.0, 50.0));
    host.pointer_up(Vec2::new(600.0, 50.0));
    assert_eq!(host.geometry(), Geometry::new(800.0, 600.0, 200.0, 30.0));

    // Bottom edge now at 630
    host.pointer_down(Vec2::new(600.0, 628.0));
    assert_eq!(host.controller().gesture(), GestureState::Resizing(ResizeHandle::Bottom));
    host.pointer_move(Vec2::new(600.0, 200.0));
    assert_eq!(host.geometry(), Geometry::new(800.0, 300.0, 200.0, 30.0));
    assert!((host.content_height() - 240.0).abs() < 0.001);
    host.pointer_up(Vec2::new(600.0, 200.0));

    assert_eq!(*capture.live.borrow(), 0);
    assert_eq!(host.pointer_move(Vec2::new(0.0, 0.0)), PointerOutcome::Unhandled);
}

#[test]
fn test_close_button_never_starts_drag() {
    let (mut host, capture) = open_host();

    assert_eq!(host.region_at(Vec2::new(970.0, 130.0)), Some(PopupRegion::CloseButton));
    assert_eq!(host.pointer_down(Vec2::new(970.0, 130.0)), PointerOutcome::Handled);
    assert!(!host.controller().is_gesture_active());
    assert!(host.is_open());

    // Dragging off the button and back before release still clicks it
    assert_eq!(host.pointer_move(Vec2::new(700.0, 400.0)), PointerOutcome::Unhandled);
    assert_eq!(host.geometry(), Geometry::new(800.0, 600.0, 200.0, 100.0));
    assert_eq!(host.pointer_up(Vec2::new(965.0, 120.0)), PointerOutcome::Closed);
    assert!(!host.is_open());
    assert!(capture.cursors.borrow().is_empty());
}

#[test]
fn test_close_mid_gesture_then_reopen() {
    let (mut host, capture) = open_host();

    host.pointer_down(Vec2::new(400.0, 130.0));
    host.pointer_move(Vec2::new(100.0, 100.0));
    assert_eq!(*capture.live.borrow(), 1);

    host.close();
    assert_eq!(*capture.live.borrow(), 0);
    assert_eq!(host.controller().gesture(), GestureState::Idle);

    host.open(Size::new(1000.0, 1000.0));
    assert_eq!(host.geometry(), Geometry::new(800.0, 600.0, 100.0, 200.0));
    assert_eq!(host.controller().cursor().css(), "default");
}

#[test]
fn test_config_from_json_drives_controller() {
    let config = PopupConfig::from_json(
        r#"{"defaultSize":{"width":640.0,"height":480.0},"minSize":{"width":320.0,"height":240.0}}"#,
    )
    .unwrap();
    let mut popup = PopupGeometryController::new(config);
    popup.open(1280.0, 720.0);
    assert_eq!(popup.geometry(), Geometry::new(640.0, 480.0, 320.0, 120.0));

    popup.begin_resize(ResizeHandle::BottomRight);
    popup.on_pointer_move(0.0, 0.0, popup.geometry().rect());
    assert_eq!(popup.geometry(), Geometry::new(320.0, 240.0, 320.0, 120.0));
}
