//! Integration tests: drawing controller over the software raster.
//!
//! Drives `DrawingController<Raster>` with pointer sequences and checks the
//! resulting pixels.

mod common;

use pretty_assertions::assert_eq;
use sketch_core::{Color, DisplayMode, Point, Raster, Surface, ToolMode};
use sketch_editor::{DragState, DrawingController, InputEvent};

const W: u32 = 240;
const H: u32 = 200;
const RED: Color = Color::rgb(255, 0, 0);

fn controller() -> DrawingController<Raster> {
    common::init_logging();
    DrawingController::new(Raster::new(W, H))
}

fn drag(c: &mut DrawingController<Raster>, points: &[(f64, f64)]) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };
    c.handle(&InputEvent::from_pointer_down(x0, y0));
    for &(x, y) in rest {
        c.handle(&InputEvent::from_pointer_move(x, y));
    }
    let &(xn, yn) = points.last().unwrap_or(&(x0, y0));
    c.handle(&InputEvent::from_pointer_up(xn, yn));
}

// ─── Degenerate drags ───────────────────────────────────────────────────

#[test]
fn press_release_same_point_freehand_leaves_no_mark() {
    for tool in [ToolMode::Brush, ToolMode::Eraser] {
        let mut c = controller();
        c.set_tool(tool);
        c.handle(&InputEvent::from_pointer_down(50.0, 50.0));
        c.handle(&InputEvent::from_pointer_up(50.0, 50.0));
        assert!(c.surface().is_blank(), "{tool:?} left a mark");
        assert_eq!(c.drag_state(), DragState::Idle);
    }
}

#[test]
fn press_release_same_point_zero_area_rect_is_empty() {
    let mut c = controller();
    c.set_tool(ToolMode::Rectangle);
    c.handle(&InputEvent::from_pointer_down(50.0, 50.0));
    assert!(c.handle(&InputEvent::from_pointer_up(50.0, 50.0)));
    assert!(c.surface().is_blank());
}

#[test]
fn press_release_same_point_circle_and_line_stay_local() {
    for tool in [ToolMode::Circle, ToolMode::Line] {
        let mut c = controller();
        c.set_tool(tool);
        c.handle(&InputEvent::from_pointer_down(100.0, 100.0));
        c.handle(&InputEvent::from_pointer_up(100.0, 100.0));

        // At most a dot the size of the pen.
        if let Some((x0, y0, x1, y1)) = c.surface().painted_bounds() {
            assert!(x0 >= 97 && y0 >= 97 && x1 <= 102 && y1 <= 102, "{tool:?}");
        }
        assert_eq!(c.drag_state(), DragState::Idle);
    }
}

// ─── Guards ─────────────────────────────────────────────────────────────

#[test]
fn move_before_press_is_noop() {
    let mut c = controller();
    for tool in ToolMode::ALL {
        c.set_tool(tool);
        assert!(!c.handle(&InputEvent::from_pointer_move(30.0, 30.0)));
        assert!(!c.handle(&InputEvent::from_pointer_move(90.0, 60.0)));
    }
    assert!(c.surface().is_blank());
    assert_eq!(c.drag_state(), DragState::Idle);
}

#[test]
fn release_before_press_is_noop() {
    let mut c = controller();
    c.set_tool(ToolMode::Circle);
    assert!(!c.handle(&InputEvent::from_pointer_up(30.0, 30.0)));
    assert!(c.surface().is_blank());
}

#[test]
fn non_finite_move_paints_nothing() {
    let mut c = controller();
    c.handle(&InputEvent::from_pointer_down(50.0, 50.0));
    c.handle(&InputEvent::from_pointer_move(f64::NAN, f64::NAN));
    c.handle(&InputEvent::from_pointer_move(f64::INFINITY, 50.0));
    assert!(c.surface().is_blank());
    assert_eq!(c.surface().pixel(25, 25), Some(Color::TRANSPARENT));

    // The stroke resumes from the press point.
    c.handle(&InputEvent::from_pointer_move(90.0, 50.0));
    c.handle(&InputEvent::from_pointer_up(90.0, 50.0));
    assert_eq!(c.surface().pixel(70, 50), Some(Color::BLACK));
    assert_eq!(c.surface().painted_bounds().map(|(x0, ..)| x0 >= 47), Some(true));
}

// ─── Clear ──────────────────────────────────────────────────────────────

#[test]
fn draw_then_clear_equals_fresh_surface() {
    let mut c = controller();
    c.set_color(RED);
    drag(&mut c, &[(10.0, 10.0), (80.0, 40.0), (120.0, 150.0)]);
    c.set_tool(ToolMode::Rectangle);
    drag(&mut c, &[(20.0, 20.0), (200.0, 180.0)]);
    assert!(!c.surface().is_blank());

    c.clear();
    assert_eq!(c.surface().pixels(), Raster::new(W, H).pixels());

    c.clear();
    assert!(c.surface().is_blank(), "clear is idempotent");
}

#[test]
fn clear_keeps_controls() {
    let mut c = controller();
    c.set_tool(ToolMode::Line);
    c.set_color(RED);
    c.set_width(12);
    c.set_display_mode(DisplayMode::Dark);
    c.clear();
    assert_eq!(c.tool(), ToolMode::Line);
    assert_eq!(c.color(), RED);
    assert_eq!(c.width(), 12);
    assert_eq!(c.display_mode(), DisplayMode::Dark);
}

// ─── Shapes ─────────────────────────────────────────────────────────────

#[test]
fn rectangle_is_direction_independent() {
    let mut forward = controller();
    forward.set_tool(ToolMode::Rectangle);
    drag(&mut forward, &[(10.0, 10.0), (50.0, 30.0)]);

    let mut backward = controller();
    backward.set_tool(ToolMode::Rectangle);
    drag(&mut backward, &[(50.0, 30.0), (10.0, 10.0)]);

    assert!(!forward.surface().is_blank());
    assert_eq!(forward.surface().pixels(), backward.surface().pixels());
}

#[test]
fn rectangle_has_no_preview_until_release() {
    let mut c = controller();
    c.set_tool(ToolMode::Rectangle);
    c.handle(&InputEvent::from_pointer_down(10.0, 10.0));
    assert!(!c.handle(&InputEvent::from_pointer_move(60.0, 60.0)));
    assert!(c.surface().is_blank());
    assert!(c.handle(&InputEvent::from_pointer_up(60.0, 60.0)));
    assert!(!c.surface().is_blank());
}

#[test]
fn circle_is_centered_on_anchor() {
    let mut c = controller();
    c.set_tool(ToolMode::Circle);
    c.set_width(2);
    drag(&mut c, &[(100.0, 100.0), (100.0, 150.0)]);

    let s = c.surface();
    assert_eq!(s.pixel(100, 149), Some(Color::BLACK));
    assert_eq!(s.pixel(149, 100), Some(Color::BLACK));
    assert_eq!(s.pixel(50, 100), Some(Color::BLACK));
    assert_eq!(s.pixel(100, 50), Some(Color::BLACK));
    assert_eq!(s.pixel(100, 100), Some(Color::TRANSPARENT), "center stays empty");
}

#[test]
fn line_connects_anchor_and_release() {
    let mut c = controller();
    c.set_tool(ToolMode::Line);
    c.set_color(RED);
    drag(&mut c, &[(20.0, 100.0), (200.0, 100.0)]);
    for x in [20, 60, 110, 199] {
        assert_eq!(c.surface().pixel(x, 100), Some(RED), "x={x}");
    }
    assert_eq!(c.surface().pixel(110, 60), Some(Color::TRANSPARENT));
}

#[test]
fn strokes_outside_bounds_are_clipped() {
    let mut c = controller();
    c.set_width(20);
    drag(&mut c, &[(120.0, 100.0), (5000.0, 100.0), (-5000.0, -5000.0)]);
    c.set_tool(ToolMode::Circle);
    drag(&mut c, &[(120.0, 100.0), (120.0, 10_000.0)]);

    assert_eq!(c.surface().width(), W);
    assert_eq!(c.surface().height(), H);
    assert_eq!(c.surface().pixel(200, 100), Some(Color::BLACK));
}

// ─── Display mode and eraser ────────────────────────────────────────────

#[test]
fn display_mode_does_not_touch_existing_pixels() {
    let mut c = controller();
    c.set_color(RED);
    drag(&mut c, &[(10.0, 10.0), (100.0, 100.0)]);
    let before = c.surface().clone();

    c.set_display_mode(DisplayMode::Dark);
    assert_eq!(c.surface(), &before);
    c.toggle_display_mode();
    assert_eq!(c.surface(), &before);
}

#[test]
fn eraser_paints_background_of_current_mode() {
    let mut c = controller();
    c.set_color(RED);
    c.set_tool(ToolMode::Eraser);
    drag(&mut c, &[(20.0, 50.0), (100.0, 50.0)]);
    assert_eq!(c.surface().pixel(60, 50), Some(Color::WHITE));
    assert_eq!(c.surface().count_color(RED), 0);

    c.set_display_mode(DisplayMode::Dark);
    drag(&mut c, &[(20.0, 150.0), (100.0, 150.0)]);
    assert_eq!(c.surface().pixel(60, 150), Some(Color::BLACK));
    assert_eq!(c.surface().pixel(60, 50), Some(Color::WHITE), "earlier pass unchanged");
}

#[test]
fn eraser_covers_brush_stroke() {
    let mut c = controller();
    c.set_color(RED);
    c.set_width(4);
    drag(&mut c, &[(20.0, 80.0), (200.0, 80.0)]);
    assert!(c.surface().count_color(RED) > 0);

    c.set_tool(ToolMode::Eraser);
    drag(&mut c, &[(10.0, 80.0), (220.0, 80.0)]);
    assert_eq!(c.surface().count_color(RED), 0);
}

#[test]
fn eraser_uses_fixed_width() {
    let mut c = controller();
    c.set_width(2);
    c.set_tool(ToolMode::Eraser);
    drag(&mut c, &[(50.0, 100.0), (150.0, 100.0)]);

    // Half of 20 above and below the center line.
    assert_eq!(c.surface().pixel(100, 91), Some(Color::WHITE));
    assert_eq!(c.surface().pixel(100, 108), Some(Color::WHITE));
    assert_eq!(c.surface().pixel(100, 111), Some(Color::TRANSPARENT));
}

// ─── Mid-drag tool switch ───────────────────────────────────────────────

#[test]
fn tool_switch_mid_drag_commits_tool_at_release() {
    let mut c = controller();
    c.set_tool(ToolMode::Rectangle);
    c.handle(&InputEvent::from_pointer_down(20.0, 100.0));
    c.set_tool(ToolMode::Line);
    c.handle(&InputEvent::from_pointer_up(200.0, 100.0));

    // A line along y=100, not a rectangle outline.
    assert_eq!(c.surface().pixel(110, 100), Some(Color::BLACK));
    assert_eq!(c.surface().painted_bounds().map(|(_, y0, _, y1)| y1 - y0 < 8), Some(true));
}

#[test]
fn switching_to_brush_mid_drag_starts_at_first_move() {
    let mut c = controller();
    c.set_tool(ToolMode::Rectangle);
    c.handle(&InputEvent::from_pointer_down(10.0, 10.0));
    c.set_tool(ToolMode::Brush);

    c.handle(&InputEvent::from_pointer_move(50.0, 50.0));
    assert!(c.surface().is_blank(), "first move only positions the pen");

    c.handle(&InputEvent::from_pointer_move(150.0, 50.0));
    c.handle(&InputEvent::from_pointer_up(150.0, 50.0));
    assert_eq!(c.surface().pixel(100, 50), Some(Color::BLACK));
    assert_eq!(c.surface().pixel(30, 30), Some(Color::TRANSPARENT));
}

#[test]
fn switching_to_shape_mid_stroke_keeps_painted_segments() {
    let mut c = controller();
    c.handle(&InputEvent::from_pointer_down(10.0, 150.0));
    c.handle(&InputEvent::from_pointer_move(60.0, 150.0));
    c.set_tool(ToolMode::Circle);
    assert!(!c.handle(&InputEvent::from_pointer_move(200.0, 150.0)));
    c.handle(&InputEvent::from_pointer_up(10.0, 190.0));

    assert_eq!(c.surface().pixel(35, 150), Some(Color::BLACK));
    // Circle of radius 40 around the press point.
    assert_eq!(c.surface().pixel(50, 150), Some(Color::BLACK));
    assert_eq!(c.surface().pixel(10, 110), Some(Color::BLACK));
    assert_eq!(c.surface().pixel(150, 150), Some(Color::TRANSPARENT));
    assert_eq!(c.drag_state().anchor(), None);
}

#[test]
fn anchor_is_cleared_after_release() {
    let mut c = controller();
    c.set_tool(ToolMode::Line);
    c.handle(&InputEvent::from_pointer_down(5.0, 5.0));
    assert_eq!(c.drag_state().anchor(), Some(Point::new(5.0, 5.0)));
    c.handle(&InputEvent::from_pointer_up(50.0, 5.0));
    assert_eq!(c.drag_state().anchor(), None);
    assert!(!c.drag_state().is_active());
}
