use egui::{Pos2, vec2};

use eframe_cad::document::Document;
use eframe_cad::geometry::{Point, Rect};
use eframe_cad::view::{ScrollAction, Viewport};

const MODEL: i32 = 1_000_000;

// A 1000x1000 canvas over the million-unit document: scale 0.001.
fn test_viewport() -> Viewport {
    let document = Document::new();
    let mut view = Viewport::new(document.area());
    view.set_canvas(egui::Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 1000.0)));
    view
}

// Screen positions go through f32 scaling, so compare within a pixel hundredth.
fn assert_pos_near(actual: Pos2, expected: Pos2) {
    assert!(
        (actual.x - expected.x).abs() < 0.01 && (actual.y - expected.y).abs() < 0.01,
        "{actual:?} != {expected:?}"
    );
}

#[test]
fn home_view_maps_the_document_onto_the_canvas() {
    let view = test_viewport();
    assert_pos_near(view.to_screen(Point::new(0, 0)), Pos2::new(0.0, 0.0));
    assert_pos_near(
        view.to_screen(Point::new(MODEL / 2, MODEL / 2)),
        Pos2::new(500.0, 500.0),
    );
    assert_eq!(view.to_logical(Pos2::new(250.0, 250.0)), Point::new(MODEL / 4, MODEL / 4));
}

#[test]
fn isotropic_scale_uses_the_tighter_axis() {
    let document = Document::new();
    let mut view = Viewport::new(document.area());
    view.set_canvas(egui::Rect::from_min_size(Pos2::ZERO, vec2(2000.0, 1000.0)));

    assert_eq!(view.scale(), 0.001);
    // The logical center always lands on the canvas center.
    assert_pos_near(
        view.to_screen(Point::new(MODEL / 2, MODEL / 2)),
        Pos2::new(1000.0, 500.0),
    );
}

#[test]
fn device_lengths_convert_through_the_current_scale() {
    let view = test_viewport();
    assert_eq!(view.device_to_logical(10.0), 10_000);
}

#[test]
fn zoom_about_keeps_the_base_point_fixed() {
    let mut view = test_viewport();
    let base = Point::new(MODEL / 2, MODEL / 2);
    let on_screen_before = view.to_screen(base);

    view.zoom_about(base, 0.5);
    assert_eq!(
        view.logical_area(),
        Rect::from_points(
            Point::new(MODEL / 4, MODEL / 4),
            Point::new(3 * MODEL / 4, 3 * MODEL / 4)
        )
    );
    assert_pos_near(view.to_screen(base), on_screen_before);
}

#[test]
fn zooming_out_is_clamped_to_the_document_area() {
    let mut view = test_viewport();
    view.zoom_about(Point::new(0, 0), 2.0);
    assert_eq!(
        view.logical_area(),
        Rect::from_points(Point::new(0, 0), Point::new(MODEL, MODEL))
    );
}

#[test]
fn scrolling_steps_and_clamps_within_the_document() {
    let mut view = test_viewport();
    // Zoom into the top-left quarter so there is room to scroll.
    view.zoom_about(Point::new(0, 0), 0.5);
    let span = view.logical_area().size().dx;
    assert_eq!(span, MODEL / 2);

    view.scroll_horizontal(ScrollAction::LineForward);
    assert_eq!(view.logical_area().left, span / 10);

    view.scroll_horizontal(ScrollAction::PageForward);
    assert_eq!(view.logical_area().left, span / 10 + span / 2);

    view.scroll_horizontal(ScrollAction::End);
    assert_eq!(view.logical_area().left, MODEL - span);
    // Stepping past the far edge stays clamped.
    view.scroll_horizontal(ScrollAction::LineForward);
    assert_eq!(view.logical_area().left, MODEL - span);

    view.scroll_horizontal(ScrollAction::Start);
    assert_eq!(view.logical_area().left, 0);
    view.scroll_horizontal(ScrollAction::LineBack);
    assert_eq!(view.logical_area().left, 0);

    view.scroll_vertical(ScrollAction::To(123_000));
    assert_eq!(view.logical_area().top, 123_000);
}

#[test]
fn home_resets_after_zooming_and_scrolling() {
    let mut view = test_viewport();
    view.zoom_about(Point::new(1000, 1000), 0.25);
    view.scroll_horizontal(ScrollAction::PageForward);
    view.home();
    assert_eq!(
        view.logical_area(),
        Rect::from_points(Point::new(0, 0), Point::new(MODEL, MODEL))
    );
}
