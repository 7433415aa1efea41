use egui::{Painter, Stroke, Vec2};

use crate::geometry::{Point, Rect};
use crate::view::Viewport;

// Common constants for all figure types
/// Side length of a selection handle square, in device pixels.
pub const SELECTOR_WIDTH: f32 = 10.0;
/// Outline width used for figure shapes and handles, in device pixels.
pub const FIGURE_STROKE_WIDTH: f32 = 1.0;
/// Color of selection handles.
pub const SELECTOR_COLOR: egui::Color32 = egui::Color32::from_rgb(0x80, 0x80, 0x80);

/// The color menu palette. New figures start black until the document applies
/// its current color.
pub mod palette {
    use egui::Color32;

    pub const BLACK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
    pub const RED: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color32 = Color32::from_rgb(0x00, 0xff, 0x00);
    pub const BLUE: Color32 = Color32::from_rgb(0x00, 0x00, 0xff);
}

/// Min/max envelope of a set of anchor points.
pub(crate) fn bounds_of(points: &[Point]) -> Rect {
    let Some((&first, rest)) = points.split_first() else {
        return Rect::default();
    };
    rest.iter().fold(Rect::from_points(first, first), |bounds, point| Rect {
        left: bounds.left.min(point.x),
        top: bounds.top.min(point.y),
        right: bounds.right.max(point.x),
        bottom: bounds.bottom.max(point.y),
    })
}

/// Draw a fixed-size handle square centered on each anchor point. Handles
/// keep their device size regardless of zoom.
pub(crate) fn draw_selectors(painter: &Painter, view: &Viewport, anchor_points: &[Point]) {
    for &point in anchor_points {
        let handle = egui::Rect::from_center_size(view.to_screen(point), Vec2::splat(SELECTOR_WIDTH));
        painter.rect_stroke(handle, 0.0, Stroke::new(FIGURE_STROKE_WIDTH, SELECTOR_COLOR));
    }
}
