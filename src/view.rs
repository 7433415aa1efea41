use egui::{Pos2, Vec2};

use crate::geometry::{Point, Rect, Size, round};

/// Smallest logical span the view may be zoomed down to.
const MIN_ZOOM_SPAN: i32 = 10;

/// A scrollbar-style viewport movement along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// Jump to the near edge of the document.
    Start,
    /// Jump to the far edge of the document.
    End,
    /// Step back by a tenth of the visible span.
    LineBack,
    /// Step forward by a tenth of the visible span.
    LineForward,
    /// Step back by half the visible span.
    PageBack,
    /// Step forward by half the visible span.
    PageForward,
    /// Jump so the visible span starts at the given logical coordinate.
    To(i32),
}

/// Maps between the document's logical coordinates and screen coordinates.
///
/// The visible logical area is fitted into the on-screen canvas with a
/// uniform (isotropic) scale, centered both ways, and is always clamped to
/// the document area.
#[derive(Debug, Clone)]
pub struct Viewport {
    document_area: Rect,
    logical_area: Rect,
    canvas: egui::Rect,
}

impl Viewport {
    pub fn new(document_area: Rect) -> Self {
        Self {
            document_area,
            logical_area: document_area,
            canvas: egui::Rect::from_min_size(Pos2::ZERO, Vec2::splat(1.0)),
        }
    }

    pub fn logical_area(&self) -> Rect {
        self.logical_area
    }

    pub fn canvas(&self) -> egui::Rect {
        self.canvas
    }

    /// Set the screen-space rectangle the logical area is rendered into.
    /// Called every frame before drawing or hit-testing.
    pub fn set_canvas(&mut self, canvas: egui::Rect) {
        self.canvas = canvas;
    }

    /// Reset the view to show the whole document.
    pub fn home(&mut self) {
        self.logical_area = self.document_area;
    }

    /// Screen pixels per logical unit.
    pub fn scale(&self) -> f32 {
        let size = self.logical_area.size();
        let sx = self.canvas.width() / size.dx as f32;
        let sy = self.canvas.height() / size.dy as f32;
        sx.min(sy).max(f32::EPSILON)
    }

    pub fn to_screen(&self, point: Point) -> Pos2 {
        let scale = self.scale();
        let center = self.logical_area.center();
        self.canvas.center()
            + Vec2::new(
                (point.x - center.x) as f32 * scale,
                (point.y - center.y) as f32 * scale,
            )
    }

    pub fn to_screen_rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_two_pos(self.to_screen(rect.top_left()), self.to_screen(rect.bottom_right()))
    }

    pub fn to_logical(&self, pos: Pos2) -> Point {
        let scale = self.scale();
        let offset = pos - self.canvas.center();
        let center = self.logical_area.center();
        center
            + Size::new(
                round(f64::from(offset.x / scale)) as i32,
                round(f64::from(offset.y / scale)) as i32,
            )
    }

    /// Convert a device-pixel length (handle widths, hit thresholds) into
    /// logical units at the current zoom.
    pub fn device_to_logical(&self, length: f32) -> i32 {
        round(f64::from(length / self.scale())) as i32
    }

    /// Zoom about `base` by scaling every edge of the visible area; the base
    /// point stays fixed on screen.
    pub fn zoom_about(&mut self, base: Point, rate: f64) {
        let enlarged = self.logical_area.enlarge(base, rate);
        let size = enlarged.size();
        if size.dx < MIN_ZOOM_SPAN || size.dy < MIN_ZOOM_SPAN {
            return;
        }
        self.set_logical_area(enlarged);
    }

    pub fn scroll_horizontal(&mut self, action: ScrollAction) {
        let area = self.logical_area;
        let doc = self.document_area;
        let span = area.size().dx;
        let left = match action {
            ScrollAction::Start => doc.left,
            ScrollAction::End => doc.right - span,
            ScrollAction::LineBack => (area.left - span / 10).max(doc.left),
            ScrollAction::LineForward => (area.left + span / 10).min(doc.right - span),
            ScrollAction::PageBack => (area.left - span / 2).max(doc.left),
            ScrollAction::PageForward => (area.left + span / 2).min(doc.right - span),
            ScrollAction::To(position) => position,
        };
        self.set_logical_area(Rect::from_origin_size(Point::new(left, area.top), area.size()));
    }

    pub fn scroll_vertical(&mut self, action: ScrollAction) {
        let area = self.logical_area;
        let doc = self.document_area;
        let span = area.size().dy;
        let top = match action {
            ScrollAction::Start => doc.top,
            ScrollAction::End => doc.bottom - span,
            ScrollAction::LineBack => (area.top - span / 10).max(doc.top),
            ScrollAction::LineForward => (area.top + span / 10).min(doc.bottom - span),
            ScrollAction::PageBack => (area.top - span / 2).max(doc.top),
            ScrollAction::PageForward => (area.top + span / 2).min(doc.bottom - span),
            ScrollAction::To(position) => position,
        };
        self.set_logical_area(Rect::from_origin_size(Point::new(area.left, top), area.size()));
    }

    fn set_logical_area(&mut self, area: Rect) {
        self.logical_area = area.intersect(self.document_area).unwrap_or(self.document_area);
    }
}
