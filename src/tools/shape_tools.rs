use egui::{Color32, Painter, Stroke};

use super::{Tool, ToolContext};
use crate::figure::{FIGURE_STROKE_WIDTH, Figure, FigureType, factory};
use crate::geometry::{Line, Point, Rect};
use crate::view::Viewport;

/// Radius of the circle tool's anchor marker, in device pixels.
const ANCHOR_MARKER_RADIUS: f32 = 2.0;

/// Creates a line figure by dragging from one endpoint to the other.
#[derive(Debug, Default)]
pub struct AddLineTool {
    anchor: Option<Point>,
}

impl Tool for AddLineTool {
    fn name(&self) -> &'static str {
        "add-line"
    }

    fn on_drag_start(&mut self, _ctx: &mut ToolContext<'_>, point: Point) {
        self.anchor = Some(point);
    }

    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if let Some(figure) = self.preview_figure(point) {
            ctx.document.add(figure);
        }
    }

    fn preview_figure(&self, point: Point) -> Option<FigureType> {
        self.anchor.map(|anchor| factory::create_line(Line::new(anchor, point)))
    }
}

/// Creates a rectangle figure by dragging between two opposite corners.
#[derive(Debug, Default)]
pub struct AddRectangleTool {
    anchor: Option<Point>,
}

impl Tool for AddRectangleTool {
    fn name(&self) -> &'static str {
        "add-rectangle"
    }

    fn on_drag_start(&mut self, _ctx: &mut ToolContext<'_>, point: Point) {
        self.anchor = Some(point);
    }

    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if let Some(figure) = self.preview_figure(point) {
            ctx.document.add(figure);
        }
    }

    fn preview_figure(&self, point: Point) -> Option<FigureType> {
        self.anchor
            .map(|anchor| factory::create_rectangle(Rect::from_points(anchor, point)))
    }
}

/// Creates an ellipse figure by dragging out its bounding rectangle.
#[derive(Debug, Default)]
pub struct AddEllipseTool {
    anchor: Option<Point>,
}

impl Tool for AddEllipseTool {
    fn name(&self) -> &'static str {
        "add-ellipse"
    }

    fn on_drag_start(&mut self, _ctx: &mut ToolContext<'_>, point: Point) {
        self.anchor = Some(point);
    }

    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if let Some(figure) = self.preview_figure(point) {
            ctx.document.add(figure);
        }
    }

    fn preview_figure(&self, point: Point) -> Option<FigureType> {
        self.anchor
            .map(|anchor| factory::create_ellipse(Rect::from_points(anchor, point)))
    }
}

/// Creates a circle by dragging from the center to a point on the outline.
/// The preview also marks the center anchor.
#[derive(Debug, Default)]
pub struct AddCircleTool {
    anchor: Option<Point>,
}

impl Tool for AddCircleTool {
    fn name(&self) -> &'static str {
        "add-circle"
    }

    fn on_drag_start(&mut self, _ctx: &mut ToolContext<'_>, point: Point) {
        self.anchor = Some(point);
    }

    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if let Some(figure) = self.preview_figure(point) {
            ctx.document.add(figure);
        }
    }

    fn preview_figure(&self, point: Point) -> Option<FigureType> {
        self.anchor
            .map(|anchor| factory::create_circle(anchor, anchor.distance_to(point)))
    }

    fn draw_preview(&self, painter: &Painter, view: &Viewport, point: Point, color: Color32) {
        let Some(anchor) = self.anchor else {
            return;
        };
        if let Some(mut figure) = self.preview_figure(point) {
            figure.set_color(color);
            figure.draw_shape(painter, view);
        }
        painter.circle_stroke(
            view.to_screen(anchor),
            ANCHOR_MARKER_RADIUS,
            Stroke::new(FIGURE_STROKE_WIDTH, color),
        );
    }
}
