use egui::{Color32, Painter};

// Re-export concrete implementations
mod common;
pub mod ellipse;
pub mod line;
pub mod rect;
pub mod text;

pub use common::{FIGURE_STROKE_WIDTH, SELECTOR_COLOR, SELECTOR_WIDTH, palette};
pub use text::TextMeasurer;

use crate::geometry::{Point, Rect, UNREACHABLE};
use crate::view::Viewport;

/// Unique identifier for a figure.
pub type FigureId = usize;

/// Common trait that all document figures must implement
pub trait Figure {
    /// Get the unique identifier for this figure
    fn id(&self) -> FigureId;

    /// Get the figure type as a string
    fn figure_type(&self) -> &'static str;

    /// Whether the figure is part of the current selection
    fn is_selected(&self) -> bool;

    /// Set the selection flag
    fn select(&mut self, selected: bool);

    /// Flip the selection flag
    fn toggle_select(&mut self) {
        self.select(!self.is_selected());
    }

    /// Get the figure's outline color
    fn color(&self) -> Color32;

    /// Set the figure's outline color
    fn set_color(&mut self, color: Color32);

    /// Minimum distance from `point` to the figure, in logical units.
    /// Figures with no shape are unhittable.
    fn distance(&self, _point: Point) -> i64 {
        UNREACHABLE
    }

    /// Anchor points, drawn as selection handles when the figure is selected
    fn anchor_points(&self) -> Vec<Point> {
        Vec::new()
    }

    /// Bounding rectangle; by default the envelope of the anchor points
    fn bound_rect(&self) -> Rect {
        common::bounds_of(&self.anchor_points())
    }

    /// Draw the bare shape outline
    fn draw_shape(&self, painter: &Painter, view: &Viewport);

    /// Draw the figure: the shape outline, then selection handles if selected
    fn draw(&self, painter: &Painter, view: &Viewport) {
        self.draw_shape(painter, view);
        if self.is_selected() {
            common::draw_selectors(painter, view, &self.anchor_points());
        }
    }

    /// The region to repaint when this figure changes: the bounding rectangle
    /// inflated far enough to cover its selection handles.
    fn drawing_bound_rect(&self, view: &Viewport) -> Rect {
        let margin = view.device_to_logical(SELECTOR_WIDTH) / 2 + 1;
        self.bound_rect().inflate(margin, margin)
    }
}

/// Enumeration of all figure types in the document
#[derive(Debug, Clone)]
pub enum FigureType {
    Line(line::LineFigure),
    Rectangle(rect::RectangleFigure),
    Ellipse(ellipse::EllipseFigure),
    Text(text::TextFigure),
}

impl Figure for FigureType {
    fn id(&self) -> FigureId {
        match self {
            FigureType::Line(f) => f.id(),
            FigureType::Rectangle(f) => f.id(),
            FigureType::Ellipse(f) => f.id(),
            FigureType::Text(f) => f.id(),
        }
    }

    fn figure_type(&self) -> &'static str {
        match self {
            FigureType::Line(_) => "line",
            FigureType::Rectangle(_) => "rectangle",
            FigureType::Ellipse(_) => "ellipse",
            FigureType::Text(_) => "text",
        }
    }

    fn is_selected(&self) -> bool {
        match self {
            FigureType::Line(f) => f.is_selected(),
            FigureType::Rectangle(f) => f.is_selected(),
            FigureType::Ellipse(f) => f.is_selected(),
            FigureType::Text(f) => f.is_selected(),
        }
    }

    fn select(&mut self, selected: bool) {
        match self {
            FigureType::Line(f) => f.select(selected),
            FigureType::Rectangle(f) => f.select(selected),
            FigureType::Ellipse(f) => f.select(selected),
            FigureType::Text(f) => f.select(selected),
        }
    }

    fn color(&self) -> Color32 {
        match self {
            FigureType::Line(f) => f.color(),
            FigureType::Rectangle(f) => f.color(),
            FigureType::Ellipse(f) => f.color(),
            FigureType::Text(f) => f.color(),
        }
    }

    fn set_color(&mut self, color: Color32) {
        match self {
            FigureType::Line(f) => f.set_color(color),
            FigureType::Rectangle(f) => f.set_color(color),
            FigureType::Ellipse(f) => f.set_color(color),
            FigureType::Text(f) => f.set_color(color),
        }
    }

    fn distance(&self, point: Point) -> i64 {
        match self {
            FigureType::Line(f) => f.distance(point),
            FigureType::Rectangle(f) => f.distance(point),
            FigureType::Ellipse(f) => f.distance(point),
            FigureType::Text(f) => f.distance(point),
        }
    }

    fn anchor_points(&self) -> Vec<Point> {
        match self {
            FigureType::Line(f) => f.anchor_points(),
            FigureType::Rectangle(f) => f.anchor_points(),
            FigureType::Ellipse(f) => f.anchor_points(),
            FigureType::Text(f) => f.anchor_points(),
        }
    }

    fn bound_rect(&self) -> Rect {
        match self {
            FigureType::Line(f) => f.bound_rect(),
            FigureType::Rectangle(f) => f.bound_rect(),
            FigureType::Ellipse(f) => f.bound_rect(),
            FigureType::Text(f) => f.bound_rect(),
        }
    }

    fn draw_shape(&self, painter: &Painter, view: &Viewport) {
        match self {
            FigureType::Line(f) => f.draw_shape(painter, view),
            FigureType::Rectangle(f) => f.draw_shape(painter, view),
            FigureType::Ellipse(f) => f.draw_shape(painter, view),
            FigureType::Text(f) => f.draw_shape(painter, view),
        }
    }
}

/// Factory functions for creating figures
pub mod factory {
    use super::*;
    use crate::geometry::{Circle, Line};

    /// Create a new line figure
    pub fn create_line(position: Line) -> FigureType {
        FigureType::Line(line::LineFigure::new(position))
    }

    /// Create a new rectangle figure
    pub fn create_rectangle(position: Rect) -> FigureType {
        FigureType::Rectangle(rect::RectangleFigure::new(position))
    }

    /// Create a new ellipse figure inscribed in `bounds`
    pub fn create_ellipse(bounds: Rect) -> FigureType {
        FigureType::Ellipse(ellipse::EllipseFigure::new(bounds))
    }

    /// Create a circle as an ellipse inscribed in the bounding square
    pub fn create_circle(center: Point, radius: i64) -> FigureType {
        FigureType::Ellipse(ellipse::EllipseFigure::new(Circle::new(center, radius).bound_rect()))
    }

    /// Create a new text figure with a zero-size bounding box; call
    /// `TextFigure::measure` to size it from font metrics.
    pub fn create_text(origin: Point, text: String) -> FigureType {
        FigureType::Text(text::TextFigure::new(origin, text))
    }
}
