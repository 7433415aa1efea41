use egui::{Color32, Painter, Shape, Stroke};

use super::Figure;
use super::common::{self, FIGURE_STROKE_WIDTH};
use crate::figure::FigureId;
use crate::geometry::{Ellipse, Point, Rect};
use crate::id_generator;
use crate::view::Viewport;

/// An axis-aligned ellipse inscribed in its bounding rectangle. Circles are
/// ellipses whose bounding rectangle is a square.
#[derive(Debug, Clone)]
pub struct EllipseFigure {
    id: FigureId,
    selected: bool,
    color: Color32,
    position: Rect,
}

impl EllipseFigure {
    pub fn new(position: Rect) -> Self {
        Self {
            id: id_generator::generate_id(),
            selected: false,
            color: common::palette::BLACK,
            position,
        }
    }

    pub fn position(&self) -> Rect {
        self.position
    }
}

impl Figure for EllipseFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn figure_type(&self) -> &'static str {
        "ellipse"
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn select(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn distance(&self, point: Point) -> i64 {
        Ellipse::new(self.position).distance(point)
    }

    /// Center plus the midpoint of each edge of the bounding rectangle.
    fn anchor_points(&self) -> Vec<Point> {
        let position = self.position;
        vec![
            position.center(),
            Point::midpoint(position.top_left(), position.top_right()),
            Point::midpoint(position.top_right(), position.bottom_right()),
            Point::midpoint(position.bottom_right(), position.bottom_left()),
            Point::midpoint(position.bottom_left(), position.top_left()),
        ]
    }

    fn bound_rect(&self) -> Rect {
        self.position
    }

    fn draw_shape(&self, painter: &Painter, view: &Viewport) {
        let bounds = view.to_screen_rect(self.position);
        painter.add(Shape::ellipse_stroke(
            bounds.center(),
            bounds.size() / 2.0,
            Stroke::new(FIGURE_STROKE_WIDTH, self.color),
        ));
    }
}
