use egui::{Color32, Painter, Stroke};

use super::Figure;
use super::common::{self, FIGURE_STROKE_WIDTH};
use crate::figure::FigureId;
use crate::geometry::{Line, Point};
use crate::id_generator;
use crate::view::Viewport;

/// A straight line segment between two logical points.
#[derive(Debug, Clone)]
pub struct LineFigure {
    id: FigureId,
    selected: bool,
    color: Color32,
    position: Line,
}

impl LineFigure {
    pub fn new(position: Line) -> Self {
        Self {
            id: id_generator::generate_id(),
            selected: false,
            color: common::palette::BLACK,
            position,
        }
    }

    pub fn position(&self) -> Line {
        self.position
    }
}

impl Figure for LineFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn figure_type(&self) -> &'static str {
        "line"
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
        self.position.distance(point)
    }

    fn anchor_points(&self) -> Vec<Point> {
        vec![self.position.start, self.position.end]
    }

    fn draw_shape(&self, painter: &Painter, view: &Viewport) {
        painter.line_segment(
            [view.to_screen(self.position.start), view.to_screen(self.position.end)],
            Stroke::new(FIGURE_STROKE_WIDTH, self.color),
        );
    }
}
