use egui::{Color32, Painter, Stroke};

use super::Figure;
use super::common::{self, FIGURE_STROKE_WIDTH};
use crate::figure::FigureId;
use crate::geometry::{Point, Rect};
use crate::id_generator;
use crate::view::Viewport;

/// An axis-aligned rectangle outline.
#[derive(Debug, Clone)]
pub struct RectangleFigure {
    id: FigureId,
    selected: bool,
    color: Color32,
    position: Rect,
}

impl RectangleFigure {
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

impl Figure for RectangleFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn figure_type(&self) -> &'static str {
        "rectangle"
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
        self.position.corners()
    }

    fn bound_rect(&self) -> Rect {
        self.position
    }

    fn draw_shape(&self, painter: &Painter, view: &Viewport) {
        painter.rect_stroke(
            view.to_screen_rect(self.position),
            0.0,
            Stroke::new(FIGURE_STROKE_WIDTH, self.color),
        );
    }
}
