use egui::{Align2, Color32, FontId, Painter};

use super::Figure;
use super::common;
use crate::document::MODEL_SIZE;
use crate::figure::FigureId;
use crate::geometry::{Point, Rect, Size};
use crate::id_generator;
use crate::view::Viewport;

/// Default font height for new text figures, in logical units.
pub const DEFAULT_TEXT_HEIGHT: i32 = MODEL_SIZE / 30;

/// Measures laid-out text in logical units.
///
/// Font metrics live in the host (egui's font atlas), so the measuring
/// backend is passed in explicitly wherever a text figure needs sizing.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_height: i32) -> Size;
}

/// A text label anchored at its top-left corner. The bounding box is cached
/// and recomputed from font metrics whenever the text changes.
#[derive(Debug, Clone)]
pub struct TextFigure {
    id: FigureId,
    selected: bool,
    color: Color32,
    position: Rect,
    text: String,
    font_height: i32,
}

impl TextFigure {
    pub fn new(origin: Point, text: String) -> Self {
        Self {
            id: id_generator::generate_id(),
            selected: false,
            color: common::palette::BLACK,
            position: Rect::from_origin_size(origin, Size::default()),
            text,
            font_height: DEFAULT_TEXT_HEIGHT,
        }
    }

    pub fn position(&self) -> Rect {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_height(&self) -> i32 {
        self.font_height
    }

    /// Replace the text and recompute the bounding box from font metrics.
    /// The top-left anchor stays fixed.
    pub fn set_text(&mut self, text: String, measurer: &dyn TextMeasurer) {
        self.text = text;
        self.measure(measurer);
    }

    /// Recompute the bounding box from font metrics.
    pub fn measure(&mut self, measurer: &dyn TextMeasurer) {
        let size = measurer.measure(&self.text, self.font_height);
        self.position = Rect::from_origin_size(self.position.top_left(), size);
    }
}

impl Figure for TextFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn figure_type(&self) -> &'static str {
        "text"
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
        let font_pixels = self.font_height as f32 * view.scale();
        painter.text(
            view.to_screen(self.position.top_left()),
            Align2::LEFT_TOP,
            &self.text,
            FontId::proportional(font_pixels),
            self.color,
        );
    }
}
