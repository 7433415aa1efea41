use egui::{Color32, Painter, Stroke};

use crate::document::Document;
use crate::figure::{FIGURE_STROKE_WIDTH, Figure};
use crate::tools::ToolManager;
use crate::view::Viewport;

/// Window background outside the paper.
const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0xff, 0xff, 0xc0);
/// Fill of the paper (the document area).
const PAPER_COLOR: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);

/// Paint one frame: background, paper, every figure in paint order (back to
/// front), then the rubber-band preview of any drag in progress on top.
/// The painter is only borrowed for the duration of the call.
pub fn render(painter: &Painter, document: &Document, view: &Viewport, tools: &ToolManager) {
    painter.rect_filled(view.canvas(), 0.0, BACKGROUND_COLOR);

    let paper = view.to_screen_rect(document.area());
    painter.rect_filled(paper, 0.0, PAPER_COLOR);
    painter.rect_stroke(paper, 0.0, Stroke::new(FIGURE_STROKE_WIDTH, Color32::BLACK));

    for figure in document.figures() {
        figure.draw(painter, view);
    }

    tools.draw_preview(painter, view, document.current_color());
}
