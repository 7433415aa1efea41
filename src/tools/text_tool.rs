use egui::Modifiers;

use super::{Tool, ToolContext};
use crate::figure::text::TextFigure;
use crate::figure::{Figure, FigureId, FigureType};
use crate::geometry::{Point, Rect};
use crate::util::time;

/// Request for the host to open the in-place text editor over a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEditRequest {
    pub figure_id: FigureId,
    /// Logical area the editor should initially cover.
    pub area: Rect,
    /// Logical font height the editor should use.
    pub font_height: i32,
}

/// Places a text figure at the click point, seeded with a timestamp-derived
/// placeholder, and asks the host to open the in-place editor over it.
#[derive(Debug, Default)]
pub struct AddTextTool;

impl Tool for AddTextTool {
    fn name(&self) -> &'static str {
        "add-text"
    }

    fn on_click(
        &mut self,
        ctx: &mut ToolContext<'_>,
        _modifiers: Modifiers,
        point: Point,
    ) -> Option<TextEditRequest> {
        let mut figure = TextFigure::new(point, time::timestamp_secs().to_string());
        figure.measure(ctx.measurer);

        let request = TextEditRequest {
            figure_id: figure.id(),
            area: figure.position(),
            font_height: figure.font_height(),
        };
        ctx.document.add(FigureType::Text(figure));
        Some(request)
    }
}
