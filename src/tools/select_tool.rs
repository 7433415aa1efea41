use egui::Modifiers;

use super::{TextEditRequest, Tool, ToolContext};
use crate::geometry::Point;

/// Hit-test radius for selection clicks, in device pixels.
const SELECTING_MINIMUM_DISTANCE: f32 = 10.0;

/// Picks figures: a plain click selects the nearest figure exclusively, a
/// ctrl/cmd click toggles it in and out of the selection.
#[derive(Debug, Default)]
pub struct SelectTool;

impl Tool for SelectTool {
    fn name(&self) -> &'static str {
        "select"
    }

    fn on_click(
        &mut self,
        ctx: &mut ToolContext<'_>,
        modifiers: Modifiers,
        point: Point,
    ) -> Option<TextEditRequest> {
        let minimum_distance = i64::from(ctx.view.device_to_logical(SELECTING_MINIMUM_DISTANCE));
        if modifiers.ctrl || modifiers.command {
            ctx.document.toggle_select(point, minimum_distance);
        } else {
            ctx.document.select_alone(point, minimum_distance);
        }
        None
    }
}
