use egui::{Color32, Modifiers, Painter};
use log::info;

use crate::document::Document;
use crate::figure::{Figure, FigureType, TextMeasurer};
use crate::geometry::Point;
use crate::view::Viewport;

// Tool implementations
mod select_tool;
pub use select_tool::SelectTool;

mod shape_tools;
pub use shape_tools::{AddCircleTool, AddEllipseTool, AddLineTool, AddRectangleTool};

mod text_tool;
pub use text_tool::{AddTextTool, TextEditRequest};

/// Everything a tool may touch while handling a gesture event.
pub struct ToolContext<'a> {
    pub document: &'a mut Document,
    pub view: &'a Viewport,
    pub measurer: &'a dyn TextMeasurer,
}

/// Tool trait defines the interface for all editing tools.
///
/// Each hook corresponds to one gesture recognizer event; all default to
/// no-ops so tools only implement the gestures they care about.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle a click (press and release below the drag threshold).
    /// May return a request for the host to open the in-place text editor.
    fn on_click(
        &mut self,
        _ctx: &mut ToolContext<'_>,
        _modifiers: Modifiers,
        _point: Point,
    ) -> Option<TextEditRequest> {
        None
    }

    /// Handle the start of a drag, at the original press position
    fn on_drag_start(&mut self, _ctx: &mut ToolContext<'_>, _point: Point) {}

    /// Handle pointer motion while dragging
    fn on_dragging(&mut self, _ctx: &mut ToolContext<'_>, _point: Point) {}

    /// Handle the end of a drag; this is where shape tools commit a figure
    fn on_drag_end(&mut self, _ctx: &mut ToolContext<'_>, _point: Point) {}

    /// Handle an abandoned drag (pointer left the window mid-gesture)
    fn on_drag_stop(&mut self, _ctx: &mut ToolContext<'_>) {}

    /// The transient figure previewing what a drag ending at `point` would
    /// create, or `None` when the tool has no preview
    fn preview_figure(&self, _point: Point) -> Option<FigureType> {
        None
    }

    /// Draw the rubber-band preview for the current drag position
    fn draw_preview(&self, painter: &Painter, view: &Viewport, point: Point, color: Color32) {
        if let Some(mut figure) = self.preview_figure(point) {
            figure.set_color(color);
            figure.draw_shape(painter, view);
        }
    }
}

/// Identifies a tool without its transient state; used by menus and
/// preference persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ToolKind {
    Select,
    Line,
    Rectangle,
    Ellipse,
    Circle,
    Text,
}

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and simplifies memory management
#[derive(Debug)]
pub enum ToolType {
    Select(SelectTool),
    AddLine(AddLineTool),
    AddRectangle(AddRectangleTool),
    AddEllipse(AddEllipseTool),
    AddCircle(AddCircleTool),
    AddText(AddTextTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Select => Self::Select(SelectTool::default()),
            ToolKind::Line => Self::AddLine(AddLineTool::default()),
            ToolKind::Rectangle => Self::AddRectangle(AddRectangleTool::default()),
            ToolKind::Ellipse => Self::AddEllipse(AddEllipseTool::default()),
            ToolKind::Circle => Self::AddCircle(AddCircleTool::default()),
            ToolKind::Text => Self::AddText(AddTextTool::default()),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Select(_) => ToolKind::Select,
            Self::AddLine(_) => ToolKind::Line,
            Self::AddRectangle(_) => ToolKind::Rectangle,
            Self::AddEllipse(_) => ToolKind::Ellipse,
            Self::AddCircle(_) => ToolKind::Circle,
            Self::AddText(_) => ToolKind::Text,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Select(tool) => tool.name(),
            Self::AddLine(tool) => tool.name(),
            Self::AddRectangle(tool) => tool.name(),
            Self::AddEllipse(tool) => tool.name(),
            Self::AddCircle(tool) => tool.name(),
            Self::AddText(tool) => tool.name(),
        }
    }

    fn on_click(
        &mut self,
        ctx: &mut ToolContext<'_>,
        modifiers: Modifiers,
        point: Point,
    ) -> Option<TextEditRequest> {
        match self {
            Self::Select(tool) => tool.on_click(ctx, modifiers, point),
            Self::AddLine(tool) => tool.on_click(ctx, modifiers, point),
            Self::AddRectangle(tool) => tool.on_click(ctx, modifiers, point),
            Self::AddEllipse(tool) => tool.on_click(ctx, modifiers, point),
            Self::AddCircle(tool) => tool.on_click(ctx, modifiers, point),
            Self::AddText(tool) => tool.on_click(ctx, modifiers, point),
        }
    }

    fn on_drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        match self {
            Self::Select(tool) => tool.on_drag_start(ctx, point),
            Self::AddLine(tool) => tool.on_drag_start(ctx, point),
            Self::AddRectangle(tool) => tool.on_drag_start(ctx, point),
            Self::AddEllipse(tool) => tool.on_drag_start(ctx, point),
            Self::AddCircle(tool) => tool.on_drag_start(ctx, point),
            Self::AddText(tool) => tool.on_drag_start(ctx, point),
        }
    }

    fn on_dragging(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        match self {
            Self::Select(tool) => tool.on_dragging(ctx, point),
            Self::AddLine(tool) => tool.on_dragging(ctx, point),
            Self::AddRectangle(tool) => tool.on_dragging(ctx, point),
            Self::AddEllipse(tool) => tool.on_dragging(ctx, point),
            Self::AddCircle(tool) => tool.on_dragging(ctx, point),
            Self::AddText(tool) => tool.on_dragging(ctx, point),
        }
    }

    fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        match self {
            Self::Select(tool) => tool.on_drag_end(ctx, point),
            Self::AddLine(tool) => tool.on_drag_end(ctx, point),
            Self::AddRectangle(tool) => tool.on_drag_end(ctx, point),
            Self::AddEllipse(tool) => tool.on_drag_end(ctx, point),
            Self::AddCircle(tool) => tool.on_drag_end(ctx, point),
            Self::AddText(tool) => tool.on_drag_end(ctx, point),
        }
    }

    fn on_drag_stop(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Select(tool) => tool.on_drag_stop(ctx),
            Self::AddLine(tool) => tool.on_drag_stop(ctx),
            Self::AddRectangle(tool) => tool.on_drag_stop(ctx),
            Self::AddEllipse(tool) => tool.on_drag_stop(ctx),
            Self::AddCircle(tool) => tool.on_drag_stop(ctx),
            Self::AddText(tool) => tool.on_drag_stop(ctx),
        }
    }

    fn preview_figure(&self, point: Point) -> Option<FigureType> {
        match self {
            Self::Select(tool) => tool.preview_figure(point),
            Self::AddLine(tool) => tool.preview_figure(point),
            Self::AddRectangle(tool) => tool.preview_figure(point),
            Self::AddEllipse(tool) => tool.preview_figure(point),
            Self::AddCircle(tool) => tool.preview_figure(point),
            Self::AddText(tool) => tool.preview_figure(point),
        }
    }

    fn draw_preview(&self, painter: &Painter, view: &Viewport, point: Point, color: Color32) {
        match self {
            Self::Select(tool) => tool.draw_preview(painter, view, point, color),
            Self::AddLine(tool) => tool.draw_preview(painter, view, point, color),
            Self::AddRectangle(tool) => tool.draw_preview(painter, view, point, color),
            Self::AddEllipse(tool) => tool.draw_preview(painter, view, point, color),
            Self::AddCircle(tool) => tool.draw_preview(painter, view, point, color),
            Self::AddText(tool) => tool.draw_preview(painter, view, point, color),
        }
    }
}

/// Owns the active tool and routes gesture events to it, maintaining the
/// rubber-band preview point while a drag is in progress. Only one tool is
/// active at a time; switching tools drops any preview in progress.
pub struct ToolManager {
    tool: ToolType,
    rubber_band: Option<Point>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    pub fn new() -> Self {
        Self {
            tool: ToolType::new(ToolKind::Select),
            rubber_band: None,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn set_tool(&mut self, kind: ToolKind) {
        self.rubber_band = None;
        self.tool = ToolType::new(kind);
        info!("active tool: {}", self.tool.name());
    }

    pub fn on_click(
        &mut self,
        ctx: &mut ToolContext<'_>,
        modifiers: Modifiers,
        point: Point,
    ) -> Option<TextEditRequest> {
        self.tool.on_click(ctx, modifiers, point)
    }

    pub fn on_drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.tool.on_drag_start(ctx, point);
    }

    pub fn on_dragging(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.tool.on_dragging(ctx, point);
        self.rubber_band = Some(point);
    }

    pub fn on_drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.rubber_band = None;
        self.tool.on_drag_end(ctx, point);
    }

    pub fn on_drag_stop(&mut self, ctx: &mut ToolContext<'_>) {
        self.rubber_band = None;
        self.tool.on_drag_stop(ctx);
    }

    /// The preview figure for the drag in progress, if any.
    pub fn preview_figure(&self) -> Option<FigureType> {
        self.rubber_band.and_then(|point| self.tool.preview_figure(point))
    }

    /// Draw the rubber-band preview for the drag in progress, if any.
    pub fn draw_preview(&self, painter: &Painter, view: &Viewport, color: Color32) {
        if let Some(point) = self.rubber_band {
            self.tool.draw_preview(painter, view, point, color);
        }
    }
}
