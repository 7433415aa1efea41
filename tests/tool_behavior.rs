use egui::Modifiers;

use eframe_cad::document::{Document, MODEL_SIZE};
use eframe_cad::figure::text::TextMeasurer;
use eframe_cad::figure::{Figure, FigureType, factory};
use eframe_cad::geometry::{Line, Point, Rect, Size};
use eframe_cad::tools::{ToolContext, ToolKind, ToolManager};
use eframe_cad::view::Viewport;

// A 1000x1000 canvas over the million-unit document: scale 0.001, so the
// 10-device-pixel hit threshold becomes 10,000 logical units.
fn test_view(document: &Document) -> Viewport {
    let mut view = Viewport::new(document.area());
    view.set_canvas(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 1000.0)));
    view
}

struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, text: &str, font_height: i32) -> Size {
        Size::new(font_height / 2 * text.chars().count() as i32, font_height)
    }
}

macro_rules! tool_ctx {
    ($document:expr, $view:expr) => {
        &mut ToolContext {
            document: &mut $document,
            view: &$view,
            measurer: &FixedMeasurer,
        }
    };
}

#[test]
fn line_tool_commits_the_dragged_segment() {
    let mut document = Document::new();
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Line);

    tools.on_drag_start(tool_ctx!(document, view), Point::new(5, 5));
    tools.on_dragging(tool_ctx!(document, view), Point::new(30, 30));
    tools.on_drag_end(tool_ctx!(document, view), Point::new(50, 45));

    assert_eq!(document.figures().len(), 1);
    let FigureType::Line(line) = &document.figures()[0] else {
        panic!("expected a line figure");
    };
    assert_eq!(line.position(), Line::new(Point::new(5, 5), Point::new(50, 45)));
    assert!(line.is_selected());
}

#[test]
fn rectangle_tool_normalizes_the_dragged_corners() {
    let mut document = Document::new();
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Rectangle);

    tools.on_drag_start(tool_ctx!(document, view), Point::new(10, 10));
    tools.on_drag_end(tool_ctx!(document, view), Point::new(0, 20));

    let FigureType::Rectangle(rectangle) = &document.figures()[0] else {
        panic!("expected a rectangle figure");
    };
    assert_eq!(
        rectangle.position(),
        Rect::from_points(Point::new(0, 10), Point::new(10, 20))
    );
}

#[test]
fn circle_tool_derives_the_radius_from_the_anchor_distance() {
    let mut document = Document::new();
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Circle);

    tools.on_drag_start(tool_ctx!(document, view), Point::new(0, 0));
    tools.on_drag_end(tool_ctx!(document, view), Point::new(30, 40));

    // Circles are stored as ellipses inscribed in the bounding square.
    let FigureType::Ellipse(ellipse) = &document.figures()[0] else {
        panic!("expected an ellipse figure");
    };
    assert_eq!(
        ellipse.position(),
        Rect::from_points(Point::new(-50, -50), Point::new(50, 50))
    );
}

#[test]
fn rubber_band_preview_tracks_the_drag_and_clears_on_commit() {
    let mut document = Document::new();
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Ellipse);

    assert!(tools.preview_figure().is_none());
    tools.on_drag_start(tool_ctx!(document, view), Point::new(0, 0));
    tools.on_dragging(tool_ctx!(document, view), Point::new(40, 20));

    let Some(FigureType::Ellipse(preview)) = tools.preview_figure() else {
        panic!("expected an ellipse preview");
    };
    assert_eq!(
        preview.position(),
        Rect::from_points(Point::new(0, 0), Point::new(40, 20))
    );
    // The preview is transient: nothing was added to the document.
    assert!(document.figures().is_empty());

    tools.on_drag_end(tool_ctx!(document, view), Point::new(40, 20));
    assert!(tools.preview_figure().is_none());
    assert_eq!(document.figures().len(), 1);
}

#[test]
fn abandoned_drags_leave_the_document_untouched() {
    let mut document = Document::new();
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Line);

    tools.on_drag_start(tool_ctx!(document, view), Point::new(0, 0));
    tools.on_dragging(tool_ctx!(document, view), Point::new(100, 100));
    tools.on_drag_stop(tool_ctx!(document, view));

    assert!(document.figures().is_empty());
    assert!(tools.preview_figure().is_none());
    assert!(!document.can_undo());
}

#[test]
fn switching_tools_drops_the_preview_in_progress() {
    let mut document = Document::new();
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Line);

    tools.on_drag_start(tool_ctx!(document, view), Point::new(0, 0));
    tools.on_dragging(tool_ctx!(document, view), Point::new(100, 100));
    assert!(tools.preview_figure().is_some());

    tools.set_tool(ToolKind::Select);
    assert!(tools.preview_figure().is_none());
}

#[test]
fn select_tool_picks_exclusively_and_ctrl_toggles() {
    let mut document = Document::new();
    document.add(factory::create_line(Line::new(Point::new(0, 0), Point::new(100, 0))));
    document.add(factory::create_line(Line::new(
        Point::new(60_000, 60_000),
        Point::new(60_100, 60_000),
    )));
    let first = document.figures()[0].id();
    let second = document.figures()[1].id();

    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Select);

    // Plain click near the first figure: exclusive selection.
    tools.on_click(tool_ctx!(document, view), Modifiers::NONE, Point::new(50, 0));
    let selected: Vec<_> = document.figures().iter().filter(|f| f.is_selected()).map(Figure::id).collect();
    assert_eq!(selected, vec![first]);

    // Ctrl-click near the second: added to the selection.
    tools.on_click(tool_ctx!(document, view), Modifiers::CTRL, Point::new(60_050, 60_000));
    let selected: Vec<_> = document.figures().iter().filter(|f| f.is_selected()).map(Figure::id).collect();
    assert_eq!(selected, vec![first, second]);

    // Ctrl-click again: toggled back out.
    tools.on_click(tool_ctx!(document, view), Modifiers::CTRL, Point::new(60_050, 60_000));
    let selected: Vec<_> = document.figures().iter().filter(|f| f.is_selected()).map(Figure::id).collect();
    assert_eq!(selected, vec![first]);
}

#[test]
fn select_tool_click_in_empty_space_clears_the_selection() {
    let mut document = Document::new();
    document.add(factory::create_line(Line::new(Point::new(0, 0), Point::new(100, 0))));
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Select);

    tools.on_click(
        tool_ctx!(document, view),
        Modifiers::NONE,
        Point::new(500_000, 500_000),
    );
    assert!(!document.any_selected());
}

#[test]
fn text_tool_adds_a_measured_placeholder_and_requests_an_editor() {
    let mut document = Document::new();
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Text);

    let request = tools
        .on_click(tool_ctx!(document, view), Modifiers::NONE, Point::new(500, 600))
        .expect("the text tool requests the in-place editor");

    assert_eq!(document.figures().len(), 1);
    let FigureType::Text(text) = &document.figures()[0] else {
        panic!("expected a text figure");
    };
    assert_eq!(request.figure_id, text.id());
    assert_eq!(request.font_height, MODEL_SIZE / 30);
    assert_eq!(text.position().top_left(), Point::new(500, 600));
    // Seeded with a timestamp-derived placeholder, measured by the fixed metrics.
    assert!(!text.text().is_empty());
    let expected = FixedMeasurer.measure(text.text(), text.font_height());
    assert_eq!(text.position().size(), expected);
    assert!(text.is_selected());
}

#[test]
fn shape_tools_apply_the_documents_current_color() {
    let mut document = Document::new();
    document.set_current_color(eframe_cad::figure::palette::BLUE);
    let view = test_view(&document);
    let mut tools = ToolManager::new();
    tools.set_tool(ToolKind::Rectangle);

    tools.on_drag_start(tool_ctx!(document, view), Point::new(0, 0));
    tools.on_drag_end(tool_ctx!(document, view), Point::new(100, 100));

    assert_eq!(document.figures()[0].color(), eframe_cad::figure::palette::BLUE);
}
