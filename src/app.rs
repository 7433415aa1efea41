use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, FontId, Modifiers};
use log::warn;

use crate::document::{Damage, DamageListener, Document};
use crate::figure::text::TextMeasurer;
use crate::figure::{Figure, FigureId, FigureType, palette};
use crate::geometry::{Size, round};
use crate::input::{GestureEvent, GestureRecognizer, InputCollector, PointerEvent};
use crate::renderer;
use crate::tools::{TextEditRequest, ToolContext, ToolKind, ToolManager};
use crate::view::Viewport;

/// Scroll distance egui reports per mouse-wheel notch, in points.
const WHEEL_NOTCH: f32 = 50.0;

/// Symbolic commands dispatched by the menu bar and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Undo,
    Redo,
    /// Reset the view to show the whole document.
    Home,
    /// Switch the active tool.
    Tool(ToolKind),
    /// Delete every selected figure.
    DeleteSelection,
    /// Set the color applied to newly created figures.
    SetColor(Color32),
    About,
    Exit,
}

/// User preferences persisted across sessions. The document itself is not.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    current_color: [u8; 3],
    tool: ToolKind,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            current_color: [0x00, 0x00, 0x00],
            tool: ToolKind::Select,
        }
    }
}

/// Damage listener that queues hints for the frame loop to turn into
/// repaint requests.
struct DamageQueue(Rc<RefCell<Vec<Damage>>>);

impl DamageListener for DamageQueue {
    fn on_damage(&mut self, damage: &Damage) {
        self.0.borrow_mut().push(*damage);
    }
}

/// Measures text through egui's font atlas at the viewport's current scale,
/// reporting logical units.
struct EguiTextMeasurer<'a> {
    ctx: &'a egui::Context,
    scale: f32,
}

impl TextMeasurer for EguiTextMeasurer<'_> {
    fn measure(&self, text: &str, font_height: i32) -> Size {
        let pixels = font_height as f32 * self.scale;
        let size = self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), FontId::proportional(pixels), Color32::BLACK)
                .size()
        });
        Size::new(
            round(f64::from(size.x / self.scale)) as i32,
            round(f64::from(size.y / self.scale)) as i32,
        )
    }
}

/// An in-place text edit in progress.
struct TextEditState {
    figure_id: FigureId,
    font_height: i32,
    buffer: String,
    just_opened: bool,
}

pub struct CadApp {
    document: Document,
    view: Viewport,
    tools: ToolManager,
    input: InputCollector,
    gestures: GestureRecognizer,
    damage: Rc<RefCell<Vec<Damage>>>,
    editing: Option<TextEditState>,
    preferences: Preferences,
    show_about: bool,
}

impl Default for CadApp {
    fn default() -> Self {
        Self::with_preferences(Preferences::default())
    }
}

impl CadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let preferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_preferences(preferences)
    }

    fn with_preferences(preferences: Preferences) -> Self {
        let mut document = Document::new();
        let [r, g, b] = preferences.current_color;
        document.set_current_color(Color32::from_rgb(r, g, b));

        let damage = Rc::new(RefCell::new(Vec::new()));
        document.subscribe(Box::new(DamageQueue(damage.clone())));

        let mut tools = ToolManager::new();
        tools.set_tool(preferences.tool);

        let view = Viewport::new(document.area());

        Self {
            document,
            view,
            tools,
            input: InputCollector::new(),
            gestures: GestureRecognizer::new(),
            damage,
            editing: None,
            preferences,
            show_about: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Dispatch a symbolic command from the menu bar or a shortcut.
    pub fn dispatch(&mut self, ctx: &egui::Context, command: AppCommand) {
        match command {
            AppCommand::Undo => {
                self.commit_text_edit(ctx);
                self.document.undo();
            }
            AppCommand::Redo => {
                self.commit_text_edit(ctx);
                self.document.redo();
            }
            AppCommand::Home => self.view.home(),
            AppCommand::Tool(kind) => {
                self.commit_text_edit(ctx);
                self.tools.set_tool(kind);
                self.preferences.tool = kind;
            }
            AppCommand::DeleteSelection => {
                self.commit_text_edit(ctx);
                self.document.delete_selected();
            }
            AppCommand::SetColor(color) => {
                self.document.set_current_color(color);
                self.preferences.current_color = [color.r(), color.g(), color.b()];
            }
            AppCommand::About => self.show_about = true,
            AppCommand::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn dispatch_gesture(&mut self, ctx: &egui::Context, modifiers: Modifiers, event: GestureEvent) {
        let measurer = EguiTextMeasurer {
            ctx,
            scale: self.view.scale(),
        };
        let mut tool_ctx = ToolContext {
            document: &mut self.document,
            view: &self.view,
            measurer: &measurer,
        };
        let mut edit_request = None;
        match event {
            GestureEvent::Click(pos) => {
                let point = self.view.to_logical(pos);
                edit_request = self.tools.on_click(&mut tool_ctx, modifiers, point);
            }
            GestureEvent::DragStart(pos) => {
                let point = self.view.to_logical(pos);
                self.tools.on_drag_start(&mut tool_ctx, point);
            }
            GestureEvent::Dragging(pos) => {
                let point = self.view.to_logical(pos);
                self.tools.on_dragging(&mut tool_ctx, point);
            }
            GestureEvent::DragEnd(pos) => {
                let point = self.view.to_logical(pos);
                self.tools.on_drag_end(&mut tool_ctx, point);
            }
            GestureEvent::DragStop => self.tools.on_drag_stop(&mut tool_ctx),
        }
        if let Some(request) = edit_request {
            self.open_text_editor(ctx, request);
        }
    }

    fn open_text_editor(&mut self, ctx: &egui::Context, request: TextEditRequest) {
        self.commit_text_edit(ctx);
        let Some(FigureType::Text(figure)) = self.document.find(request.figure_id) else {
            return;
        };
        self.editing = Some(TextEditState {
            figure_id: request.figure_id,
            font_height: request.font_height,
            buffer: figure.text().to_owned(),
            just_opened: true,
        });
    }

    /// Commit the in-place text edit, if one is open, as an undoable update.
    fn commit_text_edit(&mut self, ctx: &egui::Context) {
        let Some(state) = self.editing.take() else {
            return;
        };
        let measurer = EguiTextMeasurer {
            ctx,
            scale: self.view.scale(),
        };
        if let Err(error) = self
            .document
            .update_text(state.figure_id, state.buffer, &measurer)
        {
            warn!("text edit dropped: {error}");
        }
    }

    fn show_text_editor(&mut self, ctx: &egui::Context) {
        let Some(state) = &mut self.editing else {
            return;
        };
        let Some(figure) = self.document.find(state.figure_id) else {
            // The figure was deleted or undone away while being edited.
            self.editing = None;
            return;
        };

        let origin = self.view.to_screen(figure.bound_rect().top_left());
        let font = FontId::proportional(state.font_height as f32 * self.view.scale());
        let mut commit = false;
        egui::Area::new(egui::Id::new("in-place-text-editor"))
            .fixed_pos(origin)
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut state.buffer)
                        .font(font)
                        .desired_width(ui.available_width()),
                );
                if state.just_opened {
                    response.request_focus();
                    state.just_opened = false;
                } else if response.lost_focus() {
                    commit = true;
                }
            });
        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            commit = true;
        }
        if commit {
            self.commit_text_edit(ctx);
        }
    }

    fn process_canvas_input(&mut self, ctx: &egui::Context, canvas: egui::Rect) {
        // Wheel: ctrl zooms about the cursor, plain scroll pans.
        let (scroll, modifiers, hover) = ctx.input(|input| {
            (input.raw_scroll_delta, input.modifiers, input.pointer.hover_pos())
        });
        if scroll.y != 0.0 || scroll.x != 0.0 {
            if let Some(pos) = hover.filter(|pos| canvas.contains(*pos)) {
                if modifiers.ctrl {
                    let steps = f64::from(scroll.y / WHEEL_NOTCH);
                    self.view.zoom_about(self.view.to_logical(pos), (10.0 - steps) / 10.0);
                } else {
                    use crate::view::ScrollAction::{LineBack, LineForward};
                    if scroll.y != 0.0 {
                        self.view
                            .scroll_vertical(if scroll.y > 0.0 { LineBack } else { LineForward });
                    }
                    if scroll.x != 0.0 {
                        self.view
                            .scroll_horizontal(if scroll.x > 0.0 { LineBack } else { LineForward });
                    }
                }
            }
        }

        for event in self.input.collect(ctx, canvas) {
            match event {
                PointerEvent::Down(pos) => self.gestures.on_button_down(pos),
                PointerEvent::Move(pos) => {
                    for gesture in self.gestures.on_move(pos) {
                        self.dispatch_gesture(ctx, modifiers, gesture);
                    }
                }
                PointerEvent::Up(pos) => {
                    if let Some(gesture) = self.gestures.on_button_up(pos) {
                        self.dispatch_gesture(ctx, modifiers, gesture);
                    }
                }
                PointerEvent::Leave => {
                    if let Some(gesture) = self.gestures.on_leave() {
                        self.dispatch_gesture(ctx, modifiers, gesture);
                    }
                }
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) -> Vec<AppCommand> {
        let mut commands = Vec::new();
        egui::TopBottomPanel::top("menu-bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        commands.push(AppCommand::Exit);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui
                        .add_enabled(self.document.can_undo(), egui::Button::new("Undo"))
                        .clicked()
                    {
                        commands.push(AppCommand::Undo);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.document.can_redo(), egui::Button::new("Redo"))
                        .clicked()
                    {
                        commands.push(AppCommand::Redo);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.document.any_selected(), egui::Button::new("Delete"))
                        .clicked()
                    {
                        commands.push(AppCommand::DeleteSelection);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Figure", |ui| {
                    let tools = [
                        ("Select", ToolKind::Select),
                        ("Line", ToolKind::Line),
                        ("Rectangle", ToolKind::Rectangle),
                        ("Ellipse", ToolKind::Ellipse),
                        ("Circle", ToolKind::Circle),
                        ("Text", ToolKind::Text),
                    ];
                    for (label, kind) in tools {
                        if ui
                            .selectable_label(self.tools.kind() == kind, label)
                            .clicked()
                        {
                            commands.push(AppCommand::Tool(kind));
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("Color", |ui| {
                    let colors = [
                        ("Black", palette::BLACK),
                        ("Red", palette::RED),
                        ("Green", palette::GREEN),
                        ("Blue", palette::BLUE),
                    ];
                    for (label, color) in colors {
                        if ui
                            .selectable_label(self.document.current_color() == color, label)
                            .clicked()
                        {
                            commands.push(AppCommand::SetColor(color));
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Home").clicked() {
                        commands.push(AppCommand::Home);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        commands.push(AppCommand::About);
                        ui.close_menu();
                    }
                });
            });
        });
        commands
    }

    fn keyboard_shortcuts(&self, ctx: &egui::Context) -> Vec<AppCommand> {
        // Shortcuts stay quiet while the text editor (or any other widget)
        // wants the keyboard.
        if self.editing.is_some() || ctx.wants_keyboard_input() {
            return Vec::new();
        }
        let mut commands = Vec::new();
        ctx.input_mut(|input| {
            if input.consume_shortcut(&egui::KeyboardShortcut::new(Modifiers::CTRL, egui::Key::Z)) {
                commands.push(AppCommand::Undo);
            }
            if input.consume_shortcut(&egui::KeyboardShortcut::new(Modifiers::CTRL, egui::Key::Y)) {
                commands.push(AppCommand::Redo);
            }
            if input.key_pressed(egui::Key::Delete) {
                commands.push(AppCommand::DeleteSelection);
            }
        });
        commands
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        egui::Window::new("About")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("eframe_cad: a small vector drawing editor");
                if ui.button("Close").clicked() {
                    self.show_about = false;
                }
            });
    }
}

impl eframe::App for CadApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = self.menu_bar(ctx);
        commands.extend(self.keyboard_shortcuts(ctx));

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
            self.view.set_canvas(response.rect);

            self.process_canvas_input(ctx, response.rect);

            renderer::render(&painter, &self.document, &self.view, &self.tools);
        });

        self.show_text_editor(ctx);
        self.about_window(ctx);

        for command in commands {
            self.dispatch(ctx, command);
        }

        // Damage hints become repaint requests; egui redraws the whole
        // canvas, so the hint granularity is only used to decide *whether*
        // to repaint.
        let mut damage = self.damage.borrow_mut();
        if !damage.is_empty() {
            damage.clear();
            ctx.request_repaint();
        }
    }
}
