use egui::{Context, Pos2};

pub mod gestures;
pub use gestures::{GestureConfig, GestureEvent, GestureRecognizer};

/// A raw pointer event on the canvas, before gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button was pressed inside the canvas
    Down(Pos2),
    /// Pointer moved (with or without the button held)
    Move(Pos2),
    /// Primary button was released
    Up(Pos2),
    /// Pointer left the window
    Leave,
}

/// Translates egui's per-frame pointer state into the discrete
/// button-down / move / button-up / leave callbacks the gesture
/// recognizer consumes.
pub struct InputCollector {
    last_hover: Option<Pos2>,
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputCollector {
    pub fn new() -> Self {
        Self { last_hover: None }
    }

    /// Process raw egui input and generate pointer events. Button presses
    /// only count when they start inside the canvas rectangle.
    pub fn collect(&mut self, ctx: &Context, canvas: egui::Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            if let Some(pos) = hover {
                if Some(pos) != self.last_hover {
                    events.push(PointerEvent::Move(pos));
                }
                if input.pointer.primary_pressed() && canvas.contains(pos) {
                    events.push(PointerEvent::Down(pos));
                }
                if input.pointer.primary_released() {
                    events.push(PointerEvent::Up(pos));
                }
            } else if self.last_hover.is_some() {
                events.push(PointerEvent::Leave);
            }
            self.last_hover = hover;
        });
        events
    }
}
