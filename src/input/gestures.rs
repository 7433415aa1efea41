use egui::Pos2;

/// Configuration for gesture recognition
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Minimum pointer travel, in device pixels, before a press becomes a drag
    pub drag_start_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_start_distance: 10.0,
        }
    }
}

/// A recognized step of a click or drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Press and release without ever crossing the drag threshold
    Click(Pos2),
    /// Movement crossed the drag threshold; carries the original press position
    DragStart(Pos2),
    /// Pointer motion while dragging
    Dragging(Pos2),
    /// Button released while dragging
    DragEnd(Pos2),
    /// Pointer left the surface mid-drag; the gesture is abandoned, not committed
    DragStop,
}

/// Converts raw button-down / move / button-up / leave events into
/// click / drag-start / dragging / drag-end / drag-stop sequences using a
/// distance threshold.
///
/// While the button is down below the threshold, every position is buffered;
/// the move that crosses it emits `DragStart` with the press position and
/// then replays the buffered motion as `Dragging` events so none is lost.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    is_down: bool,
    is_dragging: bool,
    pressed_positions: Vec<Pos2>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            is_down: false,
            is_dragging: false,
            pressed_positions: Vec::new(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Primary button pressed: enter the pressed state and buffer the position.
    pub fn on_button_down(&mut self, pos: Pos2) {
        self.reset();
        self.is_down = true;
        self.pressed_positions.push(pos);
    }

    /// Pointer moved. Returns the gesture events this movement produced: while
    /// pressed, nothing until the threshold is crossed, then the start of the
    /// drag plus the buffered motion; while dragging, the motion itself.
    pub fn on_move(&mut self, pos: Pos2) -> Vec<GestureEvent> {
        if !self.is_down {
            return Vec::new();
        }
        if self.is_dragging {
            return vec![GestureEvent::Dragging(pos)];
        }

        let Some(&first) = self.pressed_positions.first() else {
            return Vec::new();
        };
        self.pressed_positions.push(pos);
        if first.distance(pos) >= self.config.drag_start_distance {
            let mut events = Vec::with_capacity(self.pressed_positions.len());
            events.push(GestureEvent::DragStart(first));
            events.extend(self.pressed_positions.drain(1..).map(GestureEvent::Dragging));
            self.pressed_positions.clear();
            self.is_dragging = true;
            events
        } else {
            Vec::new()
        }
    }

    /// Primary button released: a `DragEnd` if the threshold was crossed,
    /// otherwise a `Click`. Either way the machine returns to idle.
    pub fn on_button_up(&mut self, pos: Pos2) -> Option<GestureEvent> {
        let event = if self.is_down {
            Some(if self.is_dragging {
                GestureEvent::DragEnd(pos)
            } else {
                GestureEvent::Click(pos)
            })
        } else {
            None
        };
        self.reset();
        event
    }

    /// Pointer left the surface. A drag in progress is abandoned with
    /// `DragStop`; a press that never became a drag is left pending, so the
    /// gesture can resume if the pointer comes back with the button held.
    pub fn on_leave(&mut self) -> Option<GestureEvent> {
        if self.is_down && self.is_dragging {
            self.reset();
            Some(GestureEvent::DragStop)
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.is_down = false;
        self.is_dragging = false;
        self.pressed_positions.clear();
    }
}
