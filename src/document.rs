use std::cell::RefCell;

use egui::Color32;
use log::{debug, warn};

use crate::command::{Edit, UndoHistory};
use crate::error::CadError;
use crate::figure::{Figure, FigureId, FigureType, TextMeasurer, palette};
use crate::geometry::{Point, Rect, Size};

/// Logical extent of the square drawing area.
pub const MODEL_SIZE: i32 = 1_000_000;

/// What changed, for views scheduling repaints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Damage {
    /// One figure's region changed.
    Figure(FigureId),
    /// Redraw everything.
    Everything,
}

/// Receives damage hints whenever the document changes.
pub trait DamageListener {
    fn on_damage(&mut self, damage: &Damage);
}

/// A simple bus for broadcasting damage hints to registered listeners.
/// Listeners are invoked synchronously, in subscription order.
pub struct DamageBus {
    listeners: RefCell<Vec<Box<dyn DamageListener>>>,
}

impl std::fmt::Debug for DamageBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DamageBus")
            .field("listeners", &format!("<{} listeners>", self.listeners.borrow().len()))
            .finish()
    }
}

impl Default for DamageBus {
    fn default() -> Self {
        Self::new()
    }
}

impl DamageBus {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, listener: Box<dyn DamageListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn emit(&self, damage: &Damage) {
        for listener in &mut *self.listeners.borrow_mut() {
            listener.on_damage(damage);
        }
    }
}

/// The drawing document: the figure collection in paint order (back to
/// front), the fixed canvas area, the color applied to new figures, and the
/// undo journal. Every mutation is bracketed by one journal group and ends
/// with a damage notification.
pub struct Document {
    area: Rect,
    figures: Vec<FigureType>,
    current_color: Color32,
    history: UndoHistory,
    damage_bus: DamageBus,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            area: Rect::from_origin_size(Point::default(), Size::new(MODEL_SIZE, MODEL_SIZE)),
            figures: Vec::new(),
            current_color: palette::BLACK,
            history: UndoHistory::new(),
            damage_bus: DamageBus::new(),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn current_color(&self) -> Color32 {
        self.current_color
    }

    pub fn set_current_color(&mut self, color: Color32) {
        self.current_color = color;
    }

    /// All figures in paint order, back to front.
    pub fn figures(&self) -> &[FigureType] {
        &self.figures
    }

    pub fn find(&self, id: FigureId) -> Option<&FigureType> {
        self.position_of(id).map(|index| &self.figures[index])
    }

    pub fn any_selected(&self) -> bool {
        self.figures.iter().any(Figure::is_selected)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Subscribe to damage notifications.
    pub fn subscribe(&self, listener: Box<dyn DamageListener>) {
        self.damage_bus.subscribe(listener);
    }

    /// Append a figure: it takes the current color, becomes the sole
    /// selection, and is journaled as one Add group.
    pub fn add(&mut self, mut figure: FigureType) {
        self.history.begin_group();
        self.deselect_all();
        figure.set_color(self.current_color);
        figure.select(true);
        let id = figure.id();
        debug!("add {} figure {}", figure.figure_type(), id);
        self.history.push(Edit::Add { figure: figure.clone() });
        self.figures.push(figure);
        self.history.end_group();
        self.notify(Damage::Figure(id));
    }

    /// Remove every selected figure, journaling one Delete per removal in
    /// removal order. An empty selection is a silent no-op.
    pub fn delete_selected(&mut self) {
        self.history.begin_group();
        let mut removed = false;
        let mut index = 0;
        while index < self.figures.len() {
            if self.figures[index].is_selected() {
                let figure = self.figures.remove(index);
                debug!("delete {} figure {}", figure.figure_type(), figure.id());
                self.history.push(Edit::Delete { figure });
                removed = true;
            } else {
                index += 1;
            }
        }
        self.history.end_group();
        if removed {
            self.notify(Damage::Everything);
        }
    }

    /// Flip the selection of the figure nearest `point`, if one lies
    /// strictly within `minimum_distance`.
    pub fn toggle_select(&mut self, point: Point, minimum_distance: i64) {
        self.history.begin_group();
        if let Some(index) = self.search_index(point, minimum_distance) {
            let figure = &mut self.figures[index];
            figure.toggle_select();
            let id = figure.id();
            self.notify(Damage::Figure(id));
        }
        self.history.end_group();
    }

    /// Make the figure nearest `point` the only selection; with no figure in
    /// range, just clear the selection.
    pub fn select_alone(&mut self, point: Point, minimum_distance: i64) {
        self.history.begin_group();
        self.deselect_all();
        if let Some(index) = self.search_index(point, minimum_distance) {
            let figure = &mut self.figures[index];
            figure.select(true);
            let id = figure.id();
            self.notify(Damage::Figure(id));
        }
        self.history.end_group();
    }

    /// The figure closest to `point` among those strictly closer than
    /// `minimum_distance`. Exact ties keep the earlier figure in paint order.
    pub fn search(&self, point: Point, minimum_distance: i64) -> Option<&FigureType> {
        self.search_index(point, minimum_distance).map(|index| &self.figures[index])
    }

    /// Replace a text figure's content, journaled as an undoable Update
    /// carrying before/after snapshots. The bounding box is remeasured.
    pub fn update_text(
        &mut self,
        id: FigureId,
        text: String,
        measurer: &dyn TextMeasurer,
    ) -> Result<(), CadError> {
        let index = self.position_of(id).ok_or(CadError::UnknownFigure(id))?;
        let FigureType::Text(figure) = &mut self.figures[index] else {
            return Err(CadError::NotATextFigure(id));
        };
        if figure.text() == text {
            return Ok(());
        }

        let old = FigureType::Text(figure.clone());
        figure.set_text(text, measurer);
        let new = FigureType::Text(figure.clone());

        self.history.begin_group();
        self.history.push(Edit::Update { old, new });
        self.history.end_group();
        self.notify(Damage::Figure(id));
        Ok(())
    }

    /// Reverse the most recent journal group. A no-op at the boundary.
    pub fn undo(&mut self) {
        if let Some(edits) = self.history.undo() {
            debug!("undo {} edit(s)", edits.len());
            self.apply(edits);
        }
    }

    /// Reapply the most recently undone journal group. A no-op at the boundary.
    pub fn redo(&mut self) {
        if let Some(edits) = self.history.redo() {
            debug!("redo {} edit(s)", edits.len());
            self.apply(edits);
        }
    }

    fn apply(&mut self, edits: Vec<Edit>) {
        for edit in edits {
            self.apply_edit(edit);
        }
    }

    fn apply_edit(&mut self, edit: Edit) {
        match edit {
            Edit::Add { figure } => {
                let id = figure.id();
                self.figures.push(figure);
                self.notify(Damage::Figure(id));
            }
            Edit::Delete { figure } => {
                let id = figure.id();
                match self.position_of(id) {
                    Some(index) => {
                        self.figures.remove(index);
                        self.notify(Damage::Figure(id));
                    }
                    None => warn!("journal names figure {id}, but the document does not contain it"),
                }
            }
            Edit::Update { new, .. } => {
                let id = new.id();
                match self.position_of(id) {
                    Some(index) => {
                        self.figures[index] = new;
                        self.notify(Damage::Figure(id));
                    }
                    None => warn!("journal names figure {id}, but the document does not contain it"),
                }
            }
        }
    }

    fn search_index(&self, point: Point, minimum_distance: i64) -> Option<usize> {
        let mut minimum = minimum_distance;
        let mut target = None;
        for (index, figure) in self.figures.iter().enumerate() {
            let distance = figure.distance(point);
            if distance < minimum {
                minimum = distance;
                target = Some(index);
            }
        }
        target
    }

    fn position_of(&self, id: FigureId) -> Option<usize> {
        self.figures.iter().position(|figure| figure.id() == id)
    }

    fn deselect_all(&mut self) {
        for index in 0..self.figures.len() {
            if self.figures[index].is_selected() {
                self.figures[index].select(false);
                let id = self.figures[index].id();
                self.notify(Damage::Figure(id));
            }
        }
    }

    fn notify(&self, damage: Damage) {
        self.damage_bus.emit(&damage);
    }
}
