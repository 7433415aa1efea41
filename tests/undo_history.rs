use eframe_cad::command::{Edit, UndoHistory};
use eframe_cad::figure::{Figure, FigureType, factory};
use eframe_cad::geometry::{Line, Point};

// Helper to create a distinct line figure for journal records
fn line_figure(offset: i32) -> FigureType {
    factory::create_line(Line::new(Point::new(offset, 0), Point::new(offset + 10, 10)))
}

fn ids(edits: &[Edit]) -> Vec<usize> {
    edits.iter().map(Edit::figure_id).collect()
}

#[test]
fn fresh_history_has_nothing_to_undo_or_redo() {
    let mut history = UndoHistory::new();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn push_auto_opens_a_group() {
    let mut history = UndoHistory::new();
    history.push(Edit::Add { figure: line_figure(0) });
    history.end_group();
    assert!(history.can_undo());
}

#[test]
fn empty_groups_are_discarded() {
    let mut history = UndoHistory::new();
    history.begin_group();
    history.end_group();
    assert!(!history.can_undo());

    // An empty open group left behind by begin_group is also discarded.
    history.begin_group();
    history.begin_group();
    history.push(Edit::Add { figure: line_figure(0) });
    history.end_group();
    assert!(history.can_undo());
    history.undo();
    assert!(!history.can_undo());
}

#[test]
fn undo_inverts_the_group_in_reverse_order() {
    let a = line_figure(0);
    let b = line_figure(100);
    let c = line_figure(200);
    let (id_a, id_b, id_c) = (a.id(), b.id(), c.id());

    let mut history = UndoHistory::new();
    history.begin_group();
    history.push(Edit::Add { figure: a });
    history.push(Edit::Add { figure: b });
    history.push(Edit::Delete { figure: c });
    history.end_group();

    let undone = history.undo().expect("one group to undo");
    assert_eq!(ids(&undone), vec![id_c, id_b, id_a]);
    assert!(matches!(undone[0], Edit::Add { .. }), "Delete inverts to Add");
    assert!(matches!(undone[1], Edit::Delete { .. }), "Add inverts to Delete");
    assert!(matches!(undone[2], Edit::Delete { .. }));
}

#[test]
fn redo_replays_the_group_in_original_order_uninverted() {
    let a = line_figure(0);
    let b = line_figure(100);
    let (id_a, id_b) = (a.id(), b.id());

    let mut history = UndoHistory::new();
    history.begin_group();
    history.push(Edit::Add { figure: a });
    history.push(Edit::Delete { figure: b });
    history.end_group();

    history.undo().expect("undo");
    let redone = history.redo().expect("redo");
    assert_eq!(ids(&redone), vec![id_a, id_b]);
    assert!(matches!(redone[0], Edit::Add { .. }));
    assert!(matches!(redone[1], Edit::Delete { .. }));
}

#[test]
fn update_inverts_by_swapping_snapshots() {
    let before = line_figure(0);
    let after = line_figure(100);

    let edit = Edit::Update { old: before.clone(), new: after.clone() };
    let inverted = edit.invert();
    let Edit::Update { old, new } = inverted else {
        panic!("Update must invert to Update");
    };
    assert_eq!(old.id(), after.id());
    assert_eq!(new.id(), before.id());
}

#[test]
fn cursor_walks_back_and_forth_over_multiple_groups() {
    let mut history = UndoHistory::new();
    for offset in [0, 100] {
        history.begin_group();
        history.push(Edit::Add { figure: line_figure(offset) });
        history.end_group();
    }

    assert!(history.undo().is_some());
    assert!(history.undo().is_some());
    assert!(!history.can_undo());
    assert!(history.undo().is_none());

    assert!(history.redo().is_some());
    assert!(history.redo().is_some());
    assert!(!history.can_redo());
    assert!(history.redo().is_none());
}

#[test]
fn journaling_after_undo_discards_the_redo_groups() {
    let first = line_figure(0);
    let second = line_figure(100);
    let third = line_figure(200);
    let (id_first, id_third) = (first.id(), third.id());

    let mut history = UndoHistory::new();
    history.begin_group();
    history.push(Edit::Add { figure: first });
    history.end_group();
    history.begin_group();
    history.push(Edit::Add { figure: second });
    history.end_group();

    history.undo().expect("undo the second group");
    assert!(history.can_redo());

    history.begin_group();
    history.push(Edit::Add { figure: third });
    history.end_group();

    // The undone group is gone for good.
    assert!(!history.can_redo());

    let undone = history.undo().expect("newest group");
    assert_eq!(ids(&undone), vec![id_third]);
    let undone = history.undo().expect("oldest group");
    assert_eq!(ids(&undone), vec![id_first]);
    assert!(!history.can_undo());
}
