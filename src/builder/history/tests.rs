//! Unit tests for the history module.

use super::super::component::PlacedComponent;
use super::super::layout::Layout;
use super::LayoutHistory;

fn layout_of(values: &[&'static str]) -> Layout {
    Layout::from(
        values
            .iter()
            .copied()
            .map(PlacedComponent::number)
            .collect::<Vec<_>>(),
    )
}

#[test]
fn test_initial_history_holds_empty_layout() {
    let history = LayoutHistory::default();
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert!(history.current().is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_length_is_commits_plus_one() {
    let mut history = LayoutHistory::default();
    for n in 1..=5 {
        history.commit(layout_of(&["1"; 5][..n]));
        assert_eq!(history.len(), n + 1);
        assert_eq!(history.cursor(), n);
    }
}

#[test]
fn test_undo_at_floor_is_noop() {
    let mut history = LayoutHistory::default();
    assert!(history.undo().is_none());
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_redo_at_ceiling_is_noop() {
    let mut history = LayoutHistory::default();
    history.commit(layout_of(&["1"]));
    assert!(history.redo().is_none());
    assert_eq!(history.cursor(), 1);
}

#[test]
fn test_undo_then_redo_round_trip() {
    let mut history = LayoutHistory::default();
    history.commit(layout_of(&["1"]));
    history.commit(layout_of(&["1", "2"]));
    history.commit(layout_of(&["1", "2", "3"]));
    history.undo();
    // Cursor is now strictly inside the history
    assert_eq!(history.cursor(), 2);

    let before = history.current().clone();
    history.undo();
    let restored = history.redo().cloned();
    assert_eq!(restored, Some(before.clone()));
    assert_eq!(history.current(), &before);
}

#[test]
fn test_undo_returns_previous_snapshot() {
    let mut history = LayoutHistory::default();
    history.commit(layout_of(&["4"]));
    history.commit(layout_of(&["4", "2"]));
    assert_eq!(history.undo(), Some(&layout_of(&["4"])));
    assert_eq!(history.undo(), Some(&Layout::new()));
    assert_eq!(history.undo_count(), 0);
    assert_eq!(history.redo_count(), 2);
}

#[test]
fn test_commit_truncates_redo_branch() {
    let mut history = LayoutHistory::default();
    for n in 1..=4 {
        history.commit(layout_of(&["9"; 4][..n]));
    }
    history.undo();
    history.undo();
    let cursor = history.cursor();
    assert!(history.can_redo());

    history.commit(layout_of(&["7"]));
    assert_eq!(history.len(), cursor + 2);
    assert!(!history.can_redo());
    assert_eq!(history.current(), &layout_of(&["7"]));
}

#[test]
fn test_limit_drops_oldest_snapshots() {
    let mut history = LayoutHistory::default();
    history.set_limit(Some(3));
    for n in 1..=5 {
        history.commit(layout_of(&["1"; 5][..n]));
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.current().len(), 5);

    history.undo();
    history.undo();
    assert!(!history.can_undo());
    assert_eq!(history.current().len(), 3);
}

#[test]
fn test_zero_limit_keeps_current_snapshot() {
    let mut history = LayoutHistory::default();
    history.set_limit(Some(0));
    assert_eq!(history.limit(), Some(1));
    history.commit(layout_of(&["1"]));
    assert_eq!(history.len(), 1);
    assert_eq!(history.current(), &layout_of(&["1"]));
}

#[test]
fn test_lowering_limit_keeps_cursor_snapshot() {
    let mut history = LayoutHistory::default();
    for n in 1..=4 {
        history.commit(layout_of(&["2"; 4][..n]));
    }
    history.undo();
    history.undo();
    let current = history.current().clone();

    history.set_limit(Some(2));
    assert_eq!(history.len(), 2);
    assert_eq!(history.current(), &current);
    assert!(!history.can_undo());
    // The nearest redo step is kept, the one past it is dropped
    assert_eq!(history.redo_count(), 1);
    assert_eq!(history.redo(), Some(&layout_of(&["2"; 3])));
    assert!(!history.can_redo());
}

#[test]
fn test_lowering_limit_at_oldest_snapshot_drops_redo_steps() {
    let mut history = LayoutHistory::default();
    for n in 1..=3 {
        history.commit(layout_of(&["3"; 3][..n]));
    }
    while history.undo().is_some() {}
    assert_eq!(history.len(), 4);

    history.set_limit(Some(1));
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert!(history.current().is_empty());
    assert!(!history.can_redo());
}
