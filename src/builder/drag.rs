//! Drag interaction state machine.
//!
//! Pointer events from the UI are translated into calls on [`DragState`], which
//! answers with a [`DragEffect`] describing what should happen to the layout.
//! The state machine itself never touches the layout or history, so any input
//! source (egui pointer drags, keyboard shortcuts) can drive it.

use super::component::PlacedComponent;

/// What the user is currently dragging, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A palette template is being dragged toward the build area
    FromPalette(PlacedComponent),
    /// A placed tile is being dragged; `source_index` follows it through live reorders
    Internal { source_index: usize },
}

/// Where a drag was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    BuildArea,
    Outside,
}

/// Layout change requested by a drag transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    None,
    /// Append the component and commit
    Append(PlacedComponent),
    /// Live reorder, not committed
    Reorder { from: usize, to: usize },
    /// Commit the live layout (end of an internal drag)
    Commit,
    /// Throw away live reorders and restore the last committed layout
    Revert,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// Start dragging a palette tile. Ignored if a drag is already running.
    pub fn begin_palette(&mut self, component: PlacedComponent) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragState::FromPalette(component);
        true
    }

    /// Start dragging the placed tile at `index`. Ignored if a drag is already
    /// running or `index` is not a valid position.
    pub fn begin_internal(&mut self, index: usize, layout_len: usize) -> bool {
        if self.is_dragging() || index >= layout_len {
            return false;
        }
        *self = DragState::Internal {
            source_index: index,
        };
        true
    }

    /// The pointer crossed onto the placed tile at `target`.
    pub fn drag_over(&mut self, target: usize, layout_len: usize) -> DragEffect {
        match self {
            DragState::Internal { source_index } if *source_index != target && target < layout_len => {
                let from = *source_index;
                *source_index = target;
                DragEffect::Reorder { from, to: target }
            }
            _ => DragEffect::None,
        }
    }

    /// The pointer was released over `target`. Always returns to `Idle`.
    pub fn drop_on(&mut self, target: DropTarget) -> DragEffect {
        let effect = match (*self, target) {
            (DragState::FromPalette(component), DropTarget::BuildArea) => {
                DragEffect::Append(component)
            }
            (DragState::FromPalette(_), DropTarget::Outside) => DragEffect::None,
            (DragState::Internal { .. }, _) => DragEffect::Commit,
            (DragState::Idle, _) => DragEffect::None,
        };
        *self = DragState::Idle;
        effect
    }

    /// The drag was abandoned. Always returns to `Idle`.
    pub fn cancel(&mut self) -> DragEffect {
        let effect = match self {
            DragState::Internal { .. } => DragEffect::Revert,
            _ => DragEffect::None,
        };
        *self = DragState::Idle;
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEVEN: PlacedComponent = PlacedComponent::number("7");

    #[test]
    fn test_default_is_idle() {
        assert_eq!(DragState::default(), DragState::Idle);
        assert!(!DragState::default().is_dragging());
    }

    #[test]
    fn test_palette_drop_on_build_area_appends() {
        let mut state = DragState::Idle;
        assert!(state.begin_palette(SEVEN));
        assert_eq!(state, DragState::FromPalette(SEVEN));
        assert_eq!(state.drop_on(DropTarget::BuildArea), DragEffect::Append(SEVEN));
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_palette_drop_outside_does_nothing() {
        let mut state = DragState::Idle;
        state.begin_palette(SEVEN);
        assert_eq!(state.drop_on(DropTarget::Outside), DragEffect::None);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_palette_drag_over_tiles_does_not_reorder() {
        let mut state = DragState::Idle;
        state.begin_palette(SEVEN);
        assert_eq!(state.drag_over(0, 3), DragEffect::None);
        assert_eq!(state, DragState::FromPalette(SEVEN));
    }

    #[test]
    fn test_internal_drag_tracks_source_through_reorders() {
        let mut state = DragState::Idle;
        assert!(state.begin_internal(0, 4));
        assert_eq!(state.drag_over(1, 4), DragEffect::Reorder { from: 0, to: 1 });
        assert_eq!(state.drag_over(3, 4), DragEffect::Reorder { from: 1, to: 3 });
        assert_eq!(state, DragState::Internal { source_index: 3 });
    }

    #[test]
    fn test_internal_drag_over_own_position_is_noop() {
        let mut state = DragState::Idle;
        state.begin_internal(2, 4);
        assert_eq!(state.drag_over(2, 4), DragEffect::None);
        assert_eq!(state.drag_over(7, 4), DragEffect::None);
        assert_eq!(state, DragState::Internal { source_index: 2 });
    }

    #[test]
    fn test_internal_drop_commits_anywhere() {
        let mut state = DragState::Idle;
        state.begin_internal(1, 2);
        assert_eq!(state.drop_on(DropTarget::Outside), DragEffect::Commit);
        state.begin_internal(1, 2);
        assert_eq!(state.drop_on(DropTarget::BuildArea), DragEffect::Commit);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_internal_cancel_reverts() {
        let mut state = DragState::Idle;
        state.begin_internal(1, 2);
        assert_eq!(state.cancel(), DragEffect::Revert);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_palette_cancel_does_nothing() {
        let mut state = DragState::Idle;
        state.begin_palette(SEVEN);
        assert_eq!(state.cancel(), DragEffect::None);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_begin_internal_rejects_invalid_index() {
        let mut state = DragState::Idle;
        assert!(!state.begin_internal(3, 3));
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_cannot_start_second_drag() {
        let mut state = DragState::Idle;
        state.begin_internal(0, 2);
        assert!(!state.begin_palette(SEVEN));
        assert!(!state.begin_internal(1, 2));
        assert_eq!(state, DragState::Internal { source_index: 0 });
    }

    #[test]
    fn test_drop_while_idle_does_nothing() {
        let mut state = DragState::Idle;
        assert_eq!(state.drop_on(DropTarget::BuildArea), DragEffect::None);
        assert_eq!(state.cancel(), DragEffect::None);
    }
}
