//! The application state owned by the UI root.
//!
//! [`CalculatorBuilder`] is the only place the layout, its history, the drag
//! state and the calculator live. UI systems read it and call its operations;
//! nothing else mutates the layout.

use bevy::prelude::*;

use crate::calculator::Calculator;

use super::component::PlacedComponent;
use super::drag::{DragEffect, DragState, DropTarget};
use super::history::LayoutHistory;
use super::layout::Layout;

#[derive(Resource, Debug, Clone, Default)]
pub struct CalculatorBuilder {
    layout: Layout,
    history: LayoutHistory,
    drag: DragState,
    calculator: Calculator,
}

impl CalculatorBuilder {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn history(&self) -> &LayoutHistory {
        &self.history
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history.set_limit(limit);
    }

    /// The component currently being dragged, for the drag ghost.
    pub fn dragged_component(&self) -> Option<PlacedComponent> {
        match self.drag {
            DragState::Idle => None,
            DragState::FromPalette(component) => Some(component),
            DragState::Internal { source_index } => self.layout.get(source_index).copied(),
        }
    }

    // ------------------------------------------------------------------
    // Committed layout operations
    // ------------------------------------------------------------------

    /// Append a component and commit. Used by palette clicks; drops go through
    /// [`Self::drop_on`].
    pub fn add_component(&mut self, component: PlacedComponent) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        self.layout.append(component);
        self.commit();
        true
    }

    /// Move a component and commit in one step, for non-pointer input.
    pub fn move_component(&mut self, from: usize, to: usize) -> bool {
        if self.drag.is_dragging() || !self.layout.reorder(from, to) {
            debug!("Ignored move {} -> {}", from, to);
            return false;
        }
        self.commit();
        true
    }

    /// Remove the component at `index` and commit. Out-of-range indices and
    /// requests during a drag are ignored.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        match self.layout.remove(index) {
            Some(component) => {
                debug!("Removed '{}' at {}", component.value(), index);
                self.commit();
                true
            }
            None => {
                debug!("Ignored remove at {} (layout has {})", index, self.layout.len());
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // History navigation
    // ------------------------------------------------------------------

    pub fn can_undo(&self) -> bool {
        !self.drag.is_dragging() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.drag.is_dragging() && self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        match self.history.undo() {
            Some(layout) => {
                self.layout = layout.clone();
                debug!("Undo -> snapshot {}", self.history.cursor());
                true
            }
            None => {
                debug!("Nothing to undo");
                false
            }
        }
    }

    pub fn redo(&mut self) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        match self.history.redo() {
            Some(layout) => {
                self.layout = layout.clone();
                debug!("Redo -> snapshot {}", self.history.cursor());
                true
            }
            None => {
                debug!("Nothing to redo");
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Drag interaction
    // ------------------------------------------------------------------

    pub fn begin_palette_drag(&mut self, component: PlacedComponent) -> bool {
        let started = self.drag.begin_palette(component);
        if started {
            debug!("Dragging '{}' from palette", component.value());
        }
        started
    }

    pub fn begin_internal_drag(&mut self, index: usize) -> bool {
        let started = self.drag.begin_internal(index, self.layout.len());
        if started {
            debug!("Dragging placed tile {}", index);
        }
        started
    }

    /// The pointer is over the placed tile at `index`. Reorders live without
    /// touching history.
    pub fn drag_over(&mut self, index: usize) {
        let effect = self.drag.drag_over(index, self.layout.len());
        self.apply(effect);
    }

    /// The pointer was released over `target`.
    pub fn drop_on(&mut self, target: DropTarget) {
        let effect = self.drag.drop_on(target);
        debug!("Drop on {:?}: {:?}", target, effect);
        self.apply(effect);
    }

    /// Abandon the current drag, undoing any live reorder.
    pub fn cancel_drag(&mut self) {
        let effect = self.drag.cancel();
        if effect != DragEffect::None {
            debug!("Drag cancelled");
        }
        self.apply(effect);
    }

    // ------------------------------------------------------------------
    // Calculator
    // ------------------------------------------------------------------

    /// Feed the value of the placed tile at `index` to the calculator.
    pub fn press(&mut self, index: usize) -> bool {
        let Some(component) = self.layout.get(index).copied() else {
            return false;
        };
        self.calculator.press(component.value());
        true
    }

    fn apply(&mut self, effect: DragEffect) {
        match effect {
            DragEffect::None => {}
            DragEffect::Append(component) => {
                self.layout.append(component);
                self.commit();
            }
            DragEffect::Reorder { from, to } => {
                if self.layout.reorder(from, to) {
                    debug!("Live reorder {} -> {}", from, to);
                }
            }
            DragEffect::Commit => {
                // A drag that ends where it started adds no snapshot
                if self.layout != *self.history.current() {
                    self.commit();
                }
            }
            DragEffect::Revert => {
                self.layout = self.history.current().clone();
            }
        }
    }

    fn commit(&mut self) {
        self.history.commit(self.layout.clone());
        debug!(
            "Committed layout of {} tiles (snapshot {}/{})",
            self.layout.len(),
            self.history.cursor() + 1,
            self.history.len()
        );
    }
}
