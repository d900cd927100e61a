//! Messages and Bevy systems for undo/redo.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::super::state::CalculatorBuilder;

/// Message to step the layout back one snapshot
#[derive(Message)]
pub struct UndoRequest;

/// Message to step the layout forward one snapshot
#[derive(Message)]
pub struct RedoRequest;

/// System to turn Ctrl+Z / Ctrl+Y / Ctrl+Shift+Z into history requests
pub fn handle_history_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut undo_events: MessageWriter<UndoRequest>,
    mut redo_events: MessageWriter<RedoRequest>,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    if !ctrl {
        return;
    }

    // Ctrl+Y or Ctrl+Shift+Z = redo
    if keyboard.just_pressed(KeyCode::KeyY) || (shift && keyboard.just_pressed(KeyCode::KeyZ)) {
        redo_events.write(RedoRequest);
    } else if keyboard.just_pressed(KeyCode::KeyZ) {
        undo_events.write(UndoRequest);
    }
}

/// System to apply undo/redo requests from the toolbar and shortcuts
pub fn apply_history_requests(
    mut undo_events: MessageReader<UndoRequest>,
    mut redo_events: MessageReader<RedoRequest>,
    mut builder: ResMut<CalculatorBuilder>,
) {
    for _ in undo_events.read() {
        builder.undo();
    }
    for _ in redo_events.read() {
        builder.redo();
    }
}
