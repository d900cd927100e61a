//! Help popup window and keyboard shortcut handling.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::HelpWindowState;

/// Renders the help popup window with keyboard shortcuts and usage instructions.
pub fn help_popup_ui(
    mut contexts: EguiContexts,
    mut help_state: ResMut<HelpWindowState>,
) -> Result {
    if !help_state.is_open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Help")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.heading("Calculator Builder");
            ui.label(concat!("Version ", env!("CARGO_PKG_VERSION")));
            ui.separator();

            render_building_section(ui);

            ui.add_space(10.0);
            ui.separator();

            render_shortcuts_section(ui);

            ui.add_space(10.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui.button("Close").clicked() {
                    help_state.is_open = false;
                }
            });
        });

    // Close on Escape key
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        help_state.is_open = false;
    }

    Ok(())
}

fn render_building_section(ui: &mut egui::Ui) {
    ui.heading("Building");
    egui::Grid::new("building_grid")
        .num_columns(2)
        .spacing([20.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Drag tile");
            ui.label("Palette to preview appends it");
            ui.end_row();

            ui.strong("Click tile");
            ui.label("In the palette, appends it");
            ui.end_row();

            ui.strong("Drag placed tile");
            ui.label("Rearrange the calculator");
            ui.end_row();

            ui.strong("Right-click tile");
            ui.label("Move left/right or remove");
            ui.end_row();

            ui.strong("Click placed tile");
            ui.label("Use the calculator (= evaluates, C clears)");
            ui.end_row();
        });
}

fn render_shortcuts_section(ui: &mut egui::Ui) {
    ui.heading("Shortcuts");
    egui::Grid::new("shortcuts_grid")
        .num_columns(2)
        .spacing([20.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Ctrl+Z");
            ui.label("Undo");
            ui.end_row();

            ui.strong("Ctrl+Y / Ctrl+Shift+Z");
            ui.label("Redo");
            ui.end_row();

            ui.strong("Escape");
            ui.label("Cancel the current drag");
            ui.end_row();

            ui.strong("F1");
            ui.label("Toggle this window");
            ui.end_row();
        });
}

/// Handles the F1 keyboard shortcut to toggle help window.
pub fn handle_help_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut help_state: ResMut<HelpWindowState>,
    mut contexts: EguiContexts,
) {
    // Don't toggle if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::F1) {
        help_state.is_open = !help_state.is_open;
    }
}
