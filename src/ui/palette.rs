use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::builder::{CalculatorBuilder, palette};
use crate::constants::{GRID_COLUMNS, PALETTE_PANEL_WIDTH, PALETTE_TILE_SIZE};
use crate::theme::Theme;

use super::tiles::tile_button;

/// Left side panel with the fixed set of tiles to drag from
pub fn palette_ui(
    mut contexts: EguiContexts,
    mut builder: ResMut<CalculatorBuilder>,
    theme: Res<Theme>,
) -> Result {
    let colors = theme.palette();

    egui::SidePanel::left("palette")
        .resizable(false)
        .exact_width(PALETTE_PANEL_WIDTH)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(8.0);
            ui.heading("Components");
            ui.label(
                egui::RichText::new("Drag components to build your calculator")
                    .color(colors.hint_text)
                    .size(12.0),
            );
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(8.0);

            egui::Grid::new("palette_grid")
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    for (index, component) in palette().iter().enumerate() {
                        let response = ui.add(tile_button(component, colors, PALETTE_TILE_SIZE));
                        if response.drag_started() {
                            builder.begin_palette_drag(*component);
                        } else if response.clicked() {
                            // Click-to-append for users who can't drag
                            builder.add_component(*component);
                        }
                        response.on_hover_text(format!(
                            "{} {}: drag to the preview or click to append",
                            component.kind().display_name(),
                            component.value()
                        ));

                        if (index + 1) % GRID_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    Ok(())
}
