use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::builder::{CalculatorBuilder, RedoRequest, UndoRequest};
use crate::theme::Theme;

use super::HelpWindowState;

/// Header bar with the title, undo/redo and the theme toggle
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    builder: Res<CalculatorBuilder>,
    mut theme: ResMut<Theme>,
    mut help_state: ResMut<HelpWindowState>,
    mut undo_events: MessageWriter<UndoRequest>,
    mut redo_events: MessageWriter<RedoRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Calculator Builder").size(22.0).strong());

                // Right-aligned controls, laid out right to left
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 6.0;

                    if ui
                        .add(egui::Button::new("?").min_size(egui::vec2(28.0, 28.0)))
                        .on_hover_text("Help (F1)")
                        .clicked()
                    {
                        help_state.is_open = !help_state.is_open;
                    }

                    let toggle = egui::Button::new(
                        egui::RichText::new(theme.toggle_icon()).size(16.0),
                    )
                    .corner_radius(14)
                    .min_size(egui::vec2(28.0, 28.0));
                    if ui.add(toggle).on_hover_text(theme.toggle_tooltip()).clicked() {
                        *theme = theme.toggled();
                        info!("Switched to {:?} theme", *theme);
                    }

                    ui.separator();

                    let history = builder.history();
                    if ui
                        .add_enabled(
                            builder.can_redo(),
                            egui::Button::new("Redo").min_size(egui::vec2(0.0, 28.0)),
                        )
                        .on_hover_text(format!("Redo [Ctrl+Y] ({} available)", history.redo_count()))
                        .clicked()
                    {
                        redo_events.write(RedoRequest);
                    }
                    if ui
                        .add_enabled(
                            builder.can_undo(),
                            egui::Button::new("Undo").min_size(egui::vec2(0.0, 28.0)),
                        )
                        .on_hover_text(format!("Undo [Ctrl+Z] ({} available)", history.undo_count()))
                        .clicked()
                    {
                        undo_events.write(UndoRequest);
                    }
                });
            });
        });
    Ok(())
}
