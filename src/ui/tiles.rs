//! Shared tile widgets for the palette, the preview grid and the drag ghost.

use bevy_egui::egui;

use crate::builder::PlacedComponent;
use crate::theme::ThemePalette;

/// Fill and text color for a tile
pub fn tile_colors(component: &PlacedComponent, colors: &ThemePalette) -> (egui::Color32, egui::Color32) {
    if component.is_operator() {
        (colors.operator_fill, colors.operator_text)
    } else {
        (colors.number_fill, colors.number_text)
    }
}

/// A draggable, clickable tile button
pub fn tile_button(
    component: &PlacedComponent,
    colors: &ThemePalette,
    size: [f32; 2],
) -> egui::Button<'static> {
    let (fill, text) = tile_colors(component, colors);
    egui::Button::new(
        egui::RichText::new(component.value())
            .size(18.0)
            .strong()
            .color(text),
    )
    .fill(fill)
    .corner_radius(8)
    .min_size(egui::vec2(size[0], size[1]))
    .sense(egui::Sense::click_and_drag())
}

/// Floating copy of the dragged tile that follows the pointer
pub fn drag_ghost(
    ctx: &egui::Context,
    component: &PlacedComponent,
    colors: &ThemePalette,
    pointer: egui::Pos2,
) {
    let (fill, text) = tile_colors(component, colors);
    egui::Area::new(egui::Id::new("drag_ghost"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pointer + egui::vec2(10.0, 10.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(fill.gamma_multiply(0.85))
                .corner_radius(8)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(component.value())
                            .size(18.0)
                            .strong()
                            .color(text),
                    );
                });
        });
}
