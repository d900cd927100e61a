//! Central build area: calculator display, placed tiles and drop handling.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::builder::{CalculatorBuilder, DragState, DropTarget, Layout};
use crate::calculator::Calculator;
use crate::constants::{CALCULATOR_MAX_WIDTH, GRID_COLUMNS, PLACED_TILE_SIZE};
use crate::theme::{Theme, ThemePalette};

use super::tiles::{drag_ghost, tile_button};

/// Something the user did to a placed tile this frame. Applied after the
/// grid is drawn so indices stay valid while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileAction {
    Press(usize),
    Remove(usize),
    BeginDrag(usize),
    Move { from: usize, to: usize },
}

/// Calculator preview panel. Also resolves drags, since it is drawn last and
/// knows where the build area and the placed tiles are.
pub fn preview_ui(
    mut contexts: EguiContexts,
    mut builder: ResMut<CalculatorBuilder>,
    theme: Res<Theme>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let colors = theme.palette();
    let pointer = ctx.pointer_latest_pos();

    let mut tile_rects: Vec<egui::Rect> = Vec::with_capacity(builder.layout().len());
    let mut action: Option<TileAction> = None;

    let panel = egui::CentralPanel::default().show(ctx, |ui| {
        let palette_drag_over = matches!(builder.drag(), DragState::FromPalette(_))
            && pointer.is_some_and(|p| ui.max_rect().contains(p));

        ui.add_space(8.0);
        ui.heading("Calculator Preview");
        ui.label(
            egui::RichText::new("Drag to rearrange buttons")
                .color(colors.hint_text)
                .size(12.0),
        );
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            ui.set_max_width(CALCULATOR_MAX_WIDTH);
            render_display(ui, builder.calculator(), colors);
            ui.add_space(8.0);

            let stroke = if palette_drag_over {
                egui::Stroke::new(2.0, colors.drop_highlight)
            } else {
                egui::Stroke::NONE
            };
            egui::Frame::new()
                .fill(colors.body_fill)
                .stroke(stroke)
                .corner_radius(12)
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if builder.layout().is_empty() {
                        render_placeholder(ui, colors);
                    } else {
                        render_tiles(
                            ui,
                            builder.layout(),
                            builder.drag(),
                            colors,
                            &mut tile_rects,
                            &mut action,
                        );
                    }
                });
        });
    });
    let build_area = panel.response.rect;

    match action {
        Some(TileAction::Press(index)) => {
            builder.press(index);
        }
        Some(TileAction::Remove(index)) => {
            builder.remove(index);
        }
        Some(TileAction::BeginDrag(index)) => {
            builder.begin_internal_drag(index);
        }
        Some(TileAction::Move { from, to }) => {
            builder.move_component(from, to);
        }
        None => {}
    }

    if !builder.drag().is_dragging() {
        return Ok(());
    }

    ctx.set_cursor_icon(egui::CursorIcon::Grabbing);

    if let Some(pos) = pointer {
        if matches!(builder.drag(), DragState::Internal { .. })
            && let Some(target) = tile_rects.iter().position(|rect| rect.contains(pos))
        {
            builder.drag_over(target);
        }
        if let Some(component) = builder.dragged_component() {
            drag_ghost(ctx, &component, colors, pos);
        }
    }

    // A missing release (pointer let go outside the window) still ends the drag
    let (released, down) = ctx.input(|i| (i.pointer.any_released(), i.pointer.any_down()));
    if released || !down {
        let target = match pointer {
            Some(pos) if build_area.contains(pos) => DropTarget::BuildArea,
            _ => DropTarget::Outside,
        };
        builder.drop_on(target);
    }

    Ok(())
}

/// Expression line above the large display value
fn render_display(ui: &mut egui::Ui, calculator: &Calculator, colors: &ThemePalette) {
    egui::Frame::new()
        .fill(colors.display_fill)
        .corner_radius(12)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                let expression = match calculator.expression() {
                    "" => "0",
                    expression => expression,
                };
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(expression)
                            .monospace()
                            .size(14.0)
                            .color(colors.expression_text),
                    )
                    .truncate(),
                );
                let response = ui.add(
                    egui::Label::new(
                        egui::RichText::new(calculator.display())
                            .monospace()
                            .size(32.0)
                            .strong()
                            .color(colors.display_text),
                    )
                    .truncate(),
                );
                if let Some(error) = calculator.last_error() {
                    response.on_hover_text(error.to_string());
                }
            });
        });
}

/// Empty-layout drop hint
fn render_placeholder(ui: &mut egui::Ui, colors: &ThemePalette) {
    let frame = egui::Frame::new()
        .inner_margin(egui::Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(
                    egui::RichText::new("+")
                        .size(40.0)
                        .color(colors.hint_text),
                );
                ui.label(
                    egui::RichText::new("Drag components here to build your calculator")
                        .color(colors.hint_text),
                );
                ui.add_space(60.0);
            });
        });

    let outline = dashed_outline(frame.response.rect.shrink(1.0));
    ui.painter().extend(egui::Shape::dashed_line(
        &outline,
        egui::Stroke::new(2.0, colors.placeholder_stroke),
        8.0,
        6.0,
    ));
}

/// Closed path around `rect`, starting and ending at the top-left corner.
fn dashed_outline(rect: egui::Rect) -> [egui::Pos2; 5] {
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ]
}

fn render_tiles(
    ui: &mut egui::Ui,
    layout: &Layout,
    drag: DragState,
    colors: &ThemePalette,
    tile_rects: &mut Vec<egui::Rect>,
    action: &mut Option<TileAction>,
) {
    let dragging = drag.is_dragging();

    egui::Grid::new("placed_grid")
        .spacing([10.0, 10.0])
        .show(ui, |ui| {
            for (index, component) in layout.iter().enumerate() {
                let is_source =
                    matches!(drag, DragState::Internal { source_index } if source_index == index);

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 2.0;

                    let mut button = tile_button(component, colors, PLACED_TILE_SIZE);
                    if is_source {
                        button = button.stroke(egui::Stroke::new(2.0, colors.drop_highlight));
                    }
                    let response = ui.add(button);
                    tile_rects.push(response.rect);

                    if response.drag_started() {
                        *action = Some(TileAction::BeginDrag(index));
                    } else if response.clicked() {
                        *action = Some(TileAction::Press(index));
                    }

                    if !dragging {
                        response.context_menu(|ui| {
                            if ui
                                .add_enabled(index > 0, egui::Button::new("Move left"))
                                .clicked()
                            {
                                *action = Some(TileAction::Move {
                                    from: index,
                                    to: index - 1,
                                });
                            }
                            if ui
                                .add_enabled(index + 1 < layout.len(), egui::Button::new("Move right"))
                                .clicked()
                            {
                                *action = Some(TileAction::Move {
                                    from: index,
                                    to: index + 1,
                                });
                            }
                            if ui.button("Remove").clicked() {
                                *action = Some(TileAction::Remove(index));
                            }
                        });
                    }

                    let remove = ui.add_enabled(
                        !dragging,
                        egui::Button::new(
                            egui::RichText::new("🗙")
                                .size(10.0)
                                .color(egui::Color32::WHITE),
                        )
                        .fill(colors.remove_fill)
                        .corner_radius(8)
                        .small(),
                    );
                    if remove.on_hover_text("Remove").clicked() {
                        *action = Some(TileAction::Remove(index));
                    }
                });

                if (index + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_outline_closes_around_rect() {
        let rect = egui::Rect::from_min_max(egui::pos2(10.0, 20.0), egui::pos2(110.0, 70.0));
        let outline = dashed_outline(rect);
        assert_eq!(outline[0], outline[4]);
        assert_eq!(
            outline[..4],
            [
                egui::pos2(10.0, 20.0),
                egui::pos2(110.0, 20.0),
                egui::pos2(110.0, 70.0),
                egui::pos2(10.0, 70.0),
            ]
        );
    }
}
