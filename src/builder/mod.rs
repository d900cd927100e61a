mod component;
mod drag;
pub mod history;
mod layout;
mod state;

pub use component::{PlacedComponent, palette};
pub use drag::{DragState, DropTarget};
pub use history::{RedoRequest, UndoRequest};
pub use layout::Layout;
pub use state::CalculatorBuilder;

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::config::{AppConfig, ConfigLoaded};

/// Apply user preferences that affect the builder
fn apply_config(config: Res<AppConfig>, mut builder: ResMut<CalculatorBuilder>) {
    builder.set_history_limit(config.data.history_limit);
    if let Some(limit) = builder.history().limit() {
        info!("History limited to {} snapshots", limit);
    }
}

/// Escape abandons the drag in progress
fn handle_drag_cancel(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut builder: ResMut<CalculatorBuilder>,
    mut contexts: EguiContexts,
) {
    if !builder.drag().is_dragging() || !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    builder.cancel_drag();
    // Forget egui's own drag so the release doesn't count as a drop
    if let Ok(ctx) = contexts.ctx_mut() {
        ctx.stop_dragging();
    }
}

pub struct BuilderPlugin;

impl Plugin for BuilderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CalculatorBuilder>()
            .add_message::<UndoRequest>()
            .add_message::<RedoRequest>()
            .add_systems(Startup, apply_config.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    history::handle_history_shortcuts,
                    history::apply_history_requests,
                    handle_drag_cancel,
                )
                    .chain(),
            );
    }
}
