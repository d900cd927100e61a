//! egui front end for the builder.
//!
//! ## Module Structure
//!
//! - [`toolbar`] - Title bar with undo/redo and the theme toggle
//! - [`palette`] - Left panel of tiles to drag from
//! - [`preview`] - Calculator preview: display, placed tiles, drop handling
//! - [`tiles`] - Tile widgets shared by the panels
//! - [`help`] - Help popup and keyboard shortcut
//! - [`dialogs`] - Startup notifications

mod dialogs;
mod help;
mod palette;
mod preview;
mod tiles;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigLoaded;
use crate::theme::{self, Theme};

/// Resource to track whether the help window is open.
#[derive(Resource, Default)]
pub struct HelpWindowState {
    pub is_open: bool,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Theme>()
            .init_resource::<HelpWindowState>()
            .add_systems(Startup, theme::init_theme_from_config.after(ConfigLoaded))
            .add_systems(Update, (theme::apply_theme, help::handle_help_shortcut))
            // Panels: top bar first, then the side panel, then the central
            // panel which resolves drops. Use chain() to enforce ordering.
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    palette::palette_ui,
                    preview::preview_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: dialogs/overlays
                    help::help_popup_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .after(preview::preview_ui),
            );
    }
}
