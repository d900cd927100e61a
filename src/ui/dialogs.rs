use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{AppConfig, ConfigResetNotification};

/// Tells the user their config file was ignored and why
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
    config: Res<AppConfig>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Configuration Ignored")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Default settings are in use this session.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(5.0);
            ui.label(
                egui::RichText::new(config.config_path.to_string_lossy())
                    .monospace()
                    .size(11.0),
            );
            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                notification.show = false;
            }
        });
    Ok(())
}
