//! Light and dark color themes for the builder UI.
//!
//! Colors follow a neutral grey scale with a blue accent for operator tiles.
//! Modify values here to change the application's color scheme.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::AppConfig;

/// Active color theme. Toggled from the toolbar; not persisted.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    /// Window background behind the panels
    pub background: Color,
    /// Accent fill for operator tiles
    pub operator_fill: egui::Color32,
    pub operator_text: egui::Color32,
    /// Fill for digit tiles
    pub number_fill: egui::Color32,
    pub number_text: egui::Color32,
    /// Calculator display block
    pub display_fill: egui::Color32,
    pub display_text: egui::Color32,
    /// Secondary line above the display value
    pub expression_text: egui::Color32,
    /// Calculator body behind the tile grid
    pub body_fill: egui::Color32,
    /// Grey for help/hint text
    pub hint_text: egui::Color32,
    /// Dashed placeholder outline and drop highlight
    pub placeholder_stroke: egui::Color32,
    pub drop_highlight: egui::Color32,
    /// Fill for the remove button
    pub remove_fill: egui::Color32,
}

// ============================================================================
// Palettes
// ============================================================================

pub const LIGHT: ThemePalette = ThemePalette {
    background: Color::srgb(0.976, 0.980, 0.984),
    operator_fill: egui::Color32::from_rgb(59, 130, 246),
    operator_text: egui::Color32::WHITE,
    number_fill: egui::Color32::from_rgb(243, 244, 246),
    number_text: egui::Color32::from_rgb(17, 24, 39),
    display_fill: egui::Color32::from_rgb(243, 244, 246),
    display_text: egui::Color32::from_rgb(17, 24, 39),
    expression_text: egui::Color32::from_rgb(107, 114, 128),
    body_fill: egui::Color32::WHITE,
    hint_text: egui::Color32::from_rgb(107, 114, 128),
    placeholder_stroke: egui::Color32::from_rgb(229, 231, 235),
    drop_highlight: egui::Color32::from_rgb(59, 130, 246),
    remove_fill: egui::Color32::from_rgb(239, 68, 68),
};

pub const DARK: ThemePalette = ThemePalette {
    background: Color::srgb(0.067, 0.094, 0.153),
    operator_fill: egui::Color32::from_rgb(37, 99, 235),
    operator_text: egui::Color32::WHITE,
    number_fill: egui::Color32::from_rgb(55, 65, 81),
    number_text: egui::Color32::from_rgb(243, 244, 246),
    display_fill: egui::Color32::from_rgb(17, 24, 39),
    display_text: egui::Color32::WHITE,
    expression_text: egui::Color32::from_rgb(156, 163, 175),
    body_fill: egui::Color32::from_rgb(31, 41, 55),
    hint_text: egui::Color32::from_rgb(156, 163, 175),
    placeholder_stroke: egui::Color32::from_rgb(55, 65, 81),
    drop_highlight: egui::Color32::from_rgb(96, 165, 250),
    remove_fill: egui::Color32::from_rgb(127, 29, 29),
};

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Glyph for the toggle button: shows the theme you would switch to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }

    pub fn toggle_tooltip(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

/// Startup system to pick the initial theme from config
pub fn init_theme_from_config(config: Res<AppConfig>, mut theme: ResMut<Theme>) {
    *theme = Theme::from_dark_mode(config.data.dark_mode);
}

/// System to push the active theme into egui and the window clear color
pub fn apply_theme(
    theme: Res<Theme>,
    mut contexts: EguiContexts,
    mut clear_color: ResMut<ClearColor>,
    mut applied: Local<bool>,
) {
    if *applied && !theme.is_changed() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    ctx.set_visuals(theme.visuals());
    clear_color.0 = theme.palette().background;
    *applied = true;
    debug!("Applied {:?} theme", *theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_from_dark_mode() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Light.palette().operator_text, egui::Color32::WHITE);
    }

    #[test]
    fn test_visuals_match_theme() {
        assert!(Theme::Dark.visuals().dark_mode);
        assert!(!Theme::Light.visuals().dark_mode);
    }
}
