//! Centralized constants used across the application.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Tiles per row in both the palette and the preview grid
pub const GRID_COLUMNS: usize = 4;

/// Palette tile size in points
pub const PALETTE_TILE_SIZE: [f32; 2] = [48.0, 40.0];

/// Placed tile size in points
pub const PLACED_TILE_SIZE: [f32; 2] = [72.0, 52.0];

/// Width of the palette side panel
pub const PALETTE_PANEL_WIDTH: f32 = 260.0;

/// Maximum width of the calculator body inside the preview panel
pub const CALCULATOR_MAX_WIDTH: f32 = 420.0;
