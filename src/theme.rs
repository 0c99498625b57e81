//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

use crate::constants::TERRAIN_PALETTE;

// ============================================================================
// Grid Colors
// ============================================================================

/// Semi-transparent grey hex outlines
pub const GRID_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.3);

/// Hex under the cursor
pub const HOVER_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.6);

// ============================================================================
// Shape Tool Colors
// ============================================================================

/// Outline preview of the shape being sized
pub const SHAPE_PREVIEW: Color = Color::srgba(1.0, 0.85, 0.2, 0.9);

/// Points already clicked for the current shape
pub const SHAPE_ANCHOR: Color = Color::srgb(1.0, 0.4, 0.1);

/// Brush footprint under the cursor
pub const BRUSH_PREVIEW: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

// ============================================================================
// Highlight Colors
// ============================================================================

/// Light blue for the selected hex
pub const SELECTION_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);

/// Green for reachable hexes
pub const MOVEMENT_HIGHLIGHT: Color = Color::srgba(0.3, 0.9, 0.3, 0.8);

/// Red for attackable hexes
pub const ATTACK_HIGHLIGHT: Color = Color::srgba(1.0, 0.25, 0.25, 0.9);

/// Unit marker drawn on top of terrain
pub const UNIT_MARKER: Color = Color::srgb(0.95, 0.95, 0.95);

/// Fallback for terrain types missing from the palette
pub const UNKNOWN_TERRAIN: Color = Color::srgb(1.0, 0.0, 1.0);

/// Display color for a terrain type.
pub fn terrain_color(tile_type: u32) -> Color {
    TERRAIN_PALETTE
        .iter()
        .find(|(id, _, _)| *id == tile_type)
        .map(|(_, _, [r, g, b])| Color::srgb_u8(*r, *g, *b))
        .unwrap_or(UNKNOWN_TERRAIN)
}

/// Display name for a terrain type.
pub fn terrain_name(tile_type: u32) -> &'static str {
    TERRAIN_PALETTE
        .iter()
        .find(|(id, _, _)| *id == tile_type)
        .map(|(_, name, _)| *name)
        .unwrap_or("Unknown")
}

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (tool settings bar)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// White for selected button borders
    pub const SELECTED_BORDER: egui::Color32 = egui::Color32::WHITE;

    /// Dark grey for unselected button borders
    pub const UNSELECTED_BORDER: egui::Color32 = egui::Color32::DARK_GRAY;
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (fully opaque)
pub fn bevy_to_egui_opaque(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        255,
    )
}
