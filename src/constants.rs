//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Width of a hex tile in pixels
pub const DEFAULT_TILE_WIDTH: f32 = 64.0;

/// Height of a hex tile in pixels
pub const DEFAULT_TILE_HEIGHT: f32 = 64.0;

/// Vertical distance between the centers of two consecutive rows
pub const DEFAULT_Y_INCREMENT: f32 = 48.0;

/// Largest brush radius (0 = single hex, 1 = 7 hexes, ...)
pub const MAX_BRUSH_SIZE: u32 = 5;

/// Terrain painted by a fresh editor (grass)
pub const DEFAULT_TERRAIN: u32 = 1;

/// Terrain palette: (tile type, display name, rgb)
pub const TERRAIN_PALETTE: &[(u32, &str, [u8; 3])] = &[
    (1, "Grass", [110, 170, 80]),
    (2, "Desert", [220, 200, 130]),
    (3, "Water", [60, 110, 200]),
    (4, "Mountains", [130, 110, 90]),
    (5, "Rock", [150, 150, 150]),
    (6, "Hospital", [230, 230, 240]),
    (7, "Swamp", [80, 110, 90]),
    (8, "Forest", [40, 110, 50]),
];

/// Depth of the shape tool layer; above every highlight layer
pub const SHAPE_TOOL_LAYER_DEPTH: i32 = 100;

/// Closest camera zoom (orthographic scale)
pub const MIN_ZOOM: f32 = 0.2;

/// Farthest camera zoom (orthographic scale)
pub const MAX_ZOOM: f32 = 8.0;

/// How far a selected unit may move, in hex steps
pub const UNIT_MOVE_RANGE: u32 = 3;

/// Upper bounds offered by the unit tool settings
pub const MAX_UNIT_TYPE: u32 = 99;
pub const MAX_PLAYER: u32 = 8;
