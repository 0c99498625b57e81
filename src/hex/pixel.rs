use bevy::math::Vec2;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use super::coords::{hex_to_row_col, row_col_to_hex, AxialCoord, RowCol};
use crate::constants::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, DEFAULT_Y_INCREMENT};

/// A point in map pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelCoord {
    pub x: f32,
    pub y: f32,
}

impl PixelCoord {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Bevy world space has y pointing up; map pixels have it pointing down.
    pub fn from_world(world: Vec2) -> Self {
        Self {
            x: world.x,
            y: -world.y,
        }
    }

    pub fn to_world(self) -> Vec2 {
        Vec2::new(self.x, -self.y)
    }
}

impl From<Vec2> for PixelCoord {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PixelCoord> for Vec2 {
    fn from(p: PixelCoord) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Tile sizing for the staggered "brick" layout.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileMetrics {
    pub tile_width: f32,
    pub tile_height: f32,
    /// Vertical distance between row centers.
    pub y_increment: f32,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            y_increment: DEFAULT_Y_INCREMENT,
        }
    }
}

/// Center of a hex in pixel space.
pub fn hex_to_pixel(coord: AxialCoord, metrics: &TileMetrics) -> PixelCoord {
    let RowCol { row, col } = hex_to_row_col(coord);
    let mut x = metrics.tile_width * col as f32;
    if row & 1 == 1 {
        x += metrics.tile_width / 2.0;
    }
    PixelCoord {
        x,
        y: metrics.y_increment * row as f32,
    }
}

/// Hex containing a pixel, bucketed by half tile widths.
///
/// Exact on tile centers. Columns are measured from the row's own column-0
/// center, so a point exactly on a vertical border resolves to the column
/// farther from that center. The tests pin the border cases down.
pub fn pixel_to_hex(pixel: PixelCoord, metrics: &TileMetrics) -> AxialCoord {
    let row = ((pixel.y + metrics.tile_height / 2.0) / metrics.y_increment).floor() as i32;

    let local_x = if row & 1 != 0 {
        pixel.x - metrics.tile_width / 2.0
    } else {
        pixel.x
    };
    let half_dists = (1.0 + (local_x * 2.0 / metrics.tile_width).abs()).floor() as i32;

    let mut col = half_dists / 2;
    if local_x < 0.0 {
        col = -col;
    }

    row_col_to_hex(RowCol { row, col })
}
