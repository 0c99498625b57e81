//! Hex grid geometry.
//!
//! Tiles are addressed by axial coordinates (q, r). Pixel placement goes
//! through the "odd-r" offset layout, where odd rows are pushed half a tile to
//! the right:
//!
//! ```text
//!  row 0:  (0,0) (1,0) (2,0)
//!  row 1:     (0,1) (1,1) (2,1)
//!  row 2: (-1,2) (0,2) (1,2)
//! ```
//!
//! Everything in here is pure and O(1).

mod coords;
mod direction;
mod pixel;

pub use coords::{hex_distance, hex_to_row_col, row_col_to_hex, AxialCoord, RowCol};
pub use direction::{
    are_neighbors, axial_neighbors, direction_index, neighbor_at_index, opposite_direction,
    HexDirection,
};
pub use pixel::{hex_to_pixel, pixel_to_hex, PixelCoord, TileMetrics};
