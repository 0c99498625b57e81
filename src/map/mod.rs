mod editing;
mod map_data;
pub mod shapes;

pub use editing::{TileChange, TileEdit};
pub use map_data::{MapData, Tile, Unit};

use bevy::prelude::*;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapData>();
    }
}
