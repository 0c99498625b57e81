mod camera;
mod grid;
pub mod history;
pub mod input;
pub mod layers;
pub mod params;
pub mod shape_tools;
pub mod tools;

pub use camera::EditorCamera;
pub use history::CommandHistory;
pub use layers::LayerStack;
pub use tools::{BrushSettings, CurrentTool, EditorTool, UnitSettings};

use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::hex::TileMetrics;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentTool>()
            .init_resource::<BrushSettings>()
            .init_resource::<UnitSettings>()
            .init_resource::<CommandHistory>()
            .init_resource::<TileMetrics>()
            .init_resource::<input::CursorHex>()
            .init_resource::<input::MapClickQueue>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    input::setup_layer_stack,
                    tools::apply_config_defaults.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::reset_camera,
                    camera::apply_camera_zoom,
                    tools::handle_tool_shortcuts,
                    tools::update_cursor_icon,
                    input::update_cursor_hex,
                    history::handle_undo,
                    history::handle_redo,
                ),
            )
            // Everything that talks to the layer stack waits for it to exist
            .add_systems(
                Update,
                (
                    tools::sync_shape_tool.run_if(resource_changed::<CurrentTool>),
                    tools::sync_shape_fill.run_if(resource_changed::<BrushSettings>),
                    input::handle_shape_keys,
                    input::handle_map_click,
                    input::apply_map_clicks,
                    input::apply_completed_shapes,
                )
                    .chain()
                    .after(tools::handle_tool_shortcuts)
                    .run_if(resource_exists::<LayerStack>),
            )
            .add_systems(
                Update,
                (
                    grid::draw_grid,
                    grid::draw_tiles,
                    grid::draw_units,
                    grid::draw_brush_preview,
                    (grid::draw_highlights, grid::draw_shape_preview)
                        .run_if(resource_exists::<LayerStack>),
                )
                    .after(input::update_cursor_hex),
            );
    }
}
