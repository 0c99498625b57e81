//! SystemParam bundles shared by the editor input systems.
//!
//! - [`CameraParams`]: camera and window access for cursor-to-world conversion
//! - [`is_cursor_over_ui`]: whether egui owns the pointer (for input gating)

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::hex::{pixel_to_hex, AxialCoord, PixelCoord, TileMetrics};

use super::EditorCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Get the world position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Cursor position in map pixel space
    pub fn cursor_pixel(&self) -> Option<PixelCoord> {
        self.cursor_world_pos().map(PixelCoord::from_world)
    }

    /// Hex under the cursor
    pub fn cursor_hex(&self, metrics: &TileMetrics) -> Option<AxialCoord> {
        self.cursor_pixel().map(|pixel| pixel_to_hex(pixel, metrics))
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}
