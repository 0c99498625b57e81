use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::{MAX_ZOOM, MIN_ZOOM};

use super::params::is_cursor_over_ui;

#[derive(Component)]
pub struct EditorCamera;

#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl CameraZoom {
    /// Apply a wheel delta, in lines. Positive zooms in.
    pub fn scroll(&mut self, lines: f32) {
        self.scale = (self.scale - lines * 0.1 * self.scale).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        EditorCamera,
        CameraZoom::default(),
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

/// Middle-mouse drag pans the view
pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<EditorCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<EditorCamera>>,
    mut contexts: EguiContexts,
) {
    // Let egui scroll its own panels
    if is_cursor_over_ui(&mut contexts) {
        scroll_events.clear();
        return;
    }

    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let lines = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.01,
        };
        zoom.scroll(lines);
    }
}

/// Home recenters the view on the origin hex
pub fn reset_camera(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut camera_query: Query<(&mut Transform, &mut CameraZoom), With<EditorCamera>>,
) {
    if !keyboard.just_pressed(KeyCode::Home) {
        return;
    }
    if let Ok((mut transform, mut zoom)) = camera_query.single_mut() {
        transform.translation.x = 0.0;
        transform.translation.y = 0.0;
        zoom.scale = 1.0;
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<EditorCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_zooms_in_and_out() {
        let mut zoom = CameraZoom::default();
        zoom.scroll(1.0);
        assert!(zoom.scale < 1.0);
        zoom.scroll(-2.0);
        assert!(zoom.scale > 1.0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut zoom = CameraZoom::default();
        for _ in 0..200 {
            zoom.scroll(5.0);
        }
        assert_eq!(zoom.scale, MIN_ZOOM);
        for _ in 0..200 {
            zoom.scroll(-5.0);
        }
        assert_eq!(zoom.scale, MAX_ZOOM);
    }
}
