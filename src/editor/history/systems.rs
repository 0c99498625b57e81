//! Bevy systems for handling undo/redo keyboard shortcuts.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::map::MapData;

use super::command_history::CommandHistory;

fn keyboard_captured(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}

/// System to handle undo keyboard shortcut (Ctrl+Z)
pub fn handle_undo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut history: ResMut<CommandHistory>,
    mut map_data: ResMut<MapData>,
    mut contexts: EguiContexts,
) {
    if keyboard_captured(&mut contexts) {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Z (without shift) = undo
    if ctrl
        && !shift
        && keyboard.just_pressed(KeyCode::KeyZ)
        && let Some(label) = history.undo(&mut map_data)
    {
        info!("Undo: {}", label);
    }
}

/// System to handle redo keyboard shortcut (Ctrl+Y or Ctrl+Shift+Z)
pub fn handle_redo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut history: ResMut<CommandHistory>,
    mut map_data: ResMut<MapData>,
    mut contexts: EguiContexts,
) {
    if keyboard_captured(&mut contexts) {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Y or Ctrl+Shift+Z = redo
    let redo_pressed = (ctrl && keyboard.just_pressed(KeyCode::KeyY))
        || (ctrl && shift && keyboard.just_pressed(KeyCode::KeyZ));

    if redo_pressed
        && let Some(label) = history.redo(&mut map_data)
    {
        info!("Redo: {}", label);
    }
}
