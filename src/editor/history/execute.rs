//! Applying commands to the map for undo and redo.

use bevy::prelude::*;

use crate::map::MapData;

use super::commands::EditorCommand;

/// Apply `command` to the map.
pub fn apply_command(command: &EditorCommand, map: &mut MapData) {
    match command {
        EditorCommand::EditTiles { edit, .. } => map.apply_edit(edit),
        EditorCommand::MoveUnit { unit, from, to } => {
            if map.remove_unit(*from).is_none() {
                warn!("Expected a unit at {} while replaying a move", from);
            }
            map.add_unit(*to, *unit);
        }
        EditorCommand::EditUnit { coord, after, .. } => {
            map.set_unit(*coord, *after);
        }
    }
}

/// Roll `command` back on the map.
pub fn execute_undo(command: &EditorCommand, map: &mut MapData) {
    apply_command(&command.reverse(), map);
    debug!("Undid '{}'", command.label());
}

/// Re-apply a previously undone `command`.
pub fn execute_redo(command: &EditorCommand, map: &mut MapData) {
    apply_command(command, map);
    debug!("Redid '{}'", command.label());
}
