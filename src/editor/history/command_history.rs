//! Command history resource for tracking undo/redo state.

use bevy::prelude::*;

use crate::map::MapData;

use super::commands::EditorCommand;
use super::execute::{execute_redo, execute_undo};
use super::MAX_HISTORY_SIZE;

/// Resource tracking command history for undo/redo.
///
/// Both stacks hold commands in their forward form.
#[derive(Resource, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone (most recent last)
    undo_stack: Vec<EditorCommand>,
    /// Stack of commands that can be redone (most recent last)
    redo_stack: Vec<EditorCommand>,
}

impl CommandHistory {
    /// Push a command that has already been applied to the map
    pub fn push(&mut self, command: EditorCommand) {
        // Clear redo stack when a new action is performed
        self.redo_stack.clear();

        self.undo_stack.push(command);

        // Trim history if it exceeds max size
        while self.undo_stack.len() > MAX_HISTORY_SIZE {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the most recent command. Returns its label, or `None` when there
    /// was nothing to undo.
    pub fn undo(&mut self, map: &mut MapData) -> Option<&'static str> {
        let command = self.undo_stack.pop()?;
        execute_undo(&command, map);
        let label = command.label();
        self.redo_stack.push(command);
        Some(label)
    }

    /// Redo the most recently undone command.
    pub fn redo(&mut self, map: &mut MapData) -> Option<&'static str> {
        let command = self.redo_stack.pop()?;
        execute_redo(&command, map);
        let label = command.label();
        self.undo_stack.push(command);
        Some(label)
    }

    /// Check if there are commands to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the count of undoable commands
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the count of redoable commands
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Label of the command the next undo would revert
    pub fn next_undo_label(&self) -> Option<&'static str> {
        self.undo_stack.last().map(EditorCommand::label)
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
