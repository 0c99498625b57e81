//! Undo/Redo system for editor actions.
//!
//! Every change the editor makes to the map is recorded as an
//! [`EditorCommand`] that can be undone and redone.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//!
//! ## Supported Operations
//!
//! - Terrain edits (paint, erase, flood fill, completed shapes)
//! - Unit moves
//!
//! ## Module Structure
//!
//! - [`commands`] - EditorCommand enum defining all reversible operations
//! - [`command_history`] - CommandHistory resource for tracking state
//! - [`execute`] - Applying a command to the map and producing its reverse
//! - [`systems`] - Bevy systems for keyboard shortcuts

mod command_history;
mod commands;
mod execute;
mod systems;


// Re-exports
pub use command_history::CommandHistory;
pub use commands::EditorCommand;
pub use systems::{handle_redo, handle_undo};

/// Maximum number of commands to keep in history
pub(crate) const MAX_HISTORY_SIZE: usize = 100;
