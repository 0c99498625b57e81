//! Editor command enum for undo/redo operations.

use crate::hex::AxialCoord;
use crate::map::{TileEdit, Unit};

/// A reversible command in the editor
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    /// Terrain was painted, erased or filled
    EditTiles { label: &'static str, edit: TileEdit },
    /// A unit moved between hexes
    MoveUnit {
        unit: Unit,
        from: AxialCoord,
        to: AxialCoord,
    },
    /// A unit was placed on or removed from a hex
    EditUnit {
        coord: AxialCoord,
        before: Option<Unit>,
        after: Option<Unit>,
    },
}

impl EditorCommand {
    /// Short description for logs and the toolbar tooltip.
    pub fn label(&self) -> &'static str {
        match self {
            EditorCommand::EditTiles { label, .. } => *label,
            EditorCommand::MoveUnit { .. } => "Move unit",
            EditorCommand::EditUnit { after: Some(_), .. } => "Place unit",
            EditorCommand::EditUnit { after: None, .. } => "Remove unit",
        }
    }

    /// The command that exactly undoes this one.
    pub fn reverse(&self) -> EditorCommand {
        match self {
            EditorCommand::EditTiles { label, edit } => EditorCommand::EditTiles {
                label: *label,
                edit: edit.inverse(),
            },
            EditorCommand::MoveUnit { unit, from, to } => EditorCommand::MoveUnit {
                unit: *unit,
                from: *to,
                to: *from,
            },
            EditorCommand::EditUnit {
                coord,
                before,
                after,
            } => EditorCommand::EditUnit {
                coord: *coord,
                before: *after,
                after: *before,
            },
        }
    }
}
