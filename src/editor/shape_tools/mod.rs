//! Click-driven shape tools.
//!
//! Each tool is a small state machine over the hexes the user has clicked so
//! far. Tools never touch the map themselves: [`ShapeTool::result_tiles`] is
//! handed to the caller, which decides what to paint.
//!
//! ## Tools
//!
//! - [`CircleTool`]: center, then radius point. Completes after two clicks.
//! - [`OvalTool`]: center, horizontal radius, vertical radius. Completes after three.
//! - [`LineTool`]: any number of waypoints, finished with Enter.
//!
//! Previews are always drawn as outlines; results honor the fill setting.

mod circle;
mod line;
mod oval;

#[cfg(test)]
mod tests;

pub use circle::CircleTool;
pub use line::LineTool;
pub use oval::OvalTool;

use crate::hex::AxialCoord;

/// Shared interface of the shape tools.
pub trait ShapeTool {
    fn name(&self) -> &'static str;

    /// Record a click. Returns `true` while more points are needed and
    /// `false` once the shape is complete.
    fn add_point(&mut self, coord: AxialCoord) -> bool;

    /// Outline of the shape with `cursor` standing in for the next anchor.
    fn preview_tiles(&self, cursor: AxialCoord) -> Vec<AxialCoord>;

    /// Final tiles. Only meaningful once [`ShapeTool::can_complete`] is true.
    fn result_tiles(&self) -> Vec<AxialCoord>;

    /// Points clicked so far, in click order.
    fn anchor_points(&self) -> Vec<AxialCoord>;

    /// Drop all anchors. The fill setting survives.
    fn reset(&mut self);

    fn can_complete(&self) -> bool;

    /// True for tools that finish on Enter instead of on a fixed click count.
    fn requires_keyboard_confirm(&self) -> bool;

    fn status_text(&self) -> String;

    fn is_filled(&self) -> bool;

    fn set_filled(&mut self, filled: bool);
}

/// The shape tool held by the editor session.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeToolKind {
    Circle(CircleTool),
    Oval(OvalTool),
    Line(LineTool),
}

impl ShapeToolKind {
    pub fn as_tool(&self) -> &dyn ShapeTool {
        match self {
            ShapeToolKind::Circle(tool) => tool,
            ShapeToolKind::Oval(tool) => tool,
            ShapeToolKind::Line(tool) => tool,
        }
    }

    pub fn as_tool_mut(&mut self) -> &mut dyn ShapeTool {
        match self {
            ShapeToolKind::Circle(tool) => tool,
            ShapeToolKind::Oval(tool) => tool,
            ShapeToolKind::Line(tool) => tool,
        }
    }
}
