use crate::hex::AxialCoord;
use crate::map::shapes::line_from;

use super::ShapeTool;

/// Multi-segment path. Never completes on its own; Enter confirms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTool {
    points: Vec<AxialCoord>,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeTool for LineTool {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn add_point(&mut self, coord: AxialCoord) -> bool {
        self.points.push(coord);
        true
    }

    fn preview_tiles(&self, cursor: AxialCoord) -> Vec<AxialCoord> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let mut waypoints = self.points.clone();
        waypoints.push(cursor);
        line_from(&waypoints)
    }

    fn result_tiles(&self) -> Vec<AxialCoord> {
        if self.points.len() < 2 {
            return self.points.clone();
        }
        line_from(&self.points)
    }

    fn anchor_points(&self) -> Vec<AxialCoord> {
        self.points.clone()
    }

    fn reset(&mut self) {
        self.points.clear();
    }

    fn can_complete(&self) -> bool {
        self.points.len() >= 2
    }

    fn requires_keyboard_confirm(&self) -> bool {
        true
    }

    fn status_text(&self) -> String {
        match self.points.len() {
            0 => "Click to start line/path".to_string(),
            1 => "Click to add points, Enter to finish, Escape to cancel".to_string(),
            n => format!("{} points - Click to add more, Enter to finish, Escape to cancel", n),
        }
    }

    fn is_filled(&self) -> bool {
        false
    }

    fn set_filled(&mut self, _filled: bool) {}
}
