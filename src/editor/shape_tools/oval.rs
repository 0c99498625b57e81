use crate::hex::{hex_to_row_col, AxialCoord};
use crate::map::shapes::oval_from;

use super::ShapeTool;

/// Axis-aligned oval: center, then a point fixing the horizontal radius,
/// then a point fixing the vertical radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvalTool {
    center: Option<AxialCoord>,
    radius_x_point: Option<AxialCoord>,
    radius_y_point: Option<AxialCoord>,
    /// Column distance from the center to the second click.
    radius_x: u32,
    filled: bool,
}

impl OvalTool {
    pub fn new(filled: bool) -> Self {
        Self {
            center: None,
            radius_x_point: None,
            radius_y_point: None,
            radius_x: 0,
            filled,
        }
    }

    pub fn radius_x(&self) -> u32 {
        self.radius_x
    }

    /// Vertical radius of the placed oval, once all three clicks are in.
    pub fn radius_y(&self) -> Option<u32> {
        Some(row_distance(self.center?, self.radius_y_point?))
    }
}

impl Default for OvalTool {
    fn default() -> Self {
        Self::new(true)
    }
}

fn col_distance(a: AxialCoord, b: AxialCoord) -> u32 {
    (hex_to_row_col(b).col - hex_to_row_col(a).col).unsigned_abs()
}

fn row_distance(a: AxialCoord, b: AxialCoord) -> u32 {
    (hex_to_row_col(b).row - hex_to_row_col(a).row).unsigned_abs()
}

impl ShapeTool for OvalTool {
    fn name(&self) -> &'static str {
        "Oval"
    }

    fn add_point(&mut self, coord: AxialCoord) -> bool {
        let Some(center) = self.center else {
            self.center = Some(coord);
            return true;
        };
        if self.radius_x_point.is_none() {
            self.radius_x_point = Some(coord);
            self.radius_x = col_distance(center, coord);
            return true;
        }
        self.radius_y_point = Some(coord);
        false
    }

    fn preview_tiles(&self, cursor: AxialCoord) -> Vec<AxialCoord> {
        let Some(center) = self.center else {
            return Vec::new();
        };
        if self.radius_x_point.is_none() {
            // Still sizing the horizontal radius: preview a round oval.
            let radius = col_distance(center, cursor);
            oval_from(center, radius, radius, false)
        } else {
            oval_from(center, self.radius_x, row_distance(center, cursor), false)
        }
    }

    fn result_tiles(&self) -> Vec<AxialCoord> {
        match (self.center, self.radius_x_point, self.radius_y()) {
            (Some(center), Some(_), Some(radius_y)) => {
                oval_from(center, self.radius_x, radius_y, self.filled)
            }
            _ => Vec::new(),
        }
    }

    fn anchor_points(&self) -> Vec<AxialCoord> {
        self.center
            .into_iter()
            .chain(self.radius_x_point)
            .chain(self.radius_y_point)
            .collect()
    }

    fn reset(&mut self) {
        self.center = None;
        self.radius_x_point = None;
        self.radius_y_point = None;
        self.radius_x = 0;
    }

    fn can_complete(&self) -> bool {
        self.center.is_some() && self.radius_x_point.is_some() && self.radius_y_point.is_some()
    }

    fn requires_keyboard_confirm(&self) -> bool {
        false
    }

    fn status_text(&self) -> String {
        if self.center.is_none() {
            "Click center of oval".to_string()
        } else if self.radius_x_point.is_none() {
            "Click to set horizontal radius (or press Escape to cancel)".to_string()
        } else if self.radius_y_point.is_none() {
            "Click to set vertical radius (or press Escape to cancel)".to_string()
        } else {
            "Oval complete".to_string()
        }
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }
}
