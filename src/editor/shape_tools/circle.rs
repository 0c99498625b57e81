use crate::hex::{hex_distance, AxialCoord};
use crate::map::shapes::circle_from;

use super::ShapeTool;

/// Circle by center and radius point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleTool {
    center: Option<AxialCoord>,
    radius_point: Option<AxialCoord>,
    filled: bool,
}

impl CircleTool {
    pub fn new(filled: bool) -> Self {
        Self {
            center: None,
            radius_point: None,
            filled,
        }
    }

    /// Radius of the placed circle, once both clicks are in.
    pub fn radius(&self) -> Option<u32> {
        Some(hex_distance(self.center?, self.radius_point?))
    }
}

impl Default for CircleTool {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ShapeTool for CircleTool {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn add_point(&mut self, coord: AxialCoord) -> bool {
        if self.center.is_none() {
            self.center = Some(coord);
            true
        } else {
            self.radius_point = Some(coord);
            false
        }
    }

    fn preview_tiles(&self, cursor: AxialCoord) -> Vec<AxialCoord> {
        let Some(center) = self.center else {
            return Vec::new();
        };
        circle_from(center, hex_distance(center, cursor), false)
    }

    fn result_tiles(&self) -> Vec<AxialCoord> {
        match (self.center, self.radius()) {
            (Some(center), Some(radius)) => circle_from(center, radius, self.filled),
            _ => Vec::new(),
        }
    }

    fn anchor_points(&self) -> Vec<AxialCoord> {
        self.center.into_iter().chain(self.radius_point).collect()
    }

    fn reset(&mut self) {
        self.center = None;
        self.radius_point = None;
    }

    fn can_complete(&self) -> bool {
        self.center.is_some() && self.radius_point.is_some()
    }

    fn requires_keyboard_confirm(&self) -> bool {
        false
    }

    fn status_text(&self) -> String {
        match (self.center, self.radius_point) {
            (None, _) => "Click center of circle".to_string(),
            (Some(_), None) => "Click to set radius (or press Escape to cancel)".to_string(),
            (Some(_), Some(_)) => "Circle complete".to_string(),
        }
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }
}
