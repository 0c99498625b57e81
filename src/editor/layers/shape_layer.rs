use bevy::prelude::*;

use crate::constants::SHAPE_TOOL_LAYER_DEPTH;
use crate::editor::shape_tools::ShapeToolKind;
use crate::hex::AxialCoord;

use super::{ClickContext, Layer, LayerConfig, LayerHitResult};

pub const SHAPE_TOOL_LAYER: &str = "shape-tool";

/// Tiles produced by a finished shape, waiting to be painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedShape {
    pub tool: &'static str,
    pub tiles: Vec<AxialCoord>,
}

/// Feeds clicks to the active shape tool. Sits above every other layer and
/// only consumes while a tool is installed.
pub struct ShapeToolLayer {
    config: LayerConfig,
    tool: Option<ShapeToolKind>,
    completed: Vec<CompletedShape>,
}

impl ShapeToolLayer {
    pub fn new() -> Self {
        Self {
            config: LayerConfig::new(SHAPE_TOOL_LAYER, SHAPE_TOOL_LAYER_DEPTH),
            tool: None,
            completed: Vec::new(),
        }
    }

    /// Install a tool, or none. Any shape in progress is dropped.
    pub fn set_tool(&mut self, tool: Option<ShapeToolKind>) {
        self.tool = tool;
    }

    pub fn tool(&self) -> Option<&ShapeToolKind> {
        self.tool.as_ref()
    }

    pub fn tool_mut(&mut self) -> Option<&mut ShapeToolKind> {
        self.tool.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.tool.is_some()
    }

    pub fn preview(&self, cursor: AxialCoord) -> Vec<AxialCoord> {
        self.tool
            .as_ref()
            .map(|tool| tool.as_tool().preview_tiles(cursor))
            .unwrap_or_default()
    }

    pub fn anchors(&self) -> Vec<AxialCoord> {
        self.tool
            .as_ref()
            .map(|tool| tool.as_tool().anchor_points())
            .unwrap_or_default()
    }

    pub fn status_text(&self) -> Option<String> {
        self.tool.as_ref().map(|tool| tool.as_tool().status_text())
    }

    pub fn set_filled(&mut self, filled: bool) {
        if let Some(tool) = self.tool.as_mut() {
            tool.as_tool_mut().set_filled(filled);
        }
    }

    /// Finish a keyboard-confirmed shape. Returns false if there was nothing
    /// to finish yet.
    pub fn confirm(&mut self) -> bool {
        let Some(kind) = self.tool.as_mut() else {
            return false;
        };
        let tool = kind.as_tool_mut();
        if !tool.can_complete() {
            return false;
        }
        let shape = CompletedShape {
            tool: tool.name(),
            tiles: tool.result_tiles(),
        };
        tool.reset();
        info!("{} complete: {} tiles", shape.tool, shape.tiles.len());
        self.completed.push(shape);
        true
    }

    /// Drop the shape in progress. Returns whether any anchors were discarded.
    pub fn cancel(&mut self) -> bool {
        let Some(kind) = self.tool.as_mut() else {
            return false;
        };
        let tool = kind.as_tool_mut();
        let had_points = !tool.anchor_points().is_empty();
        tool.reset();
        if had_points {
            debug!("{} cancelled", tool.name());
        }
        had_points
    }

    /// Shapes finished since the last call.
    pub fn take_completed(&mut self) -> Vec<CompletedShape> {
        std::mem::take(&mut self.completed)
    }
}

impl Default for ShapeToolLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer for ShapeToolLayer {
    fn config(&self) -> &LayerConfig {
        &self.config
    }

    fn hit_test(&self, _ctx: &ClickContext) -> Option<LayerHitResult> {
        if self.tool.is_some() {
            Some(LayerHitResult::Consume)
        } else {
            None
        }
    }

    fn handle_click(&mut self, ctx: &ClickContext) -> bool {
        let Some(kind) = self.tool.as_mut() else {
            return false;
        };
        let tool = kind.as_tool_mut();
        let needs_more = tool.add_point(ctx.hex);
        if !needs_more && !tool.requires_keyboard_confirm() {
            self.confirm();
        }
        true
    }
}
