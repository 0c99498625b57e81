use std::collections::HashSet;

use crate::hex::AxialCoord;

use super::{ClickCallback, ClickContext, Layer, LayerConfig, LayerHitResult};

pub const SELECTION_LAYER: &str = "selection-highlight";
pub const MOVEMENT_LAYER: &str = "movement-highlight";
pub const ATTACK_LAYER: &str = "attack-highlight";

/// Marks the selected hex. Drawn only; never offered clicks.
pub struct SelectionHighlightLayer {
    config: LayerConfig,
    selected: Option<AxialCoord>,
}

impl SelectionHighlightLayer {
    pub fn new() -> Self {
        Self {
            config: LayerConfig::new(SELECTION_LAYER, 10).passive(),
            selected: None,
        }
    }

    pub fn select(&mut self, coord: AxialCoord) {
        self.selected = Some(coord);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<AxialCoord> {
        self.selected
    }
}

impl Default for SelectionHighlightLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer for SelectionHighlightLayer {
    fn config(&self) -> &LayerConfig {
        &self.config
    }

    fn hit_test(&self, _ctx: &ClickContext) -> Option<LayerHitResult> {
        Some(LayerHitResult::Pass)
    }

    fn handle_click(&mut self, _ctx: &ClickContext) -> bool {
        false
    }
}

/// A set of highlighted hexes that reacts to clicks on its members, such as
/// movement or attack targets.
pub struct ActionHighlightLayer {
    config: LayerConfig,
    highlights: HashSet<AxialCoord>,
    visible: bool,
    on_click: Option<ClickCallback>,
}

impl ActionHighlightLayer {
    fn with_config(config: LayerConfig) -> Self {
        Self {
            config,
            highlights: HashSet::new(),
            visible: true,
            on_click: None,
        }
    }

    pub fn movement() -> Self {
        Self::with_config(LayerConfig::new(MOVEMENT_LAYER, 5))
    }

    pub fn attack() -> Self {
        Self::with_config(LayerConfig::new(ATTACK_LAYER, 6))
    }

    pub fn set_highlights(&mut self, coords: impl IntoIterator<Item = AxialCoord>) {
        self.highlights = coords.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.highlights.clear();
    }

    pub fn is_highlighted(&self, coord: AxialCoord) -> bool {
        self.highlights.contains(&coord)
    }

    pub fn highlights(&self) -> impl Iterator<Item = AxialCoord> + '_ {
        self.highlights.iter().copied()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_click_callback(&mut self, callback: Option<ClickCallback>) {
        self.on_click = callback;
    }
}

impl Layer for ActionHighlightLayer {
    fn config(&self) -> &LayerConfig {
        &self.config
    }

    fn hit_test(&self, ctx: &ClickContext) -> Option<LayerHitResult> {
        if !self.visible {
            return None;
        }
        if self.is_highlighted(ctx.hex) {
            Some(LayerHitResult::Consume)
        } else {
            Some(LayerHitResult::Pass)
        }
    }

    fn handle_click(&mut self, ctx: &ClickContext) -> bool {
        if let Some(callback) = self.on_click.as_mut() {
            callback(ctx.hex);
        }
        true
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
