use bevy::prelude::*;

use crate::hex::AxialCoord;

use super::{ClickContext, Layer, LayerConfig, LayerHitResult};

pub const BASE_MAP_LAYER: &str = "base-map";

/// Reaction to a base-map click. Returns whether the click did anything.
pub type ClickCallback = Box<dyn FnMut(AxialCoord) -> bool + Send + Sync>;

/// Callbacks for the three kinds of base-map click.
#[derive(Default)]
pub struct MapLayerCallbacks {
    pub on_tile_clicked: Option<ClickCallback>,
    pub on_unit_clicked: Option<ClickCallback>,
    pub on_empty_space_clicked: Option<ClickCallback>,
}

/// Lowest layer of every stack. Consumes whatever nothing above it wanted and
/// routes it by what occupies the hex: unit first, then tile, then empty space.
pub struct BaseMapLayer {
    config: LayerConfig,
    callbacks: MapLayerCallbacks,
}

impl BaseMapLayer {
    pub fn new(callbacks: MapLayerCallbacks) -> Self {
        Self {
            config: LayerConfig::new(BASE_MAP_LAYER, 0).catch_all(),
            callbacks,
        }
    }

    /// Replace every callback at once.
    pub fn set_callbacks(&mut self, callbacks: MapLayerCallbacks) {
        debug!("Replacing base map callbacks");
        self.callbacks = callbacks;
    }

    pub fn set_tile_click_callback(&mut self, callback: Option<ClickCallback>) {
        self.callbacks.on_tile_clicked = callback;
    }

    pub fn set_unit_click_callback(&mut self, callback: Option<ClickCallback>) {
        self.callbacks.on_unit_clicked = callback;
    }

    pub fn set_empty_space_click_callback(&mut self, callback: Option<ClickCallback>) {
        self.callbacks.on_empty_space_clicked = callback;
    }
}

impl Default for BaseMapLayer {
    fn default() -> Self {
        Self::new(MapLayerCallbacks::default())
    }
}

impl Layer for BaseMapLayer {
    fn config(&self) -> &LayerConfig {
        &self.config
    }

    fn hit_test(&self, _ctx: &ClickContext) -> Option<LayerHitResult> {
        Some(LayerHitResult::Consume)
    }

    fn handle_click(&mut self, ctx: &ClickContext) -> bool {
        let (kind, callback) = if ctx.unit.is_some() {
            ("unit", self.callbacks.on_unit_clicked.as_mut())
        } else if ctx.tile.is_some() {
            ("tile", self.callbacks.on_tile_clicked.as_mut())
        } else {
            ("empty", self.callbacks.on_empty_space_clicked.as_mut())
        };

        match callback {
            Some(callback) => callback(ctx.hex),
            None => {
                debug!("No base map handler for {} click at {}", kind, ctx.hex);
                false
            }
        }
    }
}
