//! Click routing across stacked interaction layers.
//!
//! Every left click on the map is resolved to a [`ClickContext`] and offered
//! to the layers of the [`LayerStack`] from the highest depth down. The first
//! interactive layer whose hit test returns [`LayerHitResult::Consume`]
//! receives the click; nothing below it sees the event.
//!
//! The stack is built around a catch-all fallback (the [`BaseMapLayer`]),
//! so a dispatch always ends at some layer. Construction refuses a fallback
//! that could let a click fall through.
//!
//! ## Layers
//!
//! | Layer | Depth | Interactive | Consumes |
//! |---|---|---|---|
//! | [`ShapeToolLayer`] | 100 | yes | every click while a shape tool is active |
//! | [`SelectionHighlightLayer`] | 10 | no | never |
//! | attack [`ActionHighlightLayer`] | 6 | yes | highlighted hexes while visible |
//! | movement [`ActionHighlightLayer`] | 5 | yes | highlighted hexes while visible |
//! | [`BaseMapLayer`] | 0 | yes | everything |

mod base_map;
mod highlight;
mod shape_layer;


pub use base_map::{BaseMapLayer, ClickCallback, MapLayerCallbacks, BASE_MAP_LAYER};
pub use highlight::{
    ActionHighlightLayer, SelectionHighlightLayer, ATTACK_LAYER, MOVEMENT_LAYER, SELECTION_LAYER,
};
pub use shape_layer::{CompletedShape, ShapeToolLayer, SHAPE_TOOL_LAYER};

use std::any::Any;

use bevy::prelude::*;
use thiserror::Error;

use crate::hex::{hex_to_pixel, pixel_to_hex, AxialCoord, PixelCoord, TileMetrics};
use crate::map::{MapData, Tile, Unit};

/// Coordinate space a layer hit-tests in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateSpace {
    #[default]
    Hex,
    Pixel,
}

/// A layer's answer to "is this click yours?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerHitResult {
    Consume,
    Pass,
}

/// Static description of a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerConfig {
    pub name: String,
    /// Higher depth is asked first.
    pub depth: i32,
    pub coordinate_space: CoordinateSpace,
    /// Non-interactive layers are drawn but never offered clicks.
    pub interactive: bool,
    /// Declares that `hit_test` consumes every click. Required of the fallback.
    pub catch_all: bool,
}

impl LayerConfig {
    pub fn new(name: impl Into<String>, depth: i32) -> Self {
        Self {
            name: name.into(),
            depth,
            coordinate_space: CoordinateSpace::Hex,
            interactive: true,
            catch_all: false,
        }
    }

    pub fn passive(mut self) -> Self {
        self.interactive = false;
        self
    }

    pub fn catch_all(mut self) -> Self {
        self.catch_all = true;
        self
    }

    pub fn in_space(mut self, space: CoordinateSpace) -> Self {
        self.coordinate_space = space;
        self
    }
}

/// A single click, resolved into both pixel and hex space along with whatever
/// occupies the clicked hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickContext {
    /// Where the click landed. Hex-space layers see the hex center here.
    pub pixel: PixelCoord,
    pub hex: AxialCoord,
    /// Pixel center of `hex`.
    pub hex_center: PixelCoord,
    pub tile: Option<Tile>,
    pub unit: Option<Unit>,
}

impl ClickContext {
    /// Resolve a click at map pixel position `pixel`.
    pub fn resolve(pixel: PixelCoord, metrics: &TileMetrics, map: &MapData) -> Self {
        let hex = pixel_to_hex(pixel, metrics);
        Self {
            pixel,
            hex,
            hex_center: hex_to_pixel(hex, metrics),
            tile: map.tile_at(hex).copied(),
            unit: map.unit_at(hex).copied(),
        }
    }

    /// A click on `hex` with nothing on it. Mostly useful in tests.
    pub fn empty(hex: AxialCoord) -> Self {
        Self {
            pixel: PixelCoord::default(),
            hex,
            hex_center: PixelCoord::default(),
            tile: None,
            unit: None,
        }
    }

    /// The click as a layer working in `space` sees it. Hex-space layers get
    /// the click snapped to the center of its hex; pixel-space layers get the
    /// raw position.
    pub fn in_space(&self, space: CoordinateSpace) -> Self {
        match space {
            CoordinateSpace::Hex => Self {
                pixel: self.hex_center,
                ..*self
            },
            CoordinateSpace::Pixel => *self,
        }
    }
}

/// Upcast helper so boxed layers can be downcast to their concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub trait Layer: AsAny + Send + Sync {
    fn config(&self) -> &LayerConfig;

    /// `None` means no opinion and is treated like [`LayerHitResult::Pass`].
    fn hit_test(&self, ctx: &ClickContext) -> Option<LayerHitResult>;

    /// Handle a consumed click. Returns whether the click did anything.
    fn handle_click(&mut self, ctx: &ClickContext) -> bool;

    fn name(&self) -> &str {
        &self.config().name
    }

    fn depth(&self) -> i32 {
        self.config().depth
    }

    fn is_visible(&self) -> bool {
        true
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerStackError {
    #[error("layer `{0}` cannot be the fallback: it must be interactive and catch-all")]
    NoFallbackLayer(String),
    #[error("a layer named `{0}` is already registered")]
    DuplicateLayer(String),
    #[error("layer `{0}` is the last catch-all layer")]
    FallbackRemoval(String),
    #[error("no layer named `{0}`")]
    UnknownLayer(String),
}

/// Which layer took a click and whether it acted on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub layer: String,
    pub handled: bool,
}

/// Layers ordered by descending depth. Equal depths keep insertion order.
#[derive(Resource)]
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
}

fn is_fallback(config: &LayerConfig) -> bool {
    config.interactive && config.catch_all
}

impl LayerStack {
    pub fn new<L: Layer>(fallback: L) -> Result<Self, LayerStackError> {
        if !is_fallback(fallback.config()) {
            return Err(LayerStackError::NoFallbackLayer(fallback.name().to_string()));
        }
        Ok(Self {
            layers: vec![Box::new(fallback)],
        })
    }

    pub fn add<L: Layer>(&mut self, layer: L) -> Result<(), LayerStackError> {
        if self.contains(layer.name()) {
            return Err(LayerStackError::DuplicateLayer(layer.name().to_string()));
        }
        let depth = layer.depth();
        let index = self
            .layers
            .iter()
            .position(|existing| existing.depth() < depth)
            .unwrap_or(self.layers.len());
        debug!("Adding layer '{}' at depth {}", layer.name(), depth);
        self.layers.insert(index, Box::new(layer));
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Box<dyn Layer>, LayerStackError> {
        let index = self
            .layers
            .iter()
            .position(|layer| layer.name() == name)
            .ok_or_else(|| LayerStackError::UnknownLayer(name.to_string()))?;

        if is_fallback(self.layers[index].config()) {
            let fallbacks = self
                .layers
                .iter()
                .filter(|layer| is_fallback(layer.config()))
                .count();
            if fallbacks == 1 {
                return Err(LayerStackError::FallbackRemoval(name.to_string()));
            }
        }

        debug!("Removing layer '{}'", name);
        Ok(self.layers.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layers.iter().any(|layer| layer.name() == name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Never true: the fallback cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer names in dispatch order.
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    pub fn get<T: Layer>(&self, name: &str) -> Option<&T> {
        self.layers
            .iter()
            .find(|layer| layer.name() == name)
            .and_then(|layer| (**layer).as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Layer>(&mut self, name: &str) -> Option<&mut T> {
        self.layers
            .iter_mut()
            .find(|layer| layer.name() == name)
            .and_then(|layer| (**layer).as_any_mut().downcast_mut::<T>())
    }

    /// Offer `ctx` to each interactive layer, highest depth first, until one
    /// consumes it. Each layer sees the click in its own coordinate space.
    pub fn dispatch(&mut self, ctx: &ClickContext) -> Option<DispatchOutcome> {
        for layer in self.layers.iter_mut() {
            let config = layer.config();
            if !config.interactive {
                continue;
            }
            let local = ctx.in_space(config.coordinate_space);
            if layer.hit_test(&local) != Some(LayerHitResult::Consume) {
                continue;
            }
            let handled = layer.handle_click(&local);
            debug!(
                "Click at {} consumed by '{}' (handled: {})",
                ctx.hex,
                layer.name(),
                handled
            );
            return Some(DispatchOutcome {
                layer: layer.name().to_string(),
                handled,
            });
        }
        warn!("Click at {} was not consumed by any layer", ctx.hex);
        None
    }

    /// Resolve a map pixel position and dispatch it.
    pub fn dispatch_pixel(
        &mut self,
        pixel: PixelCoord,
        metrics: &TileMetrics,
        map: &MapData,
    ) -> Option<DispatchOutcome> {
        let ctx = ClickContext::resolve(pixel, metrics, map);
        self.dispatch(&ctx)
    }
}
