use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_TERRAIN, MAX_BRUSH_SIZE};
use crate::hex::TileMetrics;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Editor configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfigData {
    /// Pixel size of a hex tile and its row spacing
    #[serde(default)]
    pub tile_metrics: TileMetrics,

    /// Whether circle and oval tools start out filled
    #[serde(default = "default_fill")]
    pub default_fill: bool,

    /// Brush radius for paint and erase (0 = single hex)
    #[serde(default)]
    pub default_brush_size: u32,

    /// Terrain type selected on startup
    #[serde(default = "default_terrain")]
    pub default_terrain: u32,
}

fn default_fill() -> bool {
    true
}

fn default_terrain() -> u32 {
    DEFAULT_TERRAIN
}

impl Default for EditorConfigData {
    fn default() -> Self {
        Self {
            tile_metrics: TileMetrics::default(),
            default_fill: default_fill(),
            default_brush_size: 0,
            default_terrain: default_terrain(),
        }
    }
}

impl EditorConfigData {
    /// Clamp values a hand-edited file may have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        let metrics = self.tile_metrics;
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !(usable(metrics.tile_width) && usable(metrics.tile_height) && usable(metrics.y_increment)) {
            warn!("Ignoring invalid tile metrics {:?}", metrics);
            self.tile_metrics = TileMetrics::default();
        }
        self.default_brush_size = self.default_brush_size.min(MAX_BRUSH_SIZE);
        self
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct EditorConfig {
    /// The persisted configuration data
    pub data: EditorConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data: EditorConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to store the current tool settings as startup defaults
#[derive(Message)]
pub struct UpdateToolDefaultsRequest {
    pub terrain: u32,
    pub brush_size: u32,
    pub fill: bool,
}

/// Parse config file contents. Errors carry the user-facing reset reason.
fn parse_config(json: &str) -> Result<EditorConfigData, String> {
    serde_json::from_str::<EditorConfigData>(json)
        .map(EditorConfigData::sanitized)
        .map_err(|e| format!("Configuration file was corrupted: {}", e))
}

/// Load configuration from disk, returning the data and the reason it was
/// reset to defaults, if it was.
fn load_config(config_path: &Path) -> (EditorConfigData, Option<String>) {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return (EditorConfigData::default(), None);
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => match parse_config(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", config_path);
                (data, None)
            }
            Err(reason) => {
                warn!("{}", reason);
                (EditorConfigData::default(), Some(reason))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                EditorConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
fn save_config(config: &EditorConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<EditorConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (data, reset_reason) = load_config(&config.config_path);
    config.data = data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<EditorConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to store tool defaults
fn update_tool_defaults_system(
    mut events: MessageReader<UpdateToolDefaultsRequest>,
    mut config: ResMut<EditorConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.default_terrain = event.terrain;
        config.data.default_brush_size = event.brush_size.min(MAX_BRUSH_SIZE);
        config.data.default_fill = event.fill;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!(
            "Tool defaults set: terrain {}, brush {}, fill {}",
            event.terrain, event.brush_size, event.fill
        );
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateToolDefaultsRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_tool_defaults_system.run_if(on_message::<UpdateToolDefaultsRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
