use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::config::EditorConfig;
use crate::constants::MAX_BRUSH_SIZE;
use crate::hex::TileMetrics;

use crate::map::Unit;

use super::input::clear_selection;
use super::layers::{LayerStack, ShapeToolLayer, SHAPE_TOOL_LAYER};
use super::shape_tools::{CircleTool, LineTool, OvalTool, ShapeToolKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    #[default]
    Select,
    Paint,
    Erase,
    Fill,
    Unit,
    Circle,
    Oval,
    Line,
}

impl EditorTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            EditorTool::Select => "Select (V)",
            EditorTool::Paint => "Paint (B)",
            EditorTool::Erase => "Erase (E)",
            EditorTool::Fill => "Fill (G)",
            EditorTool::Unit => "Unit (U)",
            EditorTool::Circle => "Circle (C)",
            EditorTool::Oval => "Oval (O)",
            EditorTool::Line => "Line (L)",
        }
    }

    pub fn shortcut(&self) -> KeyCode {
        match self {
            EditorTool::Select => KeyCode::KeyV,
            EditorTool::Paint => KeyCode::KeyB,
            EditorTool::Erase => KeyCode::KeyE,
            EditorTool::Fill => KeyCode::KeyG,
            EditorTool::Unit => KeyCode::KeyU,
            EditorTool::Circle => KeyCode::KeyC,
            EditorTool::Oval => KeyCode::KeyO,
            EditorTool::Line => KeyCode::KeyL,
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            EditorTool::Select => CursorIcon::System(SystemCursorIcon::Default),
            EditorTool::Fill => CursorIcon::System(SystemCursorIcon::Cell),
            EditorTool::Unit => CursorIcon::System(SystemCursorIcon::Pointer),
            _ => CursorIcon::System(SystemCursorIcon::Crosshair),
        }
    }

    pub fn all() -> &'static [EditorTool] {
        &[
            EditorTool::Select,
            EditorTool::Paint,
            EditorTool::Erase,
            EditorTool::Fill,
            EditorTool::Unit,
            EditorTool::Circle,
            EditorTool::Oval,
            EditorTool::Line,
        ]
    }

    pub fn is_shape_tool(&self) -> bool {
        matches!(self, EditorTool::Circle | EditorTool::Oval | EditorTool::Line)
    }

    /// Whether the brush size applies to this tool.
    pub fn uses_brush(&self) -> bool {
        matches!(self, EditorTool::Paint | EditorTool::Erase)
    }

    /// A fresh shape tool for this editor tool, if it is one.
    pub fn shape_tool(&self, filled: bool) -> Option<ShapeToolKind> {
        match self {
            EditorTool::Circle => Some(ShapeToolKind::Circle(CircleTool::new(filled))),
            EditorTool::Oval => Some(ShapeToolKind::Oval(OvalTool::new(filled))),
            EditorTool::Line => Some(ShapeToolKind::Line(LineTool::new())),
            _ => None,
        }
    }
}

#[derive(Resource, Default)]
pub struct CurrentTool {
    pub tool: EditorTool,
}

/// Terrain, brush and fill settings shared by the painting tools.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BrushSettings {
    pub terrain: u32,
    /// 0 paints a single hex; n paints every hex within n steps.
    pub size: u32,
    pub fill: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            terrain: crate::constants::DEFAULT_TERRAIN,
            size: 0,
            fill: true,
        }
    }
}

impl BrushSettings {
    pub fn grow(&mut self) {
        self.size = (self.size + 1).min(MAX_BRUSH_SIZE);
    }

    pub fn shrink(&mut self) {
        self.size = self.size.saturating_sub(1);
    }
}

/// The unit the Unit tool places.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct UnitSettings {
    pub unit_type: u32,
    pub player: u32,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            unit_type: 1,
            player: 1,
        }
    }
}

impl UnitSettings {
    pub fn unit(&self) -> Unit {
        Unit {
            unit_type: self.unit_type,
            player: self.player,
        }
    }
}

/// Copy the loaded config into the editor's runtime resources.
pub fn apply_config_defaults(
    config: Res<EditorConfig>,
    mut brush: ResMut<BrushSettings>,
    mut metrics: ResMut<TileMetrics>,
) {
    *metrics = config.data.tile_metrics;
    brush.terrain = config.data.default_terrain;
    brush.size = config.data.default_brush_size.min(MAX_BRUSH_SIZE);
    brush.fill = config.data.default_fill;
}

pub fn handle_tool_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_tool: ResMut<CurrentTool>,
    mut brush: ResMut<BrushSettings>,
    mut contexts: EguiContexts,
) {
    // Don't change tools if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    // Leave Ctrl combinations to undo/redo
    if keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight) {
        return;
    }

    if let Some(tool) = EditorTool::all()
        .iter()
        .find(|tool| keyboard.just_pressed(tool.shortcut()))
        && current_tool.tool != *tool
    {
        current_tool.tool = *tool;
    }

    if keyboard.just_pressed(KeyCode::BracketRight) {
        brush.grow();
    } else if keyboard.just_pressed(KeyCode::BracketLeft) {
        brush.shrink();
    }
}

/// Install the matching shape tool whenever the current tool changes.
/// Selection and its move/attack targets belong to the Select tool and are
/// dropped when leaving it.
pub fn sync_shape_tool(
    current_tool: Res<CurrentTool>,
    brush: Res<BrushSettings>,
    mut stack: ResMut<LayerStack>,
) {
    install_tool(current_tool.tool, brush.fill, &mut stack);
    debug!("Active tool: {:?}", current_tool.tool);
}

pub fn install_tool(tool: EditorTool, filled: bool, stack: &mut LayerStack) {
    if tool != EditorTool::Select {
        clear_selection(stack);
    }
    if let Some(layer) = stack.get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER) {
        layer.set_tool(tool.shape_tool(filled));
    }
}

/// Push fill toggles into the shape tool in progress.
pub fn sync_shape_fill(brush: Res<BrushSettings>, mut stack: ResMut<LayerStack>) {
    if let Some(layer) = stack.get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER) {
        layer.set_filled(brush.fill);
    }
}

pub fn update_cursor_icon(
    current_tool: Res<CurrentTool>,
    mut window_query: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok((entity, _window)) = window_query.single_mut() else {
        return;
    };

    // Use default cursor over UI, tool cursor in editor space
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    commands.entity(entity).insert(current_tool.tool.cursor_icon());
}
