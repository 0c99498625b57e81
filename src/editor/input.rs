//! Map clicks and shape-tool keys, and the edits they produce.
//!
//! A left click is resolved to a hex and dispatched through the
//! [`LayerStack`]. Layers never touch the map themselves: the base map and
//! action highlight callbacks push a [`MapClick`] onto the shared
//! [`MapClickQueue`], and the shape tool layer queues finished shapes. Both
//! queues are drained later in the same frame, where the current tool decides
//! what the click means.

use std::sync::Arc;

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use parking_lot::Mutex;

use crate::constants::UNIT_MOVE_RANGE;
use crate::hex::{axial_neighbors, AxialCoord, TileMetrics};
use crate::map::shapes::{brush_positions, hex_range};
use crate::map::{MapData, Tile, TileEdit};

use super::history::{CommandHistory, EditorCommand};
use super::layers::{
    ActionHighlightLayer, BaseMapLayer, ClickCallback, LayerStack, LayerStackError,
    MapLayerCallbacks, SelectionHighlightLayer, ShapeToolLayer, ATTACK_LAYER, MOVEMENT_LAYER,
    SELECTION_LAYER, SHAPE_TOOL_LAYER,
};
use super::params::{is_cursor_over_ui, CameraParams};
use super::tools::{BrushSettings, CurrentTool, EditorTool, UnitSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapClickKind {
    Tile,
    Unit,
    Empty,
    /// A highlighted movement target
    Move,
    /// A highlighted attack target
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapClick {
    pub kind: MapClickKind,
    pub coord: AxialCoord,
}

/// Clicks reported by layer callbacks, drained once per frame.
#[derive(Resource, Clone, Default)]
pub struct MapClickQueue(Arc<Mutex<Vec<MapClick>>>);

impl MapClickQueue {
    pub fn push(&self, click: MapClick) {
        self.0.lock().push(click);
    }

    pub fn drain(&self) -> Vec<MapClick> {
        std::mem::take(&mut *self.0.lock())
    }

    /// Callback that records clicks of `kind`.
    pub fn callback(&self, kind: MapClickKind) -> ClickCallback {
        let queue = self.clone();
        Box::new(move |coord| {
            queue.push(MapClick { kind, coord });
            true
        })
    }
}

/// Hex currently under the cursor, if the cursor is over the map.
#[derive(Resource, Default)]
pub struct CursorHex {
    pub hex: Option<AxialCoord>,
}

/// The editor's layer stack, with every callback feeding `queue`.
pub fn build_layer_stack(queue: &MapClickQueue) -> Result<LayerStack, LayerStackError> {
    let base = BaseMapLayer::new(MapLayerCallbacks {
        on_tile_clicked: Some(queue.callback(MapClickKind::Tile)),
        on_unit_clicked: Some(queue.callback(MapClickKind::Unit)),
        on_empty_space_clicked: Some(queue.callback(MapClickKind::Empty)),
    });
    let mut stack = LayerStack::new(base)?;

    let mut movement = ActionHighlightLayer::movement();
    movement.set_click_callback(Some(queue.callback(MapClickKind::Move)));
    let mut attack = ActionHighlightLayer::attack();
    attack.set_click_callback(Some(queue.callback(MapClickKind::Attack)));

    stack.add(SelectionHighlightLayer::new())?;
    stack.add(movement)?;
    stack.add(attack)?;
    stack.add(ShapeToolLayer::new())?;
    Ok(stack)
}

pub fn setup_layer_stack(mut commands: Commands, queue: Res<MapClickQueue>) -> Result {
    let stack = build_layer_stack(&queue)?;
    info!("Layer stack ready: {}", stack.names().join(", "));
    commands.insert_resource(stack);
    Ok(())
}

pub fn update_cursor_hex(
    camera: CameraParams,
    metrics: Res<TileMetrics>,
    mut cursor: ResMut<CursorHex>,
) {
    let hex = camera.cursor_hex(&metrics);
    if cursor.hex != hex {
        cursor.hex = hex;
    }
}

/// Left click dispatches through the layer stack
pub fn handle_map_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    metrics: Res<TileMetrics>,
    map_data: Res<MapData>,
    mut stack: ResMut<LayerStack>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }
    let Some(pixel) = camera.cursor_pixel() else {
        return;
    };
    stack.dispatch_pixel(pixel, &metrics, &map_data);
}

/// Enter finishes the shape in progress, Escape abandons it. Escape with no
/// shape in progress clears the selection.
pub fn handle_shape_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut stack: ResMut<LayerStack>,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter)
        && let Some(layer) = stack.get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER)
        && !layer.confirm()
    {
        debug!("Nothing to confirm");
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        cancel_or_clear(&mut stack);
    }
}

/// Abandon the shape in progress, or clear the selection when there is none.
/// Returns whether a shape was abandoned.
pub fn cancel_or_clear(stack: &mut LayerStack) -> bool {
    let cancelled = stack
        .get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER)
        .is_some_and(|layer| layer.cancel());
    if !cancelled {
        clear_selection(stack);
    }
    cancelled
}

pub fn apply_map_clicks(
    queue: Res<MapClickQueue>,
    current_tool: Res<CurrentTool>,
    brush: Res<BrushSettings>,
    units: Res<UnitSettings>,
    mut map_data: ResMut<MapData>,
    mut history: ResMut<CommandHistory>,
    mut stack: ResMut<LayerStack>,
) {
    for click in queue.drain() {
        apply_click(
            click,
            current_tool.tool,
            &brush,
            &units,
            &mut map_data,
            &mut history,
            &mut stack,
        );
    }
}

pub fn apply_completed_shapes(
    brush: Res<BrushSettings>,
    mut map_data: ResMut<MapData>,
    mut history: ResMut<CommandHistory>,
    mut stack: ResMut<LayerStack>,
) {
    if let Some(layer) = stack.get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER) {
        paint_completed_shapes(layer, &brush, &mut map_data, &mut history);
    }
}

/// Paint every shape the layer finished with the brush terrain.
pub fn paint_completed_shapes(
    layer: &mut ShapeToolLayer,
    brush: &BrushSettings,
    map: &mut MapData,
    history: &mut CommandHistory,
) {
    for shape in layer.take_completed() {
        let edit = map.apply_tiles(&shape.tiles, Some(Tile::new(brush.terrain)));
        record_edit(history, shape.tool, edit);
    }
}

/// Carry out one queued click for `tool`.
///
/// Movement and attack targets only mean something to the Select tool. Any
/// other tool treats a click on them like a click on the map.
pub fn apply_click(
    click: MapClick,
    tool: EditorTool,
    brush: &BrushSettings,
    units: &UnitSettings,
    map: &mut MapData,
    history: &mut CommandHistory,
    stack: &mut LayerStack,
) {
    match (tool, click.kind) {
        (EditorTool::Select, MapClickKind::Move) => {
            move_selected_unit(click.coord, map, history, stack)
        }
        (EditorTool::Select, MapClickKind::Attack) => {
            info!("Attack target at {}", click.coord);
            select_hex(click.coord, map, stack);
        }
        (EditorTool::Select, _) => select_hex(click.coord, map, stack),
        (EditorTool::Paint, _) => {
            let coords = brush_positions(click.coord, brush.size);
            let edit = map.apply_tiles(&coords, Some(Tile::new(brush.terrain)));
            record_edit(history, "Paint", edit);
        }
        (EditorTool::Erase, _) => {
            let coords = brush_positions(click.coord, brush.size);
            let edit = map.apply_tiles(&coords, None);
            record_edit(history, "Erase", edit);
        }
        (EditorTool::Fill, _) => {
            let edit = map.flood_fill(click.coord, brush.terrain);
            record_edit(history, "Fill", edit);
        }
        (EditorTool::Unit, _) => toggle_unit(click.coord, units, map, history),
        // Shape clicks are consumed by the shape tool layer
        (EditorTool::Circle | EditorTool::Oval | EditorTool::Line, _) => {}
    }
}

/// Remove the unit at `coord`, or place one from `units` on bare terrain.
fn toggle_unit(
    coord: AxialCoord,
    units: &UnitSettings,
    map: &mut MapData,
    history: &mut CommandHistory,
) {
    let before = map.unit_at(coord).copied();
    let after = match before {
        Some(_) => None,
        None if map.tile_at(coord).is_some() => Some(units.unit()),
        None => {
            debug!("No terrain at {} to place a unit on", coord);
            return;
        }
    };
    map.set_unit(coord, after);
    let command = EditorCommand::EditUnit {
        coord,
        before,
        after,
    };
    info!("{} at {}", command.label(), coord);
    history.push(command);
}

fn record_edit(history: &mut CommandHistory, label: &'static str, edit: TileEdit) {
    if edit.is_empty() {
        return;
    }
    debug!("{}: {} tiles changed", label, edit.len());
    history.push(EditorCommand::EditTiles { label, edit });
}

/// Hexes a unit at `from` can move to: tiled, unoccupied and in range.
pub fn movement_targets(map: &MapData, from: AxialCoord) -> Vec<AxialCoord> {
    hex_range(from, UNIT_MOVE_RANGE)
        .into_iter()
        .filter(|&coord| {
            coord != from && map.tile_at(coord).is_some() && map.unit_at(coord).is_none()
        })
        .collect()
}

/// Adjacent hexes holding a unit of another player.
pub fn attack_targets(map: &MapData, from: AxialCoord) -> Vec<AxialCoord> {
    let Some(attacker) = map.unit_at(from) else {
        return Vec::new();
    };
    axial_neighbors(from)
        .into_iter()
        .filter(|&coord| {
            map.unit_at(coord)
                .is_some_and(|target| target.player != attacker.player)
        })
        .collect()
}

fn select_hex(coord: AxialCoord, map: &MapData, stack: &mut LayerStack) {
    if let Some(selection) = stack.get_mut::<SelectionHighlightLayer>(SELECTION_LAYER) {
        selection.select(coord);
    }

    let has_unit = map.unit_at(coord).is_some();
    let (moves, attacks) = if has_unit {
        (movement_targets(map, coord), attack_targets(map, coord))
    } else {
        (Vec::new(), Vec::new())
    };
    if let Some(layer) = stack.get_mut::<ActionHighlightLayer>(MOVEMENT_LAYER) {
        layer.set_highlights(moves);
    }
    if let Some(layer) = stack.get_mut::<ActionHighlightLayer>(ATTACK_LAYER) {
        layer.set_highlights(attacks);
    }
}

pub fn clear_selection(stack: &mut LayerStack) {
    if let Some(selection) = stack.get_mut::<SelectionHighlightLayer>(SELECTION_LAYER) {
        selection.clear();
    }
    for name in [MOVEMENT_LAYER, ATTACK_LAYER] {
        if let Some(layer) = stack.get_mut::<ActionHighlightLayer>(name) {
            layer.clear();
        }
    }
}

fn move_selected_unit(
    to: AxialCoord,
    map: &mut MapData,
    history: &mut CommandHistory,
    stack: &mut LayerStack,
) {
    let Some(from) = stack
        .get::<SelectionHighlightLayer>(SELECTION_LAYER)
        .and_then(SelectionHighlightLayer::selected)
    else {
        warn!("Move to {} with nothing selected", to);
        return;
    };
    let Some(unit) = map.remove_unit(from) else {
        warn!("No unit at {} to move", from);
        return;
    };
    map.add_unit(to, unit);
    info!("Moved unit from {} to {}", from, to);
    history.push(EditorCommand::MoveUnit { unit, from, to });
    select_hex(to, map, stack);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::layers::{ClickContext, BASE_MAP_LAYER};
    use crate::editor::shape_tools::{CircleTool, ShapeToolKind};
    use crate::editor::tools::install_tool;
    use crate::map::shapes::circle_from;
    use crate::map::Unit;

    fn ax(q: i32, r: i32) -> AxialCoord {
        AxialCoord::new(q, r)
    }

    fn ctx(map: &MapData, hex: AxialCoord) -> ClickContext {
        ClickContext {
            tile: map.tile_at(hex).copied(),
            unit: map.unit_at(hex).copied(),
            ..ClickContext::empty(hex)
        }
    }

    fn grass_map(radius: u32) -> MapData {
        let mut map = MapData::default();
        map.apply_tiles(&hex_range(AxialCoord::ORIGIN, radius), Some(Tile::new(1)));
        map
    }

    struct Editor {
        queue: MapClickQueue,
        stack: LayerStack,
        map: MapData,
        history: CommandHistory,
        brush: BrushSettings,
        units: UnitSettings,
    }

    impl Editor {
        fn new(map: MapData) -> Self {
            let queue = MapClickQueue::default();
            let stack = build_layer_stack(&queue).unwrap();
            Self {
                queue,
                stack,
                map,
                history: CommandHistory::default(),
                brush: BrushSettings::default(),
                units: UnitSettings::default(),
            }
        }

        fn click(&mut self, tool: EditorTool, hex: AxialCoord) {
            let ctx = ctx(&self.map, hex);
            self.stack.dispatch(&ctx);
            for click in self.queue.drain() {
                apply_click(
                    click,
                    tool,
                    &self.brush,
                    &self.units,
                    &mut self.map,
                    &mut self.history,
                    &mut self.stack,
                );
            }
        }
    }

    impl Editor {
        fn install(&mut self, tool: EditorTool) {
            let layer = self.stack.get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER).unwrap();
            layer.set_tool(tool.shape_tool(self.brush.fill));
        }

        fn paint_shapes(&mut self) {
            let layer = self.stack.get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER).unwrap();
            paint_completed_shapes(layer, &self.brush, &mut self.map, &mut self.history);
        }

        fn selected(&self) -> Option<AxialCoord> {
            self.stack
                .get::<SelectionHighlightLayer>(SELECTION_LAYER)
                .and_then(SelectionHighlightLayer::selected)
        }
    }

    #[test]
    fn test_stack_layout() {
        let stack = build_layer_stack(&MapClickQueue::default()).unwrap();
        assert_eq!(
            stack.names(),
            vec![
                SHAPE_TOOL_LAYER,
                SELECTION_LAYER,
                ATTACK_LAYER,
                MOVEMENT_LAYER,
                BASE_MAP_LAYER
            ]
        );
    }

    #[test]
    fn test_base_map_clicks_are_queued_by_kind() {
        let mut editor = Editor::new(grass_map(1));
        editor.map.add_unit(ax(1, 0), Unit { unit_type: 1, player: 1 });

        for hex in [ax(0, 0), ax(1, 0), ax(9, 9)] {
            let ctx = ctx(&editor.map, hex);
            editor.stack.dispatch(&ctx);
        }
        let kinds: Vec<_> = editor.queue.drain().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![MapClickKind::Tile, MapClickKind::Unit, MapClickKind::Empty]
        );
        assert!(editor.queue.drain().is_empty());
    }

    #[test]
    fn test_paint_uses_brush_and_records_history() {
        let mut editor = Editor::new(MapData::default());
        editor.brush.terrain = 3;
        editor.brush.size = 1;
        editor.click(EditorTool::Paint, ax(0, 0));

        assert_eq!(editor.map.tiles.len(), 7);
        assert_eq!(editor.map.tile_at(ax(1, -1)), Some(&Tile::new(3)));
        assert_eq!(editor.history.undo_count(), 1);

        // Painting the same footprint again changes nothing
        editor.click(EditorTool::Paint, ax(0, 0));
        assert_eq!(editor.history.undo_count(), 1);
    }

    #[test]
    fn test_erase_and_undo() {
        let mut editor = Editor::new(grass_map(2));
        editor.click(EditorTool::Erase, ax(0, 0));
        assert!(editor.map.tile_at(ax(0, 0)).is_none());
        assert_eq!(editor.map.tiles.len(), 18);

        editor.history.undo(&mut editor.map);
        assert_eq!(editor.map, grass_map(2));
    }

    #[test]
    fn test_fill_retypes_region() {
        let mut editor = Editor::new(grass_map(2));
        editor.brush.terrain = 3;
        editor.click(EditorTool::Fill, ax(1, 1));
        assert!(editor.map.tiles.values().all(|tile| tile.tile_type == 3));
        assert_eq!(editor.history.next_undo_label(), Some("Fill"));
    }

    #[test]
    fn test_completed_circle_is_painted() {
        let mut editor = Editor::new(MapData::default());
        editor.brush.terrain = 4;
        editor
            .stack
            .get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER)
            .unwrap()
            .set_tool(Some(ShapeToolKind::Circle(CircleTool::new(true))));

        editor.click(EditorTool::Circle, ax(0, 0));
        editor.click(EditorTool::Circle, ax(2, 0));

        editor.paint_shapes();

        let circle = circle_from(ax(0, 0), 2, true);
        assert_eq!(editor.map.tiles.len(), circle.len());
        for coord in circle {
            assert_eq!(editor.map.tile_at(coord), Some(&Tile::new(4)));
        }
        assert_eq!(editor.history.next_undo_label(), Some("Circle"));

        // The queue was drained, so a second pass records nothing
        editor.paint_shapes();
        assert_eq!(editor.history.undo_count(), 1);
    }

    #[test]
    fn test_confirmed_line_is_painted_and_undoable() {
        let mut editor = Editor::new(grass_map(3));
        editor.brush.terrain = 3;
        editor.install(EditorTool::Line);

        editor.click(EditorTool::Line, ax(-2, 0));
        editor.click(EditorTool::Line, ax(2, 0));
        let layer = editor.stack.get_mut::<ShapeToolLayer>(SHAPE_TOOL_LAYER).unwrap();
        assert!(layer.confirm());
        editor.paint_shapes();

        for q in -2..=2 {
            assert_eq!(editor.map.tile_at(ax(q, 0)), Some(&Tile::new(3)));
        }
        assert_eq!(editor.history.next_undo_label(), Some("Line"));
        editor.history.undo(&mut editor.map);
        assert_eq!(editor.map, grass_map(3));
    }

    #[test]
    fn test_escape_cancels_shape_before_clearing_selection() {
        let mut map = grass_map(2);
        map.add_unit(ax(0, 0), Unit { unit_type: 1, player: 1 });
        let mut editor = Editor::new(map);
        editor.click(EditorTool::Select, ax(0, 0));
        editor.install(EditorTool::Line);
        editor.click(EditorTool::Line, ax(1, 0));

        // First Escape drops the line, the selection survives
        assert!(cancel_or_clear(&mut editor.stack));
        let layer = editor.stack.get::<ShapeToolLayer>(SHAPE_TOOL_LAYER).unwrap();
        assert!(layer.anchors().is_empty());
        assert_eq!(editor.selected(), Some(ax(0, 0)));

        // Second Escape has no shape to drop and clears the selection
        assert!(!cancel_or_clear(&mut editor.stack));
        assert_eq!(editor.selected(), None);
        let movement = editor.stack.get::<ActionHighlightLayer>(MOVEMENT_LAYER).unwrap();
        assert_eq!(movement.highlights().count(), 0);
    }

    #[test]
    fn test_paint_over_movement_target_paints() {
        let mut map = grass_map(3);
        let unit = Unit { unit_type: 2, player: 1 };
        map.add_unit(ax(0, 0), unit);
        let mut editor = Editor::new(map);
        editor.brush.terrain = 5;

        editor.click(EditorTool::Select, ax(0, 0));
        let movement = editor.stack.get::<ActionHighlightLayer>(MOVEMENT_LAYER).unwrap();
        assert!(movement.is_highlighted(ax(2, 0)));

        editor.click(EditorTool::Paint, ax(2, 0));

        assert_eq!(editor.map.tile_at(ax(2, 0)), Some(&Tile::new(5)));
        assert_eq!(editor.map.unit_at(ax(0, 0)), Some(&unit));
        assert!(editor.map.unit_at(ax(2, 0)).is_none());
        assert_eq!(editor.history.next_undo_label(), Some("Paint"));
    }

    #[test]
    fn test_leaving_select_clears_targets() {
        let mut map = grass_map(3);
        map.add_unit(ax(0, 0), Unit { unit_type: 2, player: 1 });
        let mut editor = Editor::new(map);
        editor.click(EditorTool::Select, ax(0, 0));

        install_tool(EditorTool::Paint, true, &mut editor.stack);

        assert_eq!(editor.selected(), None);
        let movement = editor.stack.get::<ActionHighlightLayer>(MOVEMENT_LAYER).unwrap();
        assert_eq!(movement.highlights().count(), 0);
        // With no targets left the click reaches the base map as a tile click
        editor.click(EditorTool::Paint, ax(2, 0));
        assert_eq!(editor.map.unit_at(ax(0, 0)).map(|u| u.unit_type), Some(2));
    }

    #[test]
    fn test_unit_tool_places_and_removes() {
        let mut editor = Editor::new(grass_map(1));
        editor.units = UnitSettings {
            unit_type: 4,
            player: 2,
        };

        editor.click(EditorTool::Unit, ax(1, 0));
        let placed = Unit { unit_type: 4, player: 2 };
        assert_eq!(editor.map.unit_at(ax(1, 0)), Some(&placed));
        assert_eq!(editor.history.next_undo_label(), Some("Place unit"));

        // The same hex now routes as a unit click and removes it
        editor.click(EditorTool::Unit, ax(1, 0));
        assert!(editor.map.unit_at(ax(1, 0)).is_none());
        assert_eq!(editor.history.next_undo_label(), Some("Remove unit"));

        editor.history.undo(&mut editor.map);
        assert_eq!(editor.map.unit_at(ax(1, 0)), Some(&placed));
    }

    #[test]
    fn test_unit_tool_needs_terrain() {
        let mut editor = Editor::new(grass_map(1));
        editor.click(EditorTool::Unit, ax(5, 5));
        assert!(editor.map.units.is_empty());
        assert!(!editor.history.can_undo());
    }

    #[test]
    fn test_select_unit_highlights_targets() {
        let mut map = grass_map(3);
        map.add_unit(ax(0, 0), Unit { unit_type: 1, player: 1 });
        map.add_unit(ax(1, 0), Unit { unit_type: 1, player: 2 });
        map.add_unit(ax(-1, 0), Unit { unit_type: 1, player: 1 });
        let mut editor = Editor::new(map);

        editor.click(EditorTool::Select, ax(0, 0));

        let selection = editor
            .stack
            .get::<SelectionHighlightLayer>(SELECTION_LAYER)
            .unwrap();
        assert_eq!(selection.selected(), Some(ax(0, 0)));

        let attack = editor.stack.get::<ActionHighlightLayer>(ATTACK_LAYER).unwrap();
        assert_eq!(attack.highlights().collect::<Vec<_>>(), vec![ax(1, 0)]);

        let movement = editor.stack.get::<ActionHighlightLayer>(MOVEMENT_LAYER).unwrap();
        assert!(movement.is_highlighted(ax(0, 1)));
        assert!(!movement.is_highlighted(ax(1, 0)));
        assert!(!movement.is_highlighted(ax(0, 0)));
    }

    #[test]
    fn test_click_on_movement_target_moves_unit() {
        let mut map = grass_map(3);
        let unit = Unit { unit_type: 2, player: 1 };
        map.add_unit(ax(0, 0), unit);
        let mut editor = Editor::new(map);

        editor.click(EditorTool::Select, ax(0, 0));
        editor.click(EditorTool::Select, ax(2, 0));

        assert_eq!(editor.map.unit_at(ax(2, 0)), Some(&unit));
        assert!(editor.map.unit_at(ax(0, 0)).is_none());
        assert_eq!(editor.history.next_undo_label(), Some("Move unit"));

        let selection = editor
            .stack
            .get::<SelectionHighlightLayer>(SELECTION_LAYER)
            .unwrap();
        assert_eq!(selection.selected(), Some(ax(2, 0)));
    }

    #[test]
    fn test_clear_selection() {
        let mut map = grass_map(2);
        map.add_unit(ax(0, 0), Unit { unit_type: 1, player: 1 });
        let mut editor = Editor::new(map);
        editor.click(EditorTool::Select, ax(0, 0));

        clear_selection(&mut editor.stack);
        let selection = editor
            .stack
            .get::<SelectionHighlightLayer>(SELECTION_LAYER)
            .unwrap();
        assert_eq!(selection.selected(), None);
        let movement = editor.stack.get::<ActionHighlightLayer>(MOVEMENT_LAYER).unwrap();
        assert_eq!(movement.highlights().count(), 0);
    }

    #[test]
    fn test_targets_without_unit_are_empty() {
        let map = grass_map(1);
        assert!(attack_targets(&map, ax(0, 0)).is_empty());
        assert_eq!(movement_targets(&map, ax(0, 0)).len(), 6);
    }
}
