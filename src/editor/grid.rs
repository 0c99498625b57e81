use std::ops::RangeInclusive;

use bevy::prelude::*;

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::hex::{hex_to_pixel, row_col_to_hex, AxialCoord, PixelCoord, RowCol, TileMetrics};
use crate::map::shapes::brush_positions;
use crate::map::MapData;
use crate::theme;

use super::camera::CameraZoom;
use super::input::CursorHex;
use super::layers::{
    ActionHighlightLayer, Layer, LayerStack, SelectionHighlightLayer, ShapeToolLayer,
    ATTACK_LAYER, MOVEMENT_LAYER, SELECTION_LAYER, SHAPE_TOOL_LAYER,
};
use super::tools::{BrushSettings, CurrentTool, EditorTool};
use super::EditorCamera;

/// Corners of a pointy-top hex centered on `center`, in pixel space,
/// starting at the top and going clockwise.
pub fn hex_corners(center: PixelCoord, metrics: &TileMetrics, scale: f32) -> [PixelCoord; 6] {
    let half_w = metrics.tile_width / 2.0 * scale;
    let half_h = metrics.tile_height / 2.0 * scale;
    // Side edges span the rows' vertical overlap
    let side = (metrics.y_increment - metrics.tile_height / 2.0).max(0.0) * scale;
    let at = |dx: f32, dy: f32| PixelCoord::new(center.x + dx, center.y + dy);
    [
        at(0.0, -half_h),
        at(half_w, -side),
        at(half_w, side),
        at(0.0, half_h),
        at(-half_w, side),
        at(-half_w, -side),
    ]
}

/// Rows and columns overlapping a view of `view_size` pixels centered on
/// `center`, with one hex of margin on every side.
pub fn visible_range(
    center: PixelCoord,
    view_size: Vec2,
    metrics: &TileMetrics,
) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
    let half = view_size / 2.0;
    let rows = ((center.y - half.y) / metrics.y_increment).floor() as i32 - 1
        ..=((center.y + half.y) / metrics.y_increment).ceil() as i32 + 1;
    let cols = ((center.x - half.x) / metrics.tile_width).floor() as i32 - 1
        ..=((center.x + half.x) / metrics.tile_width).ceil() as i32 + 1;
    (rows, cols)
}

fn outline(gizmos: &mut Gizmos, coord: AxialCoord, metrics: &TileMetrics, scale: f32, color: Color) {
    let corners = hex_corners(hex_to_pixel(coord, metrics), metrics, scale);
    let points = corners
        .iter()
        .chain(corners.first())
        .map(|corner| corner.to_world());
    gizmos.linestrip_2d(points, color);
}

pub fn draw_grid(
    mut gizmos: Gizmos,
    map_data: Res<MapData>,
    metrics: Res<TileMetrics>,
    camera_query: Query<(&Transform, &CameraZoom), With<EditorCamera>>,
) {
    if !map_data.grid_visible {
        return;
    }

    let Ok((camera_transform, zoom)) = camera_query.single() else {
        return;
    };

    let view_size = Vec2::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT) * zoom.scale;
    let center = PixelCoord::from_world(camera_transform.translation.truncate());
    let (rows, cols) = visible_range(center, view_size, &metrics);

    for row in rows {
        for col in cols.clone() {
            let coord = row_col_to_hex(RowCol::new(row, col));
            outline(&mut gizmos, coord, &metrics, 1.0, theme::GRID_COLOR);
        }
    }
}

/// Terrain is drawn as nested outlines in the terrain's palette color.
pub fn draw_tiles(mut gizmos: Gizmos, map_data: Res<MapData>, metrics: Res<TileMetrics>) {
    for (coord, tile) in &map_data.tiles {
        let color = theme::terrain_color(tile.tile_type);
        for scale in [0.9, 0.65, 0.4, 0.15] {
            outline(&mut gizmos, *coord, &metrics, scale, color);
        }
    }
}

pub fn draw_units(mut gizmos: Gizmos, map_data: Res<MapData>, metrics: Res<TileMetrics>) {
    let radius = metrics.tile_width.min(metrics.tile_height) * 0.25;
    for coord in map_data.units.keys() {
        let center = hex_to_pixel(*coord, &metrics).to_world();
        gizmos.circle_2d(center, radius, theme::UNIT_MARKER);
    }
}

pub fn draw_highlights(mut gizmos: Gizmos, stack: Res<LayerStack>, metrics: Res<TileMetrics>) {
    for (name, color) in [
        (MOVEMENT_LAYER, theme::MOVEMENT_HIGHLIGHT),
        (ATTACK_LAYER, theme::ATTACK_HIGHLIGHT),
    ] {
        let Some(layer) = stack.get::<ActionHighlightLayer>(name) else {
            continue;
        };
        if !layer.is_visible() {
            continue;
        }
        for coord in layer.highlights() {
            outline(&mut gizmos, coord, &metrics, 0.8, color);
        }
    }

    if let Some(selected) = stack
        .get::<SelectionHighlightLayer>(SELECTION_LAYER)
        .and_then(SelectionHighlightLayer::selected)
    {
        outline(&mut gizmos, selected, &metrics, 0.95, theme::SELECTION_COLOR);
        outline(&mut gizmos, selected, &metrics, 0.9, theme::SELECTION_COLOR);
    }
}

pub fn draw_shape_preview(
    mut gizmos: Gizmos,
    stack: Res<LayerStack>,
    cursor: Res<CursorHex>,
    metrics: Res<TileMetrics>,
) {
    let Some(layer) = stack.get::<ShapeToolLayer>(SHAPE_TOOL_LAYER) else {
        return;
    };
    if !layer.is_active() {
        return;
    }

    if let Some(cursor) = cursor.hex {
        for coord in layer.preview(cursor) {
            outline(&mut gizmos, coord, &metrics, 0.8, theme::SHAPE_PREVIEW);
        }
    }

    let radius = metrics.tile_width.min(metrics.tile_height) * 0.15;
    for anchor in layer.anchors() {
        let center = hex_to_pixel(anchor, &metrics).to_world();
        gizmos.circle_2d(center, radius, theme::SHAPE_ANCHOR);
    }
}

/// Brush footprint for painting tools, a plain hover outline otherwise.
pub fn draw_brush_preview(
    mut gizmos: Gizmos,
    current_tool: Res<CurrentTool>,
    brush: Res<BrushSettings>,
    cursor: Res<CursorHex>,
    metrics: Res<TileMetrics>,
) {
    let Some(cursor) = cursor.hex else {
        return;
    };

    match current_tool.tool {
        tool if tool.uses_brush() => {
            for coord in brush_positions(cursor, brush.size) {
                outline(&mut gizmos, coord, &metrics, 0.95, theme::BRUSH_PREVIEW);
            }
        }
        EditorTool::Select | EditorTool::Fill | EditorTool::Unit => {
            outline(&mut gizmos, cursor, &metrics, 1.0, theme::HOVER_COLOR);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::pixel_to_hex;

    fn metrics() -> TileMetrics {
        TileMetrics::default()
    }

    #[test]
    fn test_corners_of_default_tile() {
        let corners = hex_corners(PixelCoord::new(0.0, 0.0), &metrics(), 1.0);
        assert_eq!(corners[0], PixelCoord::new(0.0, -32.0));
        assert_eq!(corners[1], PixelCoord::new(32.0, -16.0));
        assert_eq!(corners[2], PixelCoord::new(32.0, 16.0));
        assert_eq!(corners[3], PixelCoord::new(0.0, 32.0));
        assert_eq!(corners[4], PixelCoord::new(-32.0, 16.0));
        assert_eq!(corners[5], PixelCoord::new(-32.0, -16.0));
    }

    #[test]
    fn test_corners_scale_around_center() {
        let center = PixelCoord::new(100.0, 50.0);
        let corners = hex_corners(center, &metrics(), 0.5);
        assert_eq!(corners[0], PixelCoord::new(100.0, 34.0));
        assert_eq!(corners[3], PixelCoord::new(100.0, 66.0));
        assert_eq!(corners[1], PixelCoord::new(116.0, 42.0));
    }

    #[test]
    fn test_neighbor_rows_share_a_corner() {
        let m = metrics();
        // Bottom corner of (0,0) sits on the top edge of the odd row below
        let below = hex_to_pixel(AxialCoord::new(0, 1), &m);
        let upper = hex_corners(hex_to_pixel(AxialCoord::ORIGIN, &m), &m, 1.0);
        let lower = hex_corners(below, &m, 1.0);
        assert_eq!(upper[3].y, lower[5].y);
        assert_eq!(upper[3].x, lower[5].x);
    }

    #[test]
    fn test_side_corners_inside_own_hex() {
        let m = metrics();
        let coord = AxialCoord::new(2, -3);
        let corners = hex_corners(hex_to_pixel(coord, &m), &m, 0.8);
        for index in [1, 2, 4, 5] {
            assert_eq!(pixel_to_hex(corners[index], &m), coord);
        }
    }

    #[test]
    fn test_visible_range_covers_view() {
        let m = metrics();
        let (rows, cols) = visible_range(PixelCoord::new(0.0, 0.0), Vec2::new(640.0, 480.0), &m);
        assert_eq!(rows, -6..=6);
        assert_eq!(cols, -6..=6);
    }

    #[test]
    fn test_visible_range_follows_camera() {
        let m = metrics();
        let (rows, cols) =
            visible_range(PixelCoord::new(640.0, 480.0), Vec2::new(128.0, 96.0), &m);
        assert!(rows.contains(&10));
        assert!(cols.contains(&10));
        assert!(!cols.contains(&0));
    }
}
