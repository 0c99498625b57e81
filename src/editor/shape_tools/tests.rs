//! Unit tests for the shape tools.

use std::collections::HashSet;

use super::{CircleTool, LineTool, OvalTool, ShapeTool, ShapeToolKind};
use crate::hex::{hex_distance, row_col_to_hex, AxialCoord, RowCol};
use crate::map::shapes::{circle_from, line_from, oval_from, tile_set};

fn ax(q: i32, r: i32) -> AxialCoord {
    AxialCoord::new(q, r)
}

#[test]
fn test_circle_two_clicks_complete() {
    let mut tool = CircleTool::new(true);
    assert!(tool.add_point(ax(0, 0)));
    assert!(!tool.can_complete());
    assert!(!tool.add_point(ax(2, 0)));
    assert!(tool.can_complete());
    assert_eq!(tool.radius(), Some(2));
}

#[test]
fn test_circle_result_matches_generator() {
    let mut tool = CircleTool::new(true);
    tool.add_point(ax(1, -1));
    tool.add_point(ax(1, 2));
    assert_eq!(tool.result_tiles(), circle_from(ax(1, -1), 3, true));

    tool.set_filled(false);
    assert_eq!(tool.result_tiles(), circle_from(ax(1, -1), 3, false));
}

#[test]
fn test_circle_result_empty_before_completion() {
    let mut tool = CircleTool::new(true);
    assert!(tool.result_tiles().is_empty());
    tool.add_point(ax(0, 0));
    assert!(tool.result_tiles().is_empty());
}

#[test]
fn test_circle_preview_is_outline_at_cursor_distance() {
    let mut tool = CircleTool::new(true);
    assert!(tool.preview_tiles(ax(3, 3)).is_empty());

    tool.add_point(ax(0, 0));
    let preview = tool.preview_tiles(ax(-2, 0));
    assert!(!preview.is_empty());
    for coord in &preview {
        assert_eq!(hex_distance(ax(0, 0), *coord), 2);
    }
}

#[test]
fn test_circle_preview_at_center_is_center() {
    let mut tool = CircleTool::new(false);
    tool.add_point(ax(4, -2));
    assert_eq!(tool.preview_tiles(ax(4, -2)), vec![ax(4, -2)]);
}

#[test]
fn test_circle_click_after_completion_replaces_radius_point() {
    let mut tool = CircleTool::new(false);
    tool.add_point(ax(0, 0));
    tool.add_point(ax(1, 0));
    assert!(!tool.add_point(ax(3, 0)));
    assert_eq!(tool.anchor_points(), vec![ax(0, 0), ax(3, 0)]);
    assert_eq!(tool.radius(), Some(3));
}

#[test]
fn test_circle_status_progression() {
    let mut tool = CircleTool::new(true);
    assert_eq!(tool.status_text(), "Click center of circle");
    tool.add_point(ax(0, 0));
    assert_eq!(
        tool.status_text(),
        "Click to set radius (or press Escape to cancel)"
    );
    tool.add_point(ax(0, 1));
    assert_eq!(tool.status_text(), "Circle complete");
}

#[test]
fn test_oval_three_clicks_complete() {
    let mut tool = OvalTool::new(true);
    assert!(tool.add_point(ax(0, 0)));
    assert!(tool.add_point(ax(3, 0)));
    assert!(!tool.can_complete());
    assert!(!tool.add_point(row_col_to_hex(RowCol::new(2, 0))));
    assert!(tool.can_complete());
    assert_eq!(tool.radius_x(), 3);
    assert_eq!(tool.radius_y(), Some(2));
}

#[test]
fn test_oval_result_matches_generator() {
    let center = ax(0, 0);
    let mut tool = OvalTool::new(true);
    tool.add_point(center);
    tool.add_point(row_col_to_hex(RowCol::new(0, 4)));
    tool.add_point(row_col_to_hex(RowCol::new(-2, 1)));
    assert_eq!(tool.result_tiles(), oval_from(center, 4, 2, true));
}

#[test]
fn test_oval_radius_x_fixed_after_second_click() {
    let mut tool = OvalTool::new(true);
    tool.add_point(ax(0, 0));
    tool.add_point(row_col_to_hex(RowCol::new(0, 2)));

    // Moving the cursor far in x must not change the horizontal radius.
    let near = tool.preview_tiles(row_col_to_hex(RowCol::new(1, 0)));
    let far = tool.preview_tiles(row_col_to_hex(RowCol::new(1, 9)));
    assert_eq!(tile_set(&near), tile_set(&far));
    assert_eq!(tool.radius_x(), 2);
    assert_eq!(near, oval_from(ax(0, 0), 2, 1, false));
}

#[test]
fn test_oval_preview_before_radius_x_is_round() {
    let mut tool = OvalTool::new(true);
    tool.add_point(ax(0, 0));
    let cursor = row_col_to_hex(RowCol::new(0, 3));
    assert_eq!(tool.preview_tiles(cursor), oval_from(ax(0, 0), 3, 3, false));
}

#[test]
fn test_oval_status_progression() {
    let mut tool = OvalTool::new(true);
    assert_eq!(tool.status_text(), "Click center of oval");
    tool.add_point(ax(0, 0));
    assert!(tool.status_text().contains("horizontal radius"));
    tool.add_point(ax(2, 0));
    assert!(tool.status_text().contains("vertical radius"));
    tool.add_point(ax(0, 2));
    assert_eq!(tool.status_text(), "Oval complete");
}

#[test]
fn test_line_never_auto_completes() {
    let mut tool = LineTool::new();
    for i in 0..5 {
        assert!(tool.add_point(ax(i, 0)));
    }
    assert!(tool.requires_keyboard_confirm());
}

#[test]
fn test_line_can_complete_needs_two_points() {
    let mut tool = LineTool::new();
    assert!(!tool.can_complete());
    tool.add_point(ax(0, 0));
    assert!(!tool.can_complete());
    assert_eq!(tool.result_tiles(), vec![ax(0, 0)]);
    tool.add_point(ax(3, 0));
    assert!(tool.can_complete());
}

#[test]
fn test_line_result_stitches_waypoints() {
    let mut tool = LineTool::new();
    let points = [ax(0, 0), ax(3, 0), ax(3, 3)];
    for p in points {
        tool.add_point(p);
    }
    let result = tool.result_tiles();
    assert_eq!(result, line_from(&points));
    assert_eq!(result.len(), 7);
    let unique: HashSet<_> = result.iter().copied().collect();
    assert_eq!(unique.len(), result.len());
}

#[test]
fn test_line_preview_extends_to_cursor() {
    let mut tool = LineTool::new();
    assert!(tool.preview_tiles(ax(2, 2)).is_empty());
    tool.add_point(ax(0, 0));
    let preview = tool.preview_tiles(ax(2, 0));
    assert_eq!(preview, vec![ax(0, 0), ax(1, 0), ax(2, 0)]);
}

#[test]
fn test_line_fill_is_always_off() {
    let mut tool = LineTool::new();
    tool.set_filled(true);
    assert!(!tool.is_filled());
}

#[test]
fn test_line_status_counts_points() {
    let mut tool = LineTool::new();
    assert_eq!(tool.status_text(), "Click to start line/path");
    tool.add_point(ax(0, 0));
    assert!(tool.status_text().starts_with("Click to add points"));
    tool.add_point(ax(1, 0));
    tool.add_point(ax(2, 0));
    assert!(tool.status_text().starts_with("3 points"));
}

#[test]
fn test_reset_matches_fresh_tool() {
    let mut circle = CircleTool::new(false);
    circle.add_point(ax(0, 0));
    circle.add_point(ax(2, 0));
    circle.reset();
    assert_eq!(circle, CircleTool::new(false));
    circle.reset();
    assert_eq!(circle, CircleTool::new(false));

    let mut oval = OvalTool::new(true);
    oval.add_point(ax(0, 0));
    oval.add_point(ax(3, 0));
    oval.reset();
    assert_eq!(oval, OvalTool::new(true));
    assert_eq!(oval.radius_x(), 0);

    let mut line = LineTool::new();
    line.add_point(ax(0, 0));
    line.add_point(ax(1, 1));
    line.reset();
    assert_eq!(line, LineTool::new());
    assert!(line.anchor_points().is_empty());
}

#[test]
fn test_preview_ignores_fill_setting() {
    let mut filled = CircleTool::new(true);
    let mut outline = CircleTool::new(false);
    filled.add_point(ax(0, 0));
    outline.add_point(ax(0, 0));
    assert_eq!(filled.preview_tiles(ax(3, 0)), outline.preview_tiles(ax(3, 0)));

    let mut oval = OvalTool::new(true);
    oval.add_point(ax(0, 0));
    oval.add_point(ax(3, 0));
    let preview = oval.preview_tiles(row_col_to_hex(RowCol::new(2, 0)));
    assert_eq!(preview, oval_from(ax(0, 0), 3, 2, false));
}

#[test]
fn test_kind_dispatches_to_inner_tool() {
    let mut kind = ShapeToolKind::Line(LineTool::new());
    assert_eq!(kind.as_tool().name(), "Line");
    kind.as_tool_mut().add_point(ax(0, 0));
    assert_eq!(kind.as_tool().anchor_points(), vec![ax(0, 0)]);

    let kind = ShapeToolKind::Oval(OvalTool::new(false));
    assert!(!kind.as_tool().requires_keyboard_confirm());
    assert!(!kind.as_tool().is_filled());
}
