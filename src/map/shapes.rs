//! Tile-set generators for the shape tools and the terrain brush.
//!
//! All generators are deterministic. Circles and ovals are sets (order carries
//! no meaning); lines keep the order in which the path visits each hex.

use std::collections::HashSet;

use crate::hex::{axial_neighbors, hex_to_row_col, row_col_to_hex, AxialCoord, HexDirection, RowCol};

/// Every hex within `radius` steps of `center`, center included.
pub fn hex_range(center: AxialCoord, radius: u32) -> Vec<AxialCoord> {
    // Preallocation is a hint; cap it so huge radii grow the Vec instead.
    let mut results = Vec::with_capacity(range_len(radius).min(PREALLOC_LIMIT));
    let radius = radius as i32;
    for dq in -radius..=radius {
        let r_min = (-radius).max(-dq - radius);
        let r_max = radius.min(-dq + radius);
        for dr in r_min..=r_max {
            results.push(center.offset(dq, dr));
        }
    }
    results
}

const PREALLOC_LIMIT: usize = 1 << 16;

/// Number of hexes within `radius` steps, saturating at `usize::MAX`.
fn range_len(radius: u32) -> usize {
    let r = radius as usize;
    r.saturating_mul(r.saturating_add(1))
        .saturating_mul(3)
        .saturating_add(1)
}

/// Every hex at exactly `radius` steps from `center`.
///
/// Walks the ring starting `radius` steps to the left and going clockwise.
pub fn hex_ring(center: AxialCoord, radius: u32) -> Vec<AxialCoord> {
    if radius == 0 {
        return vec![center];
    }

    let mut results = Vec::with_capacity(6 * radius as usize);
    let mut coord = center;
    for _ in 0..radius {
        coord = coord.neighbor(HexDirection::Left);
    }

    for direction in [
        HexDirection::TopRight,
        HexDirection::Right,
        HexDirection::BottomRight,
        HexDirection::BottomLeft,
        HexDirection::Left,
        HexDirection::TopLeft,
    ] {
        for _ in 0..radius {
            results.push(coord);
            coord = coord.neighbor(direction);
        }
    }
    results
}

/// Circle of hexes around `center`. Radius 0 is just the center.
pub fn circle_from(center: AxialCoord, radius: u32, filled: bool) -> Vec<AxialCoord> {
    if filled {
        hex_range(center, radius)
    } else {
        hex_ring(center, radius)
    }
}

/// Axis-aligned oval in offset (row/col) space.
///
/// `radius_x` counts columns and `radius_y` counts rows. Both zero yields the
/// center alone; otherwise each radius is at least 1.
pub fn oval_from(center: AxialCoord, radius_x: u32, radius_y: u32, filled: bool) -> Vec<AxialCoord> {
    if radius_x == 0 && radius_y == 0 {
        return vec![center];
    }
    let oval = OvalTest::new(center, radius_x.max(1), radius_y.max(1));

    let origin = hex_to_row_col(center);
    let rx = oval.radius_x as i32;
    let ry = oval.radius_y as i32;
    let mut results = Vec::new();
    for row in origin.row - ry..=origin.row + ry {
        // One extra column each side covers the half-tile stagger.
        for col in origin.col - rx - 1..=origin.col + rx + 1 {
            let coord = row_col_to_hex(RowCol { row, col });
            if !oval.contains(coord) {
                continue;
            }
            if filled || axial_neighbors(coord).iter().any(|n| !oval.contains(*n)) {
                results.push(coord);
            }
        }
    }
    results
}

struct OvalTest {
    center_x: f64,
    center_row: i32,
    radius_x: u32,
    radius_y: u32,
}

impl OvalTest {
    fn new(center: AxialCoord, radius_x: u32, radius_y: u32) -> Self {
        let rc = hex_to_row_col(center);
        Self {
            center_x: staggered_x(rc),
            center_row: rc.row,
            radius_x,
            radius_y,
        }
    }

    /// Half a cell of slack on each axis keeps the cells the radius points
    /// name inside, and turns radius 1x1 into the center plus its six neighbors.
    fn contains(&self, coord: AxialCoord) -> bool {
        let rc = hex_to_row_col(coord);
        let dx = (staggered_x(rc) - self.center_x) / (self.radius_x as f64 + 0.5);
        let dy = (rc.row - self.center_row) as f64 / (self.radius_y as f64 + 0.5);
        dx * dx + dy * dy <= 1.0
    }
}

/// Column position in tile widths, with odd rows shifted half a column.
fn staggered_x(rc: RowCol) -> f64 {
    rc.col as f64 + if rc.is_odd_row() { 0.5 } else { 0.0 }
}

/// Connected path through `waypoints` in order.
///
/// Each segment is rasterized by sampling the straight cube-space line once
/// per hex step; consecutive segments share their waypoint.
pub fn line_from(waypoints: &[AxialCoord]) -> Vec<AxialCoord> {
    let Some((&first, rest)) = waypoints.split_first() else {
        return Vec::new();
    };

    let mut path = vec![first];
    let mut from = first;
    for &to in rest {
        path.extend(hex_line(from, to).into_iter().skip(1));
        from = to;
    }
    path
}

/// Hexes on the straight line from `a` to `b`, both ends included.
pub fn hex_line(a: AxialCoord, b: AxialCoord) -> Vec<AxialCoord> {
    let steps = a.distance(b);
    if steps == 0 {
        return vec![a];
    }

    // Nudge off exact hex edges so ties always round the same way.
    let (aq, ar) = (a.q as f64 + 1e-6, a.r as f64 + 2e-6);
    let (bq, br) = (b.q as f64 + 1e-6, b.r as f64 + 2e-6);

    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            cube_round(aq + (bq - aq) * t, ar + (br - ar) * t)
        })
        .collect()
}

fn cube_round(q: f64, r: f64) -> AxialCoord {
    let s = -q - r;
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let dq = (rq - q).abs();
    let dr = (rr - r).abs();
    let ds = (rs - s).abs();

    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }
    AxialCoord::new(rq as i32, rr as i32)
}

/// Hexes touched by a terrain brush of the given size.
pub fn brush_positions(center: AxialCoord, size: u32) -> Vec<AxialCoord> {
    if size == 0 {
        vec![center]
    } else {
        hex_range(center, size)
    }
}

/// Order-insensitive view of a generated shape.
pub fn tile_set(tiles: &[AxialCoord]) -> HashSet<AxialCoord> {
    tiles.iter().copied().collect()
}
