use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile position in axial hex coordinates.
///
/// The implicit third cube axis is `s = -q - r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit cube axis.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    pub const fn offset(&self, dq: i32, dr: i32) -> Self {
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }

    pub fn distance(&self, other: AxialCoord) -> u32 {
        hex_distance(*self, other)
    }

    pub fn to_row_col(&self) -> RowCol {
        hex_to_row_col(*self)
    }

    /// Key used for tile and unit maps in saved worlds, e.g. `"3,-2"`.
    pub fn to_key(&self) -> String {
        format!("{},{}", self.q, self.r)
    }

    /// Parse a `"q,r"` key. Whitespace around either number is tolerated.
    pub fn from_key(key: &str) -> Option<Self> {
        let (q, r) = key.split_once(',')?;
        Some(Self {
            q: q.trim().parse().ok()?,
            r: r.trim().parse().ok()?,
        })
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

impl From<(i32, i32)> for AxialCoord {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

/// Odd-r offset coordinates, used for pixel placement and oval tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowCol {
    pub row: i32,
    pub col: i32,
}

impl RowCol {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn is_odd_row(&self) -> bool {
        self.row & 1 != 0
    }

    pub fn to_hex(&self) -> AxialCoord {
        row_col_to_hex(*self)
    }
}

/// Axial to odd-r offset. `r - (r & 1)` is always even, so the halving is exact
/// for negative rows too.
pub fn hex_to_row_col(coord: AxialCoord) -> RowCol {
    RowCol {
        row: coord.r,
        col: coord.q + (coord.r - (coord.r & 1)) / 2,
    }
}

/// Odd-r offset to axial; exact inverse of [`hex_to_row_col`].
pub fn row_col_to_hex(rc: RowCol) -> AxialCoord {
    AxialCoord {
        q: rc.col - (rc.row - (rc.row & 1)) / 2,
        r: rc.row,
    }
}

/// Minimum number of neighbor steps between two hexes.
pub fn hex_distance(a: AxialCoord, b: AxialCoord) -> u32 {
    let dq = b.q - a.q;
    let dr = b.r - a.r;
    dq.unsigned_abs()
        .max(dr.unsigned_abs())
        .max((dq + dr).unsigned_abs())
}
