use super::coords::AxialCoord;

/// The six hex neighbor directions.
///
/// The discriminants are persisted alongside crossings and road connectivity,
/// so the order must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    Left = 0,
    TopLeft = 1,
    TopRight = 2,
    Right = 3,
    BottomRight = 4,
    BottomLeft = 5,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::Left,
        HexDirection::TopLeft,
        HexDirection::TopRight,
        HexDirection::Right,
        HexDirection::BottomRight,
        HexDirection::BottomLeft,
    ];

    /// Axial deltas, indexed by direction.
    pub const DELTAS: [(i32, i32); 6] = [(-1, 0), (0, -1), (1, -1), (1, 0), (0, 1), (-1, 1)];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn delta(self) -> (i32, i32) {
        Self::DELTAS[self as usize]
    }

    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 3) % 6]
    }
}

impl AxialCoord {
    pub fn neighbor(&self, direction: HexDirection) -> AxialCoord {
        let (dq, dr) = direction.delta();
        self.offset(dq, dr)
    }
}

/// All six neighbors, in direction order.
pub fn axial_neighbors(coord: AxialCoord) -> [AxialCoord; 6] {
    HexDirection::ALL.map(|direction| coord.neighbor(direction))
}

/// Neighbor by raw direction index; `None` for anything outside 0..6.
pub fn neighbor_at_index(coord: AxialCoord, index: usize) -> Option<AxialCoord> {
    HexDirection::from_index(index).map(|direction| coord.neighbor(direction))
}

/// Direction from `from` to `to`, or `None` when the two hexes are not adjacent.
pub fn direction_index(from: AxialCoord, to: AxialCoord) -> Option<HexDirection> {
    let delta = (to.q - from.q, to.r - from.r);
    HexDirection::ALL
        .into_iter()
        .find(|direction| direction.delta() == delta)
}

pub fn opposite_direction(direction: HexDirection) -> HexDirection {
    direction.opposite()
}

pub fn are_neighbors(a: AxialCoord, b: AxialCoord) -> bool {
    direction_index(a, b).is_some()
}
