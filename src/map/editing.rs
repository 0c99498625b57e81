//! Batched terrain edits on [`MapData`].
//!
//! Every mutation made by the editor goes through here so it comes back as a
//! [`TileEdit`] the history can undo.

use std::collections::{HashSet, VecDeque};

use crate::hex::{axial_neighbors, AxialCoord};

use super::map_data::{MapData, Tile};

/// One tile slot before and after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileChange {
    pub coord: AxialCoord,
    pub before: Option<Tile>,
    pub after: Option<Tile>,
}

/// A batch of tile changes applied together and undone together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileEdit {
    pub changes: Vec<TileChange>,
}

impl TileEdit {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// The edit that undoes this one.
    pub fn inverse(&self) -> TileEdit {
        TileEdit {
            changes: self
                .changes
                .iter()
                .rev()
                .map(|change| TileChange {
                    coord: change.coord,
                    before: change.after,
                    after: change.before,
                })
                .collect(),
        }
    }
}

impl MapData {
    /// Write `tile` (or clear, for `None`) at each coordinate.
    ///
    /// Duplicate coordinates and slots that already hold the value are skipped,
    /// so the returned edit lists only real changes.
    pub fn apply_tiles(&mut self, coords: &[AxialCoord], tile: Option<Tile>) -> TileEdit {
        let mut seen = HashSet::new();
        let mut edit = TileEdit::default();
        for &coord in coords {
            if !seen.insert(coord) {
                continue;
            }
            let before = self.tile_at(coord).copied();
            if before == tile {
                continue;
            }
            self.set_tile(coord, tile);
            edit.changes.push(TileChange {
                coord,
                before,
                after: tile,
            });
        }
        edit
    }

    /// Replay the `after` side of every change.
    pub fn apply_edit(&mut self, edit: &TileEdit) {
        for change in &edit.changes {
            self.set_tile(change.coord, change.after);
        }
    }

    /// Retype the connected region sharing the start tile's terrain.
    ///
    /// Nothing happens when the start hex is empty or already `tile_type`.
    /// Ownership (`player`) of the filled tiles is preserved.
    pub fn flood_fill(&mut self, start: AxialCoord, tile_type: u32) -> TileEdit {
        let mut edit = TileEdit::default();
        let Some(original) = self.tile_at(start).map(|tile| tile.tile_type) else {
            return edit;
        };
        if original == tile_type {
            return edit;
        }

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let Some(&before) = self.tile_at(current) else {
                continue;
            };
            if before.tile_type != original {
                continue;
            }

            let after = Tile {
                tile_type,
                ..before
            };
            self.set_tile(current, Some(after));
            edit.changes.push(TileChange {
                coord: current,
                before: Some(before),
                after: Some(after),
            });

            for neighbor in axial_neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::shapes::hex_range;

    fn map_with(tiles: &[(AxialCoord, u32)]) -> MapData {
        let mut map = MapData::default();
        for &(coord, tile_type) in tiles {
            map.set_tile(coord, Some(Tile::new(tile_type)));
        }
        map
    }

    #[test]
    fn test_apply_tiles_records_only_changes() {
        let a = AxialCoord::new(0, 0);
        let b = AxialCoord::new(1, 0);
        let mut map = map_with(&[(a, 1)]);

        let edit = map.apply_tiles(&[a, b, b], Some(Tile::new(1)));
        assert_eq!(edit.len(), 1);
        assert_eq!(edit.changes[0].coord, b);
        assert_eq!(edit.changes[0].before, None);
        assert_eq!(map.tile_at(b), Some(&Tile::new(1)));
    }

    #[test]
    fn test_apply_tiles_erase() {
        let a = AxialCoord::new(2, 2);
        let mut map = map_with(&[(a, 4)]);

        let edit = map.apply_tiles(&[a, AxialCoord::new(9, 9)], None);
        assert_eq!(edit.len(), 1);
        assert_eq!(edit.changes[0].before, Some(Tile::new(4)));
        assert!(map.tile_at(a).is_none());
    }

    #[test]
    fn test_inverse_restores_previous_state() {
        let mut map = map_with(&[(AxialCoord::ORIGIN, 2)]);
        let original = map.clone();

        let edit = map.apply_tiles(&hex_range(AxialCoord::ORIGIN, 2), Some(Tile::new(3)));
        assert_eq!(edit.len(), 19);
        map.apply_edit(&edit.inverse());
        assert_eq!(map, original);

        map.apply_edit(&edit);
        assert_eq!(map.tiles.len(), 19);
    }

    #[test]
    fn test_flood_fill_stays_in_region() {
        // A row of grass with a water tile splitting it
        let mut tiles: Vec<(AxialCoord, u32)> = (0..5).map(|q| (AxialCoord::new(q, 0), 1)).collect();
        tiles[2].1 = 3;
        let mut map = map_with(&tiles);

        let edit = map.flood_fill(AxialCoord::new(0, 0), 2);
        assert_eq!(edit.len(), 2);
        assert_eq!(map.tile_at(AxialCoord::new(0, 0)).unwrap().tile_type, 2);
        assert_eq!(map.tile_at(AxialCoord::new(1, 0)).unwrap().tile_type, 2);
        assert_eq!(map.tile_at(AxialCoord::new(2, 0)).unwrap().tile_type, 3);
        assert_eq!(map.tile_at(AxialCoord::new(3, 0)).unwrap().tile_type, 1);
    }

    #[test]
    fn test_flood_fill_noops() {
        let mut map = map_with(&[(AxialCoord::ORIGIN, 1)]);
        assert!(map.flood_fill(AxialCoord::new(5, 5), 2).is_empty());
        assert!(map.flood_fill(AxialCoord::ORIGIN, 1).is_empty());
        assert_eq!(map.tile_at(AxialCoord::ORIGIN), Some(&Tile::new(1)));
    }

    #[test]
    fn test_flood_fill_keeps_owner() {
        let coord = AxialCoord::ORIGIN;
        let mut map = MapData::default();
        map.set_tile(
            coord,
            Some(Tile {
                tile_type: 6,
                player: 2,
            }),
        );

        map.flood_fill(coord, 1);
        assert_eq!(
            map.tile_at(coord),
            Some(&Tile {
                tile_type: 1,
                player: 2
            })
        );
    }
}
