use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::hex::AxialCoord;

/// A terrain tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub tile_type: u32,
    /// Owning player for capturable terrain (cities, bases); 0 when neutral.
    #[serde(default)]
    pub player: u32,
}

impl Tile {
    pub const fn new(tile_type: u32) -> Self {
        Self {
            tile_type,
            player: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub unit_type: u32,
    pub player: u32,
}

/// The world being edited: tiles and units keyed by hex coordinate.
///
/// Saved worlds store both maps as JSON objects keyed by `"q,r"`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub name: String,
    #[serde(with = "coord_keyed", default)]
    pub tiles: HashMap<AxialCoord, Tile>,
    #[serde(with = "coord_keyed", default)]
    pub units: HashMap<AxialCoord, Unit>,
    #[serde(default = "default_grid_visible")]
    pub grid_visible: bool,
}

fn default_grid_visible() -> bool {
    true
}

impl Default for MapData {
    fn default() -> Self {
        Self {
            name: "Untitled World".to_string(),
            tiles: HashMap::new(),
            units: HashMap::new(),
            grid_visible: true,
        }
    }
}

impl MapData {
    pub fn tile_at(&self, coord: AxialCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn unit_at(&self, coord: AxialCoord) -> Option<&Unit> {
        self.units.get(&coord)
    }

    /// Set or clear the tile at `coord`, returning what was there before.
    pub fn set_tile(&mut self, coord: AxialCoord, tile: Option<Tile>) -> Option<Tile> {
        match tile {
            Some(tile) => self.tiles.insert(coord, tile),
            None => self.tiles.remove(&coord),
        }
    }

    /// Place a unit, returning any unit it replaced.
    pub fn add_unit(&mut self, coord: AxialCoord, unit: Unit) -> Option<Unit> {
        self.units.insert(coord, unit)
    }

    pub fn remove_unit(&mut self, coord: AxialCoord) -> Option<Unit> {
        self.units.remove(&coord)
    }

    /// Place or clear the unit at `coord`, returning what was there before.
    pub fn set_unit(&mut self, coord: AxialCoord, unit: Option<Unit>) -> Option<Unit> {
        match unit {
            Some(unit) => self.add_unit(coord, unit),
            None => self.remove_unit(coord),
        }
    }
}

/// Serde adapter for `HashMap<AxialCoord, V>` as an object keyed by `"q,r"`.
///
/// Keys are written in coordinate order so saved files diff cleanly.
mod coord_keyed {
    use std::collections::{BTreeMap, HashMap};

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::hex::AxialCoord;

    pub fn serialize<S, V>(map: &HashMap<AxialCoord, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let ordered: BTreeMap<&AxialCoord, &V> = map.iter().collect();
        serializer.collect_map(ordered.into_iter().map(|(coord, value)| (coord.to_key(), value)))
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<HashMap<AxialCoord, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        let raw = HashMap::<String, V>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                AxialCoord::from_key(&key)
                    .map(|coord| (coord, value))
                    .ok_or_else(|| D::Error::custom(format!("invalid coordinate key {:?}", key)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_data_default() {
        let map_data = MapData::default();
        assert_eq!(map_data.name, "Untitled World");
        assert!(map_data.tiles.is_empty());
        assert!(map_data.units.is_empty());
        assert!(map_data.grid_visible);
    }

    #[test]
    fn test_set_tile_returns_previous() {
        let mut map_data = MapData::default();
        let coord = AxialCoord::new(1, 2);

        assert_eq!(map_data.set_tile(coord, Some(Tile::new(3))), None);
        assert_eq!(map_data.set_tile(coord, Some(Tile::new(4))), Some(Tile::new(3)));
        assert_eq!(map_data.tile_at(coord), Some(&Tile::new(4)));
        assert_eq!(map_data.set_tile(coord, None), Some(Tile::new(4)));
        assert!(map_data.tile_at(coord).is_none());
    }

    #[test]
    fn test_units_replace_and_remove() {
        let mut map_data = MapData::default();
        let coord = AxialCoord::new(0, 0);
        let tank = Unit {
            unit_type: 7,
            player: 1,
        };
        let scout = Unit {
            unit_type: 2,
            player: 2,
        };

        assert!(map_data.add_unit(coord, tank).is_none());
        assert_eq!(map_data.add_unit(coord, scout), Some(tank));
        assert_eq!(map_data.unit_at(coord), Some(&scout));
        assert_eq!(map_data.remove_unit(coord), Some(scout));
        assert!(map_data.unit_at(coord).is_none());
    }

    #[test]
    fn test_serialization_uses_coordinate_keys() {
        let mut map_data = MapData::default();
        map_data.set_tile(AxialCoord::new(-1, 2), Some(Tile::new(5)));
        map_data.add_unit(
            AxialCoord::new(3, 0),
            Unit {
                unit_type: 1,
                player: 2,
            },
        );

        let json: serde_json::Value = serde_json::to_value(&map_data).unwrap();
        assert_eq!(json["tiles"]["-1,2"]["tileType"], 5);
        assert_eq!(json["units"]["3,0"]["unitType"], 1);
        assert_eq!(json["units"]["3,0"]["player"], 2);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut map_data = MapData {
            name: "Islands".to_string(),
            ..Default::default()
        };
        for q in -3..=3 {
            map_data.set_tile(AxialCoord::new(q, -q), Some(Tile::new(3)));
        }

        let json = serde_json::to_string(&map_data).unwrap();
        let parsed: MapData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map_data);
    }

    #[test]
    fn test_deserialize_rejects_bad_keys() {
        let json = r#"{"name":"Bad","tiles":{"x,1":{"tileType":1}}}"#;
        let result: Result<MapData, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{"name":"Sparse","tiles":{"0,0":{"tileType":2}}}"#;
        let parsed: MapData = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tile_at(AxialCoord::ORIGIN), Some(&Tile::new(2)));
        assert!(parsed.units.is_empty());
        assert!(parsed.grid_visible);
    }
}
