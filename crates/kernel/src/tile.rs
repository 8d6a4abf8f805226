use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tilestitch_common::{Direction, RoomCoord};

/// Terrain given to tiles created by padding.
pub const DEFAULT_TERRAIN: &str = "grass";

/// The tile a traveler arrives at when crossing a room edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exit {
    pub room_x: i32,
    pub room_y: i32,
    pub x: u32,
    pub y: u32,
}

impl Exit {
    pub fn new(room: RoomCoord, x: u32, y: u32) -> Self {
        Self {
            room_x: room.x,
            room_y: room.y,
            x,
            y,
        }
    }

    pub fn target_room(&self) -> RoomCoord {
        RoomCoord::new(self.room_x, self.room_y)
    }

    fn to_value(self) -> Value {
        json!({
            "roomX": self.room_x,
            "roomY": self.room_y,
            "x": self.x,
            "y": self.y,
        })
    }
}

/// A tile's `tileExits` map.
///
/// Stored as raw JSON so entries the stitcher never writes (unknown keys, or
/// directions with no neighbor) survive a load/save cycle byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileExits(Map<String, Value>);

impl TileExits {
    pub fn new() -> Self {
        Self::default()
    }

    /// The exit stored for `dir`, if present and well-formed.
    pub fn get(&self, dir: Direction) -> Option<Exit> {
        self.0
            .get(dir.as_str())
            .and_then(|v| Exit::deserialize(v).ok())
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0.contains_key(dir.as_str())
    }

    /// Set or overwrite the exit for `dir`. Other keys are left alone.
    pub fn set(&mut self, dir: Direction, exit: Exit) {
        self.0.insert(dir.as_str().to_string(), exit.to_value());
    }

    /// Well-formed directional exits, in `Direction::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Exit)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.get(dir).map(|exit| (dir, exit)))
    }

    /// Number of raw entries, including ones that are not directional exits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One cell of a room's tile grid.
///
/// `terrain` lives in `fields` with the rest of the tile's data, so values of
/// any JSON type (or `null`) are written back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(
        rename = "tileExits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tile_exits: Option<TileExits>,
    /// Every tile field other than `tileExits`, passed through verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Tile {
    pub fn with_terrain(terrain: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("terrain".to_string(), Value::String(terrain.into()));
        Self {
            tile_exits: None,
            fields,
        }
    }

    /// The padding tile: default terrain, no exits.
    pub fn grass() -> Self {
        Self::with_terrain(DEFAULT_TERRAIN)
    }

    /// The terrain name, if the tile has a string `terrain`.
    pub fn terrain(&self) -> Option<&str> {
        self.fields.get("terrain").and_then(Value::as_str)
    }

    pub fn exit(&self, dir: Direction) -> Option<Exit> {
        self.tile_exits.as_ref().and_then(|exits| exits.get(dir))
    }

    pub fn has_exit(&self, dir: Direction) -> bool {
        self.tile_exits
            .as_ref()
            .is_some_and(|exits| exits.contains(dir))
    }

    /// Set the exit for `dir`, creating `tileExits` if absent.
    pub fn set_exit(&mut self, dir: Direction, exit: Exit) {
        self.tile_exits
            .get_or_insert_with(TileExits::new)
            .set(dir, exit);
    }
}
