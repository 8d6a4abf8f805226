use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use tilestitch_common::{Direction, RoomCoord};
use tracing::{debug, info, warn};

use crate::room::Room;

/// The world document: a sparse grid of rooms plus any other top-level fields.
///
/// Uses BTreeMap so rooms are processed and written in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    rooms: BTreeMap<RoomCoord, Room>,
    /// Top-level fields other than `rooms`, passed through verbatim.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Counts produced by a [`World::stitch`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StitchReport {
    pub rooms: usize,
    pub tiles_padded: usize,
    pub exits_linked: usize,
}

impl fmt::Display for StitchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rooms={} tiles_padded={} exits_linked={}",
            self.rooms, self.tiles_padded, self.exits_linked
        )
    }
}

impl World {
    /// Create a world with no rooms.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> &BTreeMap<RoomCoord, Room> {
        &self.rooms
    }

    pub fn room(&self, coord: RoomCoord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    pub fn contains_room(&self, coord: RoomCoord) -> bool {
        self.rooms.contains_key(&coord)
    }

    /// Insert a room, returning the one it replaced.
    pub fn insert_room(&mut self, coord: RoomCoord, room: Room) -> Option<Room> {
        self.rooms.insert(coord, room)
    }

    /// Top-level document fields other than `rooms`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Pad every room, then link every room to its neighbors.
    pub fn stitch(&mut self) -> StitchReport {
        let report = StitchReport {
            rooms: self.rooms.len(),
            tiles_padded: self.pad_rooms(),
            exits_linked: self.link_rooms(),
        };
        info!(%report, "world stitched");
        report
    }

    /// First pass: bring every room's grid to its declared size.
    pub fn pad_rooms(&mut self) -> usize {
        let mut added = 0;
        for (coord, room) in &mut self.rooms {
            let n = room.pad();
            if n > 0 {
                debug!(room = %coord, tiles = n, "padded tile grid");
            }
            if room.is_oversized() {
                warn!(
                    room = %coord,
                    width = room.width,
                    height = room.height,
                    "tile grid exceeds declared size; extra tiles kept"
                );
            }
            added += n;
        }
        added
    }

    /// Second pass: write exits on every border that faces an existing room.
    ///
    /// Only neighbor existence and declared size are read, both captured before
    /// any room is mutated, so room order does not matter.
    pub fn link_rooms(&mut self) -> usize {
        let sizes: BTreeMap<RoomCoord, (u32, u32)> = self
            .rooms
            .iter()
            .map(|(coord, room)| (*coord, (room.width, room.height)))
            .collect();

        let mut linked = 0;
        for (coord, room) in &mut self.rooms {
            for dir in Direction::ALL {
                let Some(target) = coord.neighbor(dir) else {
                    continue;
                };
                let Some(&(far_width, far_height)) = sizes.get(&target) else {
                    continue;
                };
                let n = room.link_edge(dir, target, far_width, far_height);
                debug!(room = %coord, %dir, %target, exits = n, "linked edge");
                linked += n;
            }
        }
        linked
    }
}
