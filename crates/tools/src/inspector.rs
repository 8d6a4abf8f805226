use tilestitch_common::{Direction, RoomCoord};
use tilestitch_kernel::{Exit, World};

/// World inspector for developer tooling.
///
/// Provides read-only queries against a world document for debugging a
/// stitched map.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        let mut summary = WorldSummary {
            rooms: world.room_count(),
            ..WorldSummary::default()
        };
        for room in world.rooms().values() {
            if !room.is_padded() {
                summary.rooms_off_size += 1;
            }
            for tile in room.tiles.iter().flatten() {
                summary.tiles += 1;
                let exits = tile.tile_exits.as_ref().map_or(0, |e| e.iter().count());
                if exits > 0 {
                    summary.tiles_with_exits += 1;
                    summary.exits += exits;
                }
            }
        }
        summary
    }

    /// Size, tile count and per-direction exit counts of one room.
    pub fn inspect_room(world: &World, coord: RoomCoord) -> Option<RoomInfo> {
        world.room(coord).map(|room| {
            let mut exits = [0; 4];
            for tile in room.tiles.iter().flatten() {
                for (i, dir) in Direction::ALL.into_iter().enumerate() {
                    if tile.exit(dir).is_some() {
                        exits[i] += 1;
                    }
                }
            }
            RoomInfo {
                coord,
                width: room.width,
                height: room.height,
                rows: room.tiles.len(),
                tiles: room.tiles.iter().map(Vec::len).sum(),
                neighbors: Direction::ALL
                    .into_iter()
                    .filter(|dir| {
                        coord
                            .neighbor(*dir)
                            .is_some_and(|n| world.contains_room(n))
                    })
                    .collect(),
                exits: Direction::ALL.into_iter().zip(exits).collect(),
            }
        })
    }

    /// Exits whose target room is missing or whose target tile is outside that
    /// room's grid. Mismatched neighbor sizes show up here.
    pub fn dangling_exits(world: &World) -> Vec<DanglingExit> {
        let mut dangling = Vec::new();
        for (coord, room) in world.rooms() {
            for (y, row) in room.tiles.iter().enumerate() {
                for (x, tile) in row.iter().enumerate() {
                    let Some(exits) = &tile.tile_exits else {
                        continue;
                    };
                    for (direction, exit) in exits.iter() {
                        let reason = match world.room(exit.target_room()) {
                            None => DanglingReason::MissingRoom,
                            Some(target) if target.tile(exit.x, exit.y).is_none() => {
                                DanglingReason::OutOfRange
                            }
                            Some(_) => continue,
                        };
                        dangling.push(DanglingExit {
                            room: *coord,
                            x,
                            y,
                            direction,
                            exit,
                            reason,
                        });
                    }
                }
            }
        }
        dangling
    }

    /// List all room coordinates in the world.
    pub fn list_rooms(world: &World) -> Vec<RoomCoord> {
        world.rooms().keys().copied().collect()
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldSummary {
    pub rooms: usize,
    pub tiles: usize,
    pub tiles_with_exits: usize,
    pub exits: usize,
    /// Rooms whose grid is not exactly `width` x `height`.
    pub rooms_off_size: usize,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: rooms={} tiles={} tiles_with_exits={} exits={} rooms_off_size={}",
            self.rooms, self.tiles, self.tiles_with_exits, self.exits, self.rooms_off_size
        )
    }
}

/// Detailed info about a single room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    pub coord: RoomCoord,
    pub width: u32,
    pub height: u32,
    pub rows: usize,
    pub tiles: usize,
    pub neighbors: Vec<Direction>,
    pub exits: Vec<(Direction, usize)>,
}

impl RoomInfo {
    pub fn exit_count(&self, dir: Direction) -> usize {
        self.exits
            .iter()
            .find(|(d, _)| *d == dir)
            .map_or(0, |(_, n)| *n)
    }
}

impl std::fmt::Display for RoomInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room [{}] size={}x{} tiles={}",
            self.coord, self.width, self.height, self.tiles
        )?;
        for (dir, n) in &self.exits {
            if *n > 0 {
                write!(f, " {dir}={n}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DanglingReason {
    MissingRoom,
    OutOfRange,
}

/// An exit that does not land on an existing tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingExit {
    pub room: RoomCoord,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub exit: Exit,
    pub reason: DanglingReason,
}

impl std::fmt::Display for DanglingExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let why = match self.reason {
            DanglingReason::MissingRoom => "no such room",
            DanglingReason::OutOfRange => "tile out of range",
        };
        write!(
            f,
            "[{}] ({}, {}) {} -> [{}] ({}, {}): {}",
            self.room,
            self.x,
            self.y,
            self.direction,
            self.exit.target_room(),
            self.exit.x,
            self.exit.y,
            why
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tilestitch_kernel::Room;

    fn c(x: i32, y: i32) -> RoomCoord {
        RoomCoord::new(x, y)
    }

    #[test]
    fn summary_empty_world() {
        let world = World::new();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary, WorldSummary::default());
    }

    #[test]
    fn summary_before_and_after_stitch() {
        let mut world = World::new();
        world.insert_room(c(0, 0), Room::new(2, 2));
        world.insert_room(c(1, 0), Room::new(2, 2));

        let before = WorldInspector::summary(&world);
        assert_eq!(before.tiles, 0);
        assert_eq!(before.rooms_off_size, 2);

        world.stitch();
        let after = WorldInspector::summary(&world);
        assert_eq!(after.rooms, 2);
        assert_eq!(after.tiles, 8);
        assert_eq!(after.tiles_with_exits, 4);
        assert_eq!(after.exits, 4);
        assert_eq!(after.rooms_off_size, 0);
    }

    #[test]
    fn inspect_room_found() {
        let mut world = World::new();
        world.insert_room(c(0, 0), Room::new(3, 2));
        world.insert_room(c(0, 1), Room::new(3, 2));
        world.stitch();

        let info = WorldInspector::inspect_room(&world, c(0, 0)).unwrap();
        assert_eq!(info.tiles, 6);
        assert_eq!(info.neighbors, vec![Direction::Down]);
        assert_eq!(info.exit_count(Direction::Down), 3);
        assert_eq!(info.exit_count(Direction::Up), 0);
        assert!(info.to_string().contains("down=3"));
    }

    #[test]
    fn inspect_room_not_found() {
        let world = World::new();
        assert!(WorldInspector::inspect_room(&world, c(4, 4)).is_none());
    }

    #[test]
    fn list_rooms() {
        let mut world = World::new();
        world.insert_room(c(1, 0), Room::new(1, 1));
        world.insert_room(c(-1, 0), Room::new(1, 1));

        let rooms = WorldInspector::list_rooms(&world);
        assert_eq!(rooms, vec![c(-1, 0), c(1, 0)]);
    }

    #[test]
    fn matching_neighbors_have_no_dangling_exits() {
        let mut world = World::new();
        for (x, y) in [(0, 0), (1, 0), (0, 1)] {
            world.insert_room(c(x, y), Room::new(2, 3));
        }
        world.stitch();
        assert!(WorldInspector::dangling_exits(&world).is_empty());
    }

    #[test]
    fn mismatched_neighbors_report_out_of_range() {
        let mut world = World::new();
        world.insert_room(c(0, 0), Room::new(1, 3));
        world.insert_room(c(1, 0), Room::new(1, 1));
        world.stitch();

        let dangling = WorldInspector::dangling_exits(&world);
        assert_eq!(dangling.len(), 2);
        assert!(
            dangling
                .iter()
                .all(|d| d.reason == DanglingReason::OutOfRange && d.room == c(0, 0))
        );
        assert_eq!(dangling[0].y, 1);
        assert_eq!(dangling[1].y, 2);
    }

    #[test]
    fn exit_to_missing_room_is_reported() {
        let world: World = serde_json::from_value(json!({
            "rooms": {
                "0,0": {
                    "width": 1,
                    "height": 1,
                    "tiles": [[{
                        "terrain": "grass",
                        "tileExits": { "up": { "roomX": 0, "roomY": -1, "x": 0, "y": 0 } }
                    }]]
                }
            }
        }))
        .unwrap();

        let dangling = WorldInspector::dangling_exits(&world);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].reason, DanglingReason::MissingRoom);
        assert_eq!(dangling[0].direction, Direction::Up);
        assert!(dangling[0].to_string().contains("no such room"));
    }

    #[test]
    fn summary_display() {
        let world = World::new();
        let s = format!("{}", WorldInspector::summary(&world));
        assert!(s.contains("rooms=0"));
    }
}
