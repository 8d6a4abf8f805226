//! World Kernel: the room/tile document model and the edge stitcher.
//!
//! # Invariants
//! - After [`World::stitch`], every room holds exactly `height` rows of exactly `width` tiles.
//! - A border tile carries an exit in a direction iff a room exists next to it in that direction.
//! - Fields the stitcher does not compute are passed through untouched.

pub mod room;
pub mod tile;
pub mod world;

pub use room::Room;
pub use tile::{DEFAULT_TERRAIN, Exit, Tile, TileExits};
pub use world::{StitchReport, World};
