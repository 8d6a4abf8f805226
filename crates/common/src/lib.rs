//! Common: room grid coordinates and cardinal directions shared by every crate.
//!
//! # Invariants
//! - Room keys are an explicit `(i32, i32)` pair; the `"x,y"` string form only
//!   exists at the serde boundary.

mod types;

pub use types::{Direction, ParseCoordError, RoomCoord};
