//! Developer Tooling: world inspector and exit audit.
//!
//! # Invariants
//! - Tools only read the world; they never pad, link or repair it.

mod inspector;

pub use inspector::{DanglingExit, DanglingReason, RoomInfo, WorldInspector, WorldSummary};
