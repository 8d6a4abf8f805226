//! Persistence: reading and writing the world document.
//!
//! # Invariants
//! - A document is parsed completely before any stitching happens.
//! - Output is written only from a fully stitched world; fields the kernel does
//!   not model are carried through.

mod store;

pub use store::{DEFAULT_INPUT, DEFAULT_OUTPUT, PersistError, WorldFile, load_world, save_world};
