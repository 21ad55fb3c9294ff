//! Greedy shelf-style nesting of rectangular parts onto stock sheets.

mod engine;
mod free_space;

pub use engine::NestingEngine;
pub use free_space::{FreeRegion, FreeSpaceTracker, Reservation};
