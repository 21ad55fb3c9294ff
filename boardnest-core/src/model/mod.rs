//! Data model for cut lists and nesting results.

mod part;
mod placement;

pub use part::{expand_rows, Part, PartRow};
pub use placement::{NestingResult, Placement, Sheet};
