//! Cut-list file ingestion.

mod table;

pub use table::{parse_parts_file, TableParser, COL_HEIGHT, COL_LENGTH, COL_QUANTITY};
