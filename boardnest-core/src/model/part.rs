//! Cut-list rows and expanded parts.

use serde::{Deserialize, Serialize};

/// One row of the uploaded cut list: a part size and how many to cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartRow {
    /// Part length in inches.
    pub length: f64,
    /// Part height in inches.
    pub height: f64,
    /// Number of identical pieces to cut.
    pub quantity: u32,
    /// 1-based source line in the input file, for diagnostics.
    pub line: usize,
}

impl PartRow {
    /// Create a new row.
    pub fn new(length: f64, height: f64, quantity: u32) -> Self {
        Self {
            length,
            height,
            quantity,
            line: 0,
        }
    }

    /// Total cut length for this row: perimeter times quantity.
    pub fn cut_inches(&self) -> f64 {
        (2.0 * self.length + 2.0 * self.height) * self.quantity as f64
    }
}

/// A single rectangular piece to be cut.
///
/// Quantity is already expanded away: one `Part` per physical piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Part length in inches.
    pub length: f64,
    /// Part height in inches.
    pub height: f64,
}

impl Part {
    /// Create a new part.
    pub fn new(length: f64, height: f64) -> Self {
        Self { length, height }
    }

    /// Part area (rotation-invariant).
    pub fn area(&self) -> f64 {
        self.length * self.height
    }
}

/// Expand cut-list rows into a flat part sequence.
///
/// Each row's dimensions are repeated `quantity` times; row order and
/// within-row repetition order are preserved. Nesting is first-fit by
/// arrival order, so the sequence order matters.
pub fn expand_rows(rows: &[PartRow]) -> Vec<Part> {
    let mut parts = Vec::with_capacity(rows.iter().map(|r| r.quantity as usize).sum());
    for row in rows {
        for _ in 0..row.quantity {
            parts.push(Part::new(row.length, row.height));
        }
    }
    parts
}
