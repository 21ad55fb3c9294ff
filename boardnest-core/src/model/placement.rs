//! Placements, sheets and the overall nesting result.

use serde::{Deserialize, Serialize};

/// A part's resolved position on a sheet, after any rotation decision.
///
/// Coordinates are sheet-local with the origin at the sheet's lower-left
/// corner. `length` and `height` are post-rotation values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// X position on sheet.
    pub x: f64,
    /// Y position on sheet.
    pub y: f64,
    /// Placed length (horizontal extent).
    pub length: f64,
    /// Placed height (vertical extent).
    pub height: f64,
}

impl Placement {
    /// Create a new placement.
    pub fn new(x: f64, y: f64, length: f64, height: f64) -> Self {
        Self {
            x,
            y,
            length,
            height,
        }
    }

    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.x + self.length
    }

    /// Get the top edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x + self.length / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Placed area.
    pub fn area(&self) -> f64 {
        self.length * self.height
    }
}

/// One physical sheet of stock: the placements assigned to it, in the order
/// they were placed. Terminal once the engine rolls past it.
pub type Sheet = Vec<Placement>;

/// The complete outcome of one nesting run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestingResult {
    /// Sheets in the order they were opened.
    pub sheets: Vec<Sheet>,
}

impl NestingResult {
    /// Number of sheets consumed.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Total number of placements across all sheets.
    pub fn placement_count(&self) -> usize {
        self.sheets.iter().map(|s| s.len()).sum()
    }

    /// Sum of placed areas across all sheets.
    pub fn placed_area(&self) -> f64 {
        self.sheets
            .iter()
            .flat_map(|s| s.iter())
            .map(|p| p.area())
            .sum()
    }

    /// Iterate over all placements with their sheet index.
    pub fn iter_placements(&self) -> impl Iterator<Item = (usize, &Placement)> {
        self.sheets
            .iter()
            .enumerate()
            .flat_map(|(i, sheet)| sheet.iter().map(move |p| (i, p)))
    }
}
