//! Sheet configuration and drawing constants.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default stock sheet width in inches (4 ft).
pub const DEFAULT_SHEET_WIDTH: f64 = 48.0;

/// Default stock sheet height in inches (8 ft).
pub const DEFAULT_SHEET_HEIGHT: f64 = 96.0;

/// Layout drawing scale: PDF user-space units per inch.
pub const DRAW_SCALE: f64 = 5.0;

/// Horizontal page offset for the sheet drawing, in PDF units.
pub const PAGE_OFFSET_X: f64 = 50.0;

/// Vertical page offset for the sheet drawing, in PDF units.
pub const PAGE_OFFSET_Y: f64 = 100.0;

/// US-letter page width in PDF units.
pub const PAGE_WIDTH: f64 = 612.0;

/// US-letter page height in PDF units.
pub const PAGE_HEIGHT: f64 = 792.0;

use serde::{Deserialize, Serialize};

/// Stock sheet dimensions, in inches.
///
/// Passed explicitly to the engine, reporter and generator so alternate
/// sheet sizes can be exercised in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Sheet width.
    pub width: f64,
    /// Sheet height.
    pub height: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SHEET_WIDTH,
            height: DEFAULT_SHEET_HEIGHT,
        }
    }
}

impl SheetConfig {
    /// Create a new sheet configuration.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area of one sheet.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check whether a part fits an empty sheet in at least one orientation.
    pub fn admits(&self, length: f64, height: f64) -> bool {
        (length <= self.width && height <= self.height)
            || (height <= self.width && length <= self.height)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}
