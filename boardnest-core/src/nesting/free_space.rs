//! Per-sheet free-space bookkeeping.
//!
//! A sheet's available space is an ordered list of candidate rectangles,
//! not a true 2D occupancy map. Reserving space removes the matched
//! rectangle and appends the two remainders of a guillotine-style split.
//! Remainder rectangles are never merged and may overlap geometrically;
//! that is an accepted property of the heuristic, kept behind this type so
//! a stronger tracker (e.g. max-rectangles) could replace it without
//! touching the engine's rollover logic.

use serde::{Deserialize, Serialize};

use crate::config::SheetConfig;

/// A candidate empty rectangle on a sheet, in sheet-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeRegion {
    /// Lower-left X.
    pub x: f64,
    /// Lower-left Y.
    pub y: f64,
    /// Region width.
    pub width: f64,
    /// Region height.
    pub height: f64,
}

impl FreeRegion {
    /// Create a new region.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A region is only a usable fit target when both dimensions are
    /// strictly positive. Splits can produce zero or negative remainders;
    /// those stay in the list but must never match.
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Outcome of a successful reservation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reservation {
    /// X position of the placed part.
    pub x: f64,
    /// Y position of the placed part.
    pub y: f64,
    /// Placed length (post-rotation).
    pub length: f64,
    /// Placed height (post-rotation).
    pub height: f64,
    /// Whether the part was rotated 90 degrees to fit.
    pub rotated: bool,
}

/// Free-space state for one sheet, owned by the engine for the sheet's
/// lifetime and discarded on rollover.
#[derive(Debug, Clone)]
pub struct FreeSpaceTracker {
    config: SheetConfig,
    regions: Vec<FreeRegion>,
}

impl FreeSpaceTracker {
    /// Create a tracker for a fresh sheet: one region covering the whole
    /// sheet.
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            regions: vec![FreeRegion::new(0.0, 0.0, config.width, config.height)],
        }
    }

    /// Create a tracker for a sheet whose first part was just placed at the
    /// origin (the rollover path). The two seed regions are the remainder to
    /// the right of the part and the full-width remainder above it.
    pub fn seed_after_rollover(config: SheetConfig, length: f64, height: f64) -> Self {
        Self {
            config,
            regions: vec![
                FreeRegion::new(length, 0.0, config.width - length, height),
                FreeRegion::new(0.0, height, config.width, config.height - height),
            ],
        }
    }

    /// Current candidate regions, in scan order.
    pub fn regions(&self) -> &[FreeRegion] {
        &self.regions
    }

    /// Try to reserve space for a `length x height` part.
    ///
    /// Scans regions in order and takes the first that fits. The unrotated
    /// orientation wins whenever it fits; rotation is tried only when it
    /// does not. On success the matched region is replaced by two split
    /// remainders (right of the part at part height, then above the part at
    /// full region width), appended without filtering degenerates.
    pub fn try_reserve(&mut self, length: f64, height: f64) -> Option<Reservation> {
        let (idx, rotated) = self.regions.iter().enumerate().find_map(|(idx, region)| {
            if !region.is_usable() {
                return None;
            }
            let fits_normal = length <= region.width && height <= region.height;
            let fits_rotated = height <= region.width && length <= region.height;
            if fits_normal {
                Some((idx, false))
            } else if fits_rotated {
                Some((idx, true))
            } else {
                None
            }
        })?;

        let (length, height) = if rotated {
            (height, length)
        } else {
            (length, height)
        };

        let region = self.regions.remove(idx);
        self.regions.push(FreeRegion::new(
            region.x + length,
            region.y,
            region.width - length,
            height,
        ));
        self.regions.push(FreeRegion::new(
            region.x,
            region.y + height,
            region.width,
            region.height - height,
        ));

        Some(Reservation {
            x: region.x,
            y: region.y,
            length,
            height,
            rotated,
        })
    }

    /// Sheet configuration this tracker was built for.
    pub fn config(&self) -> SheetConfig {
        self.config
    }
}
