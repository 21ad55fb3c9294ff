//! boardnest-core - Core library for sheet-material nesting.
//!
//! This library computes how many standard stock sheets are needed to cut a
//! list of rectangular parts, using a greedy first-fit heuristic with a
//! single-axis rotation fallback, and produces the data for a printable
//! page-per-sheet layout.
//!
//! # Example
//!
//! ```no_run
//! use boardnest_core::{plan_layout, SheetConfig};
//! use std::path::Path;
//!
//! let plan = plan_layout(Path::new("parts.csv"), &SheetConfig::default()).unwrap();
//! println!(
//!     "{} sheets, yield {}",
//!     plan.report.total_sheets_used,
//!     plan.report.yield_display()
//! );
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod nesting;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::SheetConfig;
pub use error::{NestError, Result};
pub use generator::generate_pdf;
pub use model::{expand_rows, NestingResult, Part, PartRow, Placement, Sheet};
pub use nesting::{FreeSpaceTracker, NestingEngine};
pub use parser::parse_parts_file;
pub use report::YieldReport;
pub use validation::{validate_layout, validate_rows, ValidationResult};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full outcome of one planning run: the parsed rows, the nesting
/// layout, and the aggregated metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Parsed cut-list rows, as read from the input file.
    pub rows: Vec<PartRow>,
    /// Per-sheet placements.
    pub result: NestingResult,
    /// Aggregated material metrics.
    pub report: YieldReport,
}

/// Plan a cutting layout from a cut-list file.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Parse the cut-list table
/// 2. Validate the rows
/// 3. Expand quantities and nest the parts
/// 4. Compute the yield report
///
/// Validation warnings are logged and do not stop the run; validation
/// errors reject the input before nesting.
pub fn plan_layout(input_path: &Path, config: &SheetConfig) -> Result<LayoutPlan> {
    let rows = parse_parts_file(input_path)?;

    let validation = validate_rows(&rows, config);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.passed {
        return Err(NestError::ValidationFailed {
            message: validation.errors.join("; "),
        });
    }

    let parts = expand_rows(&rows);
    let engine = NestingEngine::new(*config);
    let result = engine.nest(&parts)?;
    let report = YieldReport::compute(&rows, &result, config);

    Ok(LayoutPlan {
        rows,
        result,
        report,
    })
}
