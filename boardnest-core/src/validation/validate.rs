//! Validation logic for cut lists and nesting layouts.

use crate::config::{SheetConfig, EPS};
use crate::model::{NestingResult, PartRow};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate cut-list rows before nesting.
///
/// Errors reject the upload; warnings are surfaced but do not stop the run.
pub fn validate_rows(rows: &[PartRow], config: &SheetConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for row in rows {
        if !row.length.is_finite() || !row.height.is_finite() {
            result.add_error(format!(
                "Line {}: Non-finite dimensions ({} x {})",
                row.line, row.length, row.height
            ));
            continue;
        }

        if row.length <= 0.0 || row.height <= 0.0 {
            result.add_error(format!(
                "Line {}: Invalid dimensions ({} x {})",
                row.line, row.length, row.height
            ));
            continue;
        }

        if row.quantity == 0 {
            result.add_warning(format!(
                "Line {}: Quantity is zero, row contributes no parts",
                row.line
            ));
        }

        if !config.admits(row.length, row.height) {
            result.add_error(format!(
                "Line {}: Part {} x {} does not fit a {} x {} sheet in either orientation",
                row.line, row.length, row.height, config.width, config.height
            ));
        }
    }

    result
}

/// Validate a finished layout against the sheet bounds.
///
/// Placements extending beyond the sheet are warnings (the rollover path can
/// legitimately produce them when it skips the rotation test); overlapping
/// placements on one sheet indicate a tracker defect and are errors.
pub fn validate_layout(result: &NestingResult, config: &SheetConfig) -> ValidationResult {
    let mut validation = ValidationResult::ok();

    for (sheet_idx, sheet) in result.sheets.iter().enumerate() {
        for (placement_idx, p) in sheet.iter().enumerate() {
            if p.x < 0.0
                || p.y < 0.0
                || p.x_max() > config.width + EPS
                || p.y_max() > config.height + EPS
            {
                validation.add_warning(format!(
                    "Sheet {}, Placement {}: Extends beyond sheet bounds",
                    sheet_idx + 1,
                    placement_idx + 1
                ));
            }
        }

        for (i, j) in overlapping_pairs(sheet) {
            validation.add_error(format!(
                "Sheet {}: Placements {} and {} overlap",
                sheet_idx + 1,
                i + 1,
                j + 1
            ));
        }
    }

    validation
}

/// Find overlapping placement index pairs on one sheet.
fn overlapping_pairs(sheet: &[crate::model::Placement]) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();

    for i in 0..sheet.len() {
        for j in i + 1..sheet.len() {
            let a = &sheet[i];
            let b = &sheet[j];

            let x_overlap = a.x < b.x_max() && b.x < a.x_max();
            let y_overlap = a.y < b.y_max() && b.y < a.y_max();

            if x_overlap && y_overlap {
                overlaps.push((i, j));
            }
        }
    }

    overlaps
}
