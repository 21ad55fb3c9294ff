//! Yield and cut-length reporting.

use serde::{Deserialize, Serialize};
use thousands::Separable;

use crate::config::SheetConfig;
use crate::model::{NestingResult, PartRow};

/// Aggregated material metrics for one nesting run.
///
/// Pure aggregation over the nesting result and the original cut-list rows;
/// computing a report never mutates either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldReport {
    /// Number of stock sheets consumed.
    pub total_sheets_used: usize,
    /// Sum of part areas, in square inches (rotation-invariant).
    pub total_part_area: f64,
    /// Part area as a percentage of consumed sheet area. Zero when no
    /// sheets were used.
    pub material_yield_percent: f64,
    /// Perimeter-based cut-length estimate over the input rows, in inches.
    /// Independent of the nesting outcome.
    pub total_cut_inches: f64,
}

impl YieldReport {
    /// Compute the report for a nesting result.
    pub fn compute(rows: &[PartRow], result: &NestingResult, config: &SheetConfig) -> Self {
        let total_sheets_used = result.sheet_count();
        let total_part_area: f64 = rows
            .iter()
            .map(|r| r.length * r.height * r.quantity as f64)
            .sum();
        let total_cut_inches: f64 = rows.iter().map(|r| r.cut_inches()).sum();

        let consumed_area = total_sheets_used as f64 * config.area();
        let material_yield_percent = if consumed_area > 0.0 {
            total_part_area / consumed_area * 100.0
        } else {
            0.0
        };

        Self {
            total_sheets_used,
            total_part_area,
            material_yield_percent,
            total_cut_inches,
        }
    }

    /// Yield formatted to two decimals with a percent suffix.
    pub fn yield_display(&self) -> String {
        format!("{:.2}%", self.material_yield_percent)
    }

    /// Cut inches truncated to a whole number, comma-separated, with an
    /// "in" suffix.
    pub fn cut_inches_display(&self) -> String {
        format!(
            "{} in",
            (self.total_cut_inches as i64).separate_with_commas()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{expand_rows, Placement};
    use crate::nesting::NestingEngine;
    use pretty_assertions::assert_eq;

    fn nest(rows: &[PartRow]) -> NestingResult {
        NestingEngine::new(SheetConfig::default())
            .nest(&expand_rows(rows))
            .unwrap()
    }

    #[test]
    fn test_full_sheet_yields_100_percent() {
        let rows = vec![PartRow::new(48.0, 96.0, 1)];
        let report = YieldReport::compute(&rows, &nest(&rows), &SheetConfig::default());
        assert_eq!(report.total_sheets_used, 1);
        assert_eq!(report.yield_display(), "100.00%");
    }

    #[test]
    fn test_quarter_parts_yield_100_percent() {
        let rows = vec![PartRow::new(24.0, 48.0, 4)];
        let report = YieldReport::compute(&rows, &nest(&rows), &SheetConfig::default());
        assert_eq!(report.total_sheets_used, 1);
        assert_eq!(report.yield_display(), "100.00%");
    }

    #[test]
    fn test_two_sheets() {
        let rows = vec![PartRow::new(48.0, 96.0, 2)];
        let report = YieldReport::compute(&rows, &nest(&rows), &SheetConfig::default());
        assert_eq!(report.total_sheets_used, 2);
        assert_eq!(report.material_yield_percent, 100.0);
    }

    #[test]
    fn test_cut_inches_estimate() {
        // (2*10 + 2*20) * 3 = 180, independent of nesting.
        let rows = vec![PartRow::new(10.0, 20.0, 3)];
        let report = YieldReport::compute(&rows, &nest(&rows), &SheetConfig::default());
        assert_eq!(report.total_cut_inches, 180.0);
        assert_eq!(report.cut_inches_display(), "180 in");
    }

    #[test]
    fn test_cut_inches_thousands_separator() {
        let rows = vec![PartRow::new(100.0, 150.0, 10)];
        let report = YieldReport {
            total_sheets_used: 0,
            total_part_area: 0.0,
            material_yield_percent: 0.0,
            total_cut_inches: rows[0].cut_inches(),
        };
        assert_eq!(report.cut_inches_display(), "5,000 in");
    }

    #[test]
    fn test_empty_input_reports_zero() {
        let rows: Vec<PartRow> = vec![];
        let report = YieldReport::compute(&rows, &NestingResult::default(), &SheetConfig::default());
        assert_eq!(report.total_sheets_used, 0);
        assert_eq!(report.material_yield_percent, 0.0);
        assert_eq!(report.total_cut_inches, 0.0);
    }

    #[test]
    fn test_yield_bounded_for_fittable_parts() {
        let rows = vec![PartRow::new(30.0, 40.0, 5), PartRow::new(10.0, 10.0, 9)];
        let report = YieldReport::compute(&rows, &nest(&rows), &SheetConfig::default());
        assert!(report.material_yield_percent > 0.0);
        assert!(report.material_yield_percent <= 100.0);
    }

    #[test]
    fn test_part_area_uses_pre_rotation_dimensions() {
        // A rotated placement must not change the reported part area.
        let rows = vec![PartRow::new(96.0, 48.0, 1)];
        let result = nest(&rows);
        assert_eq!(result.sheets[0], vec![Placement::new(0.0, 0.0, 48.0, 96.0)]);
        let report = YieldReport::compute(&rows, &result, &SheetConfig::default());
        assert_eq!(report.total_part_area, 4608.0);
        assert_eq!(report.yield_display(), "100.00%");
    }
}
