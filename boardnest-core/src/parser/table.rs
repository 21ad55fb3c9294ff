//! Parser for the uploaded cut-list table.
//!
//! The expected input is a CSV export of the part spreadsheet: a header row
//! naming the `Length (in)`, `Height (in)` and `Quantity` columns (in any
//! order, extra columns ignored) followed by one row per part size.

use std::path::Path;

use crate::error::{NestError, Result};
use crate::model::PartRow;

/// Header label of the length column.
pub const COL_LENGTH: &str = "Length (in)";
/// Header label of the height column.
pub const COL_HEIGHT: &str = "Height (in)";
/// Header label of the quantity column.
pub const COL_QUANTITY: &str = "Quantity";

/// Cut-list table parser.
pub struct TableParser {
    /// File content as lines.
    lines: Vec<String>,
}

impl TableParser {
    /// Create a new parser from file content.
    pub fn new(content: String) -> Self {
        let lines = content.lines().map(|s| s.to_string()).collect();
        Self { lines }
    }

    /// Split a CSV line into trimmed, unquoted fields.
    fn split_fields(line: &str) -> Vec<String> {
        line.split(',')
            .map(|f| f.trim().trim_matches('"').trim().to_string())
            .collect()
    }

    /// Locate a required column in the header fields (case-insensitive).
    fn find_column(fields: &[String], label: &str) -> Result<usize> {
        fields
            .iter()
            .position(|f| f.eq_ignore_ascii_case(label))
            .ok_or_else(|| NestError::MissingColumn {
                column: label.to_string(),
            })
    }

    /// Parse all rows of the table.
    pub fn parse(&self) -> Result<Vec<PartRow>> {
        let mut iter = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = iter.next().ok_or(NestError::MissingColumn {
            column: COL_LENGTH.to_string(),
        })?;
        let header_fields = Self::split_fields(header);
        let length_col = Self::find_column(&header_fields, COL_LENGTH)?;
        let height_col = Self::find_column(&header_fields, COL_HEIGHT)?;
        let quantity_col = Self::find_column(&header_fields, COL_QUANTITY)?;
        let min_fields = length_col.max(height_col).max(quantity_col) + 1;

        let mut rows = Vec::new();
        for (idx, line) in iter {
            let line_no = idx + 1;
            let fields = Self::split_fields(line);
            if fields.len() < min_fields {
                return Err(NestError::ShortRow {
                    line: line_no,
                    expected: min_fields,
                    found: fields.len(),
                });
            }

            let length = parse_number(&fields[length_col], line_no)?;
            let height = parse_number(&fields[height_col], line_no)?;
            let quantity: u32 =
                fields[quantity_col]
                    .parse()
                    .map_err(|_| NestError::InvalidNumber {
                        line: line_no,
                        value: fields[quantity_col].clone(),
                    })?;

            rows.push(PartRow {
                length,
                height,
                quantity,
                line: line_no,
            });
        }

        Ok(rows)
    }
}

/// Parse a dimension field as f64 with a line-numbered error.
fn parse_number(value: &str, line: usize) -> Result<f64> {
    value.parse().map_err(|_| NestError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

/// Parse a cut-list file from a path.
pub fn parse_parts_file(path: &Path) -> Result<Vec<PartRow>> {
    if !path.exists() {
        return Err(NestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(NestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let parser = TableParser::new(content);
    parser.parse()
}
