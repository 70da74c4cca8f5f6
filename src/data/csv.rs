//! CSV loading for training data.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas
//! - The last column is an integer class label; every other column is a
//!   numeric feature

use std::path::Path;

use crate::error::{MatrError, Result};
use crate::math::matrix::Matrix;

/// Feature matrix plus one integer label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vec<i64>,
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    parse_csv(&text)
}

/// Parses CSV text into a [`Dataset`]. Row numbers in errors are 1-based and
/// count data rows only.
pub fn parse_csv(text: &str) -> Result<Dataset> {
    let mut lines = text.lines().peekable();

    if let Some(first) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut labels: Vec<i64> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row_num = rows.len() + 1;

        let cells = parse_csv_row(line);
        let Some((label_cell, feature_cells)) = cells.split_last().filter(|(_, f)| !f.is_empty()) else {
            return Err(csv_error(
                row_num,
                format!("expected at least 2 columns (features + label), got {}", cells.len()),
            ));
        };
        let label = label_cell
            .trim()
            .parse::<i64>()
            .map_err(|_| csv_error(row_num, format!("label '{}' is not an integer", label_cell)))?;
        let feats = parse_floats(feature_cells, row_num)?;

        if let Some(first) = rows.first() {
            if first.len() != feats.len() {
                return Err(csv_error(
                    row_num,
                    format!("feature count {} does not match first row's {}", feats.len(), first.len()),
                ));
            }
        }

        rows.push(feats);
        labels.push(label);
    }

    if rows.is_empty() {
        return Err(MatrError::invalid("CSV contains no data rows"));
    }

    Ok(Dataset { features: Matrix::from_rows(rows)?, labels })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn csv_error(row: usize, message: String) -> MatrError {
    MatrError::Csv { row, message }
}

fn is_header(line: &str) -> bool {
    parse_csv_row(line).iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Splits one row, honouring double quotes (`""` is an escaped quote).
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], row_num: usize) -> Result<Vec<f64>> {
    cells
        .iter()
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .map_err(|_| csv_error(row_num, format!("'{}' is not a valid number", c)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_features_and_labels() {
        let ds = parse_csv("x,y,class\n0.5,1.5,0\n2,3,1\n\n4,5,1\n").unwrap();
        assert_eq!(ds.features.shape(), (3, 2));
        assert_eq!(ds.features.row(1), &[2.0, 3.0]);
        assert_eq!(ds.labels, vec![0, 1, 1]);
    }

    #[test]
    fn headerless_input_keeps_first_row() {
        let ds = parse_csv("1,2,-1\n3,4,2").unwrap();
        assert_eq!(ds.features.rows(), 2);
        assert_eq!(ds.labels, vec![-1, 2]);
    }

    #[test]
    fn quoted_fields_are_unwrapped() {
        assert_eq!(parse_csv_row(r#""a,b",c,"say ""hi""""#), vec!["a,b", "c", "say \"hi\""]);
        let ds = parse_csv("\"1.5\",\"2\",1").unwrap();
        assert_eq!(ds.features.row(0), &[1.5, 2.0]);
    }

    #[test]
    fn errors_carry_row_numbers() {
        match parse_csv("a,b,label\n1,2,0\n1,x,1\n") {
            Err(MatrError::Csv { row, .. }) => assert_eq!(row, 2),
            other => panic!("unexpected {:?}", other),
        }
        match parse_csv("1,2,0\n1,2,3,0\n") {
            Err(MatrError::Csv { row, .. }) => assert_eq!(row, 2),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(parse_csv("1,2,0.5\n"), Err(MatrError::Csv { row: 1, .. })));
        assert!(matches!(parse_csv("7\n"), Err(MatrError::Csv { row: 1, .. })));
    }

    #[test]
    fn load_csv_reads_file_and_reports_missing_file() {
        let path = std::env::temp_dir().join(format!("matr-nn-data-{}.csv", std::process::id()));
        std::fs::write(&path, "f1,f2,label\n0.1,0.2,3\n0.4,0.5,4\n").unwrap();
        let ds = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.features.to_rows(), vec![vec![0.1, 0.2], vec![0.4, 0.5]]);
        assert_eq!(ds.labels, vec![3, 4]);
        assert!(matches!(load_csv(&path), Err(MatrError::Io(_))));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_csv("a,b,label\n"), Err(MatrError::InvalidArgument(_))));
        assert!(parse_csv("").is_err());
    }
}
