use regex::Regex;
use std::sync::OnceLock;

use crate::types::{DoseVolumeCurve, DvhRow};

/// Splits a table row on runs of whitespace and/or commas
pub fn split_row_tokens(line: &str) -> Vec<&str> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(r"[\s,]+").expect("Failed to compile regex"));
    re.split(line).collect()
}

/// Accumulates the table rows of the structure currently being read
///
/// Rows are kept as raw tokens and only converted to numbers when the
/// block is finished, so a bad token never rejects its row.
#[derive(Debug, Default)]
pub struct CurveBuilder {
    rows: Vec<[String; 3]>,
}

impl CurveBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table row, returning false when it has fewer than three columns
    pub fn push_line(&mut self, line: &str) -> bool {
        match split_row_tokens(line).as_slice() {
            [dose, volume_cc, volume_percent, ..] => {
                self.rows.push([
                    dose.to_string(),
                    volume_cc.to_string(),
                    volume_percent.to_string(),
                ]);
                true
            }
            _ => false,
        }
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds the curve from the accumulated rows and resets the builder
    pub fn finish(&mut self) -> DoseVolumeCurve {
        let rows = std::mem::take(&mut self.rows)
            .iter()
            .map(|[dose, cc, pct]| DvhRow::from_tokens(dose, cc, pct))
            .collect();
        DoseVolumeCurve::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_tokens() {
        assert_eq!(split_row_tokens("6000 10.0 100"), vec!["6000", "10.0", "100"]);
        assert_eq!(
            split_row_tokens("6000,\t10.0 ,  100"),
            vec!["6000", "10.0", "100"]
        );
        assert_eq!(split_row_tokens("1,2,"), vec!["1", "2", ""]);
    }

    #[test]
    fn test_push_line_requires_three_tokens() {
        let mut builder = CurveBuilder::new();
        assert!(!builder.push_line("6000 10.0"));
        assert!(builder.push_line("6000 10.0 100 extra"));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_finish_coerces_and_resets() {
        let mut builder = CurveBuilder::new();
        builder.push_line("6000 10.0 100");
        builder.push_line("5000 x 50");

        let curve = builder.finish();
        assert!(builder.is_empty());
        assert!(!builder.has_rows());
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.rows()[0], DvhRow::new(6000.0, 10.0, 100.0));
        assert_eq!(curve.rows()[1].dose_cgy, 5000.0);
        assert!(curve.rows()[1].volume_cc.is_nan());
    }

    #[test]
    fn test_trailing_comma_gives_nan() {
        let mut builder = CurveBuilder::new();
        assert!(builder.push_line("1,2,"));
        let curve = builder.finish();
        assert!(curve.rows()[0].volume_percent.is_nan());
    }

    #[test]
    fn test_locale_decimal_comma_shifts_columns() {
        let mut builder = CurveBuilder::new();
        builder.push_line("6000 10,5 100");
        let curve = builder.finish();
        assert_eq!(curve.rows()[0], DvhRow::new(6000.0, 10.0, 5.0));
    }
}
