//! Table types.

use serde::{Deserialize, Serialize};

/// How a table's cell boundaries were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// Ruling lines traced on the page
    Lattice,
    /// Whitespace/column alignment, no visible lines
    Stream,
}

impl std::fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionMode::Lattice => write!(f, "lattice"),
            DetectionMode::Stream => write!(f, "stream"),
        }
    }
}

/// A detected table: ordered rows of cell strings.
///
/// Rows are kept rectangular; [`Table::normalized`] pads ragged rows coming
/// out of a detector with empty cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Originating page (1-indexed)
    pub page: u32,

    /// Detection mode that produced this table
    pub mode: DetectionMode,

    /// Detector confidence, when the capability reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Cell contents, row-major
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table and pad ragged rows to a uniform column count.
    pub fn new(page: u32, mode: DetectionMode, rows: Vec<Vec<String>>) -> Self {
        Self {
            page,
            mode,
            confidence: None,
            rows,
        }
        .normalized()
    }

    /// Set detector confidence and return self.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (uniform across rows after normalization).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pad every row with empty cells up to the widest row.
    pub fn normalized(mut self) -> Self {
        let width = self.column_count();
        for row in &mut self.rows {
            while row.len() < width {
                row.push(String::new());
            }
        }
        self
    }

    /// Tab-separated plain text rendering.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let table = Table::new(
            1,
            DetectionMode::Stream,
            rows(&[&["a", "b", "c"], &["d"], &["e", "f"]]),
        );
        assert_eq!(table.column_count(), 3);
        assert!(table.rows.iter().all(|r| r.len() == 3));
        assert_eq!(table.rows[1], vec!["d", "", ""]);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(2, DetectionMode::Lattice, vec![]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_plain_text() {
        let table = Table::new(1, DetectionMode::Stream, rows(&[&["x", "y"], &["1", "2"]]));
        assert_eq!(table.plain_text(), "x\ty\n1\t2");
    }

    #[test]
    fn test_confidence_serialization_skipped_when_absent() {
        let table = Table::new(1, DetectionMode::Stream, rows(&[&["a"]]));
        let json = serde_json::to_string(&table).unwrap();
        assert!(!json.contains("confidence"));

        let json = serde_json::to_string(&table.with_confidence(0.92)).unwrap();
        assert!(json.contains("confidence"));
    }
}
