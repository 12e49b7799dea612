//! Table detection over the extracted text layer.
//!
//! Stream-mode detection in the style of Camelot: columns are inferred
//! from whitespace alignment across consecutive lines, without relying on
//! graphical ruling lines. Lattice mode reuses the same row segmentation
//! but is gated by the caller on pages that actually draw rulings.

use crate::model::{DetectionMode, PageText, Table};
use regex::Regex;

/// Tunables for the alignment detector.
#[derive(Debug, Clone)]
pub struct TableDetectorConfig {
    /// Minimum number of rows to consider as table
    pub min_rows: usize,
    /// Minimum number of columns to consider as table
    pub min_columns: usize,
    /// Maximum number of columns (above this, likely word-level splitting)
    pub max_columns: usize,
    /// Minimum fraction of rows matching the modal column count
    pub min_alignment_ratio: f32,
}

impl Default for TableDetectorConfig {
    fn default() -> Self {
        Self {
            min_rows: 2,
            min_columns: 2,
            max_columns: 8,
            min_alignment_ratio: 0.5,
        }
    }
}

/// Split a line into cells on runs of two or more spaces (or tabs).
fn split_cells(separator: &Regex, line: &str) -> Vec<String> {
    separator
        .split(line.trim())
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Detect tables across all pages of a text layer.
pub fn detect(pages: &[PageText], mode: DetectionMode, config: &TableDetectorConfig) -> Vec<Table> {
    // Two spaces is the narrowest gap a PDF text extractor emits between
    // distinct columns; single spaces separate words inside a cell.
    let separator = Regex::new(r"[ \t]{2,}").expect("static separator pattern");

    let mut tables = Vec::new();
    for page in pages {
        tables.extend(detect_on_page(page, mode, config, &separator));
    }
    log::debug!(
        "table detector ({mode}): {} candidate tables across {} pages",
        tables.len(),
        pages.len()
    );
    tables
}

fn detect_on_page(
    page: &PageText,
    mode: DetectionMode,
    config: &TableDetectorConfig,
    separator: &Regex,
) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<String>> = Vec::new();

    for line in page.text.lines() {
        let cells = split_cells(separator, line);
        let columnar = cells.len() >= config.min_columns && cells.len() <= config.max_columns;

        if columnar {
            run.push(cells);
        } else {
            flush_run(&mut run, page.page, mode, config, &mut tables);
        }
    }
    flush_run(&mut run, page.page, mode, config, &mut tables);

    tables
}

/// Close out a run of columnar lines, keeping it if it looks like a table.
fn flush_run(
    run: &mut Vec<Vec<String>>,
    page: u32,
    mode: DetectionMode,
    config: &TableDetectorConfig,
    tables: &mut Vec<Table>,
) {
    if run.len() < config.min_rows {
        run.clear();
        return;
    }

    let alignment = alignment_ratio(run);
    if alignment < config.min_alignment_ratio {
        log::debug!(
            "table detector: dropping {}-row run on page {page}, alignment {alignment:.2}",
            run.len()
        );
        run.clear();
        return;
    }

    let rows = std::mem::take(run);
    tables.push(Table::new(page, mode, rows).with_confidence(alignment));
}

/// Fraction of rows whose column count matches the modal count.
fn alignment_ratio(rows: &[Vec<String>]) -> f32 {
    if rows.is_empty() {
        return 0.0;
    }

    let mut counts: std::collections::HashMap<usize, usize> = std::collections::HashMap::new();
    for row in rows {
        *counts.entry(row.len()).or_insert(0) += 1;
    }
    let modal = counts.values().copied().max().unwrap_or(0);
    modal as f32 / rows.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(text: &str) -> PageText {
        PageText::new(1, text)
    }

    #[test]
    fn test_detects_aligned_columns() {
        let text = "Invoice report\n\
                    Item        Qty   Price\n\
                    Widget      2     9.99\n\
                    Gadget      1     4.50\n\
                    \n\
                    Thanks for your business.";
        let tables = detect(
            &[page(text)],
            DetectionMode::Stream,
            &TableDetectorConfig::default(),
        );
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows[0], vec!["Item", "Qty", "Price"]);
        assert_eq!(table.rows[2], vec!["Gadget", "1", "4.50"]);
        assert_eq!(table.mode, DetectionMode::Stream);
        assert!(table.confidence.unwrap() > 0.9);
    }

    #[test]
    fn test_prose_yields_no_tables() {
        let text = "This is a paragraph of running prose without any\n\
                    columnar alignment at all, just ordinary sentences\n\
                    flowing from one line to the next.";
        let tables = detect(
            &[page(text)],
            DetectionMode::Stream,
            &TableDetectorConfig::default(),
        );
        assert!(tables.is_empty());
    }

    #[test]
    fn test_single_columnar_line_ignored() {
        let text = "Name    Value\nplain line\nother plain line";
        let tables = detect(
            &[page(text)],
            DetectionMode::Stream,
            &TableDetectorConfig::default(),
        );
        assert!(tables.is_empty());
    }

    #[test]
    fn test_ragged_run_is_padded() {
        let text = "a    b    c\nd    e\nf    g    h";
        let tables = detect(
            &[page(text)],
            DetectionMode::Stream,
            &TableDetectorConfig::default(),
        );
        assert_eq!(tables.len(), 1);
        assert!(tables[0].rows.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_misaligned_run_dropped() {
        // Modal width never reaches half the rows.
        let text = "a  b\nc  d  e\nf  g  h  i\nj  k  l  m  n";
        let config = TableDetectorConfig {
            min_alignment_ratio: 0.6,
            ..Default::default()
        };
        let tables = detect(&[page(text)], DetectionMode::Stream, &config);
        assert!(tables.is_empty());
    }

    #[test]
    fn test_two_tables_on_one_page() {
        let text = "x   y\n1   2\n\nsome prose in between the two tables\n\np   q\n3   4";
        let tables = detect(
            &[page(text)],
            DetectionMode::Stream,
            &TableDetectorConfig::default(),
        );
        assert_eq!(tables.len(), 2);
    }
}
