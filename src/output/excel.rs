//! Excel rendering for tables.

use crate::error::{Error, Result};
use crate::model::Table;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Render a table as a single-sheet xlsx workbook.
pub fn xlsx_bytes(table: &Table, artifact_path: &Path) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, row) in table.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write_string(r as u32, c as u16, cell.as_str())
                .map_err(|e| Error::Write {
                    path: artifact_path.to_path_buf(),
                    reason: e.to_string(),
                })?;
        }
    }

    workbook.save_to_buffer().map_err(|e| Error::Write {
        path: artifact_path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DetectionMode;

    #[test]
    fn test_workbook_bytes_are_zip() {
        let table = Table::new(
            1,
            DetectionMode::Lattice,
            vec![
                vec!["Name".to_string(), "Age".to_string()],
                vec!["Alice".to_string(), "30".to_string()],
            ],
        );
        let bytes = xlsx_bytes(&table, Path::new("t.xlsx")).unwrap();
        // xlsx is a zip container.
        assert_eq!(&bytes[..2], b"PK");
    }
}
