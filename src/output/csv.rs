//! CSV rendering for tables.

use crate::model::Table;

/// Render a table as RFC-4180 CSV bytes.
pub fn csv_bytes(table: &Table) -> Vec<u8> {
    let mut out = String::new();
    for row in &table.rows {
        let line: Vec<String> = row.iter().map(|cell| escape(cell)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out.into_bytes()
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
