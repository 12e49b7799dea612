//! JSON rendering for the combined tables artifact.

use crate::error::{Error, Result};
use crate::model::Table;
use std::path::Path;

/// Render all tables of a document as one pretty-printed JSON array.
pub fn tables_json(tables: &[&Table], artifact_path: &Path) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(tables).map_err(|e| Error::Write {
        path: artifact_path.to_path_buf(),
        reason: e.to_string(),
    })
}
