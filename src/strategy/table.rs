//! Table extraction in two flavors.

use super::{ExtractStrategy, StrategyKind};
use crate::engine::{DocumentEngine, TableFlavor};
use crate::error::Result;
use crate::model::{ExtractionResult, PdfDocument};

/// Detects tables, trying the stream flavor first and falling back to
/// lattice when whitespace alignment finds nothing. Yields an empty
/// sequence, not a failure, when the document has no tables.
pub struct TableStrategy;

impl ExtractStrategy for TableStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Tables
    }

    fn extract(
        &self,
        doc: &PdfDocument,
        engine: &dyn DocumentEngine,
    ) -> Result<Vec<ExtractionResult>> {
        let mut tables = engine.detect_tables(doc.path(), TableFlavor::Stream)?;
        if tables.is_empty() {
            tables = engine.detect_tables(doc.path(), TableFlavor::Lattice)?;
        }

        Ok(tables
            .into_iter()
            .filter(|t| !t.is_empty())
            // Detectors may hand back ragged rows; the rectangular
            // invariant is enforced here regardless of the engine.
            .map(|t| ExtractionResult::table(t.normalized()))
            .collect())
    }
}
