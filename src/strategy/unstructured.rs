//! Generic structure-parsing fallback.

use super::{ExtractStrategy, StrategyKind};
use crate::engine::DocumentEngine;
use crate::error::Result;
use crate::model::{ExtractionResult, PdfDocument};

/// Last-resort strategy: categorized blocks from the engine's generic
/// partitioner. Only scheduled after every other strategy yielded nothing.
pub struct UnstructuredStrategy;

impl ExtractStrategy for UnstructuredStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Unstructured
    }

    fn extract(
        &self,
        doc: &PdfDocument,
        engine: &dyn DocumentEngine,
    ) -> Result<Vec<ExtractionResult>> {
        let blocks = engine.partition(doc.path())?;

        Ok(blocks
            .into_iter()
            .filter(|b| !b.text.trim().is_empty())
            .map(ExtractionResult::structured)
            .collect())
    }
}
