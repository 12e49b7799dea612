//! Plain-text extraction from the embedded text layer.

use super::{ExtractStrategy, StrategyKind};
use crate::engine::DocumentEngine;
use crate::error::Result;
use crate::model::{ExtractionResult, PdfDocument, TextSource};

/// Extracts the document's text layer as per-page text blocks.
pub struct TextStrategy;

impl ExtractStrategy for TextStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Text
    }

    fn extract(
        &self,
        doc: &PdfDocument,
        engine: &dyn DocumentEngine,
    ) -> Result<Vec<ExtractionResult>> {
        let pages = engine.text_layer(doc.path())?;

        Ok(pages
            .into_iter()
            .filter(|p| p.has_content())
            .map(|p| ExtractionResult::text(p.page, p.text, TextSource::Layer))
            .collect())
    }
}
