//! OCR extraction for pages without a text layer.

use super::{ExtractStrategy, StrategyKind};
use crate::engine::DocumentEngine;
use crate::error::Result;
use crate::model::{ExtractionResult, PdfDocument, TextSource};

/// Rasterizes pages and recognizes text through the engine's OCR
/// capability. Results carry the reduced-confidence [`TextSource::Ocr`]
/// marker.
pub struct OcrStrategy;

impl ExtractStrategy for OcrStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Ocr
    }

    fn extract(
        &self,
        doc: &PdfDocument,
        engine: &dyn DocumentEngine,
    ) -> Result<Vec<ExtractionResult>> {
        let pages = engine.ocr(doc.path())?;

        Ok(pages
            .into_iter()
            .filter(|p| p.has_content())
            .map(|p| ExtractionResult::text(p.page, p.text, TextSource::Ocr))
            .collect())
    }
}
