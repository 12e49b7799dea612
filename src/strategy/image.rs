//! Embedded raster image extraction.

use super::{ExtractStrategy, StrategyKind};
use crate::engine::DocumentEngine;
use crate::error::Result;
use crate::model::{ExtractionResult, PdfDocument};

/// Extracts embedded raster images with page/index provenance.
pub struct ImageStrategy;

impl ExtractStrategy for ImageStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Images
    }

    fn extract(
        &self,
        doc: &PdfDocument,
        engine: &dyn DocumentEngine,
    ) -> Result<Vec<ExtractionResult>> {
        let blobs = engine.extract_images(doc.path())?;

        Ok(blobs
            .into_iter()
            .filter(|b| !b.data.is_empty())
            .map(ExtractionResult::image)
            .collect())
    }
}
