//! Extraction strategies.
//!
//! Each strategy maps a document to a sequence of [`ExtractionResult`]s
//! through one engine capability. Strategies are stateless and total: a
//! document with nothing to extract produces an empty sequence, never an
//! error, so the pipeline can fall through to the next strategy in the
//! resolved order.

mod image;
mod ocr;
mod table;
mod text;
mod unstructured;

pub use image::ImageStrategy;
pub use ocr::OcrStrategy;
pub use table::TableStrategy;
pub use text::TextStrategy;
pub use unstructured::UnstructuredStrategy;

use crate::engine::DocumentEngine;
use crate::error::Result;
use crate::model::{ExtractionResult, PdfDocument};
use serde::{Deserialize, Serialize};

/// Identifies a strategy, both for resolution and for result provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Text,
    Ocr,
    Tables,
    Images,
    Unstructured,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Text => write!(f, "text"),
            StrategyKind::Ocr => write!(f, "ocr"),
            StrategyKind::Tables => write!(f, "tables"),
            StrategyKind::Images => write!(f, "images"),
            StrategyKind::Unstructured => write!(f, "unstructured"),
        }
    }
}

/// A pluggable extraction strategy.
pub trait ExtractStrategy: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Extract content from the document. Empty output means "nothing
    /// found here", and the caller may fall back to another strategy.
    fn extract(
        &self,
        doc: &PdfDocument,
        engine: &dyn DocumentEngine,
    ) -> Result<Vec<ExtractionResult>>;
}

/// Instantiate the strategy for a kind.
pub fn strategy_for(kind: StrategyKind) -> Box<dyn ExtractStrategy> {
    match kind {
        StrategyKind::Text => Box::new(TextStrategy),
        StrategyKind::Ocr => Box::new(OcrStrategy),
        StrategyKind::Tables => Box::new(TableStrategy),
        StrategyKind::Images => Box::new(ImageStrategy),
        StrategyKind::Unstructured => Box::new(UnstructuredStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_for_round_trips_kind() {
        for kind in [
            StrategyKind::Text,
            StrategyKind::Ocr,
            StrategyKind::Tables,
            StrategyKind::Images,
            StrategyKind::Unstructured,
        ] {
            assert_eq!(strategy_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&StrategyKind::Unstructured).unwrap();
        assert_eq!(json, "\"unstructured\"");
    }
}
