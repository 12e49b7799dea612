//! Document analysis engine abstraction.
//!
//! The extraction pipeline depends on external capabilities (text layer,
//! OCR, table detection, image extraction, structure parsing) only through
//! the [`DocumentEngine`] trait, isolating the concrete libraries and tools
//! from the strategy and pipeline logic. Each method takes the document
//! path and returns structured content, or an empty collection when the
//! capability finds nothing.

mod images;
mod local;
mod ocr;
mod partition;
mod tables;

pub use local::LocalEngine;
pub use ocr::{ocr_available, OcrConfig};
pub use tables::TableDetectorConfig;

use crate::error::Result;
use crate::model::{DocumentSurvey, ImageBlob, PageText, StructuredBlock, Table};
use std::path::Path;

/// Table detection flavor, mirroring the two detection families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFlavor {
    /// Trace visible ruling lines
    Lattice,
    /// Infer columns from whitespace alignment
    Stream,
}

/// Abstract interface to the document-analysis capabilities.
///
/// Implementations must be safe to call from parallel batch tasks; every
/// method takes `&self` and the engine holds no per-document state.
pub trait DocumentEngine: Send + Sync {
    /// Survey a document: page count plus per-page text/image flags.
    ///
    /// This is the only call that fails for unreadable input; all other
    /// capabilities report "nothing found" as an empty collection.
    fn survey(&self, path: &Path) -> Result<DocumentSurvey>;

    /// Extract the embedded text layer, one entry per page.
    ///
    /// Pages without a text layer yield an entry with empty text so page
    /// numbering stays dense.
    fn text_layer(&self, path: &Path) -> Result<Vec<PageText>>;

    /// Detect tables with the given flavor. Empty result, not an error,
    /// when no tables qualify.
    fn detect_tables(&self, path: &Path, flavor: TableFlavor) -> Result<Vec<Table>>;

    /// Extract embedded raster images as PNG blobs with page/index
    /// provenance.
    fn extract_images(&self, path: &Path) -> Result<Vec<ImageBlob>>;

    /// Rasterize pages and recognize text. One entry per recognized page.
    fn ocr(&self, path: &Path) -> Result<Vec<PageText>>;

    /// Generic structure parsing: categorized blocks from whatever layout
    /// signal is available.
    fn partition(&self, path: &Path) -> Result<Vec<StructuredBlock>>;
}
