//! Extracted content types.

use super::Table;
use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// Text of a single page as returned by a capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub page: u32,

    /// Extracted text, possibly empty
    pub text: String,
}

impl PageText {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }

    /// Whether the page yielded any non-whitespace text.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Where a text block's characters came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    /// Embedded text layer
    Layer,
    /// Optical character recognition; reduced confidence
    Ocr,
}

/// A block of extracted text with its source marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Originating page (1-indexed)
    pub page: u32,

    /// Text content
    pub text: String,

    /// Text layer vs OCR
    pub source: TextSource,
}

/// An embedded raster image, already encoded as PNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageBlob {
    /// Originating page (1-indexed)
    pub page: u32,

    /// 1-indexed position among the page's images
    pub index: u32,

    /// Pixel width
    pub width: u32,

    /// Pixel height
    pub height: u32,

    /// PNG-encoded bytes
    #[serde(skip_serializing)]
    pub data: Vec<u8>,
}

/// Coarse element categories from the structure-parsing fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockCategory {
    Title,
    NarrativeText,
    ListItem,
}

impl std::fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockCategory::Title => write!(f, "Title"),
            BlockCategory::NarrativeText => write!(f, "NarrativeText"),
            BlockCategory::ListItem => write!(f, "ListItem"),
        }
    }
}

/// A categorized element from the generic structure parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredBlock {
    /// Originating page (1-indexed), when the parser knows it
    pub page: Option<u32>,

    /// Element category
    pub category: BlockCategory,

    /// Element text
    pub text: String,
}

/// Which strategy produced a result, and from which page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Source page (1-indexed); `None` for document-level results
    pub page: Option<u32>,

    /// Strategy that produced the result
    pub strategy: StrategyKind,
}

/// One unit of extracted content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Origin of this result
    pub provenance: Provenance,

    /// The content itself
    pub content: Content,
}

impl ExtractionResult {
    pub fn new(provenance: Provenance, content: Content) -> Self {
        Self {
            provenance,
            content,
        }
    }

    /// Shorthand for a text block result.
    pub fn text(page: u32, text: impl Into<String>, source: TextSource) -> Self {
        let strategy = match source {
            TextSource::Layer => StrategyKind::Text,
            TextSource::Ocr => StrategyKind::Ocr,
        };
        Self::new(
            Provenance {
                page: Some(page),
                strategy,
            },
            Content::Text(TextBlock {
                page,
                text: text.into(),
                source,
            }),
        )
    }

    /// Shorthand for a table result.
    pub fn table(table: Table) -> Self {
        Self::new(
            Provenance {
                page: Some(table.page),
                strategy: StrategyKind::Tables,
            },
            Content::Table(table),
        )
    }

    /// Shorthand for an image result.
    pub fn image(blob: ImageBlob) -> Self {
        Self::new(
            Provenance {
                page: Some(blob.page),
                strategy: StrategyKind::Images,
            },
            Content::Image(blob),
        )
    }

    /// Shorthand for a structured-block result.
    pub fn structured(block: StructuredBlock) -> Self {
        Self::new(
            Provenance {
                page: block.page,
                strategy: StrategyKind::Unstructured,
            },
            Content::Structured(block),
        )
    }
}

/// The tagged union of extractable content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Content {
    Text(TextBlock),
    Table(Table),
    Image(ImageBlob),
    Structured(StructuredBlock),
}

impl Content {
    /// Whether the content is empty after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(t) => t.text.trim().is_empty(),
            Content::Table(t) => t.is_empty(),
            Content::Image(i) => i.data.is_empty(),
            Content::Structured(s) => s.text.trim().is_empty(),
        }
    }
}
