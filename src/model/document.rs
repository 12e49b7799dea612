//! Document-level types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-page facts gathered by the analysis engine in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSurvey {
    /// Page number (1-indexed)
    pub number: u32,

    /// Whether the page carries an extractable text layer
    pub has_text: bool,

    /// Number of embedded raster images on the page
    pub image_count: u32,
}

/// Summary of a document's pages, produced once when the document is loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSurvey {
    /// Pages in document order
    pub pages: Vec<PageSurvey>,
}

impl DocumentSurvey {
    /// Create a survey from per-page entries.
    pub fn new(pages: Vec<PageSurvey>) -> Self {
        Self { pages }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Number of pages with an extractable text layer.
    pub fn text_page_count(&self) -> u32 {
        self.pages.iter().filter(|p| p.has_text).count() as u32
    }

    /// Total embedded raster images across all pages.
    pub fn image_count(&self) -> u32 {
        self.pages.iter().map(|p| p.image_count).sum()
    }
}

/// A PDF document bound to one pipeline invocation.
///
/// Owned exclusively by the task processing it; nothing here is shared
/// across files in a batch.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    path: PathBuf,
    base_name: String,
    survey: DocumentSurvey,
}

impl PdfDocument {
    /// Bind a path and its survey into a document.
    pub fn new(path: impl Into<PathBuf>, survey: DocumentSurvey) -> Self {
        let path = path.into();
        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        Self {
            path,
            base_name,
            survey,
        }
    }

    /// Path to the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File stem used to prefix every artifact written for this document.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The page survey.
    pub fn survey(&self) -> &DocumentSurvey {
        &self.survey
    }

    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.survey.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey(flags: &[(bool, u32)]) -> DocumentSurvey {
        DocumentSurvey::new(
            flags
                .iter()
                .enumerate()
                .map(|(i, &(has_text, image_count))| PageSurvey {
                    number: i as u32 + 1,
                    has_text,
                    image_count,
                })
                .collect(),
        )
    }

    #[test]
    fn test_survey_counts() {
        let s = survey(&[(true, 0), (false, 2), (true, 1)]);
        assert_eq!(s.page_count(), 3);
        assert_eq!(s.text_page_count(), 2);
        assert_eq!(s.image_count(), 3);
    }

    #[test]
    fn test_document_base_name() {
        let doc = PdfDocument::new("/data/in/Laborbefund.pdf", survey(&[(true, 0)]));
        assert_eq!(doc.base_name(), "Laborbefund");
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_document_base_name_no_stem() {
        let doc = PdfDocument::new("", DocumentSurvey::default());
        assert_eq!(doc.base_name(), "document");
    }
}
