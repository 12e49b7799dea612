//! Document classification.
//!
//! Decides whether a document is text-based, scanned, or mixed from the
//! per-page text-layer flags in its survey. Pure and total: documents the
//! engine could not survey at all are classified unreadable by the pipeline
//! instead of raising here.

use crate::model::DocumentSurvey;
use serde::{Deserialize, Serialize};

/// Document type as seen by the method resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Every page has an extractable text layer
    TextBased,
    /// No page has an extractable text layer
    Scanned,
    /// Some pages have a text layer, some do not
    Mixed,
    /// The document could not be opened or has no pages
    Unreadable,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::TextBased => write!(f, "text-based"),
            Classification::Scanned => write!(f, "scanned"),
            Classification::Mixed => write!(f, "mixed"),
            Classification::Unreadable => write!(f, "unreadable"),
        }
    }
}

/// Classify a surveyed document.
pub fn classify(survey: &DocumentSurvey) -> Classification {
    if survey.pages.is_empty() {
        return Classification::Unreadable;
    }

    let text_pages = survey.text_page_count();
    if text_pages == 0 {
        Classification::Scanned
    } else if text_pages == survey.page_count() {
        Classification::TextBased
    } else {
        Classification::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageSurvey;

    fn survey(flags: &[bool]) -> DocumentSurvey {
        DocumentSurvey::new(
            flags
                .iter()
                .enumerate()
                .map(|(i, &has_text)| PageSurvey {
                    number: i as u32 + 1,
                    has_text,
                    image_count: 0,
                })
                .collect(),
        )
    }

    #[test]
    fn test_all_text_pages() {
        assert_eq!(classify(&survey(&[true, true, true])), Classification::TextBased);
    }

    #[test]
    fn test_no_text_pages() {
        assert_eq!(classify(&survey(&[false, false])), Classification::Scanned);
    }

    #[test]
    fn test_mixed_pages() {
        assert_eq!(classify(&survey(&[true, false, true])), Classification::Mixed);
    }

    #[test]
    fn test_empty_document_is_unreadable() {
        assert_eq!(classify(&survey(&[])), Classification::Unreadable);
    }

    #[test]
    fn test_display() {
        assert_eq!(Classification::Scanned.to_string(), "scanned");
        assert_eq!(Classification::TextBased.to_string(), "text-based");
    }
}
