//! Bundled engine backed by local libraries and tools.
//!
//! Text layer and page structure come from `lopdf`; images are re-encoded
//! with the `image` crate; OCR shells out to poppler + tesseract; table
//! detection and structure parsing run over the extracted text layer. The
//! engine holds configuration only, so one instance serves all parallel
//! batch tasks.

use super::{images, ocr, partition, tables, DocumentEngine, TableFlavor};
use crate::detect;
use crate::engine::{OcrConfig, TableDetectorConfig};
use crate::error::{Error, Result};
use crate::model::{
    DetectionMode, DocumentSurvey, ImageBlob, PageSurvey, PageText, StructuredBlock, Table,
};
use lopdf::Document;
use std::collections::HashSet;
use std::path::Path;

/// Default document-analysis engine.
#[derive(Debug, Clone, Default)]
pub struct LocalEngine {
    ocr: OcrConfig,
    tables: TableDetectorConfig,
}

impl LocalEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set OCR language and resolution.
    pub fn with_ocr(mut self, config: OcrConfig) -> Self {
        self.ocr = config;
        self
    }

    /// Set table detector tunables.
    pub fn with_table_config(mut self, config: TableDetectorConfig) -> Self {
        self.tables = config;
        self
    }

    fn load(&self, path: &Path) -> Result<Document> {
        detect::sniff_header(path)?;
        let doc = Document::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            other => Error::from(other),
        })?;
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(doc)
    }

    fn page_texts(&self, doc: &Document) -> Vec<PageText> {
        doc.get_pages()
            .keys()
            .map(|&page_num| {
                let text = doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                    log::debug!("page {page_num}: no extractable text ({e})");
                    String::new()
                });
                PageText::new(page_num, text)
            })
            .collect()
    }

    /// Pages that draw enough path segments to qualify as ruled.
    fn ruled_pages(&self, doc: &Document) -> HashSet<u32> {
        let mut ruled = HashSet::new();
        for (page_num, page_id) in doc.get_pages() {
            let Ok(content) = doc.get_page_content(page_id) else {
                continue;
            };
            let Ok(decoded) = lopdf::content::Content::decode(&content) else {
                continue;
            };

            let mut rects = 0usize;
            let mut linetos = 0usize;
            for op in &decoded.operations {
                match op.operator.as_str() {
                    "re" => rects += 1,
                    "l" => linetos += 1,
                    _ => {}
                }
            }
            // A drawn table grid needs several rectangles or line segments;
            // a lone border rect does not qualify.
            if rects >= 3 || linetos >= 6 {
                ruled.insert(page_num);
            }
        }
        ruled
    }
}

impl DocumentEngine for LocalEngine {
    fn survey(&self, path: &Path) -> Result<DocumentSurvey> {
        let doc = self.load(path)?;

        let pages = doc
            .get_pages()
            .iter()
            .map(|(&page_num, &page_id)| {
                let has_text = doc
                    .extract_text(&[page_num])
                    .map(|t| !t.trim().is_empty())
                    .unwrap_or(false);
                PageSurvey {
                    number: page_num,
                    has_text,
                    image_count: images::page_image_count(&doc, page_id),
                }
            })
            .collect();

        Ok(DocumentSurvey::new(pages))
    }

    fn text_layer(&self, path: &Path) -> Result<Vec<PageText>> {
        let doc = self.load(path)?;
        Ok(self.page_texts(&doc))
    }

    fn detect_tables(&self, path: &Path, flavor: TableFlavor) -> Result<Vec<Table>> {
        let doc = self.load(path)?;
        let pages = self.page_texts(&doc);

        match flavor {
            TableFlavor::Stream => Ok(tables::detect(&pages, DetectionMode::Stream, &self.tables)),
            TableFlavor::Lattice => {
                let ruled = self.ruled_pages(&doc);
                let detected = tables::detect(&pages, DetectionMode::Lattice, &self.tables)
                    .into_iter()
                    .filter(|t| ruled.contains(&t.page))
                    .collect();
                Ok(detected)
            }
        }
    }

    fn extract_images(&self, path: &Path) -> Result<Vec<ImageBlob>> {
        let doc = self.load(path)?;
        images::collect_images(&doc)
    }

    fn ocr(&self, path: &Path) -> Result<Vec<PageText>> {
        ocr::run_ocr(path, &self.ocr)
    }

    fn partition(&self, path: &Path) -> Result<Vec<StructuredBlock>> {
        let doc = self.load(path)?;
        Ok(partition::partition_pages(&self.page_texts(&doc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::write(&path, b"just some text, no PDF header").unwrap();

        let engine = LocalEngine::new();
        assert!(matches!(
            engine.survey(&path),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_survey_rejects_missing_file() {
        let engine = LocalEngine::new();
        let err = engine.survey(Path::new("/nonexistent/input.pdf")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_survey_rejects_truncated_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        // Valid header, garbage body.
        std::fs::write(&path, b"%PDF-1.4\nnot actually a pdf body").unwrap();

        let engine = LocalEngine::new();
        assert!(engine.survey(&path).is_err());
    }
}
