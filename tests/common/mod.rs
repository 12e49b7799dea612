//! Shared test support: an in-memory engine with scripted documents and
//! invocation counters.
#![allow(dead_code)]

use pdfharvest::{
    DetectionMode, DocumentEngine, DocumentSurvey, Error, ImageBlob, PageSurvey, PageText, Result,
    StructuredBlock, Table, TableFlavor,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted content for one document.
#[derive(Default, Clone)]
pub struct MockDoc {
    pub survey: DocumentSurvey,
    pub text: Vec<PageText>,
    pub tables: Vec<Table>,
    pub images: Vec<ImageBlob>,
    pub ocr_text: Vec<PageText>,
    pub blocks: Vec<StructuredBlock>,
}

impl MockDoc {
    /// A text-based document, one entry per page; empty strings become
    /// pages without a text layer.
    pub fn with_pages(pages: &[&str]) -> Self {
        let survey = DocumentSurvey::new(
            pages
                .iter()
                .enumerate()
                .map(|(i, text)| PageSurvey {
                    number: i as u32 + 1,
                    has_text: !text.trim().is_empty(),
                    image_count: 0,
                })
                .collect(),
        );
        let text = pages
            .iter()
            .enumerate()
            .map(|(i, t)| PageText::new(i as u32 + 1, *t))
            .collect();
        Self {
            survey,
            text,
            ..Default::default()
        }
    }

    pub fn with_table(mut self, page: u32, rows: &[&[&str]]) -> Self {
        self.tables.push(Table::new(
            page,
            DetectionMode::Stream,
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        ));
        self
    }

    pub fn with_image(mut self, page: u32, index: u32) -> Self {
        if let Some(p) = self.survey.pages.get_mut(page as usize - 1) {
            p.image_count += 1;
        }
        self.images.push(ImageBlob {
            page,
            index,
            width: 2,
            height: 2,
            data: vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        });
        self
    }

    pub fn with_ocr_text(mut self, pages: &[&str]) -> Self {
        self.ocr_text = pages
            .iter()
            .enumerate()
            .map(|(i, t)| PageText::new(i as u32 + 1, *t))
            .collect();
        self
    }
}

/// Engine serving scripted documents from memory. Unregistered paths fail
/// the survey like a corrupt file would.
#[derive(Default)]
pub struct MockEngine {
    docs: HashMap<PathBuf, MockDoc>,
    ocr_calls: AtomicUsize,
    table_calls: AtomicUsize,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, path: &str, doc: MockDoc) -> Self {
        self.docs.insert(PathBuf::from(path), doc);
        self
    }

    pub fn ocr_invocations(&self) -> usize {
        self.ocr_calls.load(Ordering::SeqCst)
    }

    pub fn table_invocations(&self) -> usize {
        self.table_calls.load(Ordering::SeqCst)
    }

    fn doc(&self, path: &Path) -> Result<&MockDoc> {
        self.docs
            .get(path)
            .ok_or_else(|| Error::Unreadable(format!("cannot open {}", path.display())))
    }
}

impl DocumentEngine for MockEngine {
    fn survey(&self, path: &Path) -> Result<DocumentSurvey> {
        Ok(self.doc(path)?.survey.clone())
    }

    fn text_layer(&self, path: &Path) -> Result<Vec<PageText>> {
        Ok(self.doc(path)?.text.clone())
    }

    fn detect_tables(&self, path: &Path, flavor: TableFlavor) -> Result<Vec<Table>> {
        self.table_calls.fetch_add(1, Ordering::SeqCst);
        let doc = self.doc(path)?;
        // Scripted tables answer the stream flavor; lattice finds nothing,
        // matching a digital document without drawn rulings.
        Ok(match flavor {
            TableFlavor::Stream => doc.tables.clone(),
            TableFlavor::Lattice => Vec::new(),
        })
    }

    fn extract_images(&self, path: &Path) -> Result<Vec<ImageBlob>> {
        Ok(self.doc(path)?.images.clone())
    }

    fn ocr(&self, path: &Path) -> Result<Vec<PageText>> {
        self.ocr_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.doc(path)?.ocr_text.clone())
    }

    fn partition(&self, path: &Path) -> Result<Vec<StructuredBlock>> {
        Ok(self.doc(path)?.blocks.clone())
    }
}
