//! OCR capability: rasterize pages with `pdftoppm`, recognize with
//! `tesseract`.
//!
//! Both tools are invoked as subprocesses through a scratch directory, so
//! the crate carries no native OCR bindings. Callers can probe availability
//! with [`ocr_available`] before scheduling OCR work.

use crate::error::{Error, Result};
use crate::model::PageText;
use std::path::Path;
use std::process::Command;

/// OCR invocation settings.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language code
    pub lang: String,
    /// Rasterization resolution
    pub dpi: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            dpi: 300,
        }
    }
}

/// Check whether `pdftoppm` and `tesseract` are on the PATH.
pub fn ocr_available() -> bool {
    let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
    let tesseract = Command::new("tesseract").arg("--version").output().is_ok();

    if !pdftoppm {
        log::debug!("pdftoppm not found - install poppler-utils for OCR support");
    }
    if !tesseract {
        log::debug!("tesseract not found - install tesseract-ocr for OCR support");
    }

    pdftoppm && tesseract
}

/// Rasterize every page of `path` and run recognition on each.
pub fn run_ocr(path: &Path, config: &OcrConfig) -> Result<Vec<PageText>> {
    if !ocr_available() {
        return Err(Error::Ocr(
            "OCR requires pdftoppm (poppler-utils) and tesseract-ocr to be installed".to_string(),
        ));
    }

    let scratch = tempfile::tempdir()?;
    let prefix = scratch.path().join("page");

    log::info!(
        "starting OCR for {:?} (dpi={}, lang={})",
        path.file_name().unwrap_or_default(),
        config.dpi,
        config.lang
    );

    let rasterize = Command::new("pdftoppm")
        .arg("-png")
        .arg("-r")
        .arg(config.dpi.to_string())
        .arg(path)
        .arg(&prefix)
        .output()
        .map_err(|e| Error::Ocr(format!("failed to run pdftoppm: {e}")))?;

    if !rasterize.status.success() {
        let stderr = String::from_utf8_lossy(&rasterize.stderr);
        return Err(Error::Ocr(format!("pdftoppm failed: {stderr}")));
    }

    // pdftoppm names pages with zero-padded suffixes; lexical order is page
    // order.
    let mut rendered: Vec<_> = std::fs::read_dir(scratch.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
        .collect();
    rendered.sort();

    if rendered.is_empty() {
        return Err(Error::Ocr("pdftoppm produced no images".to_string()));
    }

    let mut pages = Vec::with_capacity(rendered.len());
    for (i, image_path) in rendered.iter().enumerate() {
        let page_num = i as u32 + 1;

        let recognized = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&config.lang)
            .arg("--psm")
            .arg("1")
            .output()
            .map_err(|e| Error::Ocr(format!("failed to run tesseract on page {page_num}: {e}")))?;

        if !recognized.status.success() {
            let stderr = String::from_utf8_lossy(&recognized.stderr);
            log::warn!("tesseract warning on page {page_num}: {stderr}");
        }

        let text = String::from_utf8_lossy(&recognized.stdout).to_string();
        pages.push(PageText::new(page_num, text));

        if page_num % 10 == 0 {
            log::info!("OCR progress: {page_num}/{} pages", rendered.len());
        }
    }

    log::info!(
        "OCR complete for {:?}: {} pages",
        path.file_name().unwrap_or_default(),
        pages.len()
    );

    Ok(pages)
}
