//! # pdfharvest
//!
//! PDF content extraction library for Rust: text, tables, and images from
//! digital and scanned documents.
//!
//! The pipeline classifies each document (text-based, scanned, mixed),
//! resolves the requested method into an ordered list of extraction
//! strategies, runs them until one yields content, and writes artifacts
//! into an output folder. Batches of files are processed concurrently with
//! per-file failure isolation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfharvest::{extract_file, ExtractOptions, Method};
//!
//! fn main() -> pdfharvest::Result<()> {
//!     let options = ExtractOptions::new()
//!         .with_method(Method::Auto)
//!         .with_output_dir("extracted_output");
//!
//!     let outcome = extract_file("document.pdf", options)?;
//!     println!("{}", outcome.summary_block());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batch processing
//!
//! ```no_run
//! use pdfharvest::{run_batch, ExtractOptions};
//! use std::path::PathBuf;
//!
//! let files = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let report = run_batch(&files, ExtractOptions::default());
//! println!("{} of {} files succeeded", report.success_count(), report.file_count());
//! ```
//!
//! ## Features
//!
//! - **Auto method selection**: tables first, then text, OCR for scanned
//!   documents, generic structure parsing as a last resort
//! - **Multiple artifact formats**: TXT, per-table CSV/Excel, combined
//!   JSON, PNG images
//! - **Pluggable capabilities**: everything document-specific sits behind
//!   the [`engine::DocumentEngine`] trait
//! - **Parallel batches**: Rayon fan-out with a commutative summary merge

pub mod batch;
pub mod classify;
pub mod detect;
pub mod engine;
pub mod error;
pub mod method;
pub mod model;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod strategy;

// Re-export commonly used types
pub use batch::BatchDriver;
pub use classify::{classify, Classification};
pub use engine::{DocumentEngine, LocalEngine, OcrConfig, TableFlavor};
pub use error::{Error, Result};
pub use method::{resolve, Method};
pub use model::{
    Content, DetectionMode, DocumentSurvey, ExtractionResult, ImageBlob, PageSurvey, PageText,
    PdfDocument, StructuredBlock, Table, TextBlock, TextSource,
};
pub use options::ExtractOptions;
pub use output::{ArtifactFormat, OutputArtifact};
pub use pipeline::Pipeline;
pub use report::{FileOutcome, FileStatus, SummaryReport};
pub use strategy::{ExtractStrategy, StrategyKind};

use std::path::{Path, PathBuf};

/// Extract one file with the bundled [`LocalEngine`].
///
/// Fails only on configuration errors; per-document problems are captured
/// in the returned outcome's status.
pub fn extract_file<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<FileOutcome> {
    let pipeline = Pipeline::new(LocalEngine::new(), options);
    Ok(pipeline.run_file(path.as_ref()))
}

/// Process a batch of files with the bundled [`LocalEngine`].
pub fn run_batch(files: &[PathBuf], options: ExtractOptions) -> SummaryReport {
    BatchDriver::new(LocalEngine::new(), options).run(files)
}

/// Parse a method name, failing fast on unsupported names.
pub fn parse_method(name: &str) -> Result<Method> {
    name.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_fail_fast() {
        assert!(parse_method("auto").is_ok());
        assert!(matches!(
            parse_method("yaml"),
            Err(Error::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn test_extract_file_missing_input_is_captured() {
        let outcome = extract_file("/does/not/exist.pdf", ExtractOptions::default()).unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.classification, Classification::Unreadable);
    }

    #[test]
    fn test_run_batch_empty_input() {
        let report = run_batch(&[], ExtractOptions::default());
        assert_eq!(report.file_count(), 0);
        assert!(report.finished.is_some());
    }
}
