//! Error types for pdfharvest.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfharvest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not recognized as a PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The document could not be opened or surveyed at all.
    #[error("Unreadable document: {0}")]
    Unreadable(String),

    /// The document is encrypted; decryption is not supported.
    #[error("Document is encrypted")]
    Encrypted,

    /// The requested extraction method is not one of the supported names.
    #[error("Unsupported method '{0}'. Choose from: auto, txt, csv, json, excel, unstructured")]
    UnsupportedMethod(String),

    /// Every applicable strategy yielded empty content.
    #[error("No content found in document")]
    NoContent,

    /// Error reading PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// OCR capability failure (missing tools, subprocess error).
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Table detection capability failure.
    #[error("Table detection error: {0}")]
    TableDetect(String),

    /// Error extracting embedded images.
    #[error("Image extraction error: {0}")]
    ImageExtract(String),

    /// Structure partitioning capability failure.
    #[error("Structure parsing error: {0}")]
    StructureParse(String),

    /// An output artifact could not be written.
    #[error("Failed to write artifact {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

impl Error {
    /// Whether this error should be captured as a per-file outcome rather
    /// than aborting a batch run.
    pub fn is_per_file(&self) -> bool {
        !matches!(self, Error::UnsupportedMethod(_))
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
