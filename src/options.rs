//! Extraction options.

use crate::method::Method;
use std::path::PathBuf;

/// Options for a single-file or batch extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Requested extraction method
    pub method: Method,

    /// Folder artifacts are written to
    pub output_dir: PathBuf,

    /// Whether embedded images are extracted alongside the content method
    pub images: bool,

    /// Whether batch runs process files in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extraction method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the output folder.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Enable or disable embedded image extraction.
    pub fn with_images(mut self, images: bool) -> Self {
        self.images = images;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            method: Method::Auto,
            output_dir: PathBuf::from("extracted_output"),
            images: true,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExtractOptions::default();
        assert_eq!(options.method, Method::Auto);
        assert_eq!(options.output_dir, PathBuf::from("extracted_output"));
        assert!(options.images);
        assert!(options.parallel);
    }

    #[test]
    fn test_builder() {
        let options = ExtractOptions::new()
            .with_method(Method::Csv)
            .with_output_dir("/tmp/out")
            .with_images(false)
            .sequential();

        assert_eq!(options.method, Method::Csv);
        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert!(!options.images);
        assert!(!options.parallel);
    }
}
