//! Output writers.
//!
//! Serializes extraction results into artifacts under the output folder,
//! one file per content unit. Every artifact path embeds the source file's
//! base name, which keeps concurrent batch tasks collision-free in a
//! shared folder. Writes are all-or-nothing: content is staged to a
//! temporary file in the target folder and renamed into place.

mod csv;
mod excel;
mod json;

use crate::error::{Error, Result};
use crate::method::Method;
use crate::model::{Content, ExtractionResult, Table, TextSource};
use serde::{Deserialize, Serialize};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// File format of a written artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Txt,
    Csv,
    Json,
    Xlsx,
    Png,
}

/// A written output artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputArtifact {
    /// Format of the file
    pub format: ArtifactFormat,

    /// Where it was written
    pub path: PathBuf,
}

/// Write extraction results for one document.
///
/// Creates `out_dir` if absent (idempotent). Table artifacts follow the
/// requested method: per-table CSV or Excel files, or one combined JSON
/// file; `auto` prefers Excel. Returns the artifacts written, in a
/// deterministic order.
pub fn write_results(
    base_name: &str,
    results: &[ExtractionResult],
    method: Method,
    out_dir: &Path,
) -> Result<Vec<OutputArtifact>> {
    std::fs::create_dir_all(out_dir)?;

    let mut artifacts = Vec::new();

    let tables: Vec<&Table> = results
        .iter()
        .filter_map(|r| match &r.content {
            Content::Table(t) => Some(t),
            _ => None,
        })
        .collect();
    if !tables.is_empty() {
        write_tables(base_name, &tables, method, out_dir, &mut artifacts)?;
    }

    let text_blocks: Vec<_> = results
        .iter()
        .filter_map(|r| match &r.content {
            Content::Text(t) => Some(t),
            _ => None,
        })
        .collect();
    if !text_blocks.is_empty() {
        let combined = text_blocks
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        // OCR output keeps a distinct name so a later text-layer run never
        // overwrites it silently.
        let from_ocr = text_blocks.iter().any(|t| t.source == TextSource::Ocr);
        let file_name = if from_ocr {
            format!("{base_name}_ocr.txt")
        } else {
            format!("{base_name}.txt")
        };
        let path = out_dir.join(file_name);
        write_atomic(&path, combined.as_bytes())?;
        artifacts.push(OutputArtifact {
            format: ArtifactFormat::Txt,
            path,
        });
    }

    let structured: Vec<_> = results
        .iter()
        .filter_map(|r| match &r.content {
            Content::Structured(s) => Some(s),
            _ => None,
        })
        .collect();
    if !structured.is_empty() {
        let body = structured
            .iter()
            .map(|b| format!("[{}] {}", b.category, b.text))
            .collect::<Vec<_>>()
            .join("\n\n");
        let path = out_dir.join(format!("{base_name}_structured.txt"));
        write_atomic(&path, body.as_bytes())?;
        artifacts.push(OutputArtifact {
            format: ArtifactFormat::Txt,
            path,
        });
    }

    for r in results {
        if let Content::Image(blob) = &r.content {
            let path = out_dir.join(format!(
                "{base_name}_page{}_img{}.png",
                blob.page, blob.index
            ));
            write_atomic(&path, &blob.data)?;
            artifacts.push(OutputArtifact {
                format: ArtifactFormat::Png,
                path,
            });
        }
    }

    Ok(artifacts)
}

fn write_tables(
    base_name: &str,
    tables: &[&Table],
    method: Method,
    out_dir: &Path,
    artifacts: &mut Vec<OutputArtifact>,
) -> Result<()> {
    match method {
        Method::Json => {
            let path = out_dir.join(format!("{base_name}_tables.json"));
            let bytes = json::tables_json(tables, &path)?;
            write_atomic(&path, &bytes)?;
            artifacts.push(OutputArtifact {
                format: ArtifactFormat::Json,
                path,
            });
        }
        Method::Csv => {
            for (i, table) in tables.iter().enumerate() {
                let path = out_dir.join(format!("{base_name}_table_{}.csv", i + 1));
                write_atomic(&path, &csv::csv_bytes(table))?;
                artifacts.push(OutputArtifact {
                    format: ArtifactFormat::Csv,
                    path,
                });
            }
        }
        // Tables found under `auto` are emitted as Excel files, the
        // highest-fidelity structured format.
        _ => {
            for (i, table) in tables.iter().enumerate() {
                let path = out_dir.join(format!("{base_name}_table_{}.xlsx", i + 1));
                let bytes = excel::xlsx_bytes(table, &path)?;
                write_atomic(&path, &bytes)?;
                artifacts.push(OutputArtifact {
                    format: ArtifactFormat::Xlsx,
                    path,
                });
            }
        }
    }
    Ok(())
}

/// Stage bytes to a temp file in the target folder, then rename into place.
/// Readers never observe a partially written artifact.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    staged.write_all(bytes).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    staged.persist(path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DetectionMode, ExtractionResult, ImageBlob, Table, TextSource};

    fn sample_table(page: u32) -> Table {
        Table::new(
            page,
            DetectionMode::Stream,
            vec![
                vec!["h1".to_string(), "h2".to_string()],
                vec!["a".to_string(), "b".to_string()],
            ],
        )
    }

    #[test]
    fn test_csv_method_writes_one_file_per_table() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![
            ExtractionResult::table(sample_table(1)),
            ExtractionResult::table(sample_table(2)),
        ];

        let artifacts = write_results("doc", &results, Method::Csv, dir.path()).unwrap();
        assert_eq!(artifacts.len(), 2);
        assert!(dir.path().join("doc_table_1.csv").exists());
        assert!(dir.path().join("doc_table_2.csv").exists());
    }

    #[test]
    fn test_json_method_writes_combined_file() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![
            ExtractionResult::table(sample_table(1)),
            ExtractionResult::table(sample_table(2)),
        ];

        let artifacts = write_results("doc", &results, Method::Json, dir.path()).unwrap();
        assert_eq!(artifacts.len(), 1);
        let bytes = std::fs::read(dir.path().join("doc_tables.json")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_text_artifact_name_tracks_ocr_source() {
        let dir = tempfile::tempdir().unwrap();

        let layer = vec![ExtractionResult::text(1, "hello", TextSource::Layer)];
        let artifacts = write_results("doc", &layer, Method::Txt, dir.path()).unwrap();
        assert!(artifacts[0].path.ends_with("doc.txt"));

        let ocr = vec![ExtractionResult::text(1, "hello", TextSource::Ocr)];
        let artifacts = write_results("scan", &ocr, Method::Auto, dir.path()).unwrap();
        assert!(artifacts[0].path.ends_with("scan_ocr.txt"));
    }

    #[test]
    fn test_image_artifact_naming() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![ExtractionResult::image(ImageBlob {
            page: 3,
            index: 2,
            width: 1,
            height: 1,
            data: vec![0x89, 0x50],
        })];

        let artifacts = write_results("doc", &results, Method::Auto, dir.path()).unwrap();
        assert!(artifacts[0].path.ends_with("doc_page3_img2.png"));
    }

    #[test]
    fn test_output_folder_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let results = vec![ExtractionResult::text(1, "x", TextSource::Layer)];

        write_results("doc", &results, Method::Txt, &nested).unwrap();
        assert!(nested.join("doc.txt").exists());
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![ExtractionResult::table(sample_table(1))];

        write_results("doc", &results, Method::Csv, dir.path()).unwrap();
        let first = std::fs::read(dir.path().join("doc_table_1.csv")).unwrap();
        write_results("doc", &results, Method::Csv, dir.path()).unwrap();
        let second = std::fs::read(dir.path().join("doc_table_1.csv")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_structured_blocks_format() {
        use crate::model::{BlockCategory, StructuredBlock};
        let dir = tempfile::tempdir().unwrap();
        let results = vec![
            ExtractionResult::structured(StructuredBlock {
                page: Some(1),
                category: BlockCategory::Title,
                text: "Heading".to_string(),
            }),
            ExtractionResult::structured(StructuredBlock {
                page: Some(1),
                category: BlockCategory::NarrativeText,
                text: "Body text.".to_string(),
            }),
        ];

        write_results("doc", &results, Method::Unstructured, dir.path()).unwrap();
        let body = std::fs::read_to_string(dir.path().join("doc_structured.txt")).unwrap();
        assert_eq!(body, "[Title] Heading\n\n[NarrativeText] Body text.");
    }
}
