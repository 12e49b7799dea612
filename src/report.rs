//! Per-file outcomes and the batch summary report.

use crate::classify::Classification;
use crate::output::OutputArtifact;
use crate::strategy::StrategyKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Terminal state of one file's pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "lowercase")]
pub enum FileStatus {
    /// At least one content artifact was written
    Success,
    /// Every resolved strategy yielded empty content
    NoContent,
    /// The pipeline failed; the reason is recorded
    Failed(String),
}

/// Result of processing a single input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Input file
    pub path: PathBuf,

    /// Terminal status
    pub status: FileStatus,

    /// Document classification, `Unreadable` when the survey failed
    pub classification: Classification,

    /// Strategy whose output was written, if any
    pub winning_strategy: Option<StrategyKind>,

    /// Pages in the document
    pub pages: u32,

    /// Tables extracted
    pub tables: u32,

    /// Images saved
    pub images: u32,

    /// Artifacts written for this file
    pub artifacts: Vec<OutputArtifact>,
}

impl FileOutcome {
    /// An outcome for a file that failed before any extraction happened.
    pub fn failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Failed(reason.into()),
            classification: Classification::Unreadable,
            winning_strategy: None,
            pages: 0,
            tables: 0,
            images: 0,
            artifacts: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FileStatus::Success
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }

    /// The console summary block for this file.
    pub fn summary_block(&self) -> String {
        format!(
            "=== Extraction Summary ===\n\
             PDF file: {}\n\
             Pages processed: {}\n\
             Tables found: {}\n\
             Images saved: {}\n\
             ==========================",
            self.path.display(),
            self.pages,
            self.tables,
            self.images
        )
    }
}

impl std::fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary_block())
    }
}

/// Aggregate report over one batch run.
///
/// Counters are sums over per-file outcomes, so recording is commutative
/// and the report is independent of task completion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Batch start time
    pub started: DateTime<Utc>,

    /// Batch finish time, set by [`SummaryReport::finalize`]
    pub finished: Option<DateTime<Utc>>,

    /// Outcome per input file
    pub outcomes: BTreeMap<PathBuf, FileOutcome>,

    /// Total pages processed
    pub pages: u32,

    /// Total tables found
    pub tables: u32,

    /// Total images saved
    pub images: u32,
}

impl SummaryReport {
    /// Start an empty report.
    pub fn new() -> Self {
        Self {
            started: Utc::now(),
            finished: None,
            outcomes: BTreeMap::new(),
            pages: 0,
            tables: 0,
            images: 0,
        }
    }

    /// Record one completed file. Order-independent.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.pages += outcome.pages;
        self.tables += outcome.tables;
        self.images += outcome.images;
        self.outcomes.insert(outcome.path.clone(), outcome);
    }

    /// Stamp the finish time.
    pub fn finalize(mut self) -> Self {
        self.finished = Some(Utc::now());
        self
    }

    /// Look up one file's outcome.
    pub fn outcome(&self, path: &Path) -> Option<&FileOutcome> {
        self.outcomes.get(path)
    }

    pub fn file_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_failure()).count()
    }

    pub fn no_content_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|o| o.status == FileStatus::NoContent)
            .count()
    }
}

impl Default for SummaryReport {
    fn default() -> Self {
        Self::new()
    }
}
