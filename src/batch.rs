//! Concurrent batch driver.
//!
//! Fan-out/fan-in over independent files: one task per input, no shared
//! mutable state between tasks, outcomes streamed back over a channel and
//! merged into the order-independent [`SummaryReport`].

use crate::engine::DocumentEngine;
use crate::options::ExtractOptions;
use crate::pipeline::Pipeline;
use crate::report::{FileOutcome, SummaryReport};
use std::path::PathBuf;

/// Drives the per-file pipeline across many inputs.
pub struct BatchDriver<E: DocumentEngine> {
    pipeline: Pipeline<E>,
}

impl<E: DocumentEngine> BatchDriver<E> {
    pub fn new(engine: E, options: ExtractOptions) -> Self {
        Self {
            pipeline: Pipeline::new(engine, options),
        }
    }

    /// Process all files and return the aggregated report.
    pub fn run(&self, files: &[PathBuf]) -> SummaryReport {
        self.run_with_progress(files, |_| {})
    }

    pub fn engine(&self) -> &E {
        self.pipeline.engine()
    }

    /// Process all files, invoking `on_complete` as each file finishes.
    /// Completion order is unspecified; the report does not depend on it.
    pub fn run_with_progress<F>(&self, files: &[PathBuf], on_complete: F) -> SummaryReport
    where
        F: Fn(&FileOutcome) + Send + Sync,
    {
        let mut report = SummaryReport::new();

        if self.pipeline.options().parallel && files.len() > 1 {
            let (tx, rx) = crossbeam_channel::unbounded();

            rayon::scope(|scope| {
                for path in files {
                    let tx = tx.clone();
                    let on_complete = &on_complete;
                    scope.spawn(move |_| {
                        let outcome = self.pipeline.run_file(path);
                        on_complete(&outcome);
                        let _ = tx.send(outcome);
                    });
                }
            });
            drop(tx);

            for outcome in rx {
                report.record(outcome);
            }
        } else {
            for path in files {
                let outcome = self.pipeline.run_file(path);
                on_complete(&outcome);
                report.record(outcome);
            }
        }

        log::info!(
            "batch complete: {} files, {} succeeded, {} failed, {} empty",
            report.file_count(),
            report.success_count(),
            report.failure_count(),
            report.no_content_count()
        );

        report.finalize()
    }
}
