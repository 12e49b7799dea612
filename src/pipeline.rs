//! The single-file extraction pipeline.
//!
//! classify → resolve → extract (in fallback order) → write. Every failure
//! is captured in the file's outcome; nothing here aborts sibling files in
//! a batch.

use crate::classify::{classify, Classification};
use crate::engine::DocumentEngine;
use crate::method::resolve;
use crate::model::{Content, ExtractionResult, PdfDocument};
use crate::options::ExtractOptions;
use crate::output;
use crate::report::{FileOutcome, FileStatus};
use crate::strategy::{strategy_for, ExtractStrategy, ImageStrategy, StrategyKind};
use std::path::Path;

/// Runs the per-file pipeline against one engine.
pub struct Pipeline<E: DocumentEngine> {
    engine: E,
    options: ExtractOptions,
}

impl<E: DocumentEngine> Pipeline<E> {
    pub fn new(engine: E, options: ExtractOptions) -> Self {
        Self { engine, options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Process one file. Never panics and never returns `Err`: all failures
    /// become the outcome's status.
    pub fn run_file(&self, path: &Path) -> FileOutcome {
        let survey = match self.engine.survey(path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("{}: survey failed: {e}", path.display());
                return FileOutcome::failed(path, e.to_string());
            }
        };

        let doc = PdfDocument::new(path, survey);
        let classification = classify(doc.survey());
        log::info!(
            "{}: {} pages, classified {classification}",
            path.display(),
            doc.page_count()
        );

        if classification == Classification::Unreadable {
            return FileOutcome::failed(path, "document has no pages");
        }

        let plan = resolve(self.options.method, classification);
        log::debug!("{}: strategy plan {plan:?}", path.display());

        let (results, winning, strategy_error) = self.try_strategies(&doc, &plan);

        let mut outcome = FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::NoContent,
            classification,
            winning_strategy: winning,
            pages: doc.page_count(),
            tables: 0,
            images: 0,
            artifacts: Vec::new(),
        };

        if results.is_empty() {
            if let Some(reason) = strategy_error {
                outcome.status = FileStatus::Failed(reason);
            } else {
                log::info!("{}: no content found", path.display());
            }
        } else {
            outcome.tables = results
                .iter()
                .filter(|r| matches!(r.content, Content::Table(_)))
                .count() as u32;

            match output::write_results(
                doc.base_name(),
                &results,
                self.options.method,
                &self.options.output_dir,
            ) {
                Ok(artifacts) => {
                    outcome.artifacts = artifacts;
                    outcome.status = FileStatus::Success;
                }
                Err(e) => {
                    log::warn!("{}: write failed: {e}", path.display());
                    outcome.status = FileStatus::Failed(e.to_string());
                    return outcome;
                }
            }
        }

        if self.options.images {
            self.save_images(&doc, &mut outcome);
        }

        outcome
    }

    /// Walk the resolved plan until a strategy yields content. A strategy
    /// error is remembered but does not stop the fallback chain.
    fn try_strategies(
        &self,
        doc: &PdfDocument,
        plan: &[StrategyKind],
    ) -> (Vec<ExtractionResult>, Option<StrategyKind>, Option<String>) {
        let mut first_error = None;

        for &kind in plan {
            let strategy = strategy_for(kind);
            match strategy.extract(doc, &self.engine) {
                Ok(results) if !results.is_empty() => {
                    log::info!(
                        "{}: strategy {kind} produced {} results",
                        doc.path().display(),
                        results.len()
                    );
                    return (results, Some(kind), None);
                }
                Ok(_) => {
                    log::debug!("{}: strategy {kind} found nothing", doc.path().display());
                }
                Err(e) => {
                    log::warn!("{}: strategy {kind} failed: {e}", doc.path().display());
                    first_error.get_or_insert_with(|| e.to_string());
                }
            }
        }

        (Vec::new(), None, first_error)
    }

    /// Extract and write embedded images regardless of the content method.
    /// Image failures are warnings; they never fail the file.
    fn save_images(&self, doc: &PdfDocument, outcome: &mut FileOutcome) {
        let results = match ImageStrategy.extract(doc, &self.engine) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{}: image extraction failed: {e}", doc.path().display());
                return;
            }
        };
        if results.is_empty() {
            return;
        }

        match output::write_results(
            doc.base_name(),
            &results,
            self.options.method,
            &self.options.output_dir,
        ) {
            Ok(artifacts) => {
                outcome.images = artifacts.len() as u32;
                outcome.artifacts.extend(artifacts);
            }
            Err(e) => {
                log::warn!("{}: image write failed: {e}", doc.path().display());
            }
        }
    }
}
