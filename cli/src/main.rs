//! pdfharvest CLI - PDF content extraction tool

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfharvest::{
    BatchDriver, ExtractOptions, FileOutcome, FileStatus, LocalEngine, Method, OcrConfig,
    StrategyKind, SummaryReport,
};

#[derive(Parser)]
#[command(name = "pdfharvest")]
#[command(version)]
#[command(about = "Extract text, tables, and images from PDF files", long_about = None)]
struct Cli {
    /// Input PDF files
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Extraction method
    #[arg(short, long, value_enum, default_value = "auto")]
    method: MethodArg,

    /// Output folder
    #[arg(short, long, value_name = "DIR", default_value = "extracted_output")]
    output: PathBuf,

    /// Skip embedded image extraction
    #[arg(long)]
    no_images: bool,

    /// Process files one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// OCR language passed to tesseract
    #[arg(long, default_value = "eng")]
    lang: String,

    /// OCR rasterization resolution
    #[arg(long, default_value = "300")]
    dpi: u32,

    /// Write the batch report as JSON to this path
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    /// Pick the best output automatically
    Auto,
    /// Plain text
    Txt,
    /// Per-table CSV files
    Csv,
    /// Combined JSON of all tables
    Json,
    /// Per-table Excel files
    Excel,
    /// Generic structure parsing
    Unstructured,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Auto => Method::Auto,
            MethodArg::Txt => Method::Txt,
            MethodArg::Csv => Method::Csv,
            MethodArg::Json => Method::Json,
            MethodArg::Excel => Method::Excel,
            MethodArg::Unstructured => Method::Unstructured,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let options = ExtractOptions::new()
        .with_method(cli.method.into())
        .with_output_dir(&cli.output)
        .with_images(!cli.no_images);
    let options = if cli.sequential {
        options.sequential()
    } else {
        options
    };

    let engine = LocalEngine::new().with_ocr(OcrConfig {
        lang: cli.lang.clone(),
        dpi: cli.dpi,
    });
    let driver = BatchDriver::new(engine, options);

    let pb = ProgressBar::new(cli.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let report = driver.run_with_progress(&cli.files, |outcome| {
        pb.set_message(
            outcome
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        pb.inc(1);
    });
    pb.finish_and_clear();

    for outcome in report.outcomes.values() {
        print_outcome(outcome);
    }
    print_totals(&report);

    if let Some(path) = cli.report {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    eprintln!("{}: cannot write report: {}", "Error".red().bold(), e);
                }
            }
            Err(e) => eprintln!("{}: cannot encode report: {}", "Error".red().bold(), e),
        }
    }

    // Partial failures are reported but do not fail the run; a batch where
    // nothing succeeded does.
    if report.file_count() > 0 && report.failure_count() == report.file_count() {
        std::process::exit(1);
    }
}

fn print_outcome(outcome: &FileOutcome) {
    println!();
    println!("{}", outcome.summary_block());

    match &outcome.status {
        FileStatus::Success => {
            println!("{} {}", "Status:".bold(), describe_success(outcome).green());
            for artifact in &outcome.artifacts {
                println!("  {} {}", "->".dimmed(), artifact.path.display());
            }
        }
        FileStatus::NoContent => {
            println!("{} {}", "Status:".bold(), "no content found".yellow());
        }
        FileStatus::Failed(reason) => {
            println!("{} {}", "Status:".bold(), format!("failed: {reason}").red());
        }
    }
}

fn describe_success(outcome: &FileOutcome) -> String {
    match outcome.winning_strategy {
        Some(StrategyKind::Tables) => {
            format!("Auto-detected: Tables -> {} table file(s)", outcome.tables)
        }
        Some(StrategyKind::Text) => "Text -> TXT saved".to_string(),
        Some(StrategyKind::Ocr) => "OCR text saved".to_string(),
        Some(StrategyKind::Unstructured) => "Structured parsing saved".to_string(),
        _ => "content saved".to_string(),
    }
}

fn print_totals(report: &SummaryReport) {
    println!();
    println!(
        "{} {} file(s): {} succeeded, {} failed, {} empty | pages {}, tables {}, images {}",
        "Batch:".cyan().bold(),
        report.file_count(),
        report.success_count(),
        report.failure_count(),
        report.no_content_count(),
        report.pages,
        report.tables,
        report.images
    );
}
