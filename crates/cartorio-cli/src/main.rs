//! Command-line driver for the cartorio pipelines.
//!
//! Plays the external-collaborator role the library expects: loads the
//! tabular index from a JSON file, supplies the base and processing
//! directories, prints pipeline events to stderr, and writes the updated
//! index and the run statistics back out.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cartorio::{EventSink, IndexRecord, PipelineConfig, RunStats, Severity};

/// Default processing-directory name inside a project directory.
const PROCESSING_DIR_NAME: &str = "processos";

#[derive(Parser)]
#[command(name = "cartorio", version, about = "Normalize property-registration indexes and extract PDF page ranges")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress info and warning events (errors still print).
    #[arg(long, global = true)]
    quiet: bool,

    /// Pipeline configuration file (TOML).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite output paths and shared-document flags in an index.
    Normalize {
        /// Input index (JSON array of records).
        #[arg(long, value_name = "FILE")]
        index: PathBuf,

        /// Where to write the updated index (defaults to overwriting the input).
        #[arg(long, value_name = "FILE")]
        output_index: Option<PathBuf>,

        /// Base directory recorded in the composed output paths.
        #[arg(long, value_name = "DIR")]
        base_dir: String,
    },

    /// Extract one PDF per record from the processing directory.
    Extract {
        /// Normalized index (JSON array of records).
        #[arg(long, value_name = "FILE")]
        index: PathBuf,

        /// Directory holding the {origin}_{volume}.pdf source files.
        #[arg(long, value_name = "DIR", conflicts_with = "project")]
        source_dir: Option<PathBuf>,

        /// Project directory; sources are read from its "processos" subdirectory.
        #[arg(long, value_name = "DIR")]
        project: Option<PathBuf>,
    },

    /// Normalize then extract in one run.
    Run {
        #[arg(long, value_name = "FILE")]
        index: PathBuf,

        #[arg(long, value_name = "FILE")]
        output_index: Option<PathBuf>,

        #[arg(long, value_name = "DIR")]
        base_dir: String,

        #[arg(long, value_name = "DIR", conflicts_with = "project")]
        source_dir: Option<PathBuf>,

        #[arg(long, value_name = "DIR")]
        project: Option<PathBuf>,
    },
}

/// Prints pipeline events to stderr with a severity prefix.
struct StderrSink {
    quiet: bool,
}

impl EventSink for StderrSink {
    fn emit(&self, message: &str, severity: Severity) {
        if self.quiet && severity != Severity::Error {
            return;
        }
        eprintln!("[{severity}] {message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    let sink: Arc<StderrSink> = Arc::new(StderrSink { quiet: cli.quiet });

    match cli.command {
        Command::Normalize {
            index,
            output_index,
            base_dir,
        } => {
            let records = load_index(&index)?;
            let outcome = cartorio::normalize_index(&records, &base_dir, sink.as_ref())?;
            let output = output_index.unwrap_or(index);
            save_index(&output, &outcome.records)?;
            print_stats(&outcome.stats)?;
        }
        Command::Extract {
            index,
            source_dir,
            project,
        } => {
            let records = load_index(&index)?;
            let source_dir = resolve_source_dir(source_dir, project)?;
            let stats = cartorio::extract_documents(&records, &source_dir, sink, &config).await?;
            print_stats(&stats)?;
        }
        Command::Run {
            index,
            output_index,
            base_dir,
            source_dir,
            project,
        } => {
            let records = load_index(&index)?;
            let outcome = cartorio::normalize_index(&records, &base_dir, sink.as_ref())?;
            let output = output_index.unwrap_or(index);
            save_index(&output, &outcome.records)?;

            let source_dir = resolve_source_dir(source_dir, project)?;
            let stats = cartorio::extract_documents(&outcome.records, &source_dir, sink, &config).await?;
            print_stats(&stats)?;
        }
    }

    Ok(())
}

fn resolve_source_dir(source_dir: Option<PathBuf>, project: Option<PathBuf>) -> Result<PathBuf> {
    match (source_dir, project) {
        (Some(dir), _) => Ok(dir),
        (None, Some(project)) => Ok(project.join(PROCESSING_DIR_NAME)),
        (None, None) => anyhow::bail!("either --source-dir or --project is required"),
    }
}

fn load_index(path: &Path) -> Result<Vec<IndexRecord>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read index {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid index file {}", path.display()))
}

fn save_index(path: &Path, records: &[IndexRecord]) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(path, content).with_context(|| format!("failed to write index {}", path.display()))?;
    tracing::debug!("updated index written to {}", path.display());
    Ok(())
}

fn print_stats(stats: &RunStats) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}
