//! Document extraction pipeline.
//!
//! Consumes a normalized index and materializes one PDF per record at its
//! canonical path. Records have no cross-record dependency at this stage, so
//! the batch fans out over worker tasks bounded by the configured
//! concurrency limit; every output path is distinct by construction and
//! directory creation is idempotent, so workers never contend on outcomes.
//! Per-record failures are captured, reported, and counted; only a missing
//! processing directory or a panicked worker aborts the run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::config::PipelineConfig;
use crate::error::{CartorioError, Result};
use crate::events::{EventSink, Severity};
use crate::pdf::extractor::{extract_page_range, source_pdf_name};
use crate::pdf::pages::PageRange;
use crate::types::{IndexRecord, RunStats};

/// Global Tokio runtime backing the synchronous wrappers.
///
/// Lazily initialized on first use and shared across all sync calls; if
/// runtime creation fails the process is already out of resources and
/// nothing else would work either.
static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create global Tokio runtime - system may be out of resources")
});

/// Extract every record of the index concurrently.
///
/// Workers are bounded by [`PipelineConfig::effective_concurrency`]. Each
/// record emits its own progress and outcome events through `sink`; events
/// of different records may interleave. The returned counters account for
/// every record exactly once.
///
/// # Errors
///
/// Returns `CartorioError::Validation` when `source_dir` is not an existing
/// directory, and `CartorioError::Other` when a worker task panics. All
/// other failures are per-record: counted and reported, never propagated.
pub async fn extract_documents(
    records: &[IndexRecord],
    source_dir: impl AsRef<Path>,
    sink: Arc<dyn EventSink>,
    config: &PipelineConfig,
) -> Result<RunStats> {
    let source_dir = source_dir.as_ref();
    if !source_dir.is_dir() {
        return Err(CartorioError::validation(format!(
            "processing directory not found: {}",
            source_dir.display()
        )));
    }

    let total = records.len();
    sink.emit(&format!("Iniciando extração de {total} documentos..."), Severity::Info);

    let mut stats = RunStats::new(total);

    let semaphore = Arc::new(Semaphore::new(config.effective_concurrency()));
    let source_dir = Arc::new(source_dir.to_path_buf());
    let long_range_warning = config.long_range_warning;

    let mut tasks = JoinSet::new();

    for (index, record) in records.iter().cloned().enumerate() {
        let sink = Arc::clone(&sink);
        let semaphore = Arc::clone(&semaphore);
        let source_dir: Arc<PathBuf> = Arc::clone(&source_dir);

        tasks.spawn(async move {
            let _permit = semaphore.acquire().await.unwrap();
            sink.emit(
                &format!("Processando item {}/{total}: Matrícula {}", index + 1, record.label()),
                Severity::Info,
            );
            extract_record(&record, &source_dir, long_range_warning, sink.as_ref())
        });
    }

    while let Some(task_result) = tasks.join_next().await {
        match task_result {
            Ok(Ok(_pages)) => stats.success += 1,
            Ok(Err(err)) => {
                tracing::debug!("record extraction failed: {err}");
                stats.error += 1;
            }
            Err(join_err) => {
                return Err(CartorioError::Other(format!("extraction task panicked: {join_err}")));
            }
        }
    }

    sink.emit(
        &format!(
            "Extração concluída. Total: {}, Sucesso: {}, Erros: {}",
            stats.total, stats.success, stats.error
        ),
        Severity::Info,
    );

    Ok(stats)
}

/// Synchronous wrapper for [`extract_documents`].
///
/// Blocks the current thread on the shared global runtime. For async code,
/// use `extract_documents` directly.
pub fn extract_documents_sync(
    records: &[IndexRecord],
    source_dir: impl AsRef<Path>,
    sink: Arc<dyn EventSink>,
    config: &PipelineConfig,
) -> Result<RunStats> {
    GLOBAL_RUNTIME.block_on(extract_documents(records, source_dir, sink, config))
}

/// Extract a single record: field validation, source resolution, page-range
/// parse, then the extractor's failure ladder.
fn extract_record(
    record: &IndexRecord,
    source_dir: &Path,
    long_range_warning: usize,
    sink: &dyn EventSink,
) -> Result<u32> {
    const REQUIRED: [(&str, fn(&IndexRecord) -> &str); 4] = [
        ("Origem", |r| &r.origin),
        ("Volume", |r| &r.volume),
        ("Páginas", |r| &r.pages),
        ("Arquivo Extraído", |r| &r.extracted_path),
    ];
    for (field, value_of) in REQUIRED {
        if value_of(record).trim().is_empty() {
            sink.emit(
                &format!(
                    "Erro: Campo obrigatório '{field}' ausente para Matrícula {}.",
                    record.label()
                ),
                Severity::Error,
            );
            return Err(CartorioError::missing_field(field, record.label()));
        }
    }

    let source_path = source_dir.join(source_pdf_name(&record.origin, &record.volume));
    let range = PageRange::parse(&record.pages, record.label()).ok();

    extract_page_range(
        &source_path,
        range,
        &record.pages,
        &record.extracted_path,
        record.label(),
        long_range_warning,
        sink,
    )
}
