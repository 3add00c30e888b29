//! Index normalization pipeline.
//!
//! Rewrites the two computed columns of every index row: the canonical
//! output path and the shared-document flag. The shared-document
//! aggregation is built over the full sequence before any row is decided,
//! then each row is rewritten in order. The input sequence is never
//! mutated; the output has exactly the same length and order.

use crate::core::paths::compose_output_path;
use crate::core::shared::SharedIndex;
use crate::error::{CartorioError, Result};
use crate::events::{EventSink, Severity};
use crate::text::dates::standardize_date;
use crate::text::doc_type::classify_document_type;
use crate::text::registration::RegistrationKey;
use crate::types::{IndexRecord, RunStats};

/// Result of a normalization run: the rewritten sequence plus counters.
#[derive(Debug)]
pub struct NormalizationOutcome {
    pub records: Vec<IndexRecord>,
    pub stats: RunStats,
}

/// Normalize the whole index against `base_dir`.
///
/// Every row is emitted exactly once, in input order. A row whose
/// `Matrícula` cell is empty keeps its place with cleared outputs and
/// counts as an error; every other row gets a freshly computed
/// `extracted_path` and `shared` flag. Per-row failures never abort the
/// run.
///
/// # Errors
///
/// Returns `CartorioError::Validation` when `base_dir` is empty, the one
/// caller-configuration fault normalization can detect up front.
pub fn normalize_index(
    records: &[IndexRecord],
    base_dir: &str,
    sink: &dyn EventSink,
) -> Result<NormalizationOutcome> {
    if base_dir.trim().is_empty() {
        return Err(CartorioError::validation("base directory must not be empty"));
    }

    sink.emit("Iniciando processamento de caminhos...", Severity::Info);

    let shared_index = SharedIndex::build(records);

    let total = records.len();
    let mut stats = RunStats::new(total);
    let mut output = Vec::with_capacity(total);

    for (index, record) in records.iter().enumerate() {
        sink.emit(
            &format!("Processando item {}/{total}: Matrícula {}", index + 1, record.label()),
            Severity::Info,
        );

        let mut updated = record.clone();

        if record.registration_raw.trim().is_empty() {
            let err = CartorioError::missing_field("Matrícula", record.label());
            tracing::debug!(row = index, "normalization skipped row: {err}");
            sink.emit(
                &format!("Erro: Campo obrigatório 'Matrícula' ausente no item {}/{total}.", index + 1),
                Severity::Error,
            );
            updated.extracted_path = String::new();
            updated.shared = false;
            stats.error += 1;
            output.push(updated);
            continue;
        }

        let key = RegistrationKey::from_raw(&record.registration_raw);
        let doc_type = classify_document_type(&record.document_name);
        let date_tag = standardize_date(&record.date);

        updated.extracted_path =
            compose_output_path(base_dir, &key, &doc_type, &date_tag, &record.observations);
        updated.shared = shared_index.is_shared(record);
        stats.success += 1;
        output.push(updated);
    }

    sink.emit(
        &format!("Processamento concluído. {total} entradas atualizadas."),
        Severity::Info,
    );

    Ok(NormalizationOutcome { records: output, stats })
}
