//! Page-range extraction against scanned source volumes.
//!
//! One source volume is a single PDF named `{origin}_{volume}.pdf` inside
//! the caller's processing directory. Extraction validates the requested
//! span against the source, then writes a new document holding exactly the
//! pages `[start, end]`, creating the output directory on demand. Every
//! failure point maps to a typed error and a sink event; nothing here aborts
//! a batch.

use std::path::Path;

use lopdf::Document;

use crate::error::{CartorioError, Result};
use crate::events::{EventSink, Severity};
use crate::pdf::pages::PageRange;

/// Deterministic source file name for a record's origin and volume.
pub fn source_pdf_name(origin: &str, volume: &str) -> String {
    format!("{}_{}.pdf", origin.trim(), volume.trim())
}

/// Extract a page span from the source volume into `output_path`.
///
/// `range` is the parse outcome for the record's `Páginas` cell (`None`
/// when parsing failed); `pages_cell` is the raw cell for error reporting
/// and `record` the registration identity used in events and errors.
/// Returns the number of pages written.
///
/// The failure ladder, in order:
///
/// 1. `SourceNotFound` when the source file is absent.
/// 2. `InvalidPageRange` when the cell did not parse, or on the defensive
///    re-check of an impossible span.
/// 3. A non-fatal `warning` event when the span exceeds
///    `long_range_warning` pages, before the document is opened.
/// 4. `ExtractionFailed` when the source cannot be parsed as a PDF.
/// 5. `PageOutOfBounds` when the span ends past the source's last page.
/// 6. `ExtractionFailed` on any I/O fault while creating the output
///    directory or writing the document.
///
/// The write is not transactional: a partial output left by a crash is
/// simply overwritten on retry.
pub fn extract_page_range(
    source_path: &Path,
    range: Option<PageRange>,
    pages_cell: &str,
    output_path: &str,
    record: &str,
    long_range_warning: usize,
    sink: &dyn EventSink,
) -> Result<u32> {
    let source_display = source_path.display().to_string();

    if !source_path.is_file() {
        sink.emit(
            &format!("Erro: Arquivo de origem '{source_display}' não encontrado para Matrícula {record}."),
            Severity::Error,
        );
        return Err(CartorioError::SourceNotFound {
            path: source_display,
            record: record.to_string(),
        });
    }

    let Some(range) = range else {
        sink.emit(
            &format!("Erro: Intervalo de páginas inválido '{pages_cell}' para Matrícula {record}."),
            Severity::Error,
        );
        return Err(CartorioError::invalid_page_range(pages_cell, record));
    };

    if range.start < 1 || range.end < range.start {
        sink.emit(
            &format!(
                "Erro: Intervalo de páginas inválido ({}-{}) para Matrícula {record}.",
                range.start, range.end
            ),
            Severity::Error,
        );
        return Err(CartorioError::invalid_page_range(
            format!("{}-{}", range.start, range.end),
            record,
        ));
    }

    let page_count = range.page_count();
    if page_count as usize > long_range_warning {
        sink.emit(
            &format!(
                "Aviso: Intervalo longo ({}-{}, {page_count} páginas) para Matrícula {record}. Verificando...",
                range.start, range.end
            ),
            Severity::Warning,
        );
    }

    let mut document =
        Document::load(source_path).map_err(|err| extraction_failed(range, &source_display, record, err, sink))?;

    let total_pages = document.get_pages().len();
    if range.end as usize > total_pages {
        sink.emit(
            &format!(
                "Erro: Intervalo ({}-{}) excede o total de páginas ({total_pages}) em '{source_display}' para Matrícula {record}.",
                range.start, range.end
            ),
            Severity::Error,
        );
        return Err(CartorioError::PageOutOfBounds {
            start: range.start,
            end: range.end,
            total: total_pages,
            path: source_display,
            record: record.to_string(),
        });
    }

    if let Some(parent) = Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .map_err(|err| extraction_failed(range, &source_display, record, err, sink))?;
        sink.emit(&format!("Diretório criado: {}", parent.display()), Severity::Info);
    }

    let excluded: Vec<u32> = (1..=total_pages as u32)
        .filter(|page| *page < range.start || *page > range.end)
        .collect();
    if !excluded.is_empty() {
        document.delete_pages(&excluded);
    }
    document.prune_objects();
    document.renumber_objects();

    document
        .save(output_path)
        .map_err(|err| extraction_failed(range, &source_display, record, err, sink))?;

    sink.emit(
        &format!("PDF extraído salvo em: {output_path} ({page_count} páginas)"),
        Severity::Info,
    );
    Ok(page_count)
}

/// Wrap an underlying fault with the span, source path, and record identity,
/// emitting the corresponding error event.
fn extraction_failed(
    range: PageRange,
    source_path: &str,
    record: &str,
    err: impl std::error::Error + Send + Sync + 'static,
    sink: &dyn EventSink,
) -> CartorioError {
    sink.emit(
        &format!(
            "Erro ao extrair páginas {}-{} de '{source_path}' para Matrícula {record}: {err}",
            range.start, range.end
        ),
        Severity::Error,
    );
    CartorioError::ExtractionFailed {
        start: range.start,
        end: range.end,
        path: source_path.to_string(),
        record: record.to_string(),
        message: err.to_string(),
        cause: Some(Box::new(err)),
    }
}
