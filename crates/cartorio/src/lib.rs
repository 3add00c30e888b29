//! Cartorio - Property-Registration Index Processing
//!
//! Cartorio normalizes tabular indexes of legal property-registration
//! records and extracts the referenced page ranges out of scanned source
//! volumes. Each index row names a registration (matrícula), a document
//! type, a date, and a page span inside an `{origin}_{volume}.pdf` source
//! file; the library rewrites every row with a canonical output path and a
//! shared-document flag, then writes one PDF per row containing exactly the
//! referenced pages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cartorio::{IndexRecord, PipelineConfig, TracingSink, extract_documents_sync, normalize_index};
//!
//! # fn main() -> cartorio::Result<()> {
//! let records: Vec<IndexRecord> = vec![/* supplied by the caller */];
//! let sink = Arc::new(TracingSink);
//!
//! // Pass 1: rewrite output paths and shared-document flags.
//! let outcome = normalize_index(&records, "docs", sink.as_ref())?;
//!
//! // Pass 2: materialize one PDF per record from the processing directory.
//! let config = PipelineConfig::default();
//! let stats = extract_documents_sync(&outcome.records, "processos", sink, &config)?;
//! println!("extracted {} of {} records", stats.success, stats.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Text Module** (`text`): pure normalization: diacritic stripping,
//!   document-type classification, date standardization, registration-key
//!   extraction
//! - **PDF Module** (`pdf`): page-range parsing and lopdf-backed page
//!   extraction
//! - **Core Module** (`core`): the two pipelines, shared-document
//!   detection, path composition, configuration
//! - **Events** (`events`): the narrow sink contract the pipelines report
//!   through
//!
//! # Failure model
//!
//! Every per-record failure is isolated: reported as an `error` event,
//! counted, and skipped. Only invalid caller configuration (a missing
//! processing directory, an empty base directory) aborts a run.

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod events;
pub mod pdf;
pub mod text;
pub mod types;

pub use error::{CartorioError, Result};
pub use types::{IndexRecord, RunStats};

pub use core::config::PipelineConfig;
pub use core::extract::{extract_documents, extract_documents_sync};
pub use core::normalize::{NormalizationOutcome, normalize_index};
pub use core::paths::compose_output_path;
pub use core::shared::SharedIndex;

pub use events::{EventSink, Severity, TracingSink};

pub use pdf::extractor::{extract_page_range, source_pdf_name};
pub use pdf::pages::PageRange;

pub use text::dates::{NO_DATE, standardize_date};
pub use text::diacritics::strip_diacritics;
pub use text::doc_type::{UNKNOWN_DOC_TYPE, classify_document_type};
pub use text::registration::{RegistrationKey, extract_mat_number, mat_numbers_in};
