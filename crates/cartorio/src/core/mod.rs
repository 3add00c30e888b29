//! Pipeline orchestration.
//!
//! The two entry points of the crate live here: [`normalize::normalize_index`]
//! rewrites the computed columns of an index snapshot, and
//! [`extract::extract_documents`] materializes one PDF per normalized record.
//! Both iterate the record sequence exactly once, isolate per-record
//! failures, report through the caller's event sink, and return aggregate
//! counters. Supporting pieces: the shared-document aggregation, canonical
//! path composition, and the pipeline configuration.

pub mod config;
pub mod extract;
pub mod normalize;
pub mod paths;
pub mod shared;

pub use config::PipelineConfig;
pub use extract::{extract_documents, extract_documents_sync};
pub use normalize::{NormalizationOutcome, normalize_index};
pub use paths::compose_output_path;
pub use shared::SharedIndex;
