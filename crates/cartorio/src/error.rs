//! Error types for cartorio.
//!
//! All fallible operations in the crate return [`Result<T>`], an alias over
//! [`CartorioError`]. Error chains are preserved with `#[source]` attributes
//! and messages carry the context a batch operator needs to act on a failure
//! (record identity, offending value, source path).
//!
//! # Error Handling Philosophy
//!
//! **Per-record errors never abort a batch.** `InvalidPageRange`,
//! `SourceNotFound`, `PageOutOfBounds`, `ExtractionFailed`, and
//! `MissingField` describe a single index row. The pipelines record them as
//! error events, count them, and move on to the next row.
//!
//! **Run-level errors abort before any record is touched.** `Validation`
//! covers caller-supplied configuration that cannot work at all (a missing
//! processing directory, an empty base directory). `Io` covers faults
//! outside any single record's scope and always bubbles up unchanged.
use thiserror::Error;

/// Result type alias using `CartorioError`.
pub type Result<T> = std::result::Result<T, CartorioError>;

/// Main error type for all cartorio operations.
///
/// # Variants
///
/// - `Io` - File system errors outside per-record scope (always bubble up)
/// - `InvalidPageRange` - The record's page expression cannot be parsed or
///   describes an impossible range
/// - `SourceNotFound` - The `{origin}_{volume}.pdf` source document is absent
/// - `PageOutOfBounds` - The requested range ends past the source's last page
/// - `ExtractionFailed` - An underlying I/O or PDF-parsing fault inside one
///   record's extraction, wrapped with the span, source path, and record
/// - `MissingField` - A required index column is empty for a record
/// - `Validation` - Invalid caller-supplied configuration (fatal to the run)
/// - `Other` - Catch-all for uncommon faults (e.g. a panicked worker task)
#[derive(Debug, Error)]
pub enum CartorioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page range '{value}' for record '{record}'")]
    InvalidPageRange { value: String, record: String },

    #[error("source document not found: {path} (record '{record}')")]
    SourceNotFound { path: String, record: String },

    #[error("pages {start}-{end} exceed the {total} page(s) of {path} (record '{record}')")]
    PageOutOfBounds {
        start: u32,
        end: u32,
        total: usize,
        path: String,
        record: String,
    },

    #[error("extraction of pages {start}-{end} from {path} failed for record '{record}': {message}")]
    ExtractionFailed {
        start: u32,
        end: u32,
        path: String,
        record: String,
        message: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("required field '{field}' is empty for record '{record}'")]
    MissingField { field: &'static str, record: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("{0}")]
    Other(String),
}

impl CartorioError {
    /// Create a validation error (fatal to the run, never per-record).
    pub fn validation(message: impl Into<String>) -> Self {
        CartorioError::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid-page-range error for a record.
    pub fn invalid_page_range(value: impl Into<String>, record: impl Into<String>) -> Self {
        CartorioError::InvalidPageRange {
            value: value.into(),
            record: record.into(),
        }
    }

    /// Create a missing-field error for a record.
    pub fn missing_field(field: &'static str, record: impl Into<String>) -> Self {
        CartorioError::MissingField {
            field,
            record: record.into(),
        }
    }

    /// Whether this error is fatal to a whole run rather than scoped to a
    /// single record.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CartorioError::Io(_) | CartorioError::Validation { .. } | CartorioError::Other(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_range_display() {
        let err = CartorioError::invalid_page_range("abc", "Mat. 10");
        assert_eq!(err.to_string(), "invalid page range 'abc' for record 'Mat. 10'");
    }

    #[test]
    fn test_page_out_of_bounds_display() {
        let err = CartorioError::PageOutOfBounds {
            start: 10,
            end: 12,
            total: 8,
            path: "processos/OrigemX_2.pdf".to_string(),
            record: "Mat. 4500".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pages 10-12 exceed the 8 page(s) of processos/OrigemX_2.pdf (record 'Mat. 4500')"
        );
    }

    #[test]
    fn test_missing_field_display() {
        let err = CartorioError::missing_field("Origem", "Mat. 1");
        assert_eq!(err.to_string(), "required field 'Origem' is empty for record 'Mat. 1'");
    }

    #[test]
    fn test_extraction_failed_preserves_cause() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CartorioError::ExtractionFailed {
            start: 1,
            end: 3,
            path: "a.pdf".to_string(),
            record: "Mat. 2".to_string(),
            message: "denied".to_string(),
            cause: Some(Box::new(io)),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_fatal_classification() {
        assert!(CartorioError::validation("bad dir").is_fatal());
        assert!(!CartorioError::invalid_page_range("x", "r").is_fatal());
        assert!(!CartorioError::missing_field("Volume", "r").is_fatal());
    }
}
