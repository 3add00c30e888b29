//! Rule-based text normalization.
//!
//! Pure, total functions over the free-text index cells: diacritic
//! stripping, document-type classification, date standardization, and
//! registration-key extraction. Nothing here touches the filesystem or
//! fails on malformed input; unparseable text degrades to documented
//! sentinels and sanitized fallbacks.

pub mod dates;
pub mod diacritics;
pub mod doc_type;
pub mod registration;

pub use dates::{NO_DATE, standardize_date};
pub use diacritics::strip_diacritics;
pub use doc_type::{UNKNOWN_DOC_TYPE, classify_document_type};
pub use registration::{RegistrationKey, extract_mat_number, mat_numbers_in};
