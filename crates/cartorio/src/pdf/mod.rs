//! PDF page-range handling.
//!
//! This module owns the two binary-document concerns of the crate: parsing
//! and validating the index's page-range expressions, and materializing the
//! referenced page span from a scanned source volume into a new document.
//! Page selection only: pages are carried over exactly as stored, with no
//! re-encoding, compression, or metadata rewriting.

pub mod extractor;
pub mod pages;

pub use extractor::{extract_page_range, source_pdf_name};
pub use pages::PageRange;
