use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CartorioError, Result};

static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)").expect("Page-range regex pattern is valid and should compile"));

static SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)").expect("Single-page regex pattern is valid and should compile"));

/// Inclusive 1-based page span, derived once per record from the `Páginas`
/// cell and immutable after creation.
///
/// Invariant: `1 <= start <= end`, enforced by [`PageRange::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    /// Parse a page-range expression.
    ///
    /// Accepts `"<start> - <end>"` (optional whitespace around the hyphen,
    /// `start <= end`) and falls back to a single leading integer, which
    /// yields a one-page range. Trailing text after the matched portion is
    /// ignored. Anything else, and any range starting below page 1, fails
    /// with `InvalidPageRange`.
    pub fn parse(text: &str, record: &str) -> Result<PageRange> {
        let trimmed = text.trim();

        if let Some(caps) = RANGE.captures(trimmed)
            && let (Ok(start), Ok(end)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>())
            && start <= end
        {
            return Self::validated(start, end, text, record);
        }

        if let Some(caps) = SINGLE.captures(trimmed)
            && let Ok(page) = caps[1].parse::<u32>()
        {
            return Self::validated(page, page, text, record);
        }

        Err(CartorioError::invalid_page_range(text, record))
    }

    fn validated(start: u32, end: u32, text: &str, record: &str) -> Result<PageRange> {
        if start < 1 {
            return Err(CartorioError::invalid_page_range(text, record));
        }
        Ok(PageRange { start, end })
    }

    /// Number of pages in the span.
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }
}
