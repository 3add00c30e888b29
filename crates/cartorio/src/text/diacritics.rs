use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Remove diacritics from a string.
///
/// Decomposes to NFD and drops combining marks, so `"Título"` becomes
/// `"Titulo"`. Total over any input; characters without a decomposition
/// pass through unchanged.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
