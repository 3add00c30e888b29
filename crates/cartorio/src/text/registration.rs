use once_cell::sync::Lazy;
use regex::Regex;

/// Structured registration pattern: book, folio, and matricula number, with
/// an optional restoration suffix. Anchored at the start only; trailing
/// free text after the matched portion is ignored.
static REGISTRATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Livro (?P<livro>[\w-]+)[,\s]+[fF]ls\.?\s*(?P<folhas>\d+)[,\s]+Mat\. (?P<mat>\d+)(?:\s*\(Restauração\))?")
        .expect("Registration regex pattern is valid and should compile")
});

static MAT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Mat\. (\d+)").expect("Mat-number regex pattern is valid and should compile"));

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W").expect("Non-word regex pattern is valid and should compile"));

/// Canonical key derived from a raw registration string.
///
/// `folder_name` is filesystem-safe (word characters and underscores only)
/// and groups every artifact of one registration; `matricula_id` is the
/// short identifier used in output filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationKey {
    pub folder_name: String,
    pub matricula_id: String,
}

impl RegistrationKey {
    /// Derive the key from a raw registration cell.
    ///
    /// `"Ma."` is normalized to `"Mat."` before matching. A structured match
    /// like `"Livro 3, fls. 12, Mat. 4500"` yields
    /// `("Livro3_fls12_Mat4500", "Mat4500")`; hyphens inside the book part
    /// are dropped. Anything else degrades to the raw string with every
    /// non-word character replaced by `_`, used for both fields. Never fails.
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.replace("Ma.", "Mat.");
        let normalized = normalized.trim();

        if let Some(caps) = REGISTRATION.captures(normalized) {
            let livro = caps["livro"].replace('-', "");
            let folhas = &caps["folhas"];
            let mat = &caps["mat"];
            return RegistrationKey {
                folder_name: format!("Livro{livro}_fls{folhas}_Mat{mat}"),
                matricula_id: format!("Mat{mat}"),
            };
        }

        let sanitized = NON_WORD.replace_all(normalized, "_").into_owned();
        RegistrationKey {
            folder_name: sanitized.clone(),
            matricula_id: sanitized,
        }
    }
}

/// Extract the dotted mat-number used for shared-document bookkeeping.
///
/// Returns `"Mat.<digits>"` for the first `Mat. <digits>` occurrence, or the
/// input unchanged when none is present. Distinct from
/// [`RegistrationKey::from_raw`], whose `matricula_id` carries no dot.
pub fn extract_mat_number(raw: &str) -> String {
    match MAT_NUMBER.captures(raw) {
        Some(caps) => format!("Mat.{}", &caps[1]),
        None => raw.to_string(),
    }
}

/// All dotted mat-numbers mentioned in a free-text cell, in order of
/// appearance.
pub fn mat_numbers_in(text: &str) -> Vec<String> {
    MAT_NUMBER
        .captures_iter(text)
        .map(|caps| format!("Mat.{}", &caps[1]))
        .collect()
}
