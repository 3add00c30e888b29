//! Canonical output path composition.

use crate::text::registration::RegistrationKey;

/// Filename prefix for records whose observations mark the scan incomplete.
const INCOMPLETE_PREFIX: &str = "INCOMPLETO_";

/// Compose the canonical output path for one record.
///
/// Shape: `{base_dir}/{folder_name}/{prefix}{date_tag}_{doc_type}_{matricula_id}.pdf`,
/// forward-slash separated on every platform so stored paths compare equal
/// across hosts. The `INCOMPLETO_` prefix applies iff `observations`
/// contains `"incompleto"` case-insensitively. Pure given its inputs.
pub fn compose_output_path(
    base_dir: &str,
    key: &RegistrationKey,
    doc_type: &str,
    date_tag: &str,
    observations: &str,
) -> String {
    let prefix = if observations.to_lowercase().contains("incompleto") {
        INCOMPLETE_PREFIX
    } else {
        ""
    };
    let file_name = format!("{prefix}{date_tag}_{doc_type}_{}.pdf", key.matricula_id);

    let base = base_dir.replace('\\', "/");
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        format!("{}/{file_name}", key.folder_name)
    } else {
        format!("{base}/{}/{file_name}", key.folder_name)
    }
}
