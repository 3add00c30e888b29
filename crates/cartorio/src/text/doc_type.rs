use crate::text::diacritics::strip_diacritics;

/// Tag applied when the document name is missing or unclassifiable.
pub const UNKNOWN_DOC_TYPE: &str = "Desconhecido";

/// Known phrase → canonical tag pairs, scanned in order; first match wins.
///
/// The table deliberately carries the misspellings that occur in real
/// indexes ("Ecritura", "Definitvo").
const DOC_TYPE_MAPPING: [(&str, &str); 9] = [
    ("Escritura Venda", "EscrituraVenda"),
    ("Escritura de Venda e Compra", "EscrituraVenda"),
    ("Ecritura de Venda e Compra", "EscrituraVenda"),
    ("Título Definitivo", "TituloDefinitivo"),
    ("Título Definitvo", "TituloDefinitivo"),
    ("Certidão Inteiro Teor", "CertidaoInteiroTeor"),
    ("Inteiro Teor", "CertidaoInteiroTeor"),
    ("Certidão de Titulo", "CertidaoTitulo"),
    ("Certidão Iterpa", "CertidaoIterpa"),
];

/// Classify a free-form document name into a canonical filename tag.
///
/// Matching is case- and diacritic-insensitive substring containment against
/// the ordered mapping table. Names that match no entry fall back to the text
/// before the first comma or `"nº"`, diacritic-stripped and reduced to
/// alphanumerics; when even that leaves nothing, the result is
/// [`UNKNOWN_DOC_TYPE`].
pub fn classify_document_type(name: &str) -> String {
    if name.trim().is_empty() {
        return UNKNOWN_DOC_TYPE.to_string();
    }

    let normalized = strip_diacritics(name).to_lowercase();
    for (phrase, tag) in DOC_TYPE_MAPPING {
        if normalized.contains(&strip_diacritics(phrase).to_lowercase()) {
            return tag.to_string();
        }
    }

    let head = name.split_once(',').map_or(name, |(head, _)| head);
    let head = head.split_once("nº").map_or(head, |(head, _)| head).trim();
    let derived: String = strip_diacritics(head).chars().filter(|c| c.is_alphanumeric()).collect();
    if derived.is_empty() {
        UNKNOWN_DOC_TYPE.to_string()
    } else {
        derived
    }
}
