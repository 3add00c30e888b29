//! Core data types shared across the pipelines.

use serde::{Deserialize, Serialize};

/// One row of the tabular document index.
///
/// Field names follow the crate's conventions; the serialized form uses the
/// index's Portuguese column headers verbatim so a re-emitted index keeps the
/// structure it arrived with. Absent cells deserialize as empty strings,
/// never as errors.
///
/// `extracted_path` and `shared` are outputs of the normalization pipeline.
/// They are never read as pipeline input; normalization recomputes both from
/// scratch on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Raw registration string, e.g. `"Livro 3, fls. 12, Mat. 4500"`.
    #[serde(rename = "Matrícula", default)]
    pub registration_raw: String,

    /// Free-form document name used for type classification.
    #[serde(rename = "Nome do Documento", default)]
    pub document_name: String,

    /// Free-form date cell.
    #[serde(rename = "Data", default)]
    pub date: String,

    /// Origin of the scanned source volume.
    #[serde(rename = "Origem", default)]
    pub origin: String,

    /// Volume number of the scanned source.
    #[serde(rename = "Volume", default)]
    pub volume: String,

    /// Page range expression, e.g. `"12-18"` or `"5"`.
    #[serde(rename = "Páginas", default)]
    pub pages: String,

    /// Free-text observations; scanned for cross-references and the
    /// incomplete marker.
    #[serde(rename = "Obs", default)]
    pub observations: String,

    /// Canonical output path (computed).
    #[serde(rename = "Arquivo Extraído", default)]
    pub extracted_path: String,

    /// Shared-document flag (computed). Serialized as `"Sim"`/`"Não"`.
    #[serde(rename = "Documento Compartilhado", default, with = "sim_nao")]
    pub shared: bool,
}

impl IndexRecord {
    /// Identity used in events and errors: the raw registration string, or a
    /// placeholder when the cell is empty.
    pub fn label(&self) -> &str {
        let trimmed = self.registration_raw.trim();
        if trimmed.is_empty() { "<sem matrícula>" } else { trimmed }
    }
}

/// Serde codec for the `"Sim"`/`"Não"` shared-document column.
///
/// Anything other than `"Sim"` (including an empty cell) reads back as
/// `false`; the index format has no third state.
mod sim_nao {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Sim" } else { "Não" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(str::trim) == Some("Sim"))
    }
}

/// Aggregate counters returned by both pipelines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of records seen.
    pub total: usize,
    /// Records that completed without error.
    pub success: usize,
    /// Records that failed and were skipped.
    pub error: usize,
}

impl RunStats {
    pub fn new(total: usize) -> Self {
        RunStats {
            total,
            success: 0,
            error: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip_uses_portuguese_columns() {
        let record = IndexRecord {
            registration_raw: "Livro 3, fls. 12, Mat. 4500".to_string(),
            document_name: "Escritura de Venda e Compra".to_string(),
            date: "15-03-2020".to_string(),
            origin: "OrigemX".to_string(),
            volume: "2".to_string(),
            pages: "10-12".to_string(),
            observations: String::new(),
            extracted_path: "docs/x.pdf".to_string(),
            shared: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Matrícula\""));
        assert!(json.contains("\"Arquivo Extraído\""));
        assert!(json.contains("\"Documento Compartilhado\":\"Não\""));

        let back: IndexRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_shared_flag_serializes_sim() {
        let record = IndexRecord {
            shared: true,
            ..IndexRecord::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Documento Compartilhado\":\"Sim\""));
    }

    #[test]
    fn test_missing_cells_deserialize_as_empty() {
        let record: IndexRecord = serde_json::from_str(r#"{"Matrícula": "Mat. 1"}"#).unwrap();
        assert_eq!(record.registration_raw, "Mat. 1");
        assert_eq!(record.document_name, "");
        assert_eq!(record.pages, "");
        assert!(!record.shared);
        assert_eq!(record.extracted_path, "");
    }

    #[test]
    fn test_label_placeholder_for_empty_registration() {
        let record = IndexRecord::default();
        assert_eq!(record.label(), "<sem matrícula>");
    }
}
