#![allow(dead_code)]

//! Shared test helpers: an event-collecting sink, record builders, and a
//! lopdf-based source-volume generator.

use std::path::Path;
use std::sync::Mutex;

use cartorio::{EventSink, IndexRecord, Severity};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Sink that records every event for later assertions.
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<(String, Severity)>>,
}

impl EventSink for CollectingSink {
    fn emit(&self, message: &str, severity: Severity) {
        self.events
            .lock()
            .expect("event sink lock should not be poisoned")
            .push((message.to_string(), severity));
    }
}

impl CollectingSink {
    pub fn events(&self) -> Vec<(String, Severity)> {
        self.events
            .lock()
            .expect("event sink lock should not be poisoned")
            .clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.events().iter().filter(|(_, s)| *s == severity).count()
    }

    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.events()
            .iter()
            .any(|(message, s)| *s == severity && message.contains(needle))
    }
}

/// Build an index record with the fields the pipelines read.
pub fn record(registration: &str, pages: &str, volume: &str) -> IndexRecord {
    IndexRecord {
        registration_raw: registration.to_string(),
        pages: pages.to_string(),
        volume: volume.to_string(),
        ..IndexRecord::default()
    }
}

/// Write a minimal `page_count`-page PDF to `path`.
///
/// Follows the lopdf document-creation shape: one text operation per page,
/// a shared Type1 font, and a standard A4 media box.
pub fn write_source_pdf(path: &Path, page_count: usize) -> anyhow::Result<()> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(page_count);
    for number in 1..=page_count {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(format!("Pagina {number}"))]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path)?;
    Ok(())
}

/// Page count of a PDF on disk.
pub fn page_count_of(path: &Path) -> anyhow::Result<usize> {
    Ok(Document::load(path)?.get_pages().len())
}
