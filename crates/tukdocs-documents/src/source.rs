use tukdocs_core::Color;

use crate::item::{DocumentEntry, DocumentItem, DocumentKind};

/// Supplies the documents shown under "Recent Documents".
///
/// Implementations must return the same sequence, in the same order, on
/// every call for the lifetime of the source.
pub trait DocumentSource {
    fn list_recent(&self) -> Vec<DocumentItem>;
}

/// The fixed sample set shipped with the app. Locators are relative to the
/// working directory; the files live in the workspace's `samples/`.
#[derive(Clone, Debug)]
pub struct SampleDocuments {
    items: Vec<DocumentItem>,
}

impl SampleDocuments {
    pub fn new() -> Self {
        Self {
            items: vec![
                DocumentItem::new(
                    "Project Proposal",
                    "DOCX",
                    "2.4 MB",
                    DocumentKind::Word,
                    Color::BLUE,
                    "samples/Project Proposal.docx",
                ),
                DocumentItem::new(
                    "Quarterly Report",
                    "PDF",
                    "1.8 MB",
                    DocumentKind::Pdf,
                    Color::RED,
                    "samples/Quarterly Report.pdf",
                ),
                DocumentItem::new(
                    "Meeting Notes",
                    "DOCX",
                    "890 KB",
                    DocumentKind::Word,
                    Color::BLUE,
                    "samples/Meeting Notes.docx",
                ),
                DocumentItem::new(
                    "Invoice",
                    "PDF",
                    "3.2 MB",
                    DocumentKind::Pdf,
                    Color::RED,
                    "samples/Invoice.pdf",
                ),
            ],
        }
    }

    pub fn entries(&self) -> Vec<DocumentEntry> {
        self.items.iter().map(DocumentEntry::from).collect()
    }
}

impl Default for SampleDocuments {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for SampleDocuments {
    fn list_recent(&self) -> Vec<DocumentItem> {
        self.items.clone()
    }
}

/// Documents described by configuration, kept in the order given.
#[derive(Clone, Debug, Default)]
pub struct ConfiguredDocuments {
    items: Vec<DocumentItem>,
}

impl ConfiguredDocuments {
    pub fn new(entries: impl IntoIterator<Item = DocumentEntry>) -> Self {
        let items: Vec<DocumentItem> = entries.into_iter().map(DocumentItem::from).collect();
        log::debug!("configured {} document(s)", items.len());
        Self { items }
    }
}

impl DocumentSource for ConfiguredDocuments {
    fn list_recent(&self) -> Vec<DocumentItem> {
        self.items.clone()
    }
}
