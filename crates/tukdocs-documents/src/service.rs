use tukdocs_core::{Signal, signal};

use crate::item::DocumentItem;
use crate::ports::{ContentKindResolver, DocumentOpener};
use crate::source::DocumentSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    Launched,
    Failed { message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// Conversion is not implemented; the request was accepted and dropped.
    Unsupported,
}

/// Everything the Home screen does with documents.
///
/// Opening never propagates an error to the caller: failures are logged and
/// kept in [`Documents::last_failure`] so the screen can show a notice.
pub struct Documents {
    source: Box<dyn DocumentSource>,
    opener: Box<dyn DocumentOpener>,
    resolver: Box<dyn ContentKindResolver>,
    last_failure: Signal<Option<String>>,
}

impl Documents {
    pub fn new(
        source: impl DocumentSource + 'static,
        opener: impl DocumentOpener + 'static,
        resolver: impl ContentKindResolver + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            opener: Box::new(opener),
            resolver: Box::new(resolver),
            last_failure: signal(None),
        }
    }

    pub fn list_recent(&self) -> Vec<DocumentItem> {
        self.source.list_recent()
    }

    pub fn open(&self, item: &DocumentItem) -> OpenOutcome {
        log::info!("opening '{}'", item.name());
        self.open_locator(item.locator())
    }

    /// Open an arbitrary resource, e.g. one returned by a picker.
    pub fn open_locator(&self, locator: &str) -> OpenOutcome {
        let kind = self.resolver.resolve(locator);
        log::debug!("{locator} resolved to {kind}");
        match self.opener.open(locator, &kind) {
            Ok(()) => {
                self.last_failure.set(None);
                OpenOutcome::Launched
            }
            Err(e) => {
                log::warn!("could not open {locator}: {e}");
                let message = e.to_string();
                self.last_failure.set(Some(message.clone()));
                OpenOutcome::Failed { message }
            }
        }
    }

    pub fn convert_to_pdf(&self, item: Option<&DocumentItem>) -> ConvertOutcome {
        match item {
            Some(item) => {
                log::info!("convert to PDF requested for '{}'; not supported", item.name())
            }
            None => log::info!("convert to PDF requested; not supported"),
        }
        ConvertOutcome::Unsupported
    }

    pub fn last_failure(&self) -> Option<String> {
        self.last_failure.get()
    }

    pub fn dismiss_failure(&self) {
        self.last_failure.set(None);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::OpenError;
    use crate::item::{DocumentEntry, DocumentKind};
    use crate::ports::ContentKind;
    use crate::source::{ConfiguredDocuments, SampleDocuments};

    type Launches = Rc<RefCell<Vec<(String, ContentKind)>>>;

    /// Launches anything except kinds it has no viewer for.
    struct FakeOpener {
        supported: Vec<&'static str>,
        launched: Launches,
    }

    impl DocumentOpener for FakeOpener {
        fn open(&self, locator: &str, kind: &ContentKind) -> Result<(), OpenError> {
            if !self.supported.contains(&kind.as_str()) {
                return Err(OpenError::NoViewer {
                    locator: locator.to_string(),
                    kind: kind.to_string(),
                });
            }
            self.launched
                .borrow_mut()
                .push((locator.to_string(), kind.clone()));
            Ok(())
        }
    }

    struct SuffixResolver;

    impl ContentKindResolver for SuffixResolver {
        fn resolve(&self, locator: &str) -> ContentKind {
            if locator.ends_with(".pdf") {
                ContentKind::new("application/pdf")
            } else {
                ContentKind::unknown()
            }
        }
    }

    fn documents(supported: Vec<&'static str>) -> (Documents, Launches) {
        let launched: Launches = Rc::default();
        let docs = Documents::new(
            SampleDocuments::new(),
            FakeOpener {
                supported,
                launched: launched.clone(),
            },
            SuffixResolver,
        );
        (docs, launched)
    }

    #[test]
    fn sample_listing_matches_configured_values() {
        let (docs, _) = documents(vec![]);
        let items = docs.list_recent();
        let summary: Vec<(&str, &str, &str, DocumentKind)> = items
            .iter()
            .map(|d| (d.name(), d.type_label(), d.size(), d.kind()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Project Proposal", "DOCX", "2.4 MB", DocumentKind::Word),
                ("Quarterly Report", "PDF", "1.8 MB", DocumentKind::Pdf),
                ("Meeting Notes", "DOCX", "890 KB", DocumentKind::Word),
                ("Invoice", "PDF", "3.2 MB", DocumentKind::Pdf),
            ]
        );
        assert_eq!(items[0].color(), tukdocs_core::Color::BLUE);
        assert_eq!(items[1].caption(), "PDF • 1.8 MB");
    }

    #[test]
    fn listing_is_deterministic() {
        let (docs, _) = documents(vec![]);
        assert_eq!(docs.list_recent(), docs.list_recent());
    }

    #[test]
    fn open_launches_with_resolved_kind() {
        let (docs, launched) = documents(vec!["application/pdf"]);
        let invoice = docs.list_recent().pop().unwrap();
        assert_eq!(docs.open(&invoice), OpenOutcome::Launched);
        assert_eq!(
            *launched.borrow(),
            vec![(
                "samples/Invoice.pdf".to_string(),
                ContentKind::new("application/pdf")
            )]
        );
        assert_eq!(docs.last_failure(), None);
    }

    #[test]
    fn unsupported_kind_is_recorded_not_raised() {
        let (docs, launched) = documents(vec!["application/pdf"]);
        let proposal = docs.list_recent().remove(0);

        let outcome = docs.open(&proposal);
        assert!(matches!(outcome, OpenOutcome::Failed { .. }));
        assert!(launched.borrow().is_empty());
        assert_eq!(
            docs.last_failure().as_deref(),
            Some("no viewer available for */* (samples/Project Proposal.docx)")
        );

        docs.dismiss_failure();
        assert_eq!(docs.last_failure(), None);
    }

    #[test]
    fn successful_open_clears_previous_failure() {
        let (docs, _) = documents(vec!["application/pdf"]);
        docs.open_locator("notes.txt");
        assert!(docs.last_failure().is_some());
        docs.open_locator("scan.pdf");
        assert!(docs.last_failure().is_none());
    }

    #[test]
    fn convert_is_a_stub() {
        let (docs, launched) = documents(vec!["application/pdf"]);
        let item = docs.list_recent().remove(0);
        assert_eq!(docs.convert_to_pdf(Some(&item)), ConvertOutcome::Unsupported);
        assert_eq!(docs.convert_to_pdf(None), ConvertOutcome::Unsupported);
        assert!(launched.borrow().is_empty());
    }

    #[test]
    fn configured_source_keeps_order_and_fills_defaults() {
        let entries: Vec<DocumentEntry> = serde_json::from_str(
            r##"[
                {"name": "Zeta", "type": "PDF", "size": "1 KB", "locator": "z.pdf"},
                {"name": "Alpha", "type": "DOCX", "size": "2 KB", "locator": "a.docx", "color": "#00FF00"},
                {"name": "Misc", "type": "TXT", "size": "3 KB", "kind": "word", "locator": "m.txt"}
            ]"##,
        )
        .unwrap();
        let source = ConfiguredDocuments::new(entries);
        let items = source.list_recent();

        let names: Vec<&str> = items.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Misc"]);
        assert_eq!(items[0].kind(), DocumentKind::Pdf);
        assert_eq!(items[0].color(), tukdocs_core::Color::RED);
        assert_eq!(items[1].color(), tukdocs_core::Color::from_rgb(0, 255, 0));
        assert_eq!(items[2].kind(), DocumentKind::Word);
    }

    #[test]
    fn sample_entries_convert_back_to_the_same_items() {
        let sample = SampleDocuments::new();
        let again = ConfiguredDocuments::new(sample.entries());
        assert_eq!(again.list_recent(), sample.list_recent());
    }
}
