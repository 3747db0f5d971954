use std::path::Path;

use tukdocs_documents::{ContentKind, ContentKindResolver};

const TABLE: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("rtf", "application/rtf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("csv", "text/csv"),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
];

/// Resolves content kinds from the file extension alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtensionResolver;

impl ContentKindResolver for ExtensionResolver {
    fn resolve(&self, locator: &str) -> ContentKind {
        let path = locator.strip_prefix("file://").unwrap_or(locator);
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        ext.and_then(|ext| TABLE.iter().find(|(e, _)| *e == ext))
            .map(|(_, kind)| ContentKind::new(*kind))
            .unwrap_or_else(ContentKind::unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        let r = ExtensionResolver;
        assert_eq!(r.resolve("samples/Invoice.pdf").as_str(), "application/pdf");
        assert_eq!(
            r.resolve("file:///home/me/Notes.DOCX").as_str(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(r.resolve("scan.jpeg"), r.resolve("scan.jpg"));
    }

    #[test]
    fn unknown_falls_back_to_wildcard() {
        let r = ExtensionResolver;
        assert!(r.resolve("archive.xyz").is_unknown());
        assert!(r.resolve("README").is_unknown());
        assert!(r.resolve("").is_unknown());
    }
}
