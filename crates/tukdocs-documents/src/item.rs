use serde::{Deserialize, Serialize};
use tukdocs_core::{Color, Icon};

/// Selects the icon a document is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Word,
    Pdf,
    #[default]
    Other,
}

impl DocumentKind {
    pub fn icon(self) -> Icon {
        match self {
            DocumentKind::Pdf => Icon::PictureAsPdf,
            DocumentKind::Word | DocumentKind::Other => Icon::Description,
        }
    }

    /// Guess from a short type label such as `"DOCX"` or `"pdf"`.
    pub fn from_type_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "doc" | "docx" | "odt" | "rtf" => DocumentKind::Word,
            _ => DocumentKind::Other,
        }
    }

    pub fn default_color(self) -> Color {
        match self {
            DocumentKind::Pdf => Color::RED,
            DocumentKind::Word => Color::BLUE,
            DocumentKind::Other => Color::from_hex("#757575"),
        }
    }
}

/// One entry in the recent-documents list. Immutable; the name doubles as
/// the list key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentItem {
    name: String,
    type_label: String,
    size: String,
    kind: DocumentKind,
    color: Color,
    locator: String,
}

impl DocumentItem {
    pub fn new(
        name: impl Into<String>,
        type_label: impl Into<String>,
        size: impl Into<String>,
        kind: DocumentKind,
        color: Color,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            size: size.into(),
            kind,
            color,
            locator: locator.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Where the underlying resource lives (path or URI).
    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn icon(&self) -> Icon {
        self.kind.icon()
    }

    /// `"DOCX • 2.4 MB"`
    pub fn caption(&self) -> String {
        format!("{} • {}", self.type_label, self.size)
    }
}

/// Serializable description of a document, as it appears in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub size: String,
    #[serde(default)]
    pub kind: Option<DocumentKind>,
    /// `#RRGGBB` or `#RRGGBBAA`; defaults to the kind's color.
    #[serde(default)]
    pub color: Option<String>,
    pub locator: String,
}

impl From<DocumentEntry> for DocumentItem {
    fn from(e: DocumentEntry) -> Self {
        let kind = e
            .kind
            .unwrap_or_else(|| DocumentKind::from_type_label(&e.type_label));
        let color = match e.color.as_deref().map(|c| (c, Color::parse_hex(c))) {
            Some((_, Some(color))) => color,
            Some((raw, None)) => {
                log::warn!("'{}': invalid color {raw:?}, using the {kind:?} default", e.name);
                kind.default_color()
            }
            None => kind.default_color(),
        };
        DocumentItem::new(e.name, e.type_label, e.size, kind, color, e.locator)
    }
}

impl From<&DocumentItem> for DocumentEntry {
    fn from(d: &DocumentItem) -> Self {
        DocumentEntry {
            name: d.name.clone(),
            type_label: d.type_label.clone(),
            size: d.size.clone(),
            kind: Some(d.kind),
            color: Some(d.color.to_string()),
            locator: d.locator.clone(),
        }
    }
}
