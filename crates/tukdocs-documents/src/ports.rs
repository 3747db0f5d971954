//! Contracts for what the operating environment provides. Adapters live in
//! `tukdocs-platform`.

use std::fmt;

use crate::error::OpenError;

/// A MIME-style content kind label, e.g. `application/pdf`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentKind(String);

impl ContentKind {
    pub const UNKNOWN: &'static str = "*/*";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The generic label used when resolution fails.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands a resource to an external viewer.
pub trait DocumentOpener {
    fn open(&self, locator: &str, kind: &ContentKind) -> Result<(), OpenError>;
}

/// Maps a resource to its content kind. Never fails: falls back to
/// [`ContentKind::unknown`].
pub trait ContentKindResolver {
    fn resolve(&self, locator: &str) -> ContentKind;
}

/// Lets the user choose a document to open. `None` means cancelled.
pub trait DocumentPicker {
    fn pick(&self) -> Option<String>;
}
