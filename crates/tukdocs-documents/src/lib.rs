//! Recent documents and what can be done with them.
//!
//! [`DocumentSource`] supplies the list, [`Documents`] ties a source to the
//! environment's opener and content-kind resolver.

pub mod error;
pub mod item;
pub mod ports;
pub mod service;
pub mod source;

pub use error::OpenError;
pub use item::{DocumentEntry, DocumentItem, DocumentKind};
pub use ports::{ContentKind, ContentKindResolver, DocumentOpener, DocumentPicker};
pub use service::{ConvertOutcome, Documents, OpenOutcome};
pub use source::{ConfiguredDocuments, DocumentSource, SampleDocuments};
