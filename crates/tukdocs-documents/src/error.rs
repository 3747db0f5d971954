use std::io;

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("no viewer available for {kind} ({locator})")]
    NoViewer { locator: String, kind: String },
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("failed to launch viewer: {0}")]
    Launch(#[from] io::Error),
}
