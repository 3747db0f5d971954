//! Optional `tukdocs.json` next to the binary's working directory.
//!
//! Every field has a default, so a partial file is fine:
//!
//! ```json
//! { "splash_delay_ms": 500, "dark_theme": true }
//! ```
//!
//! The default document list points at `samples/`, relative to the working
//! directory, so run the binary from the workspace root to open them. A
//! relative `locator` in the file resolves the same way.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tukdocs_documents::{ConfiguredDocuments, DocumentEntry, SampleDocuments};
use tukdocs_ui::Theme;
use web_time::Duration;

pub const CONFIG_FILE: &str = "tukdocs.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub splash_delay_ms: u64,
    /// Shown under "Recent Documents", in this order.
    pub documents: Vec<DocumentEntry>,
    pub dark_theme: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: 1000,
            documents: SampleDocuments::new().entries(),
            dark_theme: false,
        }
    }
}

impl AppConfig {
    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{display} not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: display,
                    source,
                });
            }
        };
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: display.clone(),
            source,
        })?;
        log::info!(
            "loaded {display}: {} document(s), splash {} ms",
            config.documents.len(),
            config.splash_delay_ms
        );
        Ok(config)
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn document_source(&self) -> ConfiguredDocuments {
        ConfiguredDocuments::new(self.documents.clone())
    }

    pub fn theme(&self) -> Theme {
        if self.dark_theme { Theme::dark() } else { Theme::light() }
    }
}
