//! Hands documents to whatever the desktop has registered as their viewer.

use std::path::Path;
use std::process::{Command, Stdio};

use tukdocs_documents::{ContentKind, DocumentOpener, OpenError};

/// Launches the system "open" command (`xdg-open`, `open`, or `start`) and
/// waits for it to report whether a viewer took the document.
#[derive(Clone, Debug)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    pub fn new() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", [])
        } else if cfg!(target_os = "windows") {
            Self::with_command("cmd", ["/C", "start", ""])
        } else {
            Self::with_command("xdg-open", [])
        }
    }

    /// Use a custom launcher; the locator is appended as the last argument.
    pub fn with_command<'a>(
        program: impl Into<String>,
        args: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(str::to_string).collect(),
        }
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

fn is_uri(locator: &str) -> bool {
    locator.contains("://") || locator.starts_with("content:")
}

impl DocumentOpener for SystemOpener {
    fn open(&self, locator: &str, kind: &ContentKind) -> Result<(), OpenError> {
        if !is_uri(locator) && !Path::new(locator).exists() {
            return Err(OpenError::NotFound(locator.to_string()));
        }

        log::debug!("{} {:?} {locator} ({kind})", self.program, self.args);
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(locator)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            log::debug!("{} exited with {status}", self.program);
            Err(OpenError::NoViewer {
                locator: locator.to_string(),
                kind: kind.to_string(),
            })
        }
    }
}
