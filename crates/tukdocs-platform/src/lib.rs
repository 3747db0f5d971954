//! Host side of TukDocs: logging setup, the terminal runner, and the
//! adapters that talk to the operating system.

pub mod inspector;
pub mod logging;
pub mod mime;
pub mod opener;
pub mod terminal;

pub use inspector::{Frame, HitRegion, Inspector};
pub use logging::init_logging;
pub use mime::ExtensionResolver;
pub use opener::SystemOpener;
pub use terminal::{
    LineSource, StdinLines, StdinPicker, prompt_for_path, run_terminal_app, run_terminal_app_with,
};
