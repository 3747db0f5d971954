//! TukDocs: a splash, a one-time onboarding session (welcome, then terms),
//! and a Home screen listing recent documents.

pub mod app;
pub mod config;
pub mod ui;
pub mod pages {
    pub mod home;
    pub mod onboarding;
    pub mod splash;
    pub mod terms;
}

pub use app::{App, Stage};
pub use config::{AppConfig, CONFIG_FILE, ConfigError};
