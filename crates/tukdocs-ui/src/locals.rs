//! # Theme local
//!
//! Screens read colors from `theme()`. A subtree can be composed under a
//! different theme with `with_theme`:
//!
//! ```rust
//! use tukdocs_ui::*;
//!
//! let title = with_theme(Theme::light(), || Text("TukDocs").color(theme().primary));
//! assert_eq!(title.text(), Some("TukDocs"));
//! ```

use std::cell::RefCell;

use tukdocs_core::Color;

thread_local! {
    static THEME_STACK: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
}

/// Color scheme used by widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// App root.
    pub background: Color,
    pub on_background: Color,
    /// Cards, sheets, menus.
    pub surface: Color,
    pub on_surface: Color,
    /// Accent for buttons, checkboxes and the title.
    pub primary: Color,
    pub on_primary: Color,
    pub error: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::from_hex("#FFFBFE"),
            on_background: Color::from_hex("#1C1B1F"),
            surface: Color::from_hex("#FFFFFF"),
            on_surface: Color::from_hex("#1C1B1F"),
            primary: Color::from_hex("#6650A4"),
            on_primary: Color::WHITE,
            error: Color::from_hex("#B3261E"),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex("#1C1B1F"),
            on_background: Color::from_hex("#E6E1E5"),
            surface: Color::from_hex("#2B2930"),
            on_surface: Color::from_hex("#E6E1E5"),
            primary: Color::from_hex("#D0BCFF"),
            on_primary: Color::from_hex("#381E72"),
            error: Color::from_hex("#F2B8B5"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    // Pops on unwind too.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            THEME_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    THEME_STACK.with(|st| st.borrow_mut().push(theme));
    let _guard = Guard;
    f()
}

pub fn theme() -> Theme {
    THEME_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}
