/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    Checkbox,
    Image,
    Menu,
}

/// Semantics attached to a `View`, used by hosts for hit testing and
/// accessibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Semantics {
    pub role: Role,
    /// Name announced by screen readers; for buttons the action name.
    pub label: Option<String>,
    /// Disabled nodes stay in the tree but are never dispatched.
    pub enabled: bool,
    pub checked: Option<bool>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            enabled: true,
            checked: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}
