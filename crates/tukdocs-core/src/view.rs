use crate::{Color, Modifier, Role, Semantics};
use std::rc::Rc;

pub type Callback = Rc<dyn Fn()>;
pub type CallbackBool = Rc<dyn Fn(bool)>;

/// Material icon names the screens use. Hosts map them to glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Add,
    Description,
    Folder,
    MoreVert,
    PictureAsPdf,
    Search,
    Settings,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Add => "add",
            Icon::Description => "description",
            Icon::Folder => "folder",
            Icon::MoreVert => "more_vert",
            Icon::PictureAsPdf => "picture_as_pdf",
            Icon::Search => "search",
            Icon::Settings => "settings",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    ScrollColumn,
    Card {
        on_click: Option<Callback>,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
        weight: FontWeight,
        max_lines: Option<u32>,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    IconButton {
        icon: Icon,
        on_click: Option<Callback>,
    },
    Checkbox {
        checked: bool,
        on_change: Option<CallbackBool>,
    },
    Icon {
        icon: Icon,
        tint: Color,
    },
    Image {
        resource: String,
    },
    DropdownMenu {
        expanded: bool,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::ScrollColumn => write!(f, "ScrollColumn"),
            ViewKind::Card { on_click } => f
                .debug_struct("Card")
                .field("clickable", &on_click.is_some())
                .finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
                weight,
                max_lines,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("weight", weight)
                .field("max_lines", max_lines)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::IconButton { icon, .. } => f
                .debug_struct("IconButton")
                .field("icon", icon)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::Checkbox { checked, .. } => f
                .debug_struct("Checkbox")
                .field("checked", checked)
                .finish(),
            ViewKind::Icon { icon, tint } => f
                .debug_struct("Icon")
                .field("icon", icon)
                .field("tint", tint)
                .finish(),
            ViewKind::Image { resource } => f
                .debug_struct("Image")
                .field("resource", resource)
                .finish(),
            ViewKind::DropdownMenu { expanded } => f
                .debug_struct("DropdownMenu")
                .field("expanded", expanded)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    pub fn role(&self) -> Option<Role> {
        self.semantics.as_ref().map(|s| s.role)
    }

    pub fn label(&self) -> Option<&str> {
        self.semantics.as_ref().and_then(|s| s.label.as_deref())
    }

    pub fn is_enabled(&self) -> bool {
        self.semantics.as_ref().is_none_or(|s| s.enabled)
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Pre-order walk over this node and its descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn find(&self, pred: impl Fn(&View) -> bool) -> Option<&View> {
        let mut found = None;
        self.walk(&mut |v| {
            if found.is_none() && pred(v) {
                found = Some(v);
            }
        });
        found
    }

    /// First node whose semantics label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Option<&View> {
        self.find(|v| v.label() == Some(label))
    }

    /// All text content, in tree order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |v| {
            if let ViewKind::Text { text, .. } = &v.kind {
                out.push(text.as_str());
            }
        });
        out
    }

    /// Invokes the click handler if the node is enabled and clickable.
    /// Returns whether anything ran.
    pub fn click(&self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let cb = match &self.kind {
            ViewKind::Button { on_click, .. }
            | ViewKind::IconButton { on_click, .. }
            | ViewKind::Card { on_click } => on_click.clone(),
            ViewKind::Checkbox {
                checked,
                on_change: Some(on_change),
            } => {
                let next = !*checked;
                let on_change = on_change.clone();
                Some(Rc::new(move || on_change(next)) as Callback)
            }
            _ => None,
        };
        match cb {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }

    pub fn is_actionable(&self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        match &self.kind {
            ViewKind::Button { on_click, .. }
            | ViewKind::IconButton { on_click, .. }
            | ViewKind::Card { on_click } => on_click.is_some(),
            ViewKind::Checkbox { on_change, .. } => on_change.is_some(),
            _ => false,
        }
    }
}
