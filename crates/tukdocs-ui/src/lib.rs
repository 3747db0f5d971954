#![allow(non_snake_case)]
//! Widgets, theme locals and text helpers.

pub mod locals;
pub mod material3;
pub mod text;

use std::rc::Rc;

pub use locals::{Theme, theme, with_theme};
pub use material3::*;
pub use tukdocs_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    View::new(ViewKind::Surface)
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

/// Vertically scrolling column; the host decides how much is visible.
pub fn ScrollColumn(modifier: Modifier) -> View {
    View::new(ViewKind::ScrollColumn).modifier(modifier)
}

pub fn Spacer() -> View {
    Box(Modifier::new().weight(1.0))
}

/// Fixed-height gap.
pub fn VSpace(dp: f32) -> View {
    Box(Modifier::new().height(dp))
}

/// Fixed-width gap.
pub fn HSpace(dp: f32) -> View {
    Box(Modifier::new().width(dp))
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: theme().on_background,
        font_size: 16.0,
        weight: FontWeight::Normal,
        max_lines: None,
    })
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(ViewKind::Button {
        text: text.clone(),
        on_click: Some(Rc::new(on_click)),
    })
    .semantics(Semantics::new(Role::Button).label(text))
}

pub fn IconButton(icon: Icon, label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::IconButton {
        icon,
        on_click: Some(Rc::new(on_click)),
    })
    .semantics(Semantics::new(Role::Button).label(label))
}

pub fn Checkbox(
    checked: bool,
    label: impl Into<String>,
    on_change: impl Fn(bool) + 'static,
) -> View {
    View::new(ViewKind::Checkbox {
        checked,
        on_change: Some(Rc::new(on_change)),
    })
    .semantics(Semantics::new(Role::Checkbox).label(label).checked(checked))
}

pub fn Icon(icon: Icon, tint: Color) -> View {
    View::new(ViewKind::Icon { icon, tint })
}

pub fn Image(resource: impl Into<String>, description: impl Into<String>) -> View {
    View::new(ViewKind::Image {
        resource: resource.into(),
    })
    .semantics(Semantics::new(Role::Image).label(description))
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
    /// Marks an actionable node disabled: kept in the tree, never dispatched.
    fn enabled(self, enabled: bool) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }

    fn enabled(mut self, enabled: bool) -> Self {
        let s = self
            .semantics
            .take()
            .unwrap_or_else(|| Semantics::new(Role::Button));
        self.semantics(s.enabled(enabled))
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A);
impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);

pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp_font: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    fn max_lines(self, n: u32) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }

    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = dp_font;
        }
        self
    }

    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }

    fn max_lines(mut self, n: u32) -> View {
        if let ViewKind::Text { max_lines, .. } = &mut self.kind {
            *max_lines = Some(n);
        }
        self
    }
}
