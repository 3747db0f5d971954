use std::rc::Rc;

use tukdocs_core::*;

use crate::{Box, Column, Icon, IconButton, Row, Spacer, Text, TextStyle, ViewExt, theme};

pub fn Card(modifier: Modifier, on_click: Option<Rc<dyn Fn()>>, content: View) -> View {
    let clickable = on_click.is_some();
    let v = View::new(ViewKind::Card { on_click })
        .modifier(modifier.background(theme().surface))
        .with_children(vec![content]);
    if clickable {
        v.semantics(Semantics::new(Role::Button))
    } else {
        v
    }
}

/// Card with an accessibility label; clicking it runs `on_click`.
pub fn ClickableCard(
    modifier: Modifier,
    label: impl Into<String>,
    on_click: impl Fn() + 'static,
    content: View,
) -> View {
    let on_click: Rc<dyn Fn()> = Rc::new(on_click);
    Card(modifier, Some(on_click), content).semantics(Semantics::new(Role::Button).label(label))
}

pub fn CenterAlignedTopAppBar(title: View, actions: Vec<View>) -> View {
    Row(Modifier::new()
        .fill_max_width()
        .padding(8.0)
        .background(theme().background))
    .child((Spacer(), title, Spacer(), Row(Modifier::new()).child(actions)))
}

pub fn FloatingActionButton(
    icon: crate::Icon,
    label: impl Into<String>,
    on_click: impl Fn() + 'static,
) -> View {
    let mut fab = IconButton(icon, label, on_click);
    fab.modifier = Modifier::new()
        .size(56.0, 56.0)
        .background(theme().primary)
        .clip_rounded(16.0);
    fab
}

/// Menu anchored to its caller. Collapsed menus keep no items in the tree.
pub fn DropdownMenu(expanded: bool, items: Vec<View>) -> View {
    let menu = View::new(ViewKind::DropdownMenu { expanded })
        .modifier(Modifier::new().background(theme().surface))
        .semantics(Semantics::new(Role::Menu));
    if expanded { menu.child(items) } else { menu }
}

pub fn DropdownMenuItem(
    text: impl Into<String>,
    leading: Option<crate::Icon>,
    on_click: impl Fn() + 'static,
) -> View {
    let text = text.into();
    let content = Row(Modifier::new().padding(12.0)).child((
        leading.map(|i| Icon(i, theme().on_surface)),
        Text(text.clone()).color(theme().on_surface),
    ));
    let on_click: Rc<dyn Fn()> = Rc::new(on_click);
    View::new(ViewKind::Card {
        on_click: Some(on_click),
    })
    .with_children(vec![content])
    .semantics(Semantics::new(Role::Button).label(text))
}

/// Top bar, body, then the bottom bar and floating action on top.
pub fn Scaffold(
    top_bar: Option<View>,
    bottom_bar: Option<View>,
    floating_action: Option<View>,
    content: View,
) -> View {
    Column(Modifier::new()
        .fill_max_size()
        .background(theme().background))
    .child((
        top_bar,
        Box(Modifier::new().weight(1.0)).child(content),
        bottom_bar,
        floating_action,
    ))
}
