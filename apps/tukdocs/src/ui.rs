#![allow(non_snake_case)]

use tukdocs_documents::DocumentItem;
use tukdocs_ui::text::ellipsize;
use tukdocs_ui::*;

/// Longest document name shown on a card before it is cut with `…`.
pub const CARD_NAME_MAX: usize = 28;

/// A numbered clause on the Terms screen.
pub fn TermsSection(title: &str, body: &str) -> View {
    Column(Modifier::new().fill_max_width().padding_bottom(16.0)).child((
        Text(title)
            .size(16.0)
            .weight(FontWeight::SemiBold)
            .color(theme().on_surface),
        VSpace(8.0),
        Text(body).size(14.0).color(theme().on_surface.faded(0.8)),
    ))
}

pub fn WelcomeSection() -> View {
    Column(Modifier::new().fill_max_width().padding(24.0)).child((
        Text("Welcome back!")
            .size(24.0)
            .weight(FontWeight::Bold)
            .color(theme().on_background),
        VSpace(8.0),
        Text("Ready to work on your documents?")
            .size(16.0)
            .color(theme().on_background.faded(0.7)),
    ))
}

pub fn QuickActionCard(
    title: &str,
    icon: Icon,
    tint: Color,
    on_click: impl Fn() + 'static,
) -> View {
    ClickableCard(
        Modifier::new().weight(1.0).clip_rounded(16.0).elevation(4.0),
        title,
        on_click,
        Column(Modifier::new().fill_max_width().padding(20.0)).child((
            Box(Modifier::new()
                .size(48.0, 48.0)
                .clip_rounded(24.0)
                .background(tint.faded(0.1)))
            .child(Icon(icon, tint)),
            VSpace(12.0),
            Text(title)
                .size(14.0)
                .weight(FontWeight::Medium)
                .color(theme().on_surface),
        )),
    )
}

/// One row of "Recent Documents": kind icon, name, `TYPE • SIZE`.
pub fn DocumentCard(item: &DocumentItem, on_click: impl Fn() + 'static) -> View {
    let muted = theme().on_surface.faded(0.6);
    ClickableCard(
        Modifier::new()
            .key(item.name())
            .fill_max_width()
            .padding_bottom(12.0)
            .clip_rounded(12.0)
            .elevation(2.0),
        item.name(),
        on_click,
        Row(Modifier::new().fill_max_width().padding(16.0)).child((
            Box(Modifier::new()
                .size(48.0, 48.0)
                .clip_rounded(12.0)
                .background(item.color().faded(0.1)))
            .child(Icon(item.icon(), item.color())),
            HSpace(16.0),
            Column(Modifier::new().weight(1.0)).child((
                Text(ellipsize(item.name(), CARD_NAME_MAX))
                    .size(16.0)
                    .weight(FontWeight::Medium)
                    .max_lines(1)
                    .color(theme().on_surface),
                VSpace(4.0),
                Text(item.caption()).size(12.0).color(muted),
            )),
            Icon(Icon::MoreVert, muted),
        )),
    )
}

/// Error strip shown above the Home content until dismissed.
pub fn Notice(message: &str, on_dismiss: impl Fn() + 'static) -> View {
    Row(Modifier::new()
        .fill_max_width()
        .padding(12.0)
        .background(theme().error.faded(0.1)))
    .child((
        Text(message).color(theme().error).modifier(Modifier::new().weight(1.0)),
        Button("Dismiss", on_dismiss),
    ))
}
