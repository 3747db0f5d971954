use tukdocs_ui::*;

/// Logo shown until the splash timer fires. Nothing here is actionable.
pub fn screen() -> View {
    Column(Modifier::new().fill_max_size().padding(48.0)).child((
        Spacer(),
        Image("splash_logo", "TukDocs logo"),
        VSpace(16.0),
        Text("TukDocs")
            .size(28.0)
            .weight(FontWeight::Bold)
            .color(theme().primary),
        Spacer(),
    ))
}
