use std::rc::Rc;

use tukdocs_navigation::OnboardingFlow;
use tukdocs_ui::*;

pub fn screen(flow: &Rc<OnboardingFlow>) -> View {
    Column(Modifier::new().fill_max_size().padding(24.0)).child((
        Spacer(),
        Image("onboarding_illustration", "TukDocs illustration")
            .modifier(Modifier::new().size(280.0, 280.0)),
        VSpace(32.0),
        Text("Get started with TukDocs today")
            .size(28.0)
            .weight(FontWeight::Bold)
            .color(theme().on_background),
        VSpace(12.0),
        Text("Open Free Ad Free")
            .size(16.0)
            .color(theme().on_background.faded(0.7)),
        Spacer(),
        Button("Open Docs", {
            let flow = flow.clone();
            move || {
                if let Err(e) = flow.advance_from_onboarding() {
                    log::warn!("{e}");
                }
            }
        })
        .modifier(
            Modifier::new()
                .fill_max_width()
                .height(56.0)
                .background(theme().primary)
                .clip_rounded(16.0),
        ),
    ))
}
