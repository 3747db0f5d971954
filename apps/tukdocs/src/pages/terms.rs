use std::rc::Rc;

use tukdocs_navigation::OnboardingFlow;
use tukdocs_ui::*;

use crate::ui::TermsSection;

pub const CLAUSES: [(&str, &str); 5] = [
    (
        "1. Acceptance of Terms",
        "By accessing and using TukDocs, you accept and agree to be bound by the terms and provision of this agreement.",
    ),
    (
        "2. Use License",
        "Permission is granted to temporarily use TukDocs for personal, non-commercial transitory viewing only.",
    ),
    (
        "3. Privacy",
        "Your privacy is important to us. TukDocs is designed to be open and free, and we do not collect personal data without your consent.",
    ),
    (
        "4. Document Handling",
        "TukDocs allows you to open, read, and organize your documents. You retain all rights to your documents.",
    ),
    (
        "5. No Warranty",
        "TukDocs is provided 'as is' without any warranties, expressed or implied.",
    ),
];

/// `acknowledged` drives both the checkbox and whether "Agree & Continue"
/// can be dispatched.
pub fn screen(flow: &Rc<OnboardingFlow>, acknowledged: bool, last_updated: &str) -> View {
    let clauses: Vec<View> = CLAUSES
        .iter()
        .map(|(title, body)| TermsSection(title, body))
        .collect();

    Column(Modifier::new().fill_max_size().padding(24.0)).child((
        Text("Terms & Conditions")
            .size(28.0)
            .weight(FontWeight::Bold)
            .color(theme().on_background),
        VSpace(8.0),
        Text("Please read and agree to continue")
            .size(16.0)
            .color(theme().on_background.faded(0.7)),
        VSpace(24.0),
        Card(
            Modifier::new().fill_max_width().weight(1.0).clip_rounded(16.0),
            None,
            ScrollColumn(Modifier::new().padding(20.0)).child((
                Text(format!("Last updated: {last_updated}"))
                    .size(12.0)
                    .color(theme().on_surface.faded(0.6)),
                VSpace(16.0),
                clauses,
            )),
        ),
        VSpace(24.0),
        Checkbox(acknowledged, "I have read and agree to the Terms & Conditions", {
            let flow = flow.clone();
            move |v| {
                if let Err(e) = flow.set_acknowledged(v) {
                    log::warn!("{e}");
                }
            }
        }),
        VSpace(16.0),
        Button("Agree & Continue", {
            let flow = flow.clone();
            move || {
                if let Err(e) = flow.advance_from_terms() {
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
        )
        .enabled(acknowledged),
    ))
}
