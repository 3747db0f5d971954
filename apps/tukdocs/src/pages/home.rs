use std::rc::Rc;

use tukdocs_documents::{DocumentPicker, Documents, OpenOutcome};
use tukdocs_ui::*;

use crate::ui::{DocumentCard, Notice, QuickActionCard, WelcomeSection};

/// What the Home screen needs between frames.
#[derive(Clone)]
pub struct HomeState {
    pub documents: Rc<Documents>,
    pub picker: Rc<dyn DocumentPicker>,
    pub menu_expanded: Signal<bool>,
}

impl HomeState {
    pub fn new(documents: Documents, picker: impl DocumentPicker + 'static) -> Self {
        Self {
            documents: Rc::new(documents),
            picker: Rc::new(picker),
            menu_expanded: signal(false),
        }
    }

    /// Asks the picker for a document and opens it.
    fn pick_and_open(&self) -> impl Fn() + 'static {
        let documents = self.documents.clone();
        let picker = self.picker.clone();
        move || match picker.pick() {
            Some(locator) => {
                if let OpenOutcome::Failed { message } = documents.open_locator(&locator) {
                    log::debug!("picked document not opened: {message}");
                }
            }
            None => log::debug!("picker cancelled"),
        }
    }
}

pub fn screen(state: &HomeState) -> View {
    let failure = state.documents.last_failure().map(|message| {
        Notice(&message, {
            let documents = state.documents.clone();
            move || documents.dismiss_failure()
        })
    });

    let cards: Vec<View> = state
        .documents
        .list_recent()
        .into_iter()
        .map(|item| {
            DocumentCard(&item, {
                let documents = state.documents.clone();
                let item = item.clone();
                move || {
                    documents.open(&item);
                }
            })
        })
        .collect();

    Scaffold(
        Some(top_bar(state)),
        None,
        Some(FloatingActionButton(Icon::Add, "Add Document", state.pick_and_open())),
        ScrollColumn(Modifier::new().fill_max_size()).child((
            failure,
            WelcomeSection(),
            quick_actions(state),
            VSpace(24.0),
            Column(Modifier::new().fill_max_width().padding_horizontal(24.0)).child((
                Text("Recent Documents")
                    .size(18.0)
                    .weight(FontWeight::SemiBold)
                    .color(theme().on_background),
                VSpace(16.0),
                cards,
            )),
        )),
    )
}

fn top_bar(state: &HomeState) -> View {
    let menu = state.menu_expanded.clone();
    CenterAlignedTopAppBar(
        Text("TukDocs")
            .size(22.0)
            .weight(FontWeight::Bold)
            .color(theme().primary),
        vec![
            IconButton(Icon::Search, "Search", || log::info!("search is not available yet")),
            IconButton(Icon::MoreVert, "More", {
                let menu = menu.clone();
                move || menu.update(|open| *open = !*open)
            }),
            DropdownMenu(
                menu.get(),
                vec![DropdownMenuItem("Settings", Some(Icon::Settings), {
                    let menu = menu.clone();
                    move || {
                        log::info!("settings requested");
                        menu.set(false);
                    }
                })],
            ),
        ],
    )
}

fn quick_actions(state: &HomeState) -> View {
    Column(Modifier::new().fill_max_width().padding_horizontal(24.0)).child((
        Text("Quick Actions")
            .size(18.0)
            .weight(FontWeight::SemiBold)
            .color(theme().on_background),
        VSpace(16.0),
        Row(Modifier::new().fill_max_width()).child((
            QuickActionCard("Open File", Icon::Folder, theme().primary, state.pick_and_open()),
            HSpace(16.0),
            QuickActionCard("Word to PDF", Icon::PictureAsPdf, Color::RED, {
                let documents = state.documents.clone();
                move || {
                    documents.convert_to_pdf(None);
                }
            }),
        )),
    ))
}
