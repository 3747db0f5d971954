use tukdocs::{App, AppConfig, CONFIG_FILE};
use tukdocs_documents::Documents;
use tukdocs_platform::{
    ExtensionResolver, StdinPicker, SystemOpener, init_logging, run_terminal_app,
};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::load(CONFIG_FILE)?;
    let documents = Documents::new(
        config.document_source(),
        SystemOpener::new(),
        ExtensionResolver,
    );
    let mut app = App::new(&config, documents, StdinPicker);

    run_terminal_app(move |s| app.compose(s))
}
