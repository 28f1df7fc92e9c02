// Terminal settings page built on the sub-tab controller.
// Loads settings, builds the controller over an in-memory element tree, and runs the UI.

mod app;
mod config;
mod host;
mod logging;
mod tabs;

use std::rc::Rc;

use subtabs::{Element, Result, SubTabController};
use tokio::task::LocalSet;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::host::FileBackedPlugin;
use crate::tabs::DemoSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config.log_path)?;

    let plugin = Rc::new(FileBackedPlugin::<DemoSettings>::load(
        &config.settings_path,
    )?);
    info!(
        settings = %plugin.path().display(),
        tab = %config.initial_tab,
        "starting settings page"
    );
    let controller = SubTabController::new(
        Element::root(),
        plugin,
        Rc::new(tabs::registry()),
        config.initial_tab,
    )?;
    let mut app = App::new(controller);

    let mut terminal = ratatui::try_init()?;
    // Saves are spawned as local tasks, so the loop runs inside a LocalSet.
    let result = LocalSet::new().run_until(app.run(&mut terminal)).await;
    ratatui::try_restore()?;

    result
}
