//! Command dispatch: bridges CLI args -> one dashboard load -> output formatting.

pub mod config_cmd;
pub mod list;
pub mod render;
pub mod summary;

use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use streamwatch_core::{Dashboard, ProxyClient, RenderSession};

use crate::cli::{Command, GlobalOpts};
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a network-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    dashboard: &Dashboard<ProxyClient>,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => list::handle(dashboard, args, settings, global).await,
        Command::Render(args) => render::handle(dashboard, args, settings, global).await,
        Command::Summary => summary::handle(dashboard, settings, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

/// Run one load cycle, with a spinner on stderr when it is a terminal.
pub(crate) async fn load(
    dashboard: &Dashboard<ProxyClient>,
    global: &GlobalOpts,
) -> RenderSession {
    let spinner = (!global.quiet && io::stderr().is_terminal()).then(|| {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!(
            "Loading {} channels...",
            dashboard.identities().len()
        ));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    });

    let session = dashboard.load_all().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    session
}
