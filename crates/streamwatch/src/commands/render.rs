//! `render` -- write the status page as static HTML.

use std::fs;

use tracing::info;

use streamwatch_core::{Dashboard, ProxyClient};

use crate::cli::{GlobalOpts, RenderArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    dashboard: &Dashboard<ProxyClient>,
    args: RenderArgs,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut session = super::load(dashboard, global).await;
    session.apply_filter(settings.filter_or_default(args.filter));

    let html = if args.fragment {
        session.to_html()
    } else {
        session.to_document(&args.title)
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html)?;
            info!(path = %path.display(), "page written");
            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => output::print_output(&html, global.quiet),
    }
    Ok(())
}
