//! `summary` -- per-status counts.

use streamwatch_core::{Dashboard, ProxyClient};

use crate::cli::GlobalOpts;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    dashboard: &Dashboard<ProxyClient>,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = super::load(dashboard, global).await;
    let summary = session.summary();
    let color = output::should_color(settings.color);

    let out = output::render_single(settings.output, &summary, |s| {
        output::summary_line(s, color)
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
