//! `list` -- one row per tracked channel.

use streamwatch_core::{Dashboard, ProxyClient};

use crate::cli::{GlobalOpts, ListArgs, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    dashboard: &Dashboard<ProxyClient>,
    args: ListArgs,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut session = super::load(dashboard, global).await;
    session.apply_filter(settings.filter_or_default(args.filter));

    let color = output::should_color(settings.color);
    let rows = session.visible_rows();
    let mut out = output::render_list(
        settings.output,
        &rows,
        |r| output::ChannelRow::from_row(r, color),
        |r| r.identity.to_string(),
    )?;

    if settings.output == OutputFormat::Table {
        out.push('\n');
        out.push_str(&output::summary_line(&session.summary(), color));
    }

    output::print_output(&out, global.quiet);
    Ok(())
}
