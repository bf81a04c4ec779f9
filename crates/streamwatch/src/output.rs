//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use streamwatch_core::{Classification, PresentationRow, StatusSummary};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Status badge text, colored when enabled.
pub fn badge(class: Classification, color: bool) -> String {
    let text = class.badge();
    if !color {
        return text.to_owned();
    }
    match class {
        Classification::Online => text.green().bold().to_string(),
        Classification::Offline => text.dimmed().to_string(),
        Classification::Closed => text.red().to_string(),
    }
}

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct ChannelRow {
    #[tabled(rename = "Channel")]
    pub title: String,
    #[tabled(rename = "Status")]
    pub badge: String,
    #[tabled(rename = "Game")]
    pub game: String,
    #[tabled(rename = "Viewers")]
    pub viewers: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Link")]
    pub link: String,
}

impl ChannelRow {
    pub fn from_row(row: &PresentationRow, color: bool) -> Self {
        let (game, viewers) = match row.live {
            Some(ref live) => (live.game.clone(), live.viewers.to_string()),
            None => (String::new(), String::new()),
        };
        Self {
            title: row.title.clone(),
            badge: badge(row.classification, color),
            game,
            viewers,
            description: row.description().unwrap_or_default().to_owned(),
            link: row.link.clone(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// `plain` calls `id_fn` on each item to emit one identifier per line.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(data.iter().map(&id_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table and plain output both use `detail_fn`, since a single record has
/// no useful table shape.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table | OutputFormat::Plain => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// One-line summary used by both `summary` and the table footer.
pub fn summary_line(summary: &StatusSummary, color: bool) -> String {
    format!(
        "{} {}  {} {}  {} {}",
        summary.online,
        badge(Classification::Online, color),
        summary.offline,
        badge(Classification::Offline, color),
        summary.closed,
        badge(Classification::Closed, color),
    )
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(out)
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}
