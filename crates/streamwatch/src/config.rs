//! CLI configuration -- thin wrapper around `streamwatch_config`.
//!
//! Loads the shared config and layers `GlobalOpts` flag overrides
//! (--base-url, --identity, --timeout, --output, --color) on top.

use std::path::PathBuf;

use clap::ValueEnum;

use streamwatch_core::{DashboardConfig, FilterMode};

use crate::cli::{ColorMode, FilterArg, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use streamwatch_config::{Config, config_path, load_config_from, save_config_to};

/// Everything a command needs after flags and config are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub dashboard: DashboardConfig,
    pub output: OutputFormat,
    pub color: ColorMode,
    pub filter: FilterMode,
}

/// Config file in effect: `--config` if given, else the platform default.
pub fn active_config_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load the config file (if any) plus environment.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(load_config_from(&active_config_path(global))?)
}

/// Apply CLI flag overrides to a loaded config.
pub fn apply_overrides(mut cfg: Config, global: &GlobalOpts) -> Config {
    if let Some(ref base_url) = global.base_url {
        cfg.base_url.clone_from(base_url);
    }
    if !global.identities.is_empty() {
        cfg.identities.clone_from(&global.identities);
    }
    if global.timeout.is_some() {
        cfg.timeout = global.timeout;
    }
    cfg
}

/// Merge config and flags into `Settings`.
pub fn resolve(global: &GlobalOpts) -> Result<Settings, CliError> {
    let cfg = apply_overrides(load(global)?, global);
    settings_from(&cfg, global)
}

fn settings_from(cfg: &Config, global: &GlobalOpts) -> Result<Settings, CliError> {
    let output = match global.output {
        Some(output) => output,
        None => parse_value_enum("defaults.output", &cfg.defaults.output)?,
    };
    let color = match global.color {
        Some(color) => color,
        None => parse_value_enum("defaults.color", &cfg.defaults.color)?,
    };

    let dashboard = cfg.to_dashboard_config()?;

    Ok(Settings {
        dashboard,
        output,
        color,
        filter: cfg.defaults.filter,
    })
}

fn parse_value_enum<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}

impl Settings {
    /// A command-level `--filter` wins over the configured default.
    pub fn filter_or_default(&self, arg: Option<FilterArg>) -> FilterMode {
        arg.map_or(self.filter, FilterMode::from)
    }
}

impl From<FilterArg> for FilterMode {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FilterMode::All,
            FilterArg::Online => FilterMode::Online,
            FilterArg::Offline => FilterMode::Offline,
        }
    }
}
