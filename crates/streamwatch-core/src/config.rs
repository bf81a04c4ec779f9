// ── Runtime dashboard configuration ──
//
// Describes *what* to load: the proxy endpoint and the tracked identities.
// Never touches disk; the CLI builds one from `streamwatch-config` and
// hands it in.

use std::time::Duration;

use url::Url;

use crate::error::CoreError;
use crate::model::Identity;

/// Public proxy that serves Twitch data without an API key.
pub const DEFAULT_BASE_URL: &str = "https://twitch-proxy.freecodecamp.rocks/twitch-api";

/// Channels tracked when nothing else is configured.
pub const DEFAULT_IDENTITIES: &[&str] = &[
    "ESL_SC2",
    "OgamingSC2",
    "cretetion",
    "freecodecamp",
    "storbeck",
    "habathcx",
    "RobotCaleb",
    "noobs2ninjas",
];

/// Configuration for one dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Proxy base URL; endpoints are `{base}/channels/{id}` and `{base}/streams/{id}`.
    pub base_url: Url,
    /// Tracked identities, in display order.
    pub identities: Vec<Identity>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            identities: DEFAULT_IDENTITIES.iter().copied().map(Identity::from).collect(),
            timeout: None,
        }
    }
}

impl DashboardConfig {
    /// Build a config from raw strings, validating the URL and the identity list.
    pub fn new<I, S>(base_url: &str, identities: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base_url = Url::parse(base_url).map_err(|e| CoreError::Config {
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        let config = Self {
            base_url,
            identities: identities
                .into_iter()
                .map(|s| Identity::new(s.into()))
                .collect(),
            timeout: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject configs that could never render anything meaningful.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.identities.is_empty() {
            return Err(CoreError::Config {
                message: "at least one identity must be tracked".into(),
            });
        }
        if let Some(blank) = self.identities.iter().position(|id| id.as_str().trim().is_empty()) {
            return Err(CoreError::Config {
                message: format!("identity #{} is blank", blank + 1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracks_eight_channels_in_order() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.identities.len(), 8);
        assert_eq!(cfg.identities[0].as_str(), "ESL_SC2");
        assert_eq!(cfg.identities[7].as_str(), "noobs2ninjas");
        assert_eq!(cfg.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, None);
    }

    #[test]
    fn new_rejects_empty_list() {
        let err = DashboardConfig::new(DEFAULT_BASE_URL, Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }

    #[test]
    fn new_rejects_blank_identity() {
        let err = DashboardConfig::new(DEFAULT_BASE_URL, ["a", "  "]).unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn new_rejects_bad_url() {
        assert!(DashboardConfig::new("not a url", ["a"]).is_err());
    }
}
