// ── Tracked channel identity ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a tracked channel, exactly as configured.
///
/// Used verbatim in endpoint paths and as the fallback title. No case
/// folding: `ESL_SC2` and `esl_sc2` are different identities here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Profile page used when the channel record has no URL.
    pub fn profile_url(&self) -> String {
        format!("https://www.twitch.tv/{}", self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}
