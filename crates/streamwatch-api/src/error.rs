use thiserror::Error;

/// Top-level error type for the `streamwatch-api` crate.
///
/// Only ever seen by direct callers of `get_channel` / `get_stream`.
/// `fetch_identity` swallows these and degrades to an empty outcome.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the provider answered with something that is not JSON.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Deserialization { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_is_prefixed_once() {
        let err = Error::Build("no TLS backend".into());
        assert_eq!(err.to_string(), "Failed to build HTTP client: no TLS backend");
        assert!(!err.is_transport());
        assert!(!err.is_malformed());
    }
}
