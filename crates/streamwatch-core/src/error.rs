// ── Core error types ──
//
// A load cycle never fails: fetch problems degrade to placeholder rows.
// These errors only surface while setting up a dashboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API client error: {message}")]
    Api { message: String },
}

impl From<streamwatch_api::Error> for CoreError {
    fn from(err: streamwatch_api::Error) -> Self {
        match err {
            streamwatch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            streamwatch_api::Error::Build(message) => CoreError::Config { message },
            other => CoreError::Api {
                message: other.to_string(),
            },
        }
    }
}
