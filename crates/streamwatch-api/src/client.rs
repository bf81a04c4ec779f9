// Proxy API HTTP client
//
// Wraps `reqwest::Client` with endpoint URL construction and lenient JSON
// decoding. The proxy answers unknown channels with a JSON error body and a
// non-2xx status, so bodies are decoded regardless of status.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::models::{ChannelRecord, StreamRecord};
use crate::transport::TransportConfig;

/// Everything fetched for one identity.
///
/// Both fields are `None` when either request failed: a partial result is
/// never reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub channel: Option<ChannelRecord>,
    pub stream: Option<StreamRecord>,
}

impl FetchOutcome {
    pub fn new(channel: ChannelRecord, stream: StreamRecord) -> Self {
        Self {
            channel: Some(channel),
            stream: Some(stream),
        }
    }

    /// `true` when nothing was fetched (total or partial failure).
    pub fn is_empty(&self) -> bool {
        self.channel.is_none() && self.stream.is_none()
    }
}

/// Raw HTTP client for the Twitch proxy.
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ProxyClient {
    /// Create a client from a base URL such as
    /// `https://twitch-proxy.freecodecamp.rocks/twitch-api`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, base_url)
    }

    /// Create a client from a base URL string and a pre-built `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Self::with_client(http, Url::parse(base_url)?)
    }

    fn with_client(http: reqwest::Client, base_url: Url) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() {
            return Err(Error::Build(format!("base URL cannot hold a path: {base_url}")));
        }
        Ok(Self { http, base_url })
    }

    /// The proxy base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/channels/{identity}`
    pub fn channel_url(&self, identity: &str) -> Url {
        self.endpoint("channels", identity)
    }

    /// `{base}/streams/{identity}`
    pub fn stream_url(&self, identity: &str) -> Url {
        self.endpoint("streams", identity)
    }

    fn endpoint(&self, resource: &str, identity: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor: the base can always hold path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(resource).push(identity);
        }
        url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the channel object for one identity.
    pub async fn get_channel(&self, identity: &str) -> Result<ChannelRecord, Error> {
        self.get(self.channel_url(identity)).await
    }

    /// Fetch the stream envelope for one identity.
    pub async fn get_stream(&self, identity: &str) -> Result<StreamRecord, Error> {
        self.get(self.stream_url(identity)).await
    }

    /// Fetch channel and stream concurrently.
    ///
    /// Resolves once both requests have settled. Any failure on either side
    /// is logged and collapses the outcome to empty.
    pub async fn fetch_identity(&self, identity: &str) -> FetchOutcome {
        let (channel, stream) = tokio::join!(self.get_channel(identity), self.get_stream(identity));

        match (channel, stream) {
            (Ok(channel), Ok(stream)) => FetchOutcome::new(channel, stream),
            (Err(e), _) | (_, Err(e)) => {
                if e.is_malformed() {
                    warn!(identity, error = %e, "proxy sent a non-JSON body, rendering placeholder");
                } else {
                    warn!(identity, error = %e, "fetch failed, rendering placeholder");
                }
                FetchOutcome::default()
            }
        }
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "non-success status, decoding body anyway");
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
