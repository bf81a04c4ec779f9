// ── Load orchestration ──
//
// Fans out one fetch per tracked identity, joins them all, then renders
// rows strictly in identity order. Nothing is rendered while any fetch
// is still pending.

use std::future::Future;

use futures_util::future::join_all;
use streamwatch_api::{FetchOutcome, ProxyClient, TransportConfig};
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::convert::build_row;
use crate::error::CoreError;
use crate::model::Identity;
use crate::render::RenderSession;

/// Where channel and stream records come from.
///
/// Implementations must never fail: problems degrade to an empty outcome.
pub trait ChannelSource {
    fn fetch(&self, identity: &Identity) -> impl Future<Output = FetchOutcome> + Send;
}

impl ChannelSource for ProxyClient {
    async fn fetch(&self, identity: &Identity) -> FetchOutcome {
        self.fetch_identity(identity.as_str()).await
    }
}

/// A fixed list of identities bound to a record source.
pub struct Dashboard<S> {
    source: S,
    identities: Vec<Identity>,
}

impl Dashboard<ProxyClient> {
    /// Build a dashboard backed by the HTTP proxy described in `config`.
    pub fn connect(config: &DashboardConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let client = ProxyClient::new(config.base_url.clone(), &transport)?;
        Ok(Self::new(client, config.identities.clone()))
    }
}

impl<S: ChannelSource> Dashboard<S> {
    pub fn new(source: S, identities: Vec<Identity>) -> Self {
        Self { source, identities }
    }

    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one load cycle into a fresh session.
    pub async fn load_all(&self) -> RenderSession {
        let mut session = RenderSession::new();
        self.reload(&mut session).await;
        session
    }

    /// Run one load cycle into an existing session.
    ///
    /// Everything previously rendered is discarded. The session's active
    /// filter mode survives and is re-applied to the new rows.
    pub async fn reload(&self, session: &mut RenderSession) {
        session.begin_loading();
        debug!(count = self.identities.len(), "fetching identities");

        let outcomes = join_all(self.identities.iter().map(|id| self.source.fetch(id))).await;

        session.finish_loading();
        // Results are positional: render order is identity order, never
        // completion order.
        for (identity, outcome) in self.identities.iter().zip(&outcomes) {
            session.render_row(build_row(
                identity,
                outcome.channel.as_ref(),
                outcome.stream.as_ref(),
            ));
        }
        session.apply_filter(session.mode());

        let summary = session.summary();
        info!(
            online = summary.online,
            closed = summary.closed,
            offline = summary.offline,
            "load cycle complete"
        );
    }
}
