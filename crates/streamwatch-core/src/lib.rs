// streamwatch-core: Derivation, rendering and filtering of channel status cards.

pub mod config;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod model;
pub mod render;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, DEFAULT_IDENTITIES, DashboardConfig};
pub use convert::build_row;
pub use dashboard::{ChannelSource, Dashboard};
pub use error::CoreError;
pub use filter::FilterControls;
pub use render::{Element, Node, NodeId, RegistryEntry, RenderSession, StatusSummary};

pub use model::{Classification, FilterMode, Identity, LiveDetails, PresentationRow};

// Wire records, re-exported so consumers need not depend on the api crate.
pub use streamwatch_api::{
    ChannelRecord, FetchOutcome, LiveSession, Preview, ProxyClient, StreamRecord,
};
