// streamwatch-api: Async Rust client for the Twitch proxy (channels + streams)

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{FetchOutcome, ProxyClient};
pub use error::Error;
pub use models::{ChannelRecord, LiveSession, Preview, StreamRecord};
pub use transport::TransportConfig;
