// ── Presentation rows ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::identity::Identity;

/// Exactly one of three states per identity per load cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Classification {
    /// A live session is present.
    Online,
    /// Not live, and the provider flagged the channel as missing/closed.
    Closed,
    /// Neither of the above.
    Offline,
}

impl Classification {
    /// Uppercase badge label.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Closed => "CLOSED",
            Self::Offline => "OFFLINE",
        }
    }

    /// CSS class used on the badge element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Closed => "closed",
            Self::Offline => "offline",
        }
    }
}

/// Visibility filter over rendered rows.
///
/// `Offline` only matches rows that are neither online nor closed; closed
/// channels are reachable through `All` alone.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilterMode {
    #[default]
    All,
    Online,
    Offline,
}

impl FilterMode {
    /// Every mode, in control order.
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Online, FilterMode::Offline];

    /// Whether a row with these flags is visible under this mode.
    pub fn admits(self, online: bool, closed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Online => online,
            Self::Offline => !online && !closed,
        }
    }

    /// Element id of the control that activates this mode.
    pub fn control_id(self) -> &'static str {
        match self {
            Self::All => "show-all",
            Self::Online => "show-online",
            Self::Offline => "show-offline",
        }
    }

    /// Human label for the control.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

/// Details shown only for live channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveDetails {
    /// Game being played; empty when unknown.
    pub game: String,
    /// Current viewer count; 0 when unknown.
    pub viewers: u64,
    /// Medium preview image, if the provider sent one.
    pub preview: Option<String>,
}

/// Everything needed to draw one status card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRow {
    pub identity: Identity,
    pub link: String,
    pub logo: String,
    pub title: String,
    /// Channel status text; empty when absent.
    pub status: String,
    pub classification: Classification,
    /// Present iff `classification` is `Online`.
    pub live: Option<LiveDetails>,
}

impl PresentationRow {
    pub fn is_online(&self) -> bool {
        self.classification == Classification::Online
    }

    pub fn is_closed(&self) -> bool {
        self.classification == Classification::Closed
    }

    pub fn visible_under(&self, mode: FilterMode) -> bool {
        mode.admits(self.is_online(), self.is_closed())
    }

    /// Inline suffix shown next to the title: ` — {status}`.
    pub fn status_suffix(&self) -> Option<String> {
        (!self.status.is_empty()).then(|| format!(" — {}", self.status))
    }

    /// Trailing description line for rows that are not live.
    pub fn description(&self) -> Option<&str> {
        (self.live.is_none() && !self.status.is_empty()).then_some(self.status.as_str())
    }
}
