// ── Wire-to-presentation conversion ──
//
// Bridges raw `streamwatch_api` records into `PresentationRow`. Every
// optional field falls back on its own; empty strings count as absent.
// A fully missing record renders the same as an empty one.

use streamwatch_api::{ChannelRecord, FetchOutcome, LiveSession, StreamRecord};

use crate::model::{Classification, Identity, LiveDetails, PresentationRow};

/// Logo shown when the channel has none.
pub const PLACEHOLDER_LOGO: &str =
    "https://static-cdn.jtvnw.net/jtv_user_pictures/hosted_images/GlitchIcon_purple.png";

// ── Helpers ────────────────────────────────────────────────────────

/// Treat `None` and `""` alike.
fn present(raw: Option<&String>) -> Option<&str> {
    raw.map(String::as_str).filter(|s| !s.is_empty())
}

/// Online beats closed beats offline.
fn classify(channel: Option<&ChannelRecord>, stream: Option<&StreamRecord>) -> Classification {
    if stream.and_then(StreamRecord::live).is_some() {
        Classification::Online
    } else if channel.is_some_and(ChannelRecord::has_error) {
        Classification::Closed
    } else {
        Classification::Offline
    }
}

fn live_details(session: &LiveSession) -> LiveDetails {
    LiveDetails {
        game: present(session.game.as_ref()).unwrap_or_default().to_owned(),
        viewers: session.viewers.unwrap_or(0),
        preview: session
            .preview
            .as_ref()
            .and_then(|p| present(p.medium.as_ref()))
            .map(str::to_owned),
    }
}

// ── Row builder ────────────────────────────────────────────────────

/// Derive the presentation row for one identity. Pure.
pub fn build_row(
    identity: &Identity,
    channel: Option<&ChannelRecord>,
    stream: Option<&StreamRecord>,
) -> PresentationRow {
    // An absent record renders exactly like an empty one.
    let empty = ChannelRecord::default();
    let ch = channel.unwrap_or(&empty);

    let classification = classify(channel, stream);
    let live = match classification {
        Classification::Online => stream.and_then(StreamRecord::live).map(live_details),
        Classification::Closed | Classification::Offline => None,
    };

    PresentationRow {
        identity: identity.clone(),
        link: present(ch.url.as_ref()).map_or_else(|| identity.profile_url(), str::to_owned),
        logo: present(ch.logo.as_ref()).unwrap_or(PLACEHOLDER_LOGO).to_owned(),
        title: present(ch.display_name.as_ref())
            .unwrap_or(identity.as_str())
            .to_owned(),
        status: present(ch.status.as_ref()).unwrap_or_default().to_owned(),
        classification,
        live,
    }
}

impl PresentationRow {
    /// Convenience wrapper over [`build_row`] for a fetch outcome.
    pub fn from_outcome(identity: &Identity, outcome: &FetchOutcome) -> Self {
        build_row(identity, outcome.channel.as_ref(), outcome.stream.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn channel(value: serde_json::Value) -> ChannelRecord {
        serde_json::from_value(value).unwrap()
    }

    fn stream(value: serde_json::Value) -> StreamRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn total_failure_renders_placeholder_offline() {
        let id = Identity::from("X");
        let row = build_row(&id, None, None);

        assert_eq!(row.logo, PLACEHOLDER_LOGO);
        assert_eq!(row.title, "X");
        assert_eq!(row.link, "https://www.twitch.tv/X");
        assert_eq!(row.status, "");
        assert_eq!(row.classification, Classification::Offline);
        assert_eq!(row.live, None);
        assert_eq!(row.description(), None);
    }

    #[test]
    fn live_channel_with_preview() {
        let id = Identity::from("Y");
        let ch = channel(json!({ "display_name": "Y Team", "status": "Live now" }));
        let st = stream(json!({
            "stream": { "game": "Chess", "viewers": 42, "preview": { "medium": "url" } }
        }));

        let row = build_row(&id, Some(&ch), Some(&st));

        assert_eq!(row.classification, Classification::Online);
        assert_eq!(row.title, "Y Team");
        assert_eq!(
            row.live,
            Some(LiveDetails {
                game: "Chess".into(),
                viewers: 42,
                preview: Some("url".into()),
            })
        );
        assert_eq!(row.status_suffix().as_deref(), Some(" — Live now"));
        assert_eq!(row.description(), None);
    }

    #[test]
    fn online_takes_precedence_over_error_flag() {
        let id = Identity::from("odd");
        let ch = channel(json!({ "error": "Not Found" }));
        let st = stream(json!({ "stream": {} }));

        let row = build_row(&id, Some(&ch), Some(&st));
        assert_eq!(row.classification, Classification::Online);
    }

    #[test]
    fn live_session_defaults() {
        let id = Identity::from("quiet");
        let st = stream(json!({ "stream": { "preview": { "small": "s.jpg" } } }));

        let row = build_row(&id, None, Some(&st));
        let live = row.live.unwrap();
        assert_eq!(live.game, "");
        assert_eq!(live.viewers, 0);
        assert_eq!(live.preview, None);
    }

    #[test]
    fn error_flag_without_live_session_is_closed() {
        let id = Identity::from("brunofin");
        let ch = channel(json!({
            "error": "Not Found",
            "status": 404,
            "message": "Channel 'brunofin' does not exist"
        }));
        let st = stream(json!({ "stream": null }));

        let row = build_row(&id, Some(&ch), Some(&st));
        assert_eq!(row.classification, Classification::Closed);
        assert_eq!(row.title, "brunofin");
        assert_eq!(row.live, None);
        assert_eq!(row.status, "404");
        assert_eq!(row.status_suffix().as_deref(), Some(" — 404"));
        assert_eq!(row.description(), Some("404"));
    }

    #[test]
    fn loosely_typed_live_session_stays_online() {
        let id = Identity::from("Y");
        let ch = channel(json!({ "display_name": "Y Team", "logo": "l.png" }));
        let st = stream(json!({
            "stream": { "game": "Chess", "viewers": 42.0, "preview": "not-an-object" }
        }));

        let row = build_row(&id, Some(&ch), Some(&st));
        assert_eq!(row.classification, Classification::Online);
        assert_eq!(row.title, "Y Team");
        assert_eq!(row.logo, "l.png");
        assert_eq!(
            row.live,
            Some(LiveDetails {
                game: "Chess".into(),
                viewers: 42,
                preview: None,
            })
        );
    }

    #[test]
    fn numeric_string_viewers() {
        let st = stream(json!({ "stream": { "viewers": "1200" } }));
        let row = build_row(&Identity::from("n"), None, Some(&st));
        assert_eq!(row.live.map(|l| l.viewers), Some(1200));
    }

    #[test]
    fn non_object_stream_is_not_live() {
        let st = stream(json!({ "stream": false }));
        let row = build_row(&Identity::from("n"), None, Some(&st));
        assert_eq!(row.classification, Classification::Offline);
    }

    #[test]
    fn offline_status_becomes_description() {
        let id = Identity::from("freecodecamp");
        let ch = channel(json!({
            "display_name": "FreeCodeCamp",
            "status": "Greg working on Electron app",
            "logo": "https://example.com/fcc.png",
            "url": "https://www.twitch.tv/freecodecamp"
        }));
        let st = stream(json!({ "stream": null }));

        let row = build_row(&id, Some(&ch), Some(&st));
        assert_eq!(row.classification, Classification::Offline);
        assert_eq!(row.logo, "https://example.com/fcc.png");
        assert_eq!(row.link, "https://www.twitch.tv/freecodecamp");
        assert_eq!(row.description(), Some("Greg working on Electron app"));
    }

    #[test]
    fn empty_strings_fall_back() {
        let id = Identity::from("blank");
        let ch = channel(json!({ "display_name": "", "logo": "", "url": "", "status": "" }));

        let row = build_row(&id, Some(&ch), None);
        assert_eq!(row.title, "blank");
        assert_eq!(row.logo, PLACEHOLDER_LOGO);
        assert_eq!(row.link, "https://www.twitch.tv/blank");
        assert_eq!(row.status_suffix(), None);
    }

    #[test]
    fn absent_records_match_empty_records() {
        let id = Identity::from("same");
        let empty = build_row(&id, Some(&ChannelRecord::default()), Some(&StreamRecord::default()));
        assert_eq!(empty, build_row(&id, None, None));
        assert_eq!(PresentationRow::from_outcome(&id, &FetchOutcome::default()), empty);
    }
}
