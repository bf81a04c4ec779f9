// Proxy API response types
//
// Models for the `/channels/{name}` and `/streams/{name}` endpoints. Fields
// use `#[serde(default)]` throughout because the proxy omits fields freely
// and reports unknown channels with an error body instead of a channel.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Lenient field decoders ───────────────────────────────────────────
//
// The proxy is loose about JSON types. A field of the wrong type is
// treated as absent instead of failing the whole record.

/// Strings and numbers become text; `null`, `false`, `""`, `0` and
/// anything else are absent.
///
/// Error bodies carry the HTTP code as a numeric `status`, which is still
/// shown as the channel's status text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

/// Non-negative integers, integral floats and numeric strings.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_u64))
        }
        _ => None,
    })
}

#[allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn whole_u64(v: f64) -> Option<u64> {
    (v.is_finite() && v.fract() == 0.0 && v >= 0.0 && v <= u64::MAX as f64).then_some(v as u64)
}

/// Objects decode into `T`; any other JSON value is absent.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => Some(serde_json::from_value(object).unwrap_or_default()),
        _ => None,
    })
}

// ── Channel ──────────────────────────────────────────────────────────

/// Channel object from `channels/{name}`.
///
/// For channels that do not exist (or were closed) the proxy answers with
/// `{ "error": "Not Found", "status": 404, "message": "..." }` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub logo: Option<String>,
    /// Free-form status text. A numeric code from an error body becomes text.
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    /// Provider error marker. Usually a string, but any non-empty value counts.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChannelRecord {
    /// Whether the provider flagged this channel as missing or closed.
    ///
    /// `null`, `false`, `0` and `""` do not count as an error flag.
    pub fn has_error(&self) -> bool {
        match &self.error {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }
}

// ── Stream ───────────────────────────────────────────────────────────

/// Envelope from `streams/{name}`. `stream` is `null` when the channel is
/// not broadcasting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Present only when the value is an object.
    #[serde(default, deserialize_with = "lenient_object")]
    pub stream: Option<LiveSession>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StreamRecord {
    /// The live session, if the channel is currently broadcasting.
    pub fn live(&self) -> Option<&LiveSession> {
        self.stream.as_ref()
    }
}

/// A live broadcast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveSession {
    #[serde(default, deserialize_with = "lenient_text")]
    pub game: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub viewers: Option<u64>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub preview: Option<Preview>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Preview thumbnails in several sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(default, deserialize_with = "lenient_text")]
    pub small: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub medium: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub large: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn channel_error_body_is_flagged() {
        let ch: ChannelRecord = serde_json::from_value(json!({
            "error": "Not Found",
            "status": 404,
            "message": "Channel 'brunofin' does not exist"
        }))
        .unwrap();
        assert!(ch.has_error());
        assert_eq!(ch.display_name, None);
        assert_eq!(ch.status.as_deref(), Some("404"));
        assert!(ch.extra.contains_key("message"));
    }

    #[test]
    fn falsy_error_values_are_not_flags() {
        for value in [json!(null), json!(false), json!(""), json!(0)] {
            let ch: ChannelRecord = serde_json::from_value(json!({ "error": value })).unwrap();
            assert!(!ch.has_error(), "{value} should not flag the channel");
        }
        let ch: ChannelRecord = serde_json::from_value(json!({ "error": { "code": 1 } })).unwrap();
        assert!(ch.has_error());
    }

    #[test]
    fn null_stream_is_not_live() {
        let st: StreamRecord = serde_json::from_value(json!({
            "stream": null,
            "_links": { "self": "https://api.twitch.tv/kraken/streams/freecodecamp" }
        }))
        .unwrap();
        assert!(st.live().is_none());
    }

    #[test]
    fn live_stream_fields() {
        let st: StreamRecord = serde_json::from_value(json!({
            "stream": {
                "game": "StarCraft II",
                "viewers": 1234,
                "preview": { "small": "s.jpg", "medium": "m.jpg", "large": "l.jpg" },
                "channel": { "display_name": "ESL_SC2" }
            }
        }))
        .unwrap();
        let live = st.live().unwrap();
        assert_eq!(live.game.as_deref(), Some("StarCraft II"));
        assert_eq!(live.viewers, Some(1234));
        assert_eq!(
            live.preview.as_ref().and_then(|p| p.medium.as_deref()),
            Some("m.jpg")
        );
        assert!(live.extra.contains_key("channel"));
    }

    #[test]
    fn text_fields_accept_numbers_and_drop_falsy_values() {
        let ch: ChannelRecord = serde_json::from_value(json!({
            "display_name": 1337,
            "logo": false,
            "status": "",
            "url": 0
        }))
        .unwrap();
        assert_eq!(ch.display_name.as_deref(), Some("1337"));
        assert_eq!(ch.logo, None);
        assert_eq!(ch.status, None);
        assert_eq!(ch.url, None);
    }

    #[test]
    fn viewers_accepts_floats_and_numeric_strings() {
        for (raw, expected) in [
            (json!(42), Some(42)),
            (json!(42.0), Some(42)),
            (json!("42"), Some(42)),
            (json!(" 7 "), Some(7)),
            (json!("7.0"), Some(7)),
            (json!(4.5), None),
            (json!(-3), None),
            (json!("many"), None),
            (json!(null), None),
        ] {
            let live: LiveSession =
                serde_json::from_value(json!({ "viewers": raw.clone() })).unwrap();
            assert_eq!(live.viewers, expected, "viewers = {raw}");
        }
    }

    #[test]
    fn non_object_preview_is_absent() {
        let live: LiveSession = serde_json::from_value(json!({
            "game": "Chess",
            "viewers": 3,
            "preview": "thumb.jpg"
        }))
        .unwrap();
        assert_eq!(live.preview, None);
        assert_eq!(live.game.as_deref(), Some("Chess"));
    }

    #[test]
    fn only_object_stream_is_live() {
        for raw in [json!(false), json!(0), json!("offline"), json!([])] {
            let st: StreamRecord = serde_json::from_value(json!({ "stream": raw.clone() })).unwrap();
            assert!(st.live().is_none(), "stream = {raw}");
        }
        let st: StreamRecord =
            serde_json::from_value(json!({ "stream": { "viewers": "12", "preview": null } })).unwrap();
        assert_eq!(st.live().and_then(|l| l.viewers), Some(12));
    }
}
