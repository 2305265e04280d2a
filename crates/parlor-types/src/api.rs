use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// -- Identities --

/// Body of `POST /nicknames`.
///
/// Fields are optional so a missing one surfaces as a validation error with a
/// readable message instead of a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterIdentityRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub nickname: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub avatar: Option<String>,
}

// -- Messages --

/// Body of `POST /history`.
///
/// Any `avatar` the client sends along is dropped here; the avatar of a
/// message is always resolved from the registry.
#[derive(Debug, Default, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default, alias = "text", deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nickname: Option<String>,
}

/// Query string of `GET /history`. The cursor may be passed as `since` or
/// `lastSeenId`; an empty value counts as absent, and without a cursor the
/// full history is returned.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub since: Option<u64>,
    #[serde(default, rename = "lastSeenId", deserialize_with = "blank_as_none")]
    pub last_seen_id: Option<u64>,
}

impl HistoryQuery {
    /// `since` wins when both are given.
    pub fn cursor(&self) -> Option<u64> {
        self.since.or(self.last_seen_id)
    }
}

// -- Misc --

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Accepts any JSON scalar and turns it into a string, so `{"nickname": 42}`
/// registers `"42"`. `null`, arrays and objects count as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Array(_) | Value::Object(_)) => None,
    })
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
