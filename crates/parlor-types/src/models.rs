use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered nickname bound to an avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: u64,
    pub nickname: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// One posted chat line.
///
/// `nickname` and `avatar` are snapshots taken when the message was appended;
/// later changes to the registry never touch them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    /// Serialized as `message`, the key chat clients read the text from.
    #[serde(rename = "message")]
    pub text: String,
    pub nickname: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}
