//! Client side of the polling protocol.
//!
//! A poller keeps the highest message id it has consumed and asks the server
//! for everything after it. The server holds no per-client state, so the
//! cursor is the only thing a client needs to resume.

use serde::{Deserialize, Serialize};

use crate::models::Message;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCursor {
    last_seen_id: u64,
}

impl SyncCursor {
    /// Cursor for a client that has seen nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from the last id of an earlier full sync.
    pub fn resume_from(last_seen_id: u64) -> Self {
        Self { last_seen_id }
    }

    pub fn last_seen_id(&self) -> u64 {
        self.last_seen_id
    }

    /// Query string for the next incremental fetch.
    pub fn query(&self) -> String {
        format!("since={}", self.last_seen_id)
    }

    /// Take a fetched batch, keep only messages past the cursor and move the
    /// cursor to the highest id kept. Returns the new messages in id order.
    pub fn absorb(&mut self, batch: Vec<Message>) -> Vec<Message> {
        let mut fresh: Vec<Message> = batch
            .into_iter()
            .filter(|m| m.id > self.last_seen_id)
            .collect();
        fresh.sort_by_key(|m| m.id);
        fresh.dedup_by_key(|m| m.id);

        if let Some(last) = fresh.last() {
            self.last_seen_id = last.id;
        }
        fresh
    }
}
