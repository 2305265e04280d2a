use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use parlor_types::models::Message;
use tracing::debug;

use crate::{IdentityRegistry, StoreError, StoreResult, required};

/// Append-only chat history.
///
/// Ids start at 1 and grow by one per append; the id is taken and the message
/// pushed under the same write lock, so two posts can never share an id and
/// readers never see a message before it has one.
pub struct MessageLedger {
    registry: Arc<IdentityRegistry>,
    messages: RwLock<Vec<Message>>,
}

impl MessageLedger {
    pub fn new(registry: Arc<IdentityRegistry>) -> Self {
        Self {
            registry,
            messages: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Message>> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Message>> {
        self.messages.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Post `text` as `nickname`. The avatar is looked up in the registry at
    /// this moment; callers have no way to supply one.
    pub fn append(&self, text: &str, nickname: &str) -> StoreResult<Message> {
        // Blank text is refused, but the text itself is stored as sent.
        if text.trim().is_empty() {
            return Err(StoreError::Validation("Message is missing."));
        }
        let text = text.to_string();
        let nickname = required(nickname, "Nickname is wrong or missing.")?;
        // The registry lock is released before the ledger lock is taken, so a
        // delete and re-register of this nickname can slip in between. The
        // message then carries the avatar seen here.
        let avatar = self.registry.resolve_avatar(&nickname);

        let mut messages = self.write();
        let message = Message {
            id: messages.last().map_or(1, |m| m.id + 1),
            text,
            nickname,
            avatar,
            created_at: Utc::now(),
        };
        messages.push(message.clone());

        debug!("Appended message {} from {}", message.id, message.nickname);
        Ok(message)
    }

    /// Full history, for a client's first sync.
    pub fn list_all(&self) -> Vec<Message> {
        self.read().clone()
    }

    /// Every message with `id > last_seen_id`, oldest first.
    pub fn list_since(&self, last_seen_id: u64) -> Vec<Message> {
        let messages = self.read();
        let start = messages.partition_point(|m| m.id <= last_seen_id);
        messages[start..].to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
