use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use parlor_types::models::Identity;
use tracing::{debug, warn};

use crate::{StoreError, StoreResult, required};

/// Registered nicknames and their avatars.
///
/// One lock guards the whole collection, so the uniqueness check, id
/// assignment and insert of `register` happen as a single step.
pub struct IdentityRegistry {
    inner: RwLock<RegistryInner>,
    fallback_avatar: String,
}

struct RegistryInner {
    /// Registration order, which is also ascending id order.
    identities: Vec<Identity>,
    /// nickname -> id of the live identity holding it
    by_nickname: HashMap<String, u64>,
    /// Ids are never reused, even after a delete.
    next_id: u64,
}

impl IdentityRegistry {
    pub fn new(fallback_avatar: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                identities: Vec::new(),
                by_nickname: HashMap::new(),
                next_id: 1,
            }),
            fallback_avatar: fallback_avatar.into(),
        }
    }

    // Writers never leave the collection half-updated, so a panic elsewhere
    // while holding the lock does not invalidate the data.
    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, nickname: &str, avatar: &str) -> StoreResult<Identity> {
        let nickname = required(nickname, "Nickname is missing.")?;
        let avatar = required(avatar, "Avatar is missing.")?;

        let mut inner = self.write();
        if inner.by_nickname.contains_key(&nickname) {
            debug!("Rejected duplicate nickname {}", nickname);
            return Err(StoreError::Conflict(nickname));
        }

        let identity = Identity {
            id: inner.next_id,
            nickname,
            avatar,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner
            .by_nickname
            .insert(identity.nickname.clone(), identity.id);
        inner.identities.push(identity.clone());

        debug!(
            "Registered nickname {} (id {}, avatar {})",
            identity.nickname, identity.id, identity.avatar
        );
        Ok(identity)
    }

    pub fn list(&self) -> Vec<Identity> {
        self.read().identities.clone()
    }

    pub fn get_by_id(&self, id: u64) -> StoreResult<Identity> {
        let inner = self.read();
        inner
            .position(id)
            .map(|idx| inner.identities[idx].clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// Avatar of the identity currently holding `nickname`, or the fallback
    /// avatar when nobody does.
    pub fn resolve_avatar(&self, nickname: &str) -> String {
        let inner = self.read();
        let found = inner
            .by_nickname
            .get(nickname)
            .and_then(|id| inner.position(*id))
            .map(|idx| inner.identities[idx].avatar.clone());

        found.unwrap_or_else(|| {
            debug!(
                "No identity for nickname {}, using fallback avatar {}",
                nickname, self.fallback_avatar
            );
            self.fallback_avatar.clone()
        })
    }

    pub fn delete_by_id(&self, id: u64) -> StoreResult<()> {
        let mut inner = self.write();
        let Some(idx) = inner.position(id) else {
            warn!("Delete of unknown nickname id {}", id);
            return Err(StoreError::NotFound(id));
        };

        let removed = inner.identities.remove(idx);
        inner.by_nickname.remove(&removed.nickname);

        debug!("Deleted nickname {} (id {})", removed.nickname, removed.id);
        Ok(())
    }
}

impl RegistryInner {
    fn position(&self, id: u64) -> Option<usize> {
        self.identities.binary_search_by_key(&id, |i| i.id).ok()
    }
}
