mod error;
pub mod ledger;
pub mod registry;

use std::sync::Arc;

use tracing::info;

pub use error::{StoreError, StoreResult};
pub use ledger::MessageLedger;
pub use registry::IdentityRegistry;

/// Avatar stamped on messages whose sender never registered.
pub const DEFAULT_FALLBACK_AVATAR: &str = "avatar1.png";

/// The whole chat state: nickname registry plus message ledger.
///
/// Lives in memory only. Built once at startup, shared with handlers behind
/// an `Arc`, and simply dropped on shutdown.
pub struct Store {
    registry: Arc<IdentityRegistry>,
    ledger: MessageLedger,
}

impl Store {
    pub fn new(fallback_avatar: impl Into<String>) -> Self {
        let fallback_avatar = fallback_avatar.into();
        info!("Chat store created (fallback avatar {})", fallback_avatar);

        let registry = Arc::new(IdentityRegistry::new(fallback_avatar));
        let ledger = MessageLedger::new(registry.clone());
        Self { registry, ledger }
    }

    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &MessageLedger {
        &self.ledger
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_AVATAR)
    }
}

/// Trim a caller-supplied field, refusing it when nothing is left.
pub(crate) fn required(value: &str, missing: &'static str) -> StoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation(missing));
    }
    Ok(trimmed.to_string())
}
