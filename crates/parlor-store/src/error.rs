use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Every way a store operation can be refused. A refused operation leaves
/// the store exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required field was missing or blank after trimming.
    #[error("{0}")]
    Validation(&'static str),

    #[error("Nickname {0} already exists.")]
    Conflict(String),

    #[error("Nickname id {0} not found.")]
    NotFound(u64),
}
