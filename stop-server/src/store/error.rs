//! Store error types.

use crate::domain::StopId;

/// Errors from the stop store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No stop with this id is cached
    #[error("stop {0} not found")]
    NotFound(StopId),

    /// The database rejected or failed an operation
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row violates the record invariants
    #[error("stored stop {stop_id} is invalid: {reason}")]
    Corrupt { stop_id: i64, reason: String },
}
