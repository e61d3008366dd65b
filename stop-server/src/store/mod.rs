//! Durable keyed storage of stop records.
//!
//! Callers depend only on the [`StopStore`] contract; [`SqliteStopStore`]
//! is the production implementation. Each operation is serialised by the
//! store itself. Two overlapping writers on one stop are last-writer-wins.

mod error;
mod sqlite;

use std::future::Future;

use crate::domain::{Neighbors, StopId, StopPatch, StopRecord};

pub use error::StoreError;
pub use sqlite::SqliteStopStore;

/// Keyed store of [`StopRecord`]s.
pub trait StopStore: Send + Sync {
    /// Insert a stop, or replace every column of an existing one. A stored
    /// `next_departure` is replaced too, so a re-synced stop loses it.
    fn upsert(&self, stop: &StopRecord) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Fetch one stop.
    fn get(&self, id: StopId) -> impl Future<Output = Result<StopRecord, StoreError>> + Send;

    /// Apply a validated partial update and return the updated stop.
    ///
    /// Without an explicit `last_updated` in the patch, the stop is
    /// re-stamped with the current time.
    fn patch(
        &self,
        id: StopId,
        patch: &StopPatch,
    ) -> impl Future<Output = Result<StopRecord, StoreError>> + Send;

    /// Remove one stop.
    fn delete(&self, id: StopId) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// All stops in ascending id order.
    fn list(&self) -> impl Future<Output = Result<Vec<StopRecord>, StoreError>> + Send;

    /// Number of stored stops.
    fn count(&self) -> impl Future<Output = Result<usize, StoreError>> + Send;

    /// The stops adjacent to `id` in [`list`](StopStore::list) order.
    fn neighbors(&self, id: StopId) -> impl Future<Output = Result<Neighbors, StoreError>> + Send {
        async move {
            let ids: Vec<StopId> = self.list().await?.iter().map(|s| s.stop_id).collect();
            Ok(Neighbors::around(&ids, id))
        }
    }
}
