//! Location sync: pull stops matching a free-text query into the store.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{StopId, StopRecord, Timestamp};
use crate::error::CoreError;
use crate::store::StopStore;
use crate::upstream::{LocationSearch, UpstreamError};

/// Whether a sync added rows to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Created,
    Updated,
}

/// A stop written by a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedStop {
    pub stop_id: StopId,
    pub last_updated: Timestamp,
}

/// Result of a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// `Created` if the row count grew during the call.
    pub status: SyncStatus,
    /// Every stop written, in upstream order.
    pub stops: Vec<SyncedStop>,
}

/// Resolves a query against the location search and upserts every match.
pub struct LocationSyncer<'a, S: StopStore, L: LocationSearch> {
    store: &'a S,
    search: &'a L,
}

impl<'a, S: StopStore, L: LocationSearch> LocationSyncer<'a, S, L> {
    pub fn new(store: &'a S, search: &'a L) -> Self {
        Self { store, search }
    }

    /// Sync the stops matching `query`.
    ///
    /// Every match is upserted with a fresh timestamp, whether or not it
    /// changed. Upserts commit one by one: a storage failure partway
    /// through keeps the stops written before it.
    pub async fn sync(&self, query: &str) -> Result<SyncOutcome, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::InvalidParameter(
                "Query parameter is required".to_string(),
            ));
        }

        let matches = self
            .search
            .search_locations(query)
            .await
            .map_err(classify)?;
        debug!(query, matches = matches.len(), "location search answered");

        let before = self.store.count().await?;

        let mut stops = Vec::with_capacity(matches.len());
        for found in matches {
            let record = StopRecord::new(
                found.stop_id,
                found.name,
                found.latitude,
                found.longitude,
                Timestamp::now(),
            );
            self.store.upsert(&record).await?;
            stops.push(SyncedStop {
                stop_id: record.stop_id,
                last_updated: record.last_updated,
            });
        }

        let after = self.store.count().await?;
        let status = if after > before {
            SyncStatus::Created
        } else {
            SyncStatus::Updated
        };
        info!(query, synced = stops.len(), added = after.saturating_sub(before), "stops synced");

        Ok(SyncOutcome { status, stops })
    }
}

fn classify(err: UpstreamError) -> CoreError {
    match err {
        UpstreamError::NotFound => {
            CoreError::NotFound("No stop matching query found".to_string())
        }
        other => CoreError::from_upstream(other, "No stop matching query found"),
    }
}
