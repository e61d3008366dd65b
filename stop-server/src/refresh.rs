//! Departure refresh: a stop read that pulls its next departure first.
//!
//! Reading a stop with `next_departure` selected is not idempotent: the
//! freshly selected departure and a new `last_updated` are written back
//! before the view is returned.

use tracing::{debug, info};

use crate::domain::{
    FieldSelection, Neighbors, NonBlank, StopField, StopId, StopPatch, StopRecord, Timestamp,
    select_next_departure,
};
use crate::error::CoreError;
use crate::store::StopStore;
use crate::upstream::DepartureBoard;

/// Departure window used when refreshing a stop.
pub const REFRESH_WINDOW_MINS: u32 = 120;

const NOT_AVAILABLE: &str = "Departure information not available";

/// A stop as read, with its neighbors and the fields the caller asked for.
#[derive(Debug, Clone)]
pub struct StopSnapshot {
    pub record: StopRecord,
    pub neighbors: Neighbors,
    pub selection: FieldSelection,
}

pub struct DepartureRefresher<'a, S: StopStore, B: DepartureBoard> {
    store: &'a S,
    board: &'a B,
}

impl<'a, S: StopStore, B: DepartureBoard> DepartureRefresher<'a, S, B> {
    pub fn new(store: &'a S, board: &'a B) -> Self {
        Self { store, board }
    }

    /// Read a stop, refreshing `next_departure` when it is selected.
    ///
    /// `include` is the raw comma-separated field filter; `None` or empty
    /// selects every field.
    pub async fn read(&self, id: StopId, include: Option<&str>) -> Result<StopSnapshot, CoreError> {
        let selection = FieldSelection::parse(include)
            .map_err(|e| CoreError::InvalidParameter(format!("Invalid include filter: {e}")))?;

        let mut record = self.store.get(id).await?;

        if selection.includes(StopField::NextDeparture) {
            record = self.refresh(id).await?;
        }

        let neighbors = self.store.neighbors(id).await?;

        Ok(StopSnapshot {
            record,
            neighbors,
            selection,
        })
    }

    async fn refresh(&self, id: StopId) -> Result<StopRecord, CoreError> {
        let departures = self
            .board
            .departures(id, REFRESH_WINDOW_MINS)
            .await
            .map_err(|e| CoreError::from_upstream(e, NOT_AVAILABLE))?;
        debug!(stop_id = %id, departures = departures.len(), "departure board fetched");

        let next = select_next_departure(&departures)
            .ok_or_else(|| CoreError::NotAvailable(NOT_AVAILABLE.to_string()))?;
        let text = NonBlank::parse(StopField::NextDeparture, next.to_string())?;

        let record = self
            .store
            .patch(id, &StopPatch::departure(text, Timestamp::now()))
            .await?;
        info!(stop_id = %id, next_departure = ?record.next_departure, "next departure refreshed");

        Ok(record)
    }
}
