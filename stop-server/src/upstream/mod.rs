//! Upstream transit API collaborators.
//!
//! The core depends only on the [`LocationSearch`], [`DepartureBoard`] and
//! [`JourneyPlanner`] traits; [`TransportClient`] implements all three
//! against `v6.db.transport.rest`.
//!
//! Calls are made one at a time, with no retry and no backoff: a failed
//! response is classified into [`UpstreamError`] and returned as is.

mod client;
mod convert;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

use std::future::Future;

use crate::domain::{Departure, Journey, StopId};

pub use client::{DEFAULT_BASE_URL, TransportClient, TransportConfig};
pub use convert::LocationMatch;
pub use error::UpstreamError;

/// Resolves free text to candidate stops.
pub trait LocationSearch: Send + Sync {
    fn search_locations(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<LocationMatch>, UpstreamError>> + Send;
}

/// Near-term departures at a stop.
pub trait DepartureBoard: Send + Sync {
    /// Departures within the next `duration_mins` minutes, in board order.
    fn departures(
        &self,
        stop: StopId,
        duration_mins: u32,
    ) -> impl Future<Output = Result<Vec<Departure>, UpstreamError>> + Send;
}

/// Point-to-point itineraries.
pub trait JourneyPlanner: Send + Sync {
    /// Up to `results` journeys from `from` to `to` departing at the
    /// `departure` anchor.
    fn journeys(
        &self,
        from: StopId,
        to: StopId,
        departure: &str,
        results: u8,
    ) -> impl Future<Output = Result<Vec<Journey>, UpstreamError>> + Send;
}
