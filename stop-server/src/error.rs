//! Error taxonomy of the stop cache operations.
//!
//! Leaf errors (store, upstream, narrative, validation) are classified into
//! a [`CoreError`] before they reach a caller. Each operation decides how
//! an upstream failure class is reported, so there is no blanket
//! `From<UpstreamError>`.

use crate::domain::{DomainError, StopId};
use crate::narrative::NarrativeError;
use crate::store::StoreError;
use crate::upstream::UpstreamError;

/// Failure of a stop cache operation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or missing query, body or filter
    #[error("{0}")]
    InvalidParameter(String),

    /// A patch key outside the updatable field set
    #[error("{0}")]
    InvalidField(String),

    /// A patch value that violates its field's constraints
    #[error("{0}")]
    InvalidValue(String),

    /// A patch timestamp in the wrong format
    #[error("{0}")]
    InvalidFormat(String),

    /// The stop is not cached, or the upstream found nothing
    #[error("{0}")]
    NotFound(String),

    /// The upstream answered but had no usable departure or operator data
    #[error("{0}")]
    NotAvailable(String),

    /// The upstream is unavailable or rate limiting
    #[error("External API is busy.")]
    UpstreamBusy,

    /// Route search needs at least two cached stops
    #[error("Not enough stops in database")]
    InsufficientStops,

    /// No examined pair of stops could be connected
    #[error("Failed to establish route based on stops in database")]
    RouteFailure,

    /// The upstream could not be reached or answered garbage
    #[error("upstream request failed: {0}")]
    Upstream(UpstreamError),

    /// The narrative composer could not produce text
    #[error("could not compose text: {0}")]
    NarrativeUnavailable(NarrativeError),

    /// The stop store failed
    #[error("storage error: {0}")]
    Storage(StoreError),

    /// The guide artifact could not be written
    #[error("failed to write guide: {0}")]
    Artifact(#[from] std::io::Error),
}

impl CoreError {
    pub fn stop_not_found(id: StopId) -> Self {
        CoreError::NotFound(format!("Stop {id} not found"))
    }

    /// Classify an upstream failure using the caller's wording for
    /// "nothing found".
    pub fn from_upstream(err: UpstreamError, not_found: &str) -> Self {
        match err {
            UpstreamError::NotFound => CoreError::NotAvailable(not_found.to_string()),
            e if e.is_bad_request() => CoreError::InvalidParameter("Incorrect parameter".to_string()),
            UpstreamError::Busy => CoreError::UpstreamBusy,
            other => CoreError::Upstream(other),
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => CoreError::stop_not_found(id),
            other => CoreError::Storage(other),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::InvalidField(_) => CoreError::InvalidField(message),
            DomainError::InvalidValue { .. } => CoreError::InvalidValue(message),
            DomainError::InvalidFormat { .. } => CoreError::InvalidFormat(message),
            DomainError::EmptyPatch => CoreError::InvalidParameter(message),
        }
    }
}

impl From<NarrativeError> for CoreError {
    fn from(err: NarrativeError) -> Self {
        CoreError::NarrativeUnavailable(err)
    }
}
