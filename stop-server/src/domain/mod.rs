//! Domain types for the stop cache.
//!
//! This module contains the validated value types that flow between the
//! store, the upstream clients and the web layer. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod departure;
mod error;
mod field;
mod journey;
mod neighbors;
mod patch;
mod stop;
mod time;

pub use departure::{Departure, NextDeparture, select_next_departure};
pub use error::DomainError;
pub use field::{FieldSelection, StopField};
pub use journey::{Journey, JourneyLeg};
pub use neighbors::Neighbors;
pub use patch::StopPatch;
pub use stop::{Latitude, Longitude, NonBlank, StopId, StopRecord};
pub use time::{TIMESTAMP_FORMAT, Timestamp};
