//! Conversion from transit API DTOs to domain types.

use tracing::warn;

use crate::domain::{Departure, Journey, JourneyLeg, Latitude, Longitude, StopId};

use super::types::{DeparturesResponse, IdDto, JourneyDto, LocationDto};

/// A stop returned by a location search.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationMatch {
    pub stop_id: StopId,
    pub name: Option<String>,
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl LocationMatch {
    pub fn new(stop_id: i64, name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            stop_id: StopId::new(stop_id),
            name: Some(name.to_string()),
            latitude: Latitude::new(latitude).unwrap_or_default(),
            longitude: Longitude::new(longitude).unwrap_or_default(),
        }
    }
}

/// Convert a location search response.
///
/// Entries without an integer id cannot be cached and are skipped.
/// Missing or out-of-range coordinates become 0.
pub fn convert_locations(locations: &[LocationDto]) -> Vec<LocationMatch> {
    locations
        .iter()
        .filter_map(|location| {
            let stop_id = match &location.id {
                Some(IdDto::Number(id)) => Some(*id),
                Some(IdDto::Text(id)) => id.parse().ok(),
                None => None,
            };
            let Some(stop_id) = stop_id else {
                warn!(
                    id = ?location.id,
                    name = ?location.name,
                    "Skipping location without numeric id"
                );
                return None;
            };

            let coordinates = location.location.as_ref();
            let latitude = coordinates.and_then(|c| c.latitude).unwrap_or(0.0);
            let longitude = coordinates.and_then(|c| c.longitude).unwrap_or(0.0);

            Some(LocationMatch {
                stop_id: StopId::new(stop_id),
                name: location.name.clone(),
                latitude: Latitude::new(latitude).unwrap_or_else(|_| {
                    warn!(stop_id, latitude, "Latitude out of range, using 0");
                    Latitude::default()
                }),
                longitude: Longitude::new(longitude).unwrap_or_else(|_| {
                    warn!(stop_id, longitude, "Longitude out of range, using 0");
                    Longitude::default()
                }),
            })
        })
        .collect()
}

/// Convert a departure board, keeping board order.
pub fn convert_departures(board: &DeparturesResponse) -> Vec<Departure> {
    board
        .departures
        .iter()
        .map(|d| Departure {
            direction: d.direction.clone(),
            platform: d.platform.clone(),
            operator: d
                .line
                .as_ref()
                .and_then(|line| line.operator.as_ref())
                .and_then(|operator| operator.name.clone()),
        })
        .collect()
}

/// Convert one itinerary.
pub fn convert_journey(journey: &JourneyDto) -> Journey {
    Journey::new(
        journey
            .legs
            .iter()
            .map(|leg| JourneyLeg {
                origin: leg.origin.as_ref().and_then(|p| p.name.clone()),
                destination: leg.destination.as_ref().and_then(|p| p.name.clone()),
            })
            .collect(),
    )
}
