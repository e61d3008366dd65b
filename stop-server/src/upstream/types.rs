//! Transit REST API response DTOs.
//!
//! These types map directly to the `v6.db.transport.rest` JSON responses.
//! Only the fields the cache reads are modelled; everything is `Option`
//! because the API omits or nulls fields freely.

use serde::Deserialize;

/// A stop id as sent by the API: usually a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdDto {
    Number(i64),
    Text(String),
}

/// An entry of `GET /locations`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationDto {
    pub id: Option<IdDto>,

    pub name: Option<String>,

    /// Geographic position, absent for some stations.
    pub location: Option<CoordinatesDto>,
}

/// A geographic position.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatesDto {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response of `GET /stops/{id}/departures`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    #[serde(default)]
    pub departures: Vec<DepartureDto>,
}

/// One departure on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    /// Headsign of the service.
    pub direction: Option<String>,

    /// Realtime platform, falls back to the planned one upstream.
    pub platform: Option<String>,

    pub line: Option<LineDto>,
}

/// The line a departure runs on.
#[derive(Debug, Clone, Deserialize)]
pub struct LineDto {
    pub operator: Option<OperatorDto>,
}

/// The company operating a line.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorDto {
    pub name: Option<String>,
}

/// Response of `GET /journeys`.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneysResponse {
    #[serde(default)]
    pub journeys: Vec<JourneyDto>,
}

/// An itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyDto {
    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    pub origin: Option<PlaceDto>,
    pub destination: Option<PlaceDto>,
}

/// A stop, station or address at a leg's end.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locations() {
        let json = r#"[
            {
                "type": "stop",
                "id": "8000105",
                "name": "Frankfurt(Main)Hbf",
                "location": {"type": "location", "id": "8000105", "latitude": 50.107145, "longitude": 8.663789},
                "products": {"nationalExpress": true}
            },
            {"type": "stop", "id": 8011160, "name": "Berlin Hbf"}
        ]"#;

        let locations: Vec<LocationDto> = serde_json::from_str(json).unwrap();

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].id, Some(IdDto::Text("8000105".into())));
        assert_eq!(locations[0].location.as_ref().unwrap().latitude, Some(50.107145));
        assert_eq!(locations[1].id, Some(IdDto::Number(8011160)));
        assert!(locations[1].location.is_none());
    }

    #[test]
    fn parse_departures_with_nulls() {
        let json = r#"{
            "departures": [
                {"tripId": "1|1|1", "direction": null, "platform": null, "line": null},
                {
                    "tripId": "1|2|1",
                    "direction": "Sollstedt",
                    "platform": "4 A-C",
                    "plannedPlatform": "4",
                    "line": {"name": "RB 52", "operator": {"type": "operator", "id": "db-regio-ag-nord", "name": "DB Regio AG Nord"}}
                }
            ],
            "realtimeDataUpdatedAt": 1710000000
        }"#;

        let board: DeparturesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(board.departures.len(), 2);
        assert!(board.departures[0].direction.is_none());
        assert_eq!(board.departures[1].platform.as_deref(), Some("4 A-C"));
        let operator = board.departures[1]
            .line
            .as_ref()
            .and_then(|l| l.operator.as_ref())
            .and_then(|o| o.name.as_deref());
        assert_eq!(operator, Some("DB Regio AG Nord"));
    }

    #[test]
    fn parse_journeys() {
        let json = r#"{
            "earlierRef": "x",
            "journeys": [{
                "type": "journey",
                "legs": [
                    {"origin": {"type": "stop", "name": "Berlin Hbf"}, "destination": {"type": "stop", "name": "Erfurt Hbf"}},
                    {"origin": {"type": "stop", "name": "Erfurt Hbf"}, "destination": {"type": "stop", "name": "Frankfurt(Main)Hbf"}}
                ]
            }]
        }"#;

        let response: JourneysResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.journeys.len(), 1);
        assert_eq!(response.journeys[0].legs.len(), 2);
    }
}
