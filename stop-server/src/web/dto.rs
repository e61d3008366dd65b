//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{Neighbors, StopField, StopId, StopRecord, Timestamp};
use crate::profiles::OperatorProfile;
use crate::refresh::StopSnapshot;
use crate::sync::SyncedStop;

/// Query string of `PUT /stops`.
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub query: Option<String>,
}

/// Query string of `GET /stops/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReadRequest {
    /// Comma-separated field names
    pub include: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

/// Hypermedia links of a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
}

impl StopLinks {
    /// Links built against `host`, the request's `Host` header.
    pub fn new(host: &str, id: StopId, neighbors: Option<Neighbors>) -> Self {
        let link = |id: StopId| Link {
            href: format!("http://{host}/stops/{id}"),
        };
        let neighbors = neighbors.unwrap_or_default();
        Self {
            self_link: link(id),
            next: neighbors.next.map(link),
            prev: neighbors.prev.map(link),
        }
    }
}

/// A stop written by sync or patch.
#[derive(Debug, Serialize)]
pub struct StopSummary {
    pub stop_id: StopId,
    pub last_updated: Timestamp,
    #[serde(rename = "_links")]
    pub links: StopLinks,
}

impl StopSummary {
    pub fn from_synced(host: &str, stop: &SyncedStop) -> Self {
        Self {
            stop_id: stop.stop_id,
            last_updated: stop.last_updated,
            links: StopLinks::new(host, stop.stop_id, None),
        }
    }

    pub fn from_record(host: &str, record: &StopRecord) -> Self {
        Self {
            stop_id: record.stop_id,
            last_updated: record.last_updated,
            links: StopLinks::new(host, record.stop_id, None),
        }
    }
}

/// A stop read, projected onto the selected fields.
///
/// `stop_id` and `_links` are always present.
#[derive(Debug, Serialize)]
pub struct StopView {
    pub stop_id: StopId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(rename = "_links")]
    pub links: StopLinks,
}

impl StopView {
    pub fn from_snapshot(host: &str, snapshot: &StopSnapshot) -> Self {
        let record = &snapshot.record;
        let mut fields = Map::new();

        for field in StopField::ALL {
            if !snapshot.selection.includes(field) {
                continue;
            }
            let value = match field {
                StopField::LastUpdated => Value::String(record.last_updated.to_string()),
                StopField::Name => record.name.clone().map_or(Value::Null, Value::String),
                StopField::Latitude => Value::from(record.latitude.get()),
                StopField::Longitude => Value::from(record.longitude.get()),
                StopField::NextDeparture => record
                    .next_departure
                    .clone()
                    .map_or(Value::Null, Value::String),
            };
            fields.insert(field.as_str().to_string(), value);
        }

        Self {
            stop_id: record.stop_id,
            fields,
            links: StopLinks::new(host, record.stop_id, Some(snapshot.neighbors)),
        }
    }
}

/// Outcome of `DELETE /stops/{id}`, for both 200 and 404.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub stop_id: StopId,
}

impl DeleteResponse {
    pub fn removed(stop_id: StopId) -> Self {
        Self {
            message: format!("The stop_id {stop_id} was removed from the database."),
            stop_id,
        }
    }

    pub fn not_found(stop_id: StopId) -> Self {
        Self {
            message: format!("The stop_id {stop_id} was not found in the database."),
            stop_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    pub stop_id: StopId,
    pub profiles: Vec<OperatorProfile>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldSelection, Latitude, Longitude};
    use serde_json::json;

    fn snapshot(include: Option<&str>) -> StopSnapshot {
        let mut record = StopRecord::new(
            StopId::new(7),
            Some("Erfurt Hbf".to_string()),
            Latitude::new(50.972551).unwrap(),
            Longitude::new(11.038499).unwrap(),
            Timestamp::parse("2024-03-09-12:00:40").unwrap(),
        );
        record.next_departure = Some("Platform 4 towards X".to_string());
        StopSnapshot {
            record,
            neighbors: Neighbors {
                next: Some(StopId::new(9)),
                prev: Some(StopId::new(3)),
            },
            selection: FieldSelection::parse(include).unwrap(),
        }
    }

    #[test]
    fn full_view() {
        let view = StopView::from_snapshot("localhost:3000", &snapshot(None));

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "stop_id": 7,
                "last_updated": "2024-03-09-12:00:40",
                "name": "Erfurt Hbf",
                "latitude": 50.972551,
                "longitude": 11.038499,
                "next_departure": "Platform 4 towards X",
                "_links": {
                    "self": {"href": "http://localhost:3000/stops/7"},
                    "next": {"href": "http://localhost:3000/stops/9"},
                    "prev": {"href": "http://localhost:3000/stops/3"}
                }
            })
        );
    }

    #[test]
    fn projected_view_keeps_id_and_links() {
        let view = StopView::from_snapshot("localhost:3000", &snapshot(Some("name")));
        let value = serde_json::to_value(&view).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["name"], "Erfurt Hbf");
        assert_eq!(value["stop_id"], 7);
        assert_eq!(value["_links"]["self"]["href"], "http://localhost:3000/stops/7");
    }

    #[test]
    fn summary_has_only_self_link() {
        let record = snapshot(None).record;
        let summary = StopSummary::from_record("example.org", &record);

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "stop_id": 7,
                "last_updated": "2024-03-09-12:00:40",
                "_links": {"self": {"href": "http://example.org/stops/7"}}
            })
        );
    }

    #[test]
    fn edge_stop_omits_missing_neighbors() {
        let links = StopLinks::new(
            "h",
            StopId::new(9),
            Some(Neighbors {
                next: None,
                prev: Some(StopId::new(7)),
            }),
        );

        assert_eq!(
            serde_json::to_value(&links).unwrap(),
            json!({"self": {"href": "http://h/stops/9"}, "prev": {"href": "http://h/stops/7"}})
        );
    }

    #[test]
    fn delete_messages() {
        assert_eq!(
            serde_json::to_value(DeleteResponse::not_found(StopId::new(42))).unwrap(),
            json!({"message": "The stop_id 42 was not found in the database.", "stop_id": 42})
        );
        assert_eq!(
            DeleteResponse::removed(StopId::new(42)).message,
            "The stop_id 42 was removed from the database."
        );
    }
}
