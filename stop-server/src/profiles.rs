//! Operator profiles: a short generated description of each company
//! running departures from a stop.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::StopId;
use crate::error::CoreError;
use crate::narrative::{NarrativeComposer, operator_prompt};
use crate::store::StopStore;
use crate::upstream::DepartureBoard;

/// Departure window scanned for operators.
pub const PROFILE_WINDOW_MINS: u32 = 90;

/// At most this many operators are profiled per stop.
pub const MAX_PROFILES: usize = 5;

const NOT_AVAILABLE: &str = "Operator information not available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorProfile {
    pub operator_name: String,
    pub information: String,
}

pub struct OperatorProfiler<'a, S: StopStore, B: DepartureBoard, N: NarrativeComposer> {
    store: &'a S,
    board: &'a B,
    composer: &'a N,
}

impl<'a, S, B, N> OperatorProfiler<'a, S, B, N>
where
    S: StopStore,
    B: DepartureBoard,
    N: NarrativeComposer,
{
    pub fn new(store: &'a S, board: &'a B, composer: &'a N) -> Self {
        Self {
            store,
            board,
            composer,
        }
    }

    /// Profile the distinct operators departing from `id`, in board order.
    pub async fn profiles(&self, id: StopId) -> Result<Vec<OperatorProfile>, CoreError> {
        self.store.get(id).await?;

        let departures = self
            .board
            .departures(id, PROFILE_WINDOW_MINS)
            .await
            .map_err(|e| CoreError::from_upstream(e, NOT_AVAILABLE))?;

        let mut seen = HashSet::new();
        let operators: Vec<String> = departures
            .into_iter()
            .filter_map(|d| d.operator)
            .map(|op| op.trim().to_string())
            .filter(|op| !op.is_empty() && seen.insert(op.clone()))
            .take(MAX_PROFILES)
            .collect();
        debug!(stop_id = %id, operators = operators.len(), "operators collected");

        let mut profiles = Vec::with_capacity(operators.len());
        for operator_name in operators {
            let information = self.composer.compose(&operator_prompt(&operator_name)).await?;
            profiles.push(OperatorProfile {
                operator_name,
                information,
            });
        }
        info!(stop_id = %id, profiles = profiles.len(), "operator profiles composed");

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Departure, Latitude, Longitude, StopRecord, Timestamp};
    use crate::narrative::mock::MockComposer;
    use crate::store::SqliteStopStore;
    use crate::upstream::mock::{Failure, MockTransit};

    fn run_by(operator: Option<&str>) -> Departure {
        Departure {
            direction: Some("Hamburg Hbf".to_string()),
            platform: Some("1".to_string()),
            operator: operator.map(str::to_string),
        }
    }

    async fn store_with(id: i64) -> SqliteStopStore {
        let store = SqliteStopStore::in_memory().await.unwrap();
        store
            .upsert(&StopRecord::new(
                StopId::new(id),
                Some("Berlin Hbf".to_string()),
                Latitude::new(52.525589).unwrap(),
                Longitude::new(13.369549).unwrap(),
                Timestamp::now(),
            ))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn distinct_operators_in_board_order() {
        let store = store_with(8011160).await;
        let transit = MockTransit::new().with_departures(
            8011160,
            vec![
                run_by(Some("DB Fernverkehr AG")),
                run_by(None),
                run_by(Some("S-Bahn Berlin")),
                run_by(Some("  ")),
                run_by(Some("DB Fernverkehr AG")),
                run_by(Some("ODEG")),
            ],
        );
        let composer = MockComposer::replying("A railway company.");

        let profiles = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(8011160))
            .await
            .unwrap();

        let names: Vec<&str> = profiles.iter().map(|p| p.operator_name.as_str()).collect();
        assert_eq!(names, vec!["DB Fernverkehr AG", "S-Bahn Berlin", "ODEG"]);
        assert!(profiles.iter().all(|p| p.information == "A railway company."));
        assert_eq!(
            composer.prompts()[0],
            "Give me some facts about DB Fernverkehr AG transport operator in one paragraph"
        );
        assert_eq!(
            transit.departure_calls(),
            vec![(StopId::new(8011160), PROFILE_WINDOW_MINS)]
        );
    }

    #[tokio::test]
    async fn at_most_five_profiles() {
        let store = store_with(1).await;
        let departures = (0..8)
            .map(|n| run_by(Some(&format!("Operator {n}"))))
            .collect();
        let transit = MockTransit::new().with_departures(1, departures);
        let composer = MockComposer::replying("text");

        let profiles = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(1))
            .await
            .unwrap();

        assert_eq!(profiles.len(), MAX_PROFILES);
        assert_eq!(composer.prompts().len(), MAX_PROFILES);
        assert_eq!(profiles[4].operator_name, "Operator 4");
    }

    #[tokio::test]
    async fn missing_stop_is_not_found() {
        let store = store_with(1).await;
        let transit = MockTransit::new();
        let composer = MockComposer::replying("text");

        let result = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(2))
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
        assert!(transit.departure_calls().is_empty());
    }

    #[tokio::test]
    async fn upstream_failures_are_classified() {
        let store = store_with(1).await;
        let composer = MockComposer::replying("text");

        let transit = MockTransit::new();
        let result = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(1))
            .await;
        assert!(matches!(
            result,
            Err(CoreError::NotAvailable(ref msg)) if msg == "Operator information not available"
        ));

        let transit = MockTransit::new().failing_departures(1, Failure::Busy);
        let result = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(1))
            .await;
        assert!(matches!(result, Err(CoreError::UpstreamBusy)));

        let transit = MockTransit::new().failing_departures(1, Failure::EmptyBody);
        let result = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(1))
            .await;
        assert!(matches!(result, Err(CoreError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn narrative_outage_is_reported() {
        let store = store_with(1).await;
        let transit = MockTransit::new().with_departures(1, vec![run_by(Some("ODEG"))]);
        let composer = MockComposer::unavailable();

        let result = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(1))
            .await;

        assert!(matches!(result, Err(CoreError::NarrativeUnavailable(_))));
    }

    #[tokio::test]
    async fn no_operators_is_an_empty_list() {
        let store = store_with(1).await;
        let transit = MockTransit::new().with_departures(1, vec![run_by(None)]);
        let composer = MockComposer::replying("text");

        let profiles = OperatorProfiler::new(&store, &transit, &composer)
            .profiles(StopId::new(1))
            .await
            .unwrap();

        assert!(profiles.is_empty());
        assert!(composer.prompts().is_empty());
    }
}
