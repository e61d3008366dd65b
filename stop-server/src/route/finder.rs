//! Pairwise route search.

use tracing::{debug, info, warn};

use crate::domain::{Journey, StopId};
use crate::error::CoreError;
use crate::upstream::{JourneyPlanner, UpstreamError};

use super::config::RouteConfig;

/// The first pair of stops the journey planner could connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub origin: StopId,
    pub destination: StopId,
    pub journey: Journey,
    /// Number of pairs asked about, including the accepted one.
    pub pairs_examined: usize,
}

impl RouteMatch {
    /// Names of the points the journey visits, in travel order.
    pub fn stop_names(&self) -> Vec<String> {
        self.journey.stop_names()
    }
}

/// What to do after one pair's answer.
enum PairOutcome {
    Accept(Journey),
    Next,
}

/// Route finder over a fixed set of stop ids.
pub struct RouteFinder<'a, J: JourneyPlanner> {
    planner: &'a J,
    config: &'a RouteConfig,
}

impl<'a, J: JourneyPlanner> RouteFinder<'a, J> {
    pub fn new(planner: &'a J, config: &'a RouteConfig) -> Self {
        Self { planner, config }
    }

    /// Find the first connectable pair among `ids`.
    ///
    /// Pairs are tried origin-ascending, destination-descending, skipping
    /// a stop paired with itself. Calls are sequential, so an exhaustive
    /// search over n stops makes up to n(n-1) upstream requests.
    pub async fn find(&self, ids: &[StopId]) -> Result<RouteMatch, CoreError> {
        let mut ascending = ids.to_vec();
        ascending.sort_unstable();
        ascending.dedup();

        if ascending.len() < 2 {
            return Err(CoreError::InsufficientStops);
        }

        let descending: Vec<StopId> = ascending.iter().rev().copied().collect();
        let mut examined = 0;

        for &origin in &ascending {
            for &destination in &descending {
                if origin == destination {
                    continue;
                }

                if self.config.max_pairs.is_some_and(|cap| examined >= cap) {
                    warn!(examined, "route search stopped at pair limit");
                    return Err(CoreError::RouteFailure);
                }
                examined += 1;

                let answer = self
                    .planner
                    .journeys(origin, destination, &self.config.departure, self.config.results)
                    .await;

                if let PairOutcome::Accept(journey) = classify(origin, destination, answer)? {
                    info!(%origin, %destination, examined, "route found");
                    return Ok(RouteMatch {
                        origin,
                        destination,
                        journey,
                        pairs_examined: examined,
                    });
                }
            }
        }

        warn!(examined, "no pair of stops could be connected");
        Err(CoreError::RouteFailure)
    }
}

fn classify(
    origin: StopId,
    destination: StopId,
    answer: Result<Vec<Journey>, UpstreamError>,
) -> Result<PairOutcome, CoreError> {
    match answer {
        Ok(journeys) => match journeys.into_iter().next() {
            Some(journey) => Ok(PairOutcome::Accept(journey)),
            None => {
                debug!(%origin, %destination, "no journeys");
                Ok(PairOutcome::Next)
            }
        },
        Err(e) if e.is_bad_request() => {
            Err(CoreError::InvalidParameter("Incorrect parameter".to_string()))
        }
        Err(UpstreamError::Busy) => Err(CoreError::UpstreamBusy),
        Err(e @ (UpstreamError::NotFound | UpstreamError::Api { .. })) => {
            debug!(%origin, %destination, error = %e, "pair not connectable");
            Ok(PairOutcome::Next)
        }
        Err(e) => Err(CoreError::Upstream(e)),
    }
}
