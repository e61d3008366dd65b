//! Scripted transit API for tests.
//!
//! Serves canned answers keyed by query, stop or stop pair and records
//! every call so tests can assert on call order.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{Departure, Journey, StopId};

use super::{DepartureBoard, JourneyPlanner, LocationMatch, LocationSearch, UpstreamError};

/// A failure class to answer with.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    NotFound,
    BadParameter,
    EmptyBody,
    Busy,
    Api(u16),
}

impl Failure {
    fn into_error(self) -> UpstreamError {
        match self {
            Failure::NotFound => UpstreamError::NotFound,
            Failure::BadParameter => UpstreamError::BadParameter("rejected".to_string()),
            Failure::EmptyBody => UpstreamError::EmptyBody,
            Failure::Busy => UpstreamError::Busy,
            Failure::Api(status) => UpstreamError::Api {
                status,
                message: "scripted".to_string(),
            },
        }
    }
}

/// Mock transit API. Unscripted requests answer [`Failure::NotFound`].
#[derive(Default)]
pub struct MockTransit {
    locations: HashMap<String, Result<Vec<LocationMatch>, Failure>>,
    departures: HashMap<StopId, Result<Vec<Departure>, Failure>>,
    journeys: HashMap<(StopId, StopId), Result<Vec<Journey>, Failure>>,
    location_calls: Mutex<Vec<String>>,
    departure_calls: Mutex<Vec<(StopId, u32)>>,
    journey_calls: Mutex<Vec<(StopId, StopId)>>,
}

impl MockTransit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locations(mut self, query: &str, matches: Vec<LocationMatch>) -> Self {
        self.locations.insert(query.to_string(), Ok(matches));
        self
    }

    pub fn failing_locations(mut self, query: &str, failure: Failure) -> Self {
        self.locations.insert(query.to_string(), Err(failure));
        self
    }

    pub fn with_departures(mut self, stop: i64, departures: Vec<Departure>) -> Self {
        self.departures.insert(StopId::new(stop), Ok(departures));
        self
    }

    pub fn failing_departures(mut self, stop: i64, failure: Failure) -> Self {
        self.departures.insert(StopId::new(stop), Err(failure));
        self
    }

    pub fn with_journey(mut self, from: i64, to: i64, journey: Journey) -> Self {
        self.journeys
            .insert((StopId::new(from), StopId::new(to)), Ok(vec![journey]));
        self
    }

    pub fn with_journeys(mut self, from: i64, to: i64, journeys: Vec<Journey>) -> Self {
        self.journeys
            .insert((StopId::new(from), StopId::new(to)), Ok(journeys));
        self
    }

    pub fn failing_journey(mut self, from: i64, to: i64, failure: Failure) -> Self {
        self.journeys
            .insert((StopId::new(from), StopId::new(to)), Err(failure));
        self
    }

    pub fn location_calls(&self) -> Vec<String> {
        self.location_calls.lock().unwrap().clone()
    }

    pub fn departure_calls(&self) -> Vec<(StopId, u32)> {
        self.departure_calls.lock().unwrap().clone()
    }

    pub fn journey_calls(&self) -> Vec<(i64, i64)> {
        self.journey_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(from, to)| (from.get(), to.get()))
            .collect()
    }
}

fn answer<T: Clone>(scripted: Option<&Result<T, Failure>>) -> Result<T, UpstreamError> {
    match scripted {
        Some(Ok(value)) => Ok(value.clone()),
        Some(Err(failure)) => Err(failure.into_error()),
        None => Err(UpstreamError::NotFound),
    }
}

impl LocationSearch for MockTransit {
    async fn search_locations(&self, query: &str) -> Result<Vec<LocationMatch>, UpstreamError> {
        self.location_calls.lock().unwrap().push(query.to_string());
        answer(self.locations.get(query))
    }
}

impl DepartureBoard for MockTransit {
    async fn departures(
        &self,
        stop: StopId,
        duration_mins: u32,
    ) -> Result<Vec<Departure>, UpstreamError> {
        self.departure_calls
            .lock()
            .unwrap()
            .push((stop, duration_mins));
        answer(self.departures.get(&stop))
    }
}

impl JourneyPlanner for MockTransit {
    async fn journeys(
        &self,
        from: StopId,
        to: StopId,
        _departure: &str,
        _results: u8,
    ) -> Result<Vec<Journey>, UpstreamError> {
        self.journey_calls.lock().unwrap().push((from, to));
        answer(self.journeys.get(&(from, to)))
    }
}
