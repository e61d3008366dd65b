//! Journey types.
//!
//! A `Journey` is an itinerary returned by the upstream journey planner,
//! reduced to the names of the points each leg connects.

/// One directed segment of a journey.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyLeg {
    /// Name of the point the leg starts at
    pub origin: Option<String>,
    /// Name of the point the leg ends at
    pub destination: Option<String>,
}

impl JourneyLeg {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
            destination: Some(destination.into()),
        }
    }
}

/// An ordered sequence of legs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journey {
    pub legs: Vec<JourneyLeg>,
}

impl Journey {
    pub fn new(legs: Vec<JourneyLeg>) -> Self {
        Self { legs }
    }

    /// Flatten the legs into the names of the points visited: the origin
    /// of the first leg, then each leg's destination.
    ///
    /// Points the upstream left unnamed are omitted.
    pub fn stop_names(&self) -> Vec<String> {
        let first = self.legs.first().and_then(|leg| leg.origin.clone());
        first
            .into_iter()
            .chain(self.legs.iter().filter_map(|leg| leg.destination.clone()))
            .collect()
    }
}
