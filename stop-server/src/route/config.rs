//! Route search configuration.

/// Default departure anchor passed to the journey planner.
pub const DEFAULT_DEPARTURE: &str = "tomorrow";

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Departure anchor, e.g. `tomorrow` or an ISO timestamp.
    pub departure: String,

    /// Journeys requested per pair.
    pub results: u8,

    /// Maximum number of pairs to ask about.
    /// `None` tries every ordered pair.
    pub max_pairs: Option<usize>,
}

impl RouteConfig {
    pub fn new(departure: impl Into<String>) -> Self {
        Self {
            departure: departure.into(),
            ..Self::default()
        }
    }

    /// Stop after asking about `max_pairs` pairs.
    pub fn with_max_pairs(mut self, max_pairs: usize) -> Self {
        self.max_pairs = Some(max_pairs);
        self
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            departure: DEFAULT_DEPARTURE.to_string(),
            results: 1,
            max_pairs: None,
        }
    }
}
