//! Route search over the cached stops.
//!
//! Answers "which two cached stops can be joined by a journey?" by asking
//! the journey planner about ordered pairs of stops until one answers with
//! an itinerary. The pair order is fixed: origins ascend, destinations
//! descend, so the widest-apart ids are tried first.

mod config;
mod finder;

pub use config::RouteConfig;
pub use finder::{RouteFinder, RouteMatch};
