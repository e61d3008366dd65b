//! Stop cache server.
//!
//! A web application that keeps a local cache of public transport stops,
//! refreshed on demand from a transit REST API, and uses a text-generation
//! service for operator profiles and tourism guides along routes between
//! cached stops.

pub mod config;
pub mod domain;
pub mod error;
pub mod guide;
pub mod narrative;
pub mod profiles;
pub mod refresh;
pub mod route;
pub mod store;
pub mod sync;
pub mod upstream;
pub mod web;
