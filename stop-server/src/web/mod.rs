//! Web layer for the stop cache.
//!
//! Provides HTTP endpoints for syncing, reading, patching and deleting
//! stops, plus operator profiles and the tourism guide.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
