//! Application state for the web layer.

use std::sync::Arc;

use crate::guide::GuideConfig;
use crate::narrative::GeminiClient;
use crate::route::RouteConfig;
use crate::store::SqliteStopStore;
use crate::upstream::TransportClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Stop cache
    pub store: Arc<SqliteStopStore>,

    /// Transit REST API client
    pub transit: Arc<TransportClient>,

    /// Text-generation client
    pub narrator: Arc<GeminiClient>,

    /// Route search configuration
    pub route: Arc<RouteConfig>,

    /// Where the tourism guide is written
    pub guide: Arc<GuideConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        store: SqliteStopStore,
        transit: TransportClient,
        narrator: GeminiClient,
        route: RouteConfig,
        guide: GuideConfig,
    ) -> Self {
        Self {
            store: Arc::new(store),
            transit: Arc::new(transit),
            narrator: Arc::new(narrator),
            route: Arc::new(route),
            guide: Arc::new(guide),
        }
    }
}
