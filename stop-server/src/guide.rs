//! Tourism guide built along a route between cached stops.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::StopId;
use crate::error::CoreError;
use crate::narrative::{NarrativeComposer, guide_prompt, strip_emphasis};
use crate::route::{RouteConfig, RouteFinder};
use crate::store::StopStore;
use crate::upstream::JourneyPlanner;

/// Default file the guide is written to.
pub const DEFAULT_GUIDE_PATH: &str = "tourism_guide.txt";

/// Where the guide artifact goes.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    pub path: PathBuf,
}

impl GuideConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GUIDE_PATH)
    }
}

pub struct GuideBuilder<'a, S: StopStore, J: JourneyPlanner, N: NarrativeComposer> {
    store: &'a S,
    planner: &'a J,
    composer: &'a N,
    route: &'a RouteConfig,
    config: &'a GuideConfig,
}

impl<'a, S, J, N> GuideBuilder<'a, S, J, N>
where
    S: StopStore,
    J: JourneyPlanner,
    N: NarrativeComposer,
{
    pub fn new(
        store: &'a S,
        planner: &'a J,
        composer: &'a N,
        route: &'a RouteConfig,
        config: &'a GuideConfig,
    ) -> Self {
        Self {
            store,
            planner,
            composer,
            route,
            config,
        }
    }

    /// Build the guide, overwrite the artifact file with it and return
    /// its text.
    pub async fn build(&self) -> Result<String, CoreError> {
        let ids: Vec<StopId> = self
            .store
            .list()
            .await?
            .into_iter()
            .map(|stop| stop.stop_id)
            .collect();

        let found = RouteFinder::new(self.planner, self.route).find(&ids).await?;
        let names = found.stop_names();

        let text = self.composer.compose(&guide_prompt(&names)).await?;
        let text = strip_emphasis(&text);

        tokio::fs::write(self.config.path(), &text).await?;
        info!(
            path = %self.config.path().display(),
            route = %names.join(", "),
            "tourism guide written"
        );

        Ok(text)
    }
}
