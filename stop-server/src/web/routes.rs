//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{StopId, StopPatch};
use crate::error::CoreError;
use crate::guide::{DEFAULT_GUIDE_PATH, GuideBuilder};
use crate::profiles::OperatorProfiler;
use crate::refresh::DepartureRefresher;
use crate::store::{StopStore, StoreError};
use crate::sync::{LocationSyncer, SyncStatus};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops", put(sync_stops))
        .route(
            "/stops/:stop_id",
            get(read_stop).put(patch_stop).delete(delete_stop),
        )
        .route("/operator-profiles/:stop_id", get(operator_profiles))
        .route("/guide", get(tourism_guide))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Authority used in self links.
fn request_host(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost")
        .to_string()
}

/// Sync stops matching a free-text query from the transit API.
async fn sync_stops(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<SyncRequest>,
) -> Result<Response, AppError> {
    let query = req.query.unwrap_or_default();
    let outcome = LocationSyncer::new(state.store.as_ref(), state.transit.as_ref())
        .sync(&query)
        .await?;

    let host = request_host(&headers);
    let stops: Vec<StopSummary> = outcome
        .stops
        .iter()
        .map(|stop| StopSummary::from_synced(&host, stop))
        .collect();

    let status = match outcome.status {
        SyncStatus::Created => StatusCode::CREATED,
        SyncStatus::Updated => StatusCode::OK,
    };
    Ok((status, Json(stops)).into_response())
}

/// Read one stop, refreshing its next departure when selected.
async fn read_stop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(stop_id): Path<i64>,
    Query(req): Query<ReadRequest>,
) -> Result<Json<StopView>, AppError> {
    let snapshot = DepartureRefresher::new(state.store.as_ref(), state.transit.as_ref())
        .read(StopId::new(stop_id), req.include.as_deref())
        .await?;

    Ok(Json(StopView::from_snapshot(
        &request_host(&headers),
        &snapshot,
    )))
}

/// Update some fields of one stop.
async fn patch_stop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(stop_id): Path<i64>,
    body: Bytes,
) -> Result<Json<StopSummary>, AppError> {
    // Parse JSON manually so a missing or malformed body gets our message
    let body: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid JSON body");
            AppError::BadRequest {
                message: format!("Invalid JSON: {e}"),
            }
        })?
    };

    let patch = StopPatch::from_json(&body).map_err(CoreError::from)?;
    let record = state
        .store
        .patch(StopId::new(stop_id), &patch)
        .await
        .map_err(CoreError::from)?;

    Ok(Json(StopSummary::from_record(
        &request_host(&headers),
        &record,
    )))
}

/// Delete one stop. A missing stop is reported with the same body shape.
async fn delete_stop(
    State(state): State<AppState>,
    Path(stop_id): Path<i64>,
) -> Result<Response, AppError> {
    let id = StopId::new(stop_id);
    match state.store.delete(id).await {
        Ok(()) => Ok((StatusCode::OK, Json(DeleteResponse::removed(id))).into_response()),
        Err(StoreError::NotFound(_)) => {
            Ok((StatusCode::NOT_FOUND, Json(DeleteResponse::not_found(id))).into_response())
        }
        Err(e) => Err(CoreError::from(e).into()),
    }
}

/// Profiles of the operators departing from one stop.
async fn operator_profiles(
    State(state): State<AppState>,
    Path(stop_id): Path<i64>,
) -> Result<Json<ProfilesResponse>, AppError> {
    let id = StopId::new(stop_id);
    let profiles = OperatorProfiler::new(
        state.store.as_ref(),
        state.transit.as_ref(),
        state.narrator.as_ref(),
    )
    .profiles(id)
    .await?;

    Ok(Json(ProfilesResponse {
        stop_id: id,
        profiles,
    }))
}

/// Build the tourism guide and return it as a text attachment.
async fn tourism_guide(State(state): State<AppState>) -> Result<Response, AppError> {
    let text = GuideBuilder::new(
        state.store.as_ref(),
        state.transit.as_ref(),
        state.narrator.as_ref(),
        &state.route,
        &state.guide,
    )
    .build()
    .await?;

    let filename = state
        .guide
        .path()
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_GUIDE_PATH);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        text,
    )
        .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        let message = e.to_string();
        match e {
            CoreError::InvalidParameter(_)
            | CoreError::InvalidField(_)
            | CoreError::InvalidValue(_)
            | CoreError::InvalidFormat(_)
            | CoreError::InsufficientStops
            | CoreError::RouteFailure => AppError::BadRequest { message },
            CoreError::NotFound(_) | CoreError::NotAvailable(_) => AppError::NotFound { message },
            CoreError::UpstreamBusy => AppError::Unavailable { message },
            CoreError::NarrativeUnavailable(_) => {
                error!(%message, "text generation failed");
                AppError::Unavailable {
                    message: "Text generation service unavailable".to_string(),
                }
            }
            CoreError::Upstream(_) => AppError::BadGateway { message },
            CoreError::Storage(_) | CoreError::Artifact(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::BadGateway { message } => {
                error!(%message, "upstream failure");
                (StatusCode::BAD_GATEWAY, "Upstream service failed".to_string())
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
