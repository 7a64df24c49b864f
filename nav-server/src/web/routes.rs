//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::directions::{DirectionsError, DirectionsResponse};
use crate::geocode::{GeocodeFailure, check_geocoding};
use crate::summary::TripSummary;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/get_summary", post(get_summary))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the trip form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Summarise the trip between an origin and a destination.
async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: SummaryRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid summary request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;
    let query = req.into_query();

    let response = state.directions.directions(&query).await?;

    check_geocoding(&query, &response)?;

    let trip = TripSummary::build(&query, &response).map_err(|e| AppError::NotAcceptable {
        // Rejected requests say why in `error_message`; prefer that.
        message: response
            .error_message
            .clone()
            .unwrap_or_else(|| e.to_string()),
    })?;

    log_route_details(&response);

    if accepts_html(&headers) {
        let html = TripCardTemplate::from_trip(&trip)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(trip).into_response())
    }
}

/// Record the route facts that don't make it into the summary.
fn log_route_details(response: &DirectionsResponse) {
    let mode = response.travel_mode_and_duration().ok();
    let in_traffic = response.duration_in_traffic_value(0).ok().flatten();
    let departs = response
        .departure_time(0)
        .ok()
        .flatten()
        .and_then(|t| t.to_datetime());
    let arrives = response
        .arrival_time(0)
        .ok()
        .flatten()
        .and_then(|t| t.to_datetime());

    debug!(
        routes = response.route_count(),
        locations = ?response.waypoint_count_or_error().ok(),
        start = response.start_address().unwrap_or_default(),
        end = response.end_address().unwrap_or_default(),
        travel_mode = mode.as_ref().map(|m| m.travel_mode.as_str()),
        duration_secs = mode.as_ref().map(|m| m.duration),
        duration_in_traffic_secs = in_traffic,
        "route found"
    );

    if let Some(vehicle) = response.transit_vehicle_name() {
        let preferences = response.transit_route_preferences().ok();
        debug!(
            vehicle,
            departs = ?departs,
            arrives = ?arrives,
            walking_secs = preferences.map(|p| p.walking_duration),
            transit_secs = preferences.map(|p| p.transit_duration),
            "transit itinerary"
        );
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    /// The trip cannot be summarised (unknown place, no route)
    NotAcceptable { message: String },
    /// The directions API could not be reached or misbehaved
    Upstream { message: String },
    Internal { message: String },
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<GeocodeFailure> for AppError {
    fn from(e: GeocodeFailure) -> Self {
        AppError::NotAcceptable {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotAcceptable { message } => (StatusCode::NOT_ACCEPTABLE, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
