//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, error, warn};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a route between two cities.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanRouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(
            error = %e,
            body = %String::from_utf8_lossy(&body),
            "Rejected route request"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let query = req.to_query();
    let objective = req.objective;
    debug!(
        origin = %query.origin,
        destination = %query.destination,
        ?objective,
        "Planning route"
    );

    // Exhaustive search can run long; keep it off the async workers
    let planner = state.planner.clone();
    let route = tokio::task::spawn_blocking(move || planner.route(objective, &query))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("route search failed: {e}"),
        })?;

    Ok(Json(PlanRouteResponse::from_route(objective, &route)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            debug!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
