use std::net::SocketAddr;

use flight_planner::planner::{Planner, PlannerConfig};
use flight_planner::source::JsonFlightFile;
use flight_planner::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Address to listen on when `PLANNER_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(message) = run().await {
        error!("{message}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let flights_path = std::env::var("FLIGHTS_PATH")
        .map_err(|_| "FLIGHTS_PATH must point at a JSON file of flights".to_string())?;

    let addr: SocketAddr = std::env::var("PLANNER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .map_err(|e| format!("invalid PLANNER_ADDR: {e}"))?;

    // Load flights and build the graph (fail fast if unavailable)
    let source = JsonFlightFile::new(&flights_path);
    let planner =
        Planner::from_source(&source, PlannerConfig::default()).map_err(|e| e.to_string())?;
    info!(
        cities = planner.graph().city_count(),
        flights = planner.graph().flight_count(),
        "Flight graph ready"
    );

    let app = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;
    info!(%addr, "Flight route planner listening");
    info!("  GET  /health  - Health check");
    info!("  POST /routes  - Plan a route");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
