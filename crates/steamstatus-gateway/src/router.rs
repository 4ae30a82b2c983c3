//! Axum router wiring.
//!
//! Exposes the SVG endpoint and a liveness probe.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub const STATUS_SVG_PATH: &str = "/steam-status.svg";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(STATUS_SVG_PATH, get(transport::svg::steam_status_svg))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
