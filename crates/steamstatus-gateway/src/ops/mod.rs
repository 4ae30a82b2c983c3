//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness (never touches the upstream site)

use axum::{http::StatusCode, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
