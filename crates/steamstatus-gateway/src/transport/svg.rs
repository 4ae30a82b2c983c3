//! `GET /steam-status.svg`
//!
//! Two outcomes only:
//! - success: 200 + the stats card
//! - any error from fetch/aggregation: 500 + the error card
//!
//! Both are SVG so an `<img>` embed always shows something legible.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use steamstatus_core::error::SteamStatusError;
use steamstatus_core::render::render_error;

use crate::app_state::AppState;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml; charset=utf-8";
const CACHE_CONTROL: &str = "no-cache, max-age=0";

fn svg_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        body,
    )
        .into_response()
}

/// Handler-boundary error: renders as the 500 error card.
#[derive(Debug)]
pub struct SvgError(pub SteamStatusError);

impl From<SteamStatusError> for SvgError {
    fn from(e: SteamStatusError) -> Self {
        Self(e)
    }
}

impl IntoResponse for SvgError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.0.code().as_str(), error = %self.0, "steam status request failed");
        svg_response(StatusCode::INTERNAL_SERVER_ERROR, render_error(&self.0.to_string()))
    }
}

pub async fn steam_status_svg(State(app): State<AppState>) -> Result<Response, SvgError> {
    let record = app.aggregator().collect().await?;
    tracing::info!(
        nickname = %record.nickname,
        games = record.games,
        perfect_games = record.perfect_games,
        "rendered steam status"
    );
    Ok(svg_response(StatusCode::OK, app.renderer().render(&record)))
}
