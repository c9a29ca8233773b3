// [apps/sentinel/src/handlers/metrics.rs]
//! Superficie de scrape Prometheus.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

pub async fn handle_metrics_scrape(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render_prometheus(),
    )
}
// FIN DEL ARCHIVO [apps/sentinel/src/handlers/metrics.rs]
