// [apps/sentinel/src/routes.rs]
/*!
 * =================================================================
 * APARATO: SURFACE ROUTING MATRIX (V6.0)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L1-APP)
 * RESPONSABILIDAD: TOPOLOGÍA DE LAS DOS SUPERFICIES HTTP
 *
 * Salud y métricas escuchan en puertos separados para que el scrape de
 * Prometheus pueda quedar detrás de otra política de red que la sonda
 * de liveness.
 * =================================================================
 */

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, metrics};
use crate::state::AppState;

pub fn create_health_router(application_shared_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handle_health_probe))
        .layer(TraceLayer::new_for_http())
        .with_state(application_shared_state)
}

pub fn create_metrics_router(application_shared_state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics::handle_metrics_scrape))
        .layer(TraceLayer::new_for_http())
        .with_state(application_shared_state)
}
// FIN DEL ARCHIVO [apps/sentinel/src/routes.rs]
