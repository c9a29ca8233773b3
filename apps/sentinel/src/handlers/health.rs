// [apps/sentinel/src/handlers/health.rs]
/*!
 * =================================================================
 * APARATO: HEALTH PROBE HANDLER (V5.0)
 * CLASIFICACIÓN: API ADAPTER (ESTRATO L1-APP)
 * RESPONSABILIDAD: VEREDICTO DE VITALIDAD TRANSPORTE + ALMACÉN
 * =================================================================
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;

use crate::state::AppState;

/// `200 healthy` sii el transporte está conectado Y el almacén responde;
/// `503 degraded` con la razón en cualquier otro caso. Sin autenticación.
pub async fn handle_health_probe(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let transport_connected = state.transport_link.load(Ordering::SeqCst);
    let store_reachable = state.mention_store.is_healthy().await;

    if transport_connected && store_reachable {
        return (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "details": { "transport": "connected", "store": "reachable" }
            })),
        );
    }

    let mut degradation_reasons = Vec::new();
    if !transport_connected {
        degradation_reasons.push("transport disconnected");
    }
    if !store_reachable {
        degradation_reasons.push("store unreachable");
    }

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "degraded",
            "details": degradation_reasons.join("; ")
        })),
    )
}
// FIN DEL ARCHIVO [apps/sentinel/src/handlers/health.rs]
