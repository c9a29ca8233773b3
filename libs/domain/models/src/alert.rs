// [libs/domain/models/src/alert.rs]
//! Registro de auditoría de alertas y resultado de entrega.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Entrada append-only del historial de alertas emitidas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRecord {
    pub contract: String,
    pub chain: String,
    pub score: f64,
    pub mentions: i64,
    pub unique_conversations: i64,
    pub velocity: f64,
    pub alerted_at: DateTime<Utc>,
}

/// Resultado de primera clase del envío de una alerta.
///
/// El fallo de entrega se registra con el payload completo y nunca se
/// reintenta de forma síncrona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    Failed(String),
}
// FIN DEL ARCHIVO [libs/domain/models/src/alert.rs]
