// [libs/domain/models/src/trending.rs]
/*!
 * =================================================================
 * APARATO: TRENDING AGGREGATES (V8.0 - VELOCITY READY)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
 * RESPONSABILIDAD: AGREGADOS DE VENTANA Y CANDIDATOS RANKEADOS
 * =================================================================
 */

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Agregado transitorio por contrato dentro de la ventana `[since, now)`.
///
/// Producido por el repositorio de menciones en cada consulta; nunca se
/// persiste. El orden de la lista devuelta no está especificado: el
/// ranking es responsabilidad del motor de trending.
#[derive(Debug, Clone, PartialEq)]
pub struct MentionAggregate {
    pub contract: String,
    pub chain: String,
    pub mentions_in_window: i64,
    pub unique_conversations_in_window: i64,
    pub first_seen_in_window: DateTime<Utc>,
    pub last_seen_in_window: DateTime<Utc>,
}

/// Candidato de trending efímero, producido por cada ciclo de escaneo.
///
/// `velocity` es el crecimiento relativo frente a la ventana anterior de
/// igual longitud (igual al conteo actual cuando la ventana previa está
/// vacía); `score = 2·mentions + 3·unique_conversations + 5·velocity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingToken {
    pub contract: String,
    pub chain: String,
    pub mentions: i64,
    pub unique_conversations: i64,
    pub velocity: f64,
    pub score: f64,
}
// FIN DEL ARCHIVO [libs/domain/models/src/trending.rs]
