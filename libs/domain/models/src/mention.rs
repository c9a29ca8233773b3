// [libs/domain/models/src/mention.rs]
/*!
 * =================================================================
 * APARATO: CONTRACT MENTION ARTIFACTS (V6.2)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
 * RESPONSABILIDAD: MENCIÓN DETECTADA Y RESULTADO DE PERSISTENCIA
 * =================================================================
 */

use chrono::{DateTime, Utc};

/// Mención de contrato extraída de un mensaje por un detector de cadena.
///
/// Inmutable una vez producida. `contract` llega ya normalizado según las
/// reglas de la cadena emisora; `observed_at` es el instante de detección
/// (UTC), no la marca temporal propia del mensaje.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractMatch {
    pub contract: String,
    pub chain: &'static str,
    pub conversation_id: i64,
    pub message_id: i64,
    pub observed_at: DateTime<Utc>,
}

/// Resultado de primera clase de un intento de persistencia.
///
/// El duplicado NO es excepcional: la identidad
/// `(contract, conversation_id, message_id)` ya existía en el ledger y el
/// llamador debe contabilizarlo por separado del insert real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted,
    Duplicate,
}
// FIN DEL ARCHIVO [libs/domain/models/src/mention.rs]
