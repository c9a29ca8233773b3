// [libs/domain/detection/src/detector.rs]
//! Contrato soberano de los detectores de cadena.

use chrono::{DateTime, Utc};
use radar_domain_models::ContractMatch;

/// Capacidad mínima de un detector de cadena.
///
/// La extracción es pura: sin I/O, sin estado, determinista para una
/// entrada dada. Nunca falla; un token malformado simplemente no se
/// emite. Dentro de un mismo mensaje, las repeticiones de un contrato
/// colapsan a una única mención (dedup por detector, preservando el
/// orden de primera aparición).
pub trait ChainDetector: Send + Sync {
    /// Identificador de cadena en minúsculas (ej. `"solana"`, `"evm"`).
    fn chain_name(&self) -> &'static str;

    /// Extrae las menciones de contrato del cuerpo de un mensaje.
    ///
    /// `observed_at` es el instante de detección estampado una sola vez
    /// por el pipeline de ingesta; pasarlo como parámetro mantiene la
    /// extracción determinista.
    fn extract(
        &self,
        message_text: &str,
        conversation_id: i64,
        message_id: i64,
        observed_at: DateTime<Utc>,
    ) -> Vec<ContractMatch>;
}
// FIN DEL ARCHIVO [libs/domain/detection/src/detector.rs]
