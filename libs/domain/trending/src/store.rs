// [libs/domain/trending/src/store.rs]
/*!
 * =================================================================
 * APARATO: MENTION STORE PORT (V9.3 - DEDUP SOVEREIGN)
 * CLASIFICACIÓN: DOMAIN PORT (ESTRATO L2/L3)
 * RESPONSABILIDAD: CONTRATO DE PERSISTENCIA VENTANEADA DE MENCIONES
 *
 * # Mathematical Proof (Exactly-Once Counting):
 * La unicidad de (contract, conversation_id, message_id) la impone el
 * ALMACÉN, nunca el llamador. Bajo reintentos o eventos duplicados,
 * count(c, t0, t1) equivale al cardinal de triples distintos observados
 * en [t0, t1), independiente del orden de inserción.
 * =================================================================
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use radar_domain_models::{AlertRecord, ContractMatch, MentionAggregate, RecordOutcome};

/// Catálogo de fallos del estrato de persistencia.
#[derive(Error, Debug)]
pub enum StoreFault {
    /// Parpadeo de conectividad: la operación afectada se descarta
    /// (ingesta) o se reintenta en el próximo tick (trending).
    #[error("[L3_STORE_TRANSIENT]: CONNECTIVITY_DEGRADED -> {0}")]
    Transient(String),

    /// Esquema incompatible o autenticación rechazada en el arranque.
    #[error("[L3_STORE_FATAL]: SCHEMA_OR_AUTH_REJECTED -> {0}")]
    Fatal(String),
}

/// Puerto de persistencia de menciones.
///
/// Todas las ventanas son semiabiertas `[since, until)`: un tick del bucle
/// de trending que coincide con una mención en el instante frontera nunca
/// la cuenta dos veces.
#[async_trait]
pub trait MentionStore: Send + Sync {
    /// Intenta persistir una mención. El duplicado es un estado de primera
    /// clase, distinguible del insert para la contabilidad del llamador.
    async fn record(&self, detected: &ContractMatch) -> Result<RecordOutcome, StoreFault>;

    /// Contratos con, dentro de `[since, now)`, conteo total >= `min_mentions`
    /// Y conversaciones distintas >= `min_unique`. `chain` filtra cuando se
    /// provee. El orden de la lista no está especificado.
    async fn trending(
        &self,
        since: DateTime<Utc>,
        min_mentions: i64,
        min_unique: i64,
        chain: Option<&str>,
    ) -> Result<Vec<MentionAggregate>, StoreFault>;

    /// Menciones totales de un contrato en `[since, until)`.
    async fn count(
        &self,
        contract: &str,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64, StoreFault>;

    /// Elimina toda mención con `observed_at < before`; devuelve el conteo.
    async fn purge(&self, before: DateTime<Utc>) -> Result<u64, StoreFault>;

    /// Sonda rápida de vitalidad para la superficie de salud.
    async fn is_healthy(&self) -> bool;
}

/// Puerto del historial de alertas (auditoría append-only).
#[async_trait]
pub trait AlertArchive: Send + Sync {
    async fn append(&self, record: &AlertRecord) -> Result<(), StoreFault>;
}
// FIN DEL ARCHIVO [libs/domain/trending/src/store.rs]
