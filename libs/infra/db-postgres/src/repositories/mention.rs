// [libs/infra/db-postgres/src/repositories/mention.rs]
/*!
 * =================================================================
 * APARATO: MENTION REPOSITORY (V11.2 - EXACTLY-ONCE CERTIFIED)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: PERSISTENCIA DEDUPLICADA Y AGREGADOS DE VENTANA
 *
 * # Mathematical Proof (Constraint-Backed Dedup):
 * ON CONFLICT ... DO NOTHING sobre la restricción UNIQUE convierte la
 * violación en cero filas afectadas; el repositorio la reporta como
 * 'Duplicate', un estado de primera clase. Bajo cualquier orden de
 * reintentos, el ledger contiene a lo sumo una fila por triple.
 * =================================================================
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use sqlx::Row;
use std::time::Duration;
use tracing::{instrument, warn};

use radar_domain_models::{ContractMatch, MentionAggregate, RecordOutcome};
use radar_domain_trending::{MentionStore, StoreFault};

const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

const INSERT_MENTION_SQL: &str = r#"
    INSERT INTO mentions (contract, chain, conversation_id, message_id, observed_at)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (contract, conversation_id, message_id) DO NOTHING
"#;

/// Ventana semiabierta [since, now()) evaluada en el instante de consulta;
/// el ranking queda fuera: aquí el orden es no especificado.
const TRENDING_AGGREGATE_SQL: &str = r#"
    SELECT contract,
           chain,
           COUNT(*) AS mentions_in_window,
           COUNT(DISTINCT conversation_id) AS unique_conversations_in_window,
           MIN(observed_at) AS first_seen_in_window,
           MAX(observed_at) AS last_seen_in_window
    FROM mentions
    WHERE observed_at >= $1
      AND observed_at < NOW()
      AND ($2::TEXT IS NULL OR chain = $2)
    GROUP BY contract, chain
    HAVING COUNT(*) >= $3
       AND COUNT(DISTINCT conversation_id) >= $4
"#;

const COUNT_WINDOW_SQL: &str = r#"
    SELECT COUNT(*)
    FROM mentions
    WHERE contract = $1
      AND observed_at >= $2
      AND observed_at < $3
"#;

const PURGE_SQL: &str = "DELETE FROM mentions WHERE observed_at < $1";

#[derive(Clone)]
pub struct PostgresMentionRepository {
    pool: PgPool,
}

impl PostgresMentionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Acceso al pool compartido para repositorios hermanos.
    pub fn pool_handle(&self) -> PgPool {
        self.pool.clone()
    }

    /// Cierre cooperativo: drena el pool en todas las rutas de salida.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Los parpadeos de red en caliente son transitorios; el llamador decide
/// entre descartar (ingesta) o reintentar en el próximo tick (trending).
fn runtime_fault(fault: sqlx::Error) -> StoreFault {
    StoreFault::Transient(fault.to_string())
}

#[async_trait]
impl MentionStore for PostgresMentionRepository {
    #[instrument(skip(self, detected), fields(contract = %detected.contract))]
    async fn record(&self, detected: &ContractMatch) -> Result<RecordOutcome, StoreFault> {
        let insert_result = sqlx::query(INSERT_MENTION_SQL)
            .bind(&detected.contract)
            .bind(detected.chain)
            .bind(detected.conversation_id)
            .bind(detected.message_id)
            .bind(detected.observed_at)
            .execute(&self.pool)
            .await
            .map_err(runtime_fault)?;

        if insert_result.rows_affected() == 0 {
            Ok(RecordOutcome::Duplicate)
        } else {
            Ok(RecordOutcome::Inserted)
        }
    }

    async fn trending(
        &self,
        since: DateTime<Utc>,
        min_mentions: i64,
        min_unique: i64,
        chain: Option<&str>,
    ) -> Result<Vec<MentionAggregate>, StoreFault> {
        let aggregate_rows = sqlx::query(TRENDING_AGGREGATE_SQL)
            .bind(since)
            .bind(chain)
            .bind(min_mentions)
            .bind(min_unique)
            .fetch_all(&self.pool)
            .await
            .map_err(runtime_fault)?;

        let mut aggregates = Vec::with_capacity(aggregate_rows.len());
        for row in aggregate_rows {
            aggregates.push(MentionAggregate {
                contract: row.try_get("contract").map_err(runtime_fault)?,
                chain: row.try_get("chain").map_err(runtime_fault)?,
                mentions_in_window: row.try_get("mentions_in_window").map_err(runtime_fault)?,
                unique_conversations_in_window: row
                    .try_get("unique_conversations_in_window")
                    .map_err(runtime_fault)?,
                first_seen_in_window: row.try_get("first_seen_in_window").map_err(runtime_fault)?,
                last_seen_in_window: row.try_get("last_seen_in_window").map_err(runtime_fault)?,
            });
        }
        Ok(aggregates)
    }

    async fn count(
        &self,
        contract: &str,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64, StoreFault> {
        let total: i64 = sqlx::query_scalar(COUNT_WINDOW_SQL)
            .bind(contract)
            .bind(since)
            .bind(until)
            .fetch_one(&self.pool)
            .await
            .map_err(runtime_fault)?;
        Ok(total)
    }

    #[instrument(skip(self))]
    async fn purge(&self, before: DateTime<Utc>) -> Result<u64, StoreFault> {
        let purge_result = sqlx::query(PURGE_SQL)
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(runtime_fault)?;
        Ok(purge_result.rows_affected())
    }

    async fn is_healthy(&self) -> bool {
        match tokio::time::timeout(HEALTH_PROBE_TIMEOUT, sqlx::query("SELECT 1").execute(&self.pool)).await
        {
            Ok(Ok(_)) => true,
            Ok(Err(probe_fault)) => {
                warn!("⚠️ [HEALTH_PROBE]: Store probe rejected: {}", probe_fault);
                false
            }
            Err(_) => {
                warn!("⚠️ [HEALTH_PROBE]: Store probe timed out.");
                false
            }
        }
    }
}
// FIN DEL ARCHIVO [libs/infra/db-postgres/src/repositories/mention.rs]
