// [libs/infra/db-postgres/src/repositories/alert_history.rs]
/*!
 * =================================================================
 * APARATO: ALERT HISTORY REPOSITORY (V4.1)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: AUDITORÍA APPEND-ONLY DE ALERTAS EMITIDAS
 * =================================================================
 */

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::instrument;

use radar_domain_models::AlertRecord;
use radar_domain_trending::{AlertArchive, StoreFault};

const APPEND_ALERT_SQL: &str = r#"
    INSERT INTO alert_history
        (contract, chain, score, mentions, unique_conversations, velocity, alerted_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
"#;

#[derive(Clone)]
pub struct AlertHistoryRepository {
    pool: PgPool,
}

impl AlertHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertArchive for AlertHistoryRepository {
    #[instrument(skip(self, record), fields(contract = %record.contract))]
    async fn append(&self, record: &AlertRecord) -> Result<(), StoreFault> {
        sqlx::query(APPEND_ALERT_SQL)
            .bind(&record.contract)
            .bind(&record.chain)
            .bind(record.score)
            .bind(record.mentions)
            .bind(record.unique_conversations)
            .bind(record.velocity)
            .bind(record.alerted_at)
            .execute(&self.pool)
            .await
            .map_err(|append_fault| StoreFault::Transient(append_fault.to_string()))?;
        Ok(())
    }
}
// FIN DEL ARCHIVO [libs/infra/db-postgres/src/repositories/alert_history.rs]
