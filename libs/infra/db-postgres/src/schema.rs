// [libs/infra/db-postgres/src/schema.rs]
/*!
 * =================================================================
 * APARATO: RADAR DATABASE SCHEMA (V9.0 - DEDUP STRATA)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: GOBERNANZA ESTRUCTURAL E IDEMPOTENCIA TOTAL
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. DEDUP SOVEREIGN: La restricción UNIQUE sobre
 *    (contract, conversation_id, message_id) es la fuente de verdad
 *    del conteo exactly-once.
 * 2. PERFORMANCE: Índices compuestos de aceleración para las consultas
 *    de ventana del motor de trending.
 * 3. IDEMPOTENCIA: CREATE ... IF NOT EXISTS para re-arranques en
 *    caliente sin migrador externo.
 * =================================================================
 */

use sqlx::postgres::PgPool;
use tracing::{debug, info, instrument};

use radar_domain_trending::StoreFault;

/**
 * ESTRATO 1: SOLIDIFICACIÓN (Génesis de Tablas)
 */
const RADAR_TABLES: &[(&str, &str)] = &[
    (
        "TABLE_MENTIONS",
        r#"
        CREATE TABLE IF NOT EXISTS mentions (
            id BIGSERIAL PRIMARY KEY,
            contract TEXT NOT NULL,
            chain TEXT NOT NULL,
            conversation_id BIGINT NOT NULL,
            message_id BIGINT NOT NULL,
            observed_at TIMESTAMPTZ NOT NULL,
            UNIQUE (contract, conversation_id, message_id)
        );
    "#,
    ),
    (
        "TABLE_ALERT_HISTORY",
        r#"
        CREATE TABLE IF NOT EXISTS alert_history (
            id BIGSERIAL PRIMARY KEY,
            contract TEXT NOT NULL,
            chain TEXT NOT NULL,
            score DOUBLE PRECISION NOT NULL,
            mentions BIGINT NOT NULL,
            unique_conversations BIGINT NOT NULL,
            velocity DOUBLE PRECISION NOT NULL,
            alerted_at TIMESTAMPTZ NOT NULL
        );
    "#,
    ),
];

/**
 * ESTRATO 2: ENDURECIMIENTO (Índices de Aceleración)
 * Respaldan las consultas de ventana [since, now) del motor.
 */
const ACCELERATION_INDEXES: &[(&str, &str)] = &[
    (
        "IDX_MENTIONS_CONTRACT_OBSERVED",
        "CREATE INDEX IF NOT EXISTS idx_mentions_contract_observed ON mentions(contract, observed_at);",
    ),
    (
        "IDX_MENTIONS_CONTRACT_CONVERSATION_OBSERVED",
        "CREATE INDEX IF NOT EXISTS idx_mentions_contract_conversation_observed ON mentions(contract, conversation_id, observed_at);",
    ),
    (
        "IDX_MENTIONS_CHAIN_OBSERVED",
        "CREATE INDEX IF NOT EXISTS idx_mentions_chain_observed ON mentions(chain, observed_at);",
    ),
    (
        "IDX_ALERT_HISTORY_CONTRACT_ALERTED",
        "CREATE INDEX IF NOT EXISTS idx_alert_history_contract_alerted ON alert_history(contract, alerted_at);",
    ),
];

/// Aplica tablas e índices en orden. Un rechazo aquí es fatal: implica
/// esquema incompatible o permisos insuficientes.
#[instrument(skip(pool))]
pub async fn apply_radar_schema(pool: &PgPool) -> Result<(), StoreFault> {
    for (artifact_name, statement) in RADAR_TABLES.iter().chain(ACCELERATION_INDEXES.iter()) {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|schema_fault| {
                StoreFault::Fatal(format!("SCHEMA_SYNC_FAULT [{artifact_name}]: {schema_fault}"))
            })?;
        debug!("🏛️ [SCHEMA]: Artifact [{}] solidified.", artifact_name);
    }

    info!("🏛️ [SCHEMA]: Radar strata levelized ({} tables, {} indexes).",
        RADAR_TABLES.len(),
        ACCELERATION_INDEXES.len()
    );
    Ok(())
}
// FIN DEL ARCHIVO [libs/infra/db-postgres/src/schema.rs]
