// [libs/infra/db-postgres/src/client.rs]
/*!
 * =================================================================
 * APARATO: DATABASE POOL CLIENT (V6.3 - BOUNDED ACQUISITION)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: IGNICIÓN DEL POOL Y BOOTSTRAP DE ESQUEMA
 * =================================================================
 */

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::schema::apply_radar_schema;
use radar_domain_trending::StoreFault;

/// Coordenadas y límites del almacén, construidos una vez desde el entorno.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub pool_min_connections: u32,
    pub pool_max_connections: u32,
}

/// Establece el pool acotado y solidifica el esquema.
///
/// Cualquier fallo aquí (autenticación, red en el arranque, esquema
/// incompatible) es fatal: el proceso aborta con código 1 antes de tocar
/// el transporte.
#[instrument(skip(settings))]
pub async fn connect_bounded_pool(settings: &StoreSettings) -> Result<PgPool, StoreFault> {
    let connect_options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.database);

    info!(
        "🔌 [DATABASE]: Initiating bounded pool link to [{}:{}/{}] (pool {}..{})",
        settings.host,
        settings.port,
        settings.database,
        settings.pool_min_connections,
        settings.pool_max_connections
    );

    let pool = PgPoolOptions::new()
        .min_connections(settings.pool_min_connections)
        .max_connections(settings.pool_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(connect_options)
        .await
        .map_err(|connect_fault| StoreFault::Fatal(format!("POOL_IGNITION_FAILURE: {connect_fault}")))?;

    apply_radar_schema(&pool).await?;

    info!("⚓ [DATABASE]: Pool online and schema solidified.");
    Ok(pool)
}
// FIN DEL ARCHIVO [libs/infra/db-postgres/src/client.rs]
