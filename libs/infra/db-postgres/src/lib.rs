// [libs/infra/db-postgres/src/lib.rs]
/*!
 * =================================================================
 * APARATO: POSTGRES PERSISTENCE ADAPTER (V8.0 - POOL BOUNDED)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: PERSISTENCIA ACID DEL LEDGER DE MENCIONES
 *
 * VISION HIPER-HOLÍSTICA:
 * El dedup lo impone la restricción UNIQUE del almacén, jamás el
 * llamador; las consultas de agregación viajan respaldadas por índices
 * compuestos. El pool es acotado (min/max de configuración) y el
 * bootstrap de esquema es idempotente para migraciones en caliente.
 * =================================================================
 */

pub mod client;
pub mod repositories;
pub mod schema;

pub use client::{connect_bounded_pool, StoreSettings};
pub use repositories::alert_history::AlertHistoryRepository;
pub use repositories::mention::PostgresMentionRepository;
// FIN DEL ARCHIVO [libs/infra/db-postgres/src/lib.rs]
