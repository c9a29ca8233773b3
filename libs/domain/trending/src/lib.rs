// [libs/domain/trending/src/lib.rs]
/*!
 * =================================================================
 * APARATO: TRENDING STRATA (V13.0 - VELOCITY GOLD)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: AGREGACIÓN VENTANEADA, SCORING Y COOLDOWN
 *
 * VISION HIPER-HOLÍSTICA:
 * El motor consume dos puertos asíncronos (persistencia de menciones y
 * oráculo de liquidez) y produce candidatos rankeados por cadena. La
 * compuerta de cooldown vive en RAM con un único escritor: el daemon
 * de trending. El ledger en memoria replica la semántica del almacén
 * real para los proving grounds y los ensayos offline.
 * =================================================================
 */

pub mod cooldown;
pub mod engine;
pub mod memory;
pub mod oracle;
pub mod store;

pub use cooldown::CooldownGate;
pub use engine::{TrendingEngine, TrendingThresholds};
pub use memory::{MemoryAlertArchive, MemoryMentionLedger};
pub use oracle::LiquidityOracle;
pub use store::{AlertArchive, MentionStore, StoreFault};
// FIN DEL ARCHIVO [libs/domain/trending/src/lib.rs]
