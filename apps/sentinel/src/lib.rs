// [apps/sentinel/src/lib.rs]
/*!
 * =================================================================
 * APARATO: SENTINEL APPLICATION LIBRARY (V12.0 - RADAR GOLD)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L1-APP)
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DE LOS MÓDULOS DEL DAEMON
 * =================================================================
 */

pub mod cli;
pub mod config;
pub mod handlers;
pub mod ingress;
pub mod kernel;
pub mod routes;
pub mod services;
pub mod state;

pub mod prelude {
    pub use crate::cli::SentinelCli;
    pub use crate::config::{ConfigFault, RadarConfig};
    pub use crate::kernel::{ExitCondition, SentinelKernel};
}
// FIN DEL ARCHIVO [apps/sentinel/src/lib.rs]
