// [apps/sentinel/src/services/mod.rs]
//! Daemons de fondo del centinela.

pub mod retention;
pub mod trend_watch;

pub use retention::RetentionReaper;
pub use trend_watch::{format_alert_body, TrendWatchDaemon, TrendWatchSettings};
// FIN DEL ARCHIVO [apps/sentinel/src/services/mod.rs]
