// [apps/sentinel/src/state/mod.rs]
/*!
 * =================================================================
 * APARATO: SENTINEL SHARED STATE (V8.0)
 * CLASIFICACIÓN: APPLICATION STATE (ESTRATO L1-APP)
 * RESPONSABILIDAD: PLACA BASE DE RECURSOS COMPARTIDOS
 *
 * Los únicos recursos mutables de proceso son el pool de conexiones
 * (sincronizado internamente), el flag de enlace de transporte
 * (atómico) y el registro de métricas (thread-safe). El mapa de
 * cooldown NO vive aquí: es propiedad exclusiva del daemon de
 * trending.
 * =================================================================
 */

pub mod metrics;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::state::metrics::RadarMetrics;
use radar_domain_trending::MentionStore;

#[derive(Clone)]
pub struct AppState {
    pub mention_store: Arc<dyn MentionStore>,
    pub metrics: Arc<RadarMetrics>,
    /// Publicado por el supervisor de transporte; leído por la superficie
    /// de salud.
    pub transport_link: Arc<AtomicBool>,
}
// FIN DEL ARCHIVO [apps/sentinel/src/state/mod.rs]
