// [apps/sentinel/src/state/metrics.rs]
/*!
 * =================================================================
 * APARATO: RADAR METRICS REGISTRY (V6.2 - PANOPTICON READY)
 * CLASIFICACIÓN: APPLICATION STATE (ESTRATO L1-APP)
 * RESPONSABILIDAD: CONTADORES Y GAUGES DEL PIPELINE
 * =================================================================
 */

use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use tracing::warn;

/// Registro interno sincronizado; los contadores son clonables y cada
/// tarea incrementa sin cerrojos adicionales.
pub struct RadarMetrics {
    registry: Registry,
    pub messages_processed: IntCounter,
    pub mentions_inserted: IntCounter,
    pub mentions_duplicate: IntCounter,
    pub alerts_emitted: IntCounter,
    pub trending_candidates: IntGauge,
    pub cooldown_entries: IntGauge,
}

fn register_counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    let counter = IntCounter::new(name, help).expect("CRITICAL: invalid counter descriptor");
    registry
        .register(Box::new(counter.clone()))
        .expect("CRITICAL: duplicate metric registration");
    counter
}

fn register_gauge(registry: &Registry, name: &str, help: &str) -> IntGauge {
    let gauge = IntGauge::new(name, help).expect("CRITICAL: invalid gauge descriptor");
    registry
        .register(Box::new(gauge.clone()))
        .expect("CRITICAL: duplicate metric registration");
    gauge
}

impl RadarMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let messages_processed = register_counter(
            &registry,
            "radar_messages_processed_total",
            "Mensajes de chat entregados al pipeline de ingesta",
        );
        let mentions_inserted = register_counter(
            &registry,
            "radar_mentions_inserted_total",
            "Menciones de contrato persistidas como filas nuevas",
        );
        let mentions_duplicate = register_counter(
            &registry,
            "radar_mentions_duplicate_total",
            "Menciones rechazadas por el invariante de dedup del almacén",
        );
        let alerts_emitted = register_counter(
            &registry,
            "radar_alerts_emitted_total",
            "Alertas entregadas con éxito al self-chat",
        );
        let trending_candidates = register_gauge(
            &registry,
            "radar_trending_candidates",
            "Candidatos producidos por el último escaneo de trending",
        );
        let cooldown_entries = register_gauge(
            &registry,
            "radar_cooldown_entries",
            "Entradas vivas en la compuerta de cooldown",
        );

        Self {
            registry,
            messages_processed,
            mentions_inserted,
            mentions_duplicate,
            alerts_emitted,
            trending_candidates,
            cooldown_entries,
        }
    }

    /// Texto Prometheus (formato 0.0.4) para la superficie de scrape.
    pub fn render_prometheus(&self) -> String {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        if let Err(encode_fault) = encoder.encode(&self.registry.gather(), &mut buffer) {
            warn!("📊 [METRICS_FAULT]: Encoding rejected: {}", encode_fault);
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

impl Default for RadarMetrics {
    fn default() -> Self {
        Self::new()
    }
}
// FIN DEL ARCHIVO [apps/sentinel/src/state/metrics.rs]
