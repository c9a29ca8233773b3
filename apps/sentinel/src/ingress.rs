// [apps/sentinel/src/ingress.rs]
/*!
 * =================================================================
 * APARATO: INGRESS PIPELINE (V9.1 - BACKPRESSURE NATIVE)
 * CLASIFICACIÓN: APPLICATION SERVICE (ESTRATO L1-APP)
 * RESPONSABILIDAD: PRE-FILTRO, ABANICO DE DETECTORES Y PERSISTENCIA
 *
 * VISION HIPER-HOLÍSTICA:
 * La ingesta es síncrona respecto al almacén: todas las escrituras de
 * un evento completan antes de tomar el siguiente. Si el almacén se
 * ralentiza, el canal acotado frena la entrega del transporte
 * (backpressure natural). Entre eventos no hay orden garantizado: el
 * invariante de dedup del almacén hace seguro cualquier reorden.
 * =================================================================
 */

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::state::metrics::RadarMetrics;
use radar_domain_detection::DetectorRegistry;
use radar_domain_models::{ChatMessageEvent, RecordOutcome};
use radar_domain_trending::MentionStore;

/// Pre-filtros del camino de ingesta, inmutables tras el arranque.
#[derive(Debug, Clone)]
pub struct IngressFilters {
    /// Longitud mínima en caracteres; por debajo el mensaje se descarta.
    pub min_message_length: usize,
    pub ignore_forwarded: bool,
}

/// Decisión pura de pre-filtro.
pub fn passes_prefilters(event: &ChatMessageEvent, filters: &IngressFilters) -> bool {
    if event.text.chars().count() < filters.min_message_length {
        return false;
    }
    if filters.ignore_forwarded && event.is_forwarded {
        return false;
    }
    true
}

pub struct IngressPipeline {
    registry: Arc<DetectorRegistry>,
    store: Arc<dyn MentionStore>,
    metrics: Arc<RadarMetrics>,
    filters: IngressFilters,
}

impl IngressPipeline {
    pub fn new(
        registry: Arc<DetectorRegistry>,
        store: Arc<dyn MentionStore>,
        metrics: Arc<RadarMetrics>,
        filters: IngressFilters,
    ) -> Self {
        Self { registry, store, metrics, filters }
    }

    /// Consume el canal de eventos hasta el apagado o el cierre del
    /// transporte.
    pub async fn run(
        self,
        mut events: mpsc::Receiver<ChatMessageEvent>,
        shutdown: CancellationToken,
    ) {
        info!("📥 [INGRESS]: Pipeline online ({} detectors).", self.registry.detector_count());

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                maybe_event = events.recv() => match maybe_event {
                    Some(event) => self.process_event(event).await,
                    None => break,
                },
            }
        }

        info!("🛑 [INGRESS]: Pipeline drained.");
    }

    /// Un turno de ingesta completo: toda mención resultante queda
    /// persistida (o descartada con traza) antes de retornar.
    pub async fn process_event(&self, event: ChatMessageEvent) {
        self.metrics.messages_processed.inc();

        if !passes_prefilters(&event, &self.filters) {
            return;
        }

        // Un único instante de detección por evento: los detectores quedan
        // puros y todas las menciones del mensaje comparten observed_at.
        let observed_at = Utc::now();
        let detections =
            self.registry.scan(&event.text, event.conversation_id, event.message_id, observed_at);

        for detected in detections {
            match self.store.record(&detected).await {
                Ok(RecordOutcome::Inserted) => {
                    self.metrics.mentions_inserted.inc();
                    debug!(
                        contract = %detected.contract,
                        chain = detected.chain,
                        conversation = detected.conversation_id,
                        "📌 [MENTION]: Recorded."
                    );
                }
                Ok(RecordOutcome::Duplicate) => {
                    self.metrics.mentions_duplicate.inc();
                }
                Err(store_fault) => {
                    // Transitorio: la mención afectada se descarta; el
                    // proceso sigue vivo.
                    warn!(
                        contract = %detected.contract,
                        "⚠️ [INGRESS_STORE_FAULT]: Mention dropped ({})",
                        store_fault
                    );
                }
            }
        }
    }
}
// FIN DEL ARCHIVO [apps/sentinel/src/ingress.rs]
