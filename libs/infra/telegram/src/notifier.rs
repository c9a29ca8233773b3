// [libs/infra/telegram/src/notifier.rs]
/*!
 * =================================================================
 * APARATO: SELF-CHAT NOTIFIER (V5.1)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L4)
 * RESPONSABILIDAD: ENTREGA DE ALERTAS AL SELF-CHAT CON ACUSE
 * =================================================================
 */

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use crate::supervisor::OutboundAlert;
use radar_domain_models::DeliveryOutcome;

/// Sumidero de alertas formateadas.
///
/// El fallo de entrega es un estado, no un error: el llamador lo registra
/// con el payload completo y jamás reintenta de forma síncrona.
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    async fn dispatch(&self, body: &str) -> DeliveryOutcome;
}

/// Notificador de producción: encola en el supervisor de transporte y
/// espera el acuse con timeout.
pub struct SelfChatNotifier {
    outbound: mpsc::Sender<OutboundAlert>,
    delivery_timeout: Duration,
}

impl SelfChatNotifier {
    pub fn new(outbound: mpsc::Sender<OutboundAlert>, delivery_timeout: Duration) -> Self {
        Self { outbound, delivery_timeout }
    }
}

#[async_trait]
impl AlertNotifier for SelfChatNotifier {
    async fn dispatch(&self, body: &str) -> DeliveryOutcome {
        let (acknowledgement, ack_listener) = oneshot::channel();
        let envelope = OutboundAlert { body: body.to_string(), acknowledgement };

        if self.outbound.send(envelope).await.is_err() {
            return DeliveryOutcome::Failed("TRANSPORT_CHANNEL_CLOSED".to_string());
        }

        match tokio::time::timeout(self.delivery_timeout, ack_listener).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => DeliveryOutcome::Failed("TRANSPORT_ACK_DROPPED".to_string()),
            Err(_) => DeliveryOutcome::Failed("DELIVERY_ACK_TIMEOUT".to_string()),
        }
    }
}
// FIN DEL ARCHIVO [libs/infra/telegram/src/notifier.rs]
