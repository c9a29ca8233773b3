// [libs/infra/telegram/src/supervisor.rs]
/*!
 * =================================================================
 * APARATO: TRANSPORT SUPERVISOR (V9.3 - PHOENIX LINK)
 * CLASIFICACIÓN: INFRASTRUCTURE SERVICE (ESTRATO L4)
 * RESPONSABILIDAD: RECONEXIÓN, BACKPRESSURE Y ESTADO DEL ENLACE
 *
 * VISION HIPER-HOLÍSTICA:
 * Una sola tarea conduce la sesión: recibe señales, reenvía eventos al
 * canal acotado de ingesta (backpressure natural hacia el almacén),
 * duerme las esperas de rate-limit y entrega alertas salientes con
 * acuse por oneshot. Ante caída del enlace reconecta con backoff
 * exponencial; agotado el techo de reintentos, devuelve el fallo que
 * termina el proceso con código 2.
 * =================================================================
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use crate::reconnect::ReconnectPolicy;
use crate::session::{SessionSignal, TelegramSession, TransportFault};
use radar_domain_models::{ChatMessageEvent, DeliveryOutcome};

/// Alerta saliente con canal de acuse para el notificador.
pub struct OutboundAlert {
    pub body: String,
    pub acknowledgement: oneshot::Sender<DeliveryOutcome>,
}

enum StreamEnd {
    Shutdown,
    LinkLost(TransportFault),
}

pub struct TransportSupervisor<S: TelegramSession> {
    session: S,
    policy: ReconnectPolicy,
    ingress_sink: mpsc::Sender<ChatMessageEvent>,
    outbound_alerts: mpsc::Receiver<OutboundAlert>,
    link_state: Arc<AtomicBool>,
    send_timeout: Duration,
}

impl<S: TelegramSession> TransportSupervisor<S> {
    pub fn new(
        session: S,
        policy: ReconnectPolicy,
        ingress_sink: mpsc::Sender<ChatMessageEvent>,
        outbound_alerts: mpsc::Receiver<OutboundAlert>,
        link_state: Arc<AtomicBool>,
    ) -> Self {
        Self {
            session,
            policy,
            ingress_sink,
            outbound_alerts,
            link_state,
            send_timeout: Duration::from_secs(10),
        }
    }

    /// Bucle de vida del enlace. Retorna `Ok(())` en apagado cooperativo y
    /// `Err(RetriesExhausted)` cuando el enlace es irrecuperable.
    #[instrument(skip(self, shutdown))]
    pub async fn run(mut self, shutdown: CancellationToken) -> Result<(), TransportFault> {
        let mut failed_attempts: u32 = 0;

        loop {
            if shutdown.is_cancelled() {
                return Ok(());
            }

            match self.session.connect().await {
                Err(connect_fault) => {
                    failed_attempts += 1;
                    if failed_attempts > self.policy.max_retries {
                        error!(
                            "💀 [TRANSPORT_COLLAPSE]: Retry ceiling reached ({}). Last fault: {}",
                            self.policy.max_retries, connect_fault
                        );
                        return Err(TransportFault::RetriesExhausted { attempts: failed_attempts - 1 });
                    }

                    let backoff = self.policy.delay_for(failed_attempts);
                    warn!(
                        "🔁 [TRANSPORT_RETRY]: Attempt {}/{} failed ({}). Backing off {:?}.",
                        failed_attempts, self.policy.max_retries, connect_fault, backoff
                    );
                    tokio::select! {
                        _ = shutdown.cancelled() => return Ok(()),
                        _ = tokio::time::sleep(backoff) => {}
                    }
                }
                Ok(()) => {
                    failed_attempts = 0;
                    self.link_state.store(true, Ordering::SeqCst);
                    info!("📡 [TRANSPORT_LINK]: Session established. Streaming chat events.");

                    let stream_end = self.stream_until_break(&shutdown).await;
                    self.link_state.store(false, Ordering::SeqCst);

                    match stream_end {
                        StreamEnd::Shutdown => {
                            self.session.disconnect().await;
                            info!("📡 [TRANSPORT_LINK]: Session closed cleanly.");
                            return Ok(());
                        }
                        StreamEnd::LinkLost(link_fault) => {
                            warn!("📡 [TRANSPORT_LINK]: Link lost ({}). Reconnecting.", link_fault);
                        }
                    }
                }
            }
        }
    }

    async fn stream_until_break(&mut self, shutdown: &CancellationToken) -> StreamEnd {
        let mut outbound_channel_open = true;
        let mut parked_alert: Option<OutboundAlert> = None;

        loop {
            // La entrega saliente ocurre fuera del select para no disputar
            // la sesión con la lectura de señales.
            if let Some(alert) = parked_alert.take() {
                let outcome = match tokio::time::timeout(
                    self.send_timeout,
                    self.session.send_to_saved_messages(&alert.body),
                )
                .await
                {
                    Ok(Ok(())) => DeliveryOutcome::Sent,
                    Ok(Err(send_fault)) => DeliveryOutcome::Failed(send_fault.to_string()),
                    Err(_) => DeliveryOutcome::Failed("NOTIFIER_SEND_TIMEOUT".to_string()),
                };
                let _ = alert.acknowledgement.send(outcome);
                continue;
            }

            tokio::select! {
                _ = shutdown.cancelled() => return StreamEnd::Shutdown,

                signal = self.session.next_signal() => match signal {
                    Ok(SessionSignal::Message(event)) => {
                        // Canal de ingesta cerrado equivale a apagado.
                        if self.ingress_sink.send(event).await.is_err() {
                            return StreamEnd::Shutdown;
                        }
                    }
                    Ok(SessionSignal::RateLimited(wait)) => {
                        warn!("🐢 [RATE_LIMIT]: Provider imposed {:?} wait. Sleeping.", wait);
                        tokio::time::sleep(wait).await;
                    }
                    Err(link_fault) => return StreamEnd::LinkLost(link_fault),
                },

                maybe_alert = self.outbound_alerts.recv(), if outbound_channel_open => {
                    match maybe_alert {
                        Some(alert) => parked_alert = Some(alert),
                        None => outbound_channel_open = false,
                    }
                }
            }
        }
    }
}
// FIN DEL ARCHIVO [libs/infra/telegram/src/supervisor.rs]
