// [apps/sentinel/src/services/trend_watch.rs]
/*!
 * =================================================================
 * APARATO: TREND WATCH DAEMON (V13.2 - COOLDOWN SEALED)
 * CLASIFICACIÓN: BACKGROUND SERVICE (ESTRATO L1-APP)
 * RESPONSABILIDAD: CICLO PERIÓDICO DE SCAN → COMPUERTA → ENTREGA
 *
 * VISION HIPER-HOLÍSTICA:
 * Cada tick ejecuta un escaneo completo del motor; los candidatos
 * admitidos por la compuerta de cooldown se entregan al self-chat y
 * recién entonces se archivan (historia-después-del-envío evita
 * alertas fantasma; en dry-run el archivo es incondicional). Un
 * escaneo lento retrasa el siguiente tick pero jamás descarta
 * mensajes: la ingesta es independiente.
 * =================================================================
 */

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::state::metrics::RadarMetrics;
use radar_domain_models::{AlertRecord, DeliveryOutcome, TrendingToken};
use radar_domain_trending::{AlertArchive, CooldownGate, TrendingEngine};
use radar_infra_telegram::AlertNotifier;

#[derive(Debug, Clone)]
pub struct TrendWatchSettings {
    pub check_interval: Duration,
    pub dry_run: bool,
}

/// Cuerpo de alerta para el self-chat. La velocidad se presenta como
/// porcentaje firmado respecto a la ventana anterior.
pub fn format_alert_body(token: &TrendingToken) -> String {
    format!(
        "🚨 [ALPHA_RADAR]: {chain} contract trending\nContract: {contract}\nMentions: {mentions} across {conversations} conversations\nVelocity: {velocity:+.1}% | Score: {score:.2}",
        chain = token.chain,
        contract = token.contract,
        mentions = token.mentions,
        conversations = token.unique_conversations,
        velocity = token.velocity * 100.0,
        score = token.score,
    )
}

pub struct TrendWatchDaemon<N: AlertNotifier> {
    engine: TrendingEngine,
    gate: CooldownGate,
    notifier: N,
    archive: Arc<dyn AlertArchive>,
    metrics: Arc<RadarMetrics>,
    settings: TrendWatchSettings,
}

impl<N: AlertNotifier> TrendWatchDaemon<N> {
    pub fn new(
        engine: TrendingEngine,
        gate: CooldownGate,
        notifier: N,
        archive: Arc<dyn AlertArchive>,
        metrics: Arc<RadarMetrics>,
        settings: TrendWatchSettings,
    ) -> Self {
        Self { engine, gate, notifier, archive, metrics, settings }
    }

    pub async fn run(mut self, shutdown: CancellationToken) {
        info!(
            "📈 [TREND_WATCH]: Daemon online (tick {:?}, dry_run={}).",
            self.settings.check_interval, self.settings.dry_run
        );

        let mut ticker = interval(self.settings.check_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => self.run_cycle(Utc::now()).await,
            }
        }

        info!("🛑 [TREND_WATCH]: Daemon stopped.");
    }

    /// Un ciclo completo con instante explícito (compartido entre el
    /// escaneo, la compuerta y el registro de alerta).
    pub async fn run_cycle(&mut self, now: DateTime<Utc>) {
        let tokens = match self.engine.scan_window_ending_at(now).await {
            Ok(tokens) => tokens,
            Err(scan_fault) => {
                // Transitorio: se reintenta en el próximo tick.
                warn!("⚠️ [TREND_SCAN_FAULT]: Scan aborted ({}). Retrying next tick.", scan_fault);
                return;
            }
        };

        self.metrics.trending_candidates.set(tokens.len() as i64);

        for token in tokens {
            if !self.gate.admit(&token.contract, now) {
                debug!(contract = %token.contract, "❄️ [COOLDOWN]: Alert suppressed.");
                continue;
            }

            let alert_body = format_alert_body(&token);

            let archive_worthy = if self.settings.dry_run {
                info!("🧪 [DRY_RUN]: Sink bypassed. Alert would read:\n{}", alert_body);
                true
            } else {
                match self.notifier.dispatch(&alert_body).await {
                    DeliveryOutcome::Sent => {
                        self.metrics.alerts_emitted.inc();
                        info!(
                            contract = %token.contract,
                            chain = %token.chain,
                            score = token.score,
                            "🚨 [ALERT_EMITTED]: Delivered to self-chat."
                        );
                        true
                    }
                    DeliveryOutcome::Failed(failure_reason) => {
                        // Payload completo en el log para recuperación
                        // manual; el historial se omite en fallos de envío.
                        error!(
                            alert_payload = %alert_body,
                            "📮 [NOTIFIER_FAULT]: Delivery failed ({}). No synchronous retry.",
                            failure_reason
                        );
                        false
                    }
                }
            };

            if archive_worthy {
                let record = AlertRecord {
                    contract: token.contract.clone(),
                    chain: token.chain.clone(),
                    score: token.score,
                    mentions: token.mentions,
                    unique_conversations: token.unique_conversations,
                    velocity: token.velocity,
                    alerted_at: now,
                };
                if let Err(archive_fault) = self.archive.append(&record).await {
                    warn!("⚠️ [ALERT_ARCHIVE_FAULT]: History append rejected ({})", archive_fault);
                }
            }
        }

        self.gate.prune(now);
        self.metrics.cooldown_entries.set(self.gate.len() as i64);
    }
}
// FIN DEL ARCHIVO [apps/sentinel/src/services/trend_watch.rs]
