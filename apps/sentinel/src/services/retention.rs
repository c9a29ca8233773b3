// [apps/sentinel/src/services/retention.rs]
/*!
 * =================================================================
 * APARATO: RETENTION REAPER (V5.1 - HYGIENE HARDENED)
 * CLASIFICACIÓN: BACKGROUND SERVICE (ESTRATO L1-APP)
 * RESPONSABILIDAD: PURGA HORARIA DE MENCIONES EXPIRADAS
 * =================================================================
 */

use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use radar_domain_trending::MentionStore;

const REAPER_TICK: Duration = Duration::from_secs(3600);

pub struct RetentionReaper {
    store: Arc<dyn MentionStore>,
    retention: ChronoDuration,
}

impl RetentionReaper {
    pub fn new(store: Arc<dyn MentionStore>, retention: ChronoDuration) -> Self {
        Self { store, retention }
    }

    pub async fn run(self, shutdown: CancellationToken) {
        info!("💀 [REAPER_ACTIVE]: Retention daemon initiated ({}h window).", self.retention.num_hours());

        let mut maintenance_ticker = interval(REAPER_TICK);
        maintenance_ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = maintenance_ticker.tick() => {
                    let expiration_threshold = Utc::now() - self.retention;

                    match self.store.purge(expiration_threshold).await {
                        Ok(purged_mentions) if purged_mentions > 0 => {
                            info!("💀 [REAPER_CLEANUP]: Evicted {} expired mentions.", purged_mentions);
                        }
                        Ok(_) => debug!("💀 [REAPER]: Nothing to evict."),
                        Err(purge_fault) => {
                            warn!("⚠️ [REAPER_FAULT]: Purge rejected ({}). Retrying next tick.", purge_fault);
                        }
                    }
                }
            }
        }

        info!("🛑 [REAPER]: Retention daemon stopped.");
    }
}
// FIN DEL ARCHIVO [apps/sentinel/src/services/retention.rs]
