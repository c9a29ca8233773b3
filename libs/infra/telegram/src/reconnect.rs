// [libs/infra/telegram/src/reconnect.rs]
//! Política de reconexión del supervisor: backoff exponencial con techo.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    /// Techo de intentos fallidos consecutivos antes del colapso.
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub backoff_ceiling: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_backoff: Duration::from_secs(2),
            backoff_ceiling: Duration::from_secs(60),
        }
    }
}

impl ReconnectPolicy {
    /// Espera previa al intento `attempt` (1-indexado): duplica en cada
    /// fallo consecutivo y satura en el techo.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let scaled = self.initial_backoff.saturating_mul(2u32.saturating_pow(exponent));
        scaled.min(self.backoff_ceiling)
    }
}
// FIN DEL ARCHIVO [libs/infra/telegram/src/reconnect.rs]
