// [libs/domain/trending/src/cooldown.rs]
/*!
 * =================================================================
 * APARATO: ALERT COOLDOWN GATE (V7.0 - SINGLE WRITER)
 * CLASIFICACIÓN: DOMAIN STATE (ESTRATO L2)
 * RESPONSABILIDAD: SUPRESIÓN DE ALERTAS REPETIDAS POR CONTRATO
 *
 * Propiedad única del daemon de trending: sin cerrojos. El estado se
 * pierde en cada reinicio del proceso; el peor caso tolerado es una
 * alerta duplicada por contrato por reinicio.
 * =================================================================
 */

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

pub struct CooldownGate {
    cooldown: Duration,
    expirations: HashMap<String, DateTime<Utc>>,
}

impl CooldownGate {
    pub fn new(cooldown: Duration) -> Self {
        Self { cooldown, expirations: HashMap::new() }
    }

    /// `true` sii el contrato no tiene entrada o su entrada ya expiró.
    /// En el caso admitido, arma `expires_at = now + cooldown`; en el
    /// rechazado no muta nada. La entrada expirada se reemplaza de forma
    /// perezosa aquí mismo.
    pub fn admit(&mut self, contract: &str, now: DateTime<Utc>) -> bool {
        match self.expirations.get(contract) {
            Some(expires_at) if *expires_at > now => false,
            _ => {
                self.expirations.insert(contract.to_string(), now + self.cooldown);
                true
            }
        }
    }

    /// Poda de entradas con `expires_at <= now`; se invoca al cierre de
    /// cada ciclo de trending.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.expirations.retain(|_, expires_at| *expires_at > now);
    }

    /// Tamaño actual del mapa (alimenta el gauge de telemetría).
    pub fn len(&self) -> usize {
        self.expirations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expirations.is_empty()
    }
}
// FIN DEL ARCHIVO [libs/domain/trending/src/cooldown.rs]
