// [libs/domain/detection/src/registry.rs]
/*!
 * =================================================================
 * APARATO: DETECTOR DISPATCH REGISTRY (V5.0)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: DESPACHO ORDENADO DE UN MENSAJE A TODAS LAS CADENAS
 * =================================================================
 */

use chrono::{DateTime, Utc};

use crate::detector::ChainDetector;
use crate::evm::EvmDetector;
use crate::solana::SolanaDetector;
use radar_domain_models::ContractMatch;

/// Colección ordenada e inmutable de detectores, construida una vez en el
/// arranque. No deduplica entre detectores: las coberturas de patrón por
/// cadena son disjuntas y ninguna cadena comparte cadena normalizada con
/// otra.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn ChainDetector>>,
}

impl DetectorRegistry {
    pub fn new(detectors: Vec<Box<dyn ChainDetector>>) -> Self {
        Self { detectors }
    }

    /// Registro de producción: Solana primero, EVM después.
    pub fn with_default_chains() -> Self {
        Self::new(vec![Box::new(SolanaDetector::new()), Box::new(EvmDetector::new())])
    }

    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Abanica un evento de ingreso por todos los detectores y concatena
    /// los resultados preservando el orden de registro.
    pub fn scan(
        &self,
        message_text: &str,
        conversation_id: i64,
        message_id: i64,
        observed_at: DateTime<Utc>,
    ) -> Vec<ContractMatch> {
        self.detectors
            .iter()
            .flat_map(|detector| detector.extract(message_text, conversation_id, message_id, observed_at))
            .collect()
    }
}
// FIN DEL ARCHIVO [libs/domain/detection/src/registry.rs]
