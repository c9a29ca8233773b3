// [libs/infra/dexscreener/src/lib.rs]
/*!
 * =================================================================
 * APARATO: DEXSCREENER LIQUIDITY ORACLE (V6.0 - FAIL-OPEN SEALED)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L4)
 * RESPONSABILIDAD: MEDICIÓN DE LIQUIDEZ PICO POR CONTRATO
 *
 * VISION HIPER-HOLÍSTICA:
 * Implementa el túnel hacia el API público de DexScreener. La política
 * es estrictamente fail-open: timeout, rechazo del proveedor o
 * respuesta sin pares devuelven 'Unavailable' y el candidato sigue su
 * curso. Un oráculo caído jamás silencia una alerta.
 * =================================================================
 */

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use radar_domain_models::LiquidityVerdict;
use radar_domain_trending::LiquidityOracle;

const PUBLIC_API_BASE: &str = "https://api.dexscreener.com";
const ORACLE_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Esquema estrecho de la respuesta del proveedor: solo el bloque de
/// liquidez nos interesa.
#[derive(Debug, Deserialize)]
struct TokenPairsEnvelope {
    pairs: Option<Vec<PairEntry>>,
}

#[derive(Debug, Deserialize)]
struct PairEntry {
    liquidity: Option<LiquidityBlock>,
}

#[derive(Debug, Deserialize)]
struct LiquidityBlock {
    usd: Option<f64>,
}

pub struct DexScreenerOracle {
    internal_http_session: Client,
    api_base_url: String,
}

impl DexScreenerOracle {
    pub fn new() -> Self {
        Self::with_base_url(PUBLIC_API_BASE.to_string())
    }

    /// Base alternativa para entornos de ensayo.
    pub fn with_base_url(api_base_url: String) -> Self {
        Self {
            internal_http_session: Client::builder()
                .timeout(ORACLE_CALL_TIMEOUT)
                .user_agent("AlphaRadar-Liquidity-Oracle/V6")
                .build()
                .expect("CRITICAL: Failed to initialize HTTP session"),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for DexScreenerOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiquidityOracle for DexScreenerOracle {
    async fn peak_liquidity_usd(&self, contract: &str) -> LiquidityVerdict {
        let source_url = format!("{}/latest/dex/tokens/{}", self.api_base_url, contract);

        let network_response = match self.internal_http_session.get(&source_url).send().await {
            Ok(response) => response,
            Err(network_fault) => {
                warn!("💧 [ORACLE_FAULT]: Provider unreachable ({}). Failing open.", network_fault);
                return LiquidityVerdict::Unavailable;
            }
        };

        if !network_response.status().is_success() {
            warn!(
                "💧 [ORACLE_REJECTION]: Provider returned {}. Failing open.",
                network_response.status()
            );
            return LiquidityVerdict::Unavailable;
        }

        let envelope: TokenPairsEnvelope = match network_response.json().await {
            Ok(decoded) => decoded,
            Err(decode_fault) => {
                warn!("💧 [ORACLE_FAULT]: Payload undecodable ({}). Failing open.", decode_fault);
                return LiquidityVerdict::Unavailable;
            }
        };

        // Liquidez pico entre todos los pares listados; sin pares no hay
        // medición posible.
        let peak = envelope
            .pairs
            .unwrap_or_default()
            .into_iter()
            .filter_map(|pair| pair.liquidity.and_then(|block| block.usd))
            .fold(None::<f64>, |best, usd| Some(best.map_or(usd, |b| b.max(usd))));

        match peak {
            Some(liquidity_usd) => {
                debug!(contract, liquidity_usd, "💧 [ORACLE]: Peak liquidity measured.");
                LiquidityVerdict::Measured(liquidity_usd)
            }
            None => LiquidityVerdict::Unavailable,
        }
    }
}
// FIN DEL ARCHIVO [libs/infra/dexscreener/src/lib.rs]
