// [libs/domain/detection/src/evm.rs]
/*!
 * =================================================================
 * APARATO: EVM CONTRACT DETECTOR (V12.1 - CHECKSUM AGNOSTIC)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: EXTRACCIÓN DE DIRECCIONES 0x CON LISTA NEGRA
 *
 * VISION HIPER-HOLÍSTICA:
 * Las direcciones EVM se citan con capitalizaciones arbitrarias
 * (checksum EIP-55, minúsculas, gritos de mayúsculas). El detector
 * normaliza TODO a minúsculas ANTES del dedup intra-mensaje, de modo
 * que tres grafías de la misma dirección cuentan como una mención.
 * =================================================================
 */

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::detector::ChainDetector;
use radar_domain_models::ContractMatch;

pub const EVM_CHAIN: &str = "evm";

/// Longitud canónica de una dirección: `0x` + 40 dígitos hex.
const CANONICAL_ADDRESS_LENGTH: usize = 42;

/// Corridas hex maximales tras el prefijo `0x`: una corrida de 41+ dígitos
/// no produce dirección alguna en lugar de truncarse a 40.
static EVM_CANDIDATE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x[0-9a-fA-F]+").expect("CRITICAL: invalid EVM run pattern"));

const NULL_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
const DEAD_MAX_ADDRESS: &str = "0xffffffffffffffffffffffffffffffffffffffff";

/// Sumideros convencionales de quemado; ya normalizados a minúsculas.
const BURN_ADDRESS_BLACKLIST: &[&str] = &[
    "0x000000000000000000000000000000000000dead",
    "0x0000000000000000000000000000000000000001",
    "0xdead000000000000000042069420694206942069",
];

static BURN_ADDRESS_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| BURN_ADDRESS_BLACKLIST.iter().copied().collect());

#[derive(Debug, Default)]
pub struct EvmDetector;

impl EvmDetector {
    pub fn new() -> Self {
        Self
    }
}

/// Escalera de rechazo sobre la dirección ya normalizada.
fn survives_rejection_ladder(normalized: &str) -> bool {
    // 1. Dirección nula
    if normalized == NULL_ADDRESS {
        return false;
    }
    // 2. Dirección dead-max
    if normalized == DEAD_MAX_ADDRESS {
        return false;
    }
    // 3. Sumideros de quemado convencionales
    !BURN_ADDRESS_SET.contains(normalized)
}

impl ChainDetector for EvmDetector {
    fn chain_name(&self) -> &'static str {
        EVM_CHAIN
    }

    fn extract(
        &self,
        message_text: &str,
        conversation_id: i64,
        message_id: i64,
        observed_at: DateTime<Utc>,
    ) -> Vec<ContractMatch> {
        let mut already_emitted: HashSet<String> = HashSet::new();
        let mut extracted_matches = Vec::new();

        for run in EVM_CANDIDATE_RUN.find_iter(message_text) {
            let candidate = run.as_str();

            if candidate.len() != CANONICAL_ADDRESS_LENGTH {
                continue;
            }

            // Normalización ANTES del dedup: el checksum EIP-55 no se preserva.
            let normalized = candidate.to_ascii_lowercase();

            if !survives_rejection_ladder(&normalized) {
                continue;
            }
            if !already_emitted.insert(normalized.clone()) {
                continue;
            }

            extracted_matches.push(ContractMatch {
                contract: normalized,
                chain: EVM_CHAIN,
                conversation_id,
                message_id,
                observed_at,
            });
        }

        extracted_matches
    }
}

// FIN DEL ARCHIVO [libs/domain/detection/src/evm.rs]
