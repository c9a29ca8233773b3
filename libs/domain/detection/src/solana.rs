// [libs/domain/detection/src/solana.rs]
/*!
 * =================================================================
 * APARATO: SOLANA CONTRACT DETECTOR (V14.2 - BASE58 HARDENED)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: EXTRACCIÓN DE MINTS SOLANA CON ESCUDO ANTI-RUIDO
 *
 * VISION HIPER-HOLÍSTICA:
 * El alfabeto Base58 colisiona con el inglés corriente, por lo que el
 * detector aplica una escalera de rechazo en tres niveles: léxico
 * (palabras capitalizadas conocidas), institucional (direcciones de
 * programas del sistema) y morfológico (heurística de caja mixta).
 * Las direcciones Solana son case-sensitive: cero normalización.
 * =================================================================
 */

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::detector::ChainDetector;
use radar_domain_models::ContractMatch;

pub const SOLANA_CHAIN: &str = "solana";

const MIN_MINT_LENGTH: usize = 32;
const MAX_MINT_LENGTH: usize = 44;

/// Corridas máximas del alfabeto Base58 (sin 0, O, I, l). El cuantificador
/// codicioso sobre la clase garantiza corridas maximales: una racha de 50
/// caracteres jamás produce un falso token de 44.
static BASE58_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[1-9A-HJ-NP-Za-km-z]+").expect("CRITICAL: invalid Base58 run pattern"));

/// Léxico de falsos positivos: palabras inglesas capitalizadas con alta
/// probabilidad de colisión con el alfabeto. Lista semilla no autoritativa;
/// se amplía con la operación.
const FALSE_POSITIVE_WORDS: &[&str] = &[
    "Congratulations",
    "Announcements",
    "Infrastructure",
    "Decentralization",
    "Understanding",
    "International",
    "Opportunities",
    "Distribution",
    "Development",
    "Partnerships",
    "Performance",
    "Experience",
    "Communities",
    "Marketplace",
    "Sustainability",
    "Tokenomics",
];

/// Direcciones de programas y cuentas del sistema que nunca son mints
/// negociables aunque tengan forma de clave válida.
const SYSTEM_ADDRESSES: &[&str] = &[
    "11111111111111111111111111111111",
    "So11111111111111111111111111111111111111112",
    "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
    "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb",
    "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL",
    "ComputeBudget111111111111111111111111111111",
    "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr",
    "Vote111111111111111111111111111111111111111",
    "Stake11111111111111111111111111111111111111",
    "SysvarRent111111111111111111111111111111111",
    "SysvarC1ock11111111111111111111111111111111",
    "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s",
];

static SYSTEM_ADDRESS_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SYSTEM_ADDRESSES.iter().copied().collect());

static FALSE_POSITIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FALSE_POSITIVE_WORDS.iter().copied().collect());

#[derive(Debug, Default)]
pub struct SolanaDetector;

impl SolanaDetector {
    pub fn new() -> Self {
        Self
    }
}

/// Heurística de caja mixta: una clave Base58 real contiene al menos una
/// mayúscula Y una minúscula; las corridas monocaja suelen ser palabras
/// inglesas o artefactos de formato.
fn has_mixed_case(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_uppercase()) && candidate.chars().any(|c| c.is_ascii_lowercase())
}

/// Escalera de rechazo, en orden normativo.
fn survives_rejection_ladder(candidate: &str) -> bool {
    // 1. Léxico de falsos positivos
    if FALSE_POSITIVE_SET.contains(candidate) {
        return false;
    }
    // 2. Direcciones institucionales del sistema
    if SYSTEM_ADDRESS_SET.contains(candidate) {
        return false;
    }
    // 3. Morfología de caja mixta
    has_mixed_case(candidate)
}

impl ChainDetector for SolanaDetector {
    fn chain_name(&self) -> &'static str {
        SOLANA_CHAIN
    }

    fn extract(
        &self,
        message_text: &str,
        conversation_id: i64,
        message_id: i64,
        observed_at: DateTime<Utc>,
    ) -> Vec<ContractMatch> {
        let mut already_emitted: HashSet<&str> = HashSet::new();
        let mut extracted_matches = Vec::new();

        for run in BASE58_RUN.find_iter(message_text) {
            let candidate = run.as_str();

            if candidate.len() < MIN_MINT_LENGTH || candidate.len() > MAX_MINT_LENGTH {
                continue;
            }
            if !survives_rejection_ladder(candidate) {
                continue;
            }
            // Dedup intra-mensaje: primera aparición gana.
            if !already_emitted.insert(candidate) {
                continue;
            }

            extracted_matches.push(ContractMatch {
                contract: candidate.to_string(),
                chain: SOLANA_CHAIN,
                conversation_id,
                message_id,
                observed_at,
            });
        }

        extracted_matches
    }
}

// FIN DEL ARCHIVO [libs/domain/detection/src/solana.rs]
