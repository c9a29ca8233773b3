// [tests/mirror/libs/domain/detection/solana_extraction.test.rs]

use chrono::Utc;
use radar_domain_detection::{ChainDetector, SolanaDetector};

const VALID_MINT_44: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
const VALID_MINT_32: &str = "A1b2C3d4E5f6G7h8J9kAmBnCpDqErFsG";

#[test]
fn certify_valid_mint_extraction_bounds() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing Solana Base58 extraction bounds...");

    // Guardas de longitud del propio escenario
    assert_eq!(VALID_MINT_44.len(), 44);
    assert_eq!(VALID_MINT_32.len(), 32);

    let detector = SolanaDetector::new();
    let now = Utc::now();

    let message = format!("aping {} and also {} hard", VALID_MINT_44, VALID_MINT_32);
    let matches = detector.extract(&message, 10, 1, now);

    assert_eq!(matches.len(), 2, "Both in-bounds mints must be extracted.");
    assert_eq!(matches[0].contract, VALID_MINT_44);
    assert_eq!(matches[1].contract, VALID_MINT_32);
    assert!(matches.iter().all(|m| m.chain == "solana"));
    assert!(matches.iter().all(|m| m.conversation_id == 10 && m.message_id == 1));

    println!("   ✅ Extraction bounds certified.");
}

#[test]
fn certify_false_positive_message_yields_nothing() {
    // Escenario canónico: felicitación sin contrato alguno.
    let detector = SolanaDetector::new();
    let matches = detector.extract("Congratulations on the Launch", 1, 1, Utc::now());
    assert!(matches.is_empty(), "English congratulation must never trend.");
}

#[test]
fn certify_length_frontier_rejection() {
    let detector = SolanaDetector::new();
    let now = Utc::now();

    // 31 caracteres: un paso por debajo de la frontera.
    let short_run = &VALID_MINT_32[..31];
    assert_eq!(short_run.len(), 31);
    assert!(detector.extract(short_run, 1, 1, now).is_empty());

    // 45 caracteres: la corrida maximal completa excede el techo y NO debe
    // truncarse a un falso token de 44.
    let long_run = format!("{}X", VALID_MINT_44);
    assert_eq!(long_run.len(), 45);
    assert!(detector.extract(&long_run, 1, 1, now).is_empty());
}

#[test]
fn certify_system_addresses_rejected() {
    let detector = SolanaDetector::new();
    let now = Utc::now();

    let message = format!(
        "wrapped sol {} via {}",
        "So11111111111111111111111111111111111111112", "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
    );
    assert!(detector.extract(&message, 1, 1, now).is_empty());
}

#[test]
fn certify_monocase_runs_rejected() {
    let detector = SolanaDetector::new();
    let now = Utc::now();

    let all_lower = "abcdefghjkmnpqrstuvwxyzabcdefghjkmnp";
    let all_upper = "ABCDEFGHJKMNPQRSTUVWXYZABCDEFGHJKMNP";
    assert_eq!(all_lower.len(), 36);

    assert!(detector.extract(all_lower, 1, 1, now).is_empty());
    assert!(detector.extract(all_upper, 1, 1, now).is_empty());
}

#[test]
fn certify_intra_message_dedup_preserves_first_occurrence() {
    let detector = SolanaDetector::new();
    let now = Utc::now();

    let message = format!("{mint} {other} {mint}", mint = VALID_MINT_44, other = VALID_MINT_32);
    let matches = detector.extract(&message, 1, 1, now);

    assert_eq!(matches.len(), 2, "Repeated mint must collapse to a single mention.");
    assert_eq!(matches[0].contract, VALID_MINT_44);
    assert_eq!(matches[1].contract, VALID_MINT_32);
}

#[test]
fn certify_case_preserved_no_normalization() {
    // Las direcciones Solana son case-sensitive: el contrato sale intacto.
    let detector = SolanaDetector::new();
    let matches = detector.extract(VALID_MINT_44, 1, 1, Utc::now());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].contract, VALID_MINT_44);
}
