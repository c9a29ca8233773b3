// [tests/mirror/libs/domain/trending/engine_scan.test.rs]
//
// Escaneo integral del motor contra el ledger de referencia: detección
// real, agregación ventaneada, oráculo guionizado y ranking por cadena.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use radar_domain_detection::DetectorRegistry;
use radar_domain_models::{
    ContractMatch, LiquidityVerdict, MentionAggregate, RecordOutcome,
};
use radar_domain_trending::{
    LiquidityOracle, MemoryMentionLedger, MentionStore, StoreFault, TrendingEngine,
    TrendingThresholds,
};

fn canonical_thresholds() -> TrendingThresholds {
    TrendingThresholds {
        window_minutes: 5,
        min_mentions: 3,
        min_unique_conversations: 2,
        min_liquidity_usd: 1000.0,
    }
}

async fn seed_through_detection(
    ledger: &MemoryMentionLedger,
    text: &str,
    conversation_id: i64,
    message_id: i64,
    observed_at: DateTime<Utc>,
) {
    let registry = DetectorRegistry::with_default_chains();
    for detected in registry.scan(text, conversation_id, message_id, observed_at) {
        let _ = ledger.record(&detected).await.unwrap();
    }
}

/// Oráculo guionizado con veredicto fijo.
struct ScriptedOracle {
    verdict: LiquidityVerdict,
}

#[async_trait]
impl LiquidityOracle for ScriptedOracle {
    async fn peak_liquidity_usd(&self, _contract: &str) -> LiquidityVerdict {
        self.verdict
    }
}

/// Almacén que rechaza toda consulta: certifica el aborto del escaneo.
struct SeveredStore;

#[async_trait]
impl MentionStore for SeveredStore {
    async fn record(&self, _detected: &ContractMatch) -> Result<RecordOutcome, StoreFault> {
        Err(StoreFault::Transient("uplink severed".into()))
    }
    async fn trending(
        &self,
        _since: DateTime<Utc>,
        _min_mentions: i64,
        _min_unique: i64,
        _chain: Option<&str>,
    ) -> Result<Vec<MentionAggregate>, StoreFault> {
        Err(StoreFault::Transient("uplink severed".into()))
    }
    async fn count(
        &self,
        _contract: &str,
        _since: DateTime<Utc>,
        _until: DateTime<Utc>,
    ) -> Result<i64, StoreFault> {
        Err(StoreFault::Transient("uplink severed".into()))
    }
    async fn purge(&self, _before: DateTime<Utc>) -> Result<u64, StoreFault> {
        Err(StoreFault::Transient("uplink severed".into()))
    }
    async fn is_healthy(&self) -> bool {
        false
    }
}

#[tokio::test]
async fn certify_evm_basic_trend_end_to_end() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing the canonical EVM trend (3 mentions, 2 chats)...");

    let ledger = Arc::new(MemoryMentionLedger::new());
    let now = Utc::now();

    // Tres grafías del mismo contrato en dos conversaciones, dentro de 60s.
    seed_through_detection(
        &ledger,
        "check 0xABCDEFabcdef0123456789012345678901234567AB",
        10,
        1,
        now - Duration::seconds(50),
    )
    .await;
    seed_through_detection(
        &ledger,
        "still bullish 0xabcdefabcdef0123456789012345678901234567ab",
        10,
        2,
        now - Duration::seconds(30),
    )
    .await;
    seed_through_detection(
        &ledger,
        "0xABCDEFABCDEF0123456789012345678901234567AB 🚀",
        20,
        3,
        now - Duration::seconds(10),
    )
    .await;

    let engine = TrendingEngine::new(ledger, None, canonical_thresholds());
    let tokens = engine.scan_window_ending_at(now).await.unwrap();

    assert_eq!(tokens.len(), 1, "exactly one trending token expected");
    let token = &tokens[0];
    assert_eq!(token.contract, "0xabcdefabcdef0123456789012345678901234567ab");
    assert_eq!(token.chain, "evm");
    assert_eq!(token.mentions, 3);
    assert_eq!(token.unique_conversations, 2);
    assert_eq!(token.velocity, 3.0);
    assert_eq!(token.score, 27.0);

    println!("   ✅ Canonical trend certified (score 27).");
}

#[tokio::test]
async fn certify_zero_previous_window_velocity() {
    // Contrato con ventana previa vacía: 4 menciones, 2 chats → v=4, score 34.
    let ledger = Arc::new(MemoryMentionLedger::new());
    let now = Utc::now();

    for (conversation, message, seconds_ago) in [(1, 1, 200), (1, 2, 150), (2, 3, 100), (2, 4, 40)] {
        ledger
            .record(&ContractMatch {
                contract: "So1arFarmMintXq3wpmf3QfkujNnXJzDmCK9uDdY1Kp".to_string(),
                chain: "solana",
                conversation_id: conversation,
                message_id: message,
                observed_at: now - Duration::seconds(seconds_ago),
            })
            .await
            .unwrap();
    }

    let engine = TrendingEngine::new(ledger, None, canonical_thresholds());
    let tokens = engine.scan_window_ending_at(now).await.unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].velocity, 4.0);
    assert_eq!(tokens[0].score, 34.0);
}

#[tokio::test]
async fn certify_growth_velocity_against_prior_window() {
    // 2 menciones en la ventana previa, 4 en la actual → v = 1.0.
    let ledger = Arc::new(MemoryMentionLedger::new());
    let now = Utc::now();

    for (message, seconds_ago) in [(1, 540), (2, 420)] {
        ledger
            .record(&ContractMatch {
                contract: "0xgrowth".to_string(),
                chain: "evm",
                conversation_id: 1,
                message_id: message,
                observed_at: now - Duration::seconds(seconds_ago),
            })
            .await
            .unwrap();
    }
    for (conversation, message, seconds_ago) in [(1, 10, 200), (1, 11, 150), (2, 12, 100), (2, 13, 50)] {
        ledger
            .record(&ContractMatch {
                contract: "0xgrowth".to_string(),
                chain: "evm",
                conversation_id: conversation,
                message_id: message,
                observed_at: now - Duration::seconds(seconds_ago),
            })
            .await
            .unwrap();
    }

    let engine = TrendingEngine::new(ledger, None, canonical_thresholds());
    let tokens = engine.scan_window_ending_at(now).await.unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].mentions, 4);
    assert_eq!(tokens[0].velocity, 1.0);
    assert_eq!(tokens[0].score, 2.0 * 4.0 + 3.0 * 2.0 + 5.0 * 1.0);
}

#[tokio::test]
async fn certify_oracle_timeout_fails_open() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing fail-open liquidity policy...");

    let ledger = Arc::new(MemoryMentionLedger::new());
    let now = Utc::now();
    for (conversation, message) in [(1, 1), (2, 2), (3, 3)] {
        ledger
            .record(&ContractMatch {
                contract: "0xzeta".to_string(),
                chain: "evm",
                conversation_id: conversation,
                message_id: message,
                observed_at: now - Duration::seconds(60),
            })
            .await
            .unwrap();
    }

    let unavailable_oracle = Arc::new(ScriptedOracle { verdict: LiquidityVerdict::Unavailable });
    let engine = TrendingEngine::new(ledger, Some(unavailable_oracle), canonical_thresholds());

    let tokens = engine.scan_window_ending_at(now).await.unwrap();
    assert_eq!(tokens.len(), 1, "an unavailable oracle must never drop a candidate");
    assert_eq!(tokens[0].contract, "0xzeta");

    println!("   ✅ Fail-open certified.");
}

#[tokio::test]
async fn certify_liquidity_floor_drops_measured_shallow_pools() {
    let seed = |ledger: Arc<MemoryMentionLedger>, now: DateTime<Utc>| async move {
        for (conversation, message) in [(1, 1), (2, 2), (3, 3)] {
            ledger
                .record(&ContractMatch {
                    contract: "0xshallow".to_string(),
                    chain: "evm",
                    conversation_id: conversation,
                    message_id: message,
                    observed_at: now - Duration::seconds(60),
                })
                .await
                .unwrap();
        }
        ledger
    };

    let now = Utc::now();

    // Liquidez medida por debajo del piso: candidato descartado.
    let ledger = seed(Arc::new(MemoryMentionLedger::new()), now).await;
    let shallow_oracle = Arc::new(ScriptedOracle { verdict: LiquidityVerdict::Measured(250.0) });
    let engine = TrendingEngine::new(ledger, Some(shallow_oracle), canonical_thresholds());
    assert!(engine.scan_window_ending_at(now).await.unwrap().is_empty());

    // Liquidez suficiente: candidato conservado.
    let ledger = seed(Arc::new(MemoryMentionLedger::new()), now).await;
    let deep_oracle = Arc::new(ScriptedOracle { verdict: LiquidityVerdict::Measured(50_000.0) });
    let engine = TrendingEngine::new(ledger, Some(deep_oracle), canonical_thresholds());
    assert_eq!(engine.scan_window_ending_at(now).await.unwrap().len(), 1);
}

#[tokio::test]
async fn certify_per_chain_ranking_order() {
    let ledger = Arc::new(MemoryMentionLedger::new());
    let now = Utc::now();

    // Dos contratos EVM con scores distintos y uno Solana.
    let seed_rows: &[(&str, &str, i64, i64)] = &[
        ("0xaaaa", "evm", 1, 1),
        ("0xaaaa", "evm", 2, 2),
        ("0xaaaa", "evm", 3, 3),
        ("0xbbbb", "evm", 1, 4),
        ("0xbbbb", "evm", 2, 5),
        ("0xbbbb", "evm", 3, 6),
        ("0xbbbb", "evm", 4, 7),
        ("MintAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", "solana", 1, 8),
        ("MintAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", "solana", 2, 9),
        ("MintAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", "solana", 3, 10),
    ];
    for (contract, chain_name, conversation, message) in seed_rows {
        let chain: &'static str = if *chain_name == "evm" { "evm" } else { "solana" };
        ledger
            .record(&ContractMatch {
                contract: contract.to_string(),
                chain,
                conversation_id: *conversation,
                message_id: *message,
                observed_at: now - Duration::seconds(45),
            })
            .await
            .unwrap();
    }

    let engine = TrendingEngine::new(ledger, None, canonical_thresholds());
    let tokens = engine.scan_window_ending_at(now).await.unwrap();

    assert_eq!(tokens.len(), 3);

    // Cada grupo de cadena es contiguo y desciende por score.
    let evm_positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.chain == "evm")
        .map(|(index, _)| index)
        .collect();
    assert_eq!(evm_positions.len(), 2);
    assert_eq!(evm_positions[1] - evm_positions[0], 1, "chain groups must stay contiguous");

    let evm_tokens: Vec<_> = tokens.iter().filter(|t| t.chain == "evm").collect();
    assert_eq!(evm_tokens[0].contract, "0xbbbb", "higher score ranks first inside its chain");
    assert!(evm_tokens[0].score > evm_tokens[1].score);
}

#[tokio::test]
async fn certify_store_fault_aborts_scan() {
    let engine = TrendingEngine::new(Arc::new(SeveredStore), None, canonical_thresholds());
    let verdict = engine.scan_window_ending_at(Utc::now()).await;
    assert!(matches!(verdict, Err(StoreFault::Transient(_))));
}
