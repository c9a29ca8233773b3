// [libs/domain/trending/src/memory.rs]
/*!
 * =================================================================
 * APARATO: IN-MEMORY MENTION LEDGER (V6.1 - PARITY CERTIFIED)
 * CLASIFICACIÓN: DOMAIN REFERENCE STORE (ESTRATO L2)
 * RESPONSABILIDAD: SEMÁNTICA DE ALMACÉN SIN INFRAESTRUCTURA
 *
 * Réplica fiel del contrato `MentionStore` para los proving grounds y
 * ensayos offline: misma identidad de dedup, mismas ventanas
 * semiabiertas, misma purga. No es un caché del almacén real.
 * =================================================================
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use crate::store::{AlertArchive, MentionStore, StoreFault};
use radar_domain_models::{AlertRecord, ContractMatch, MentionAggregate, RecordOutcome};

#[derive(Debug, Clone)]
struct LedgerRow {
    contract: String,
    chain: String,
    conversation_id: i64,
    message_id: i64,
    observed_at: DateTime<Utc>,
}

#[derive(Default)]
struct LedgerInner {
    identities: HashSet<(String, i64, i64)>,
    rows: Vec<LedgerRow>,
}

#[derive(Default)]
pub struct MemoryMentionLedger {
    inner: Mutex<LedgerInner>,
}

impl MemoryMentionLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MentionStore for MemoryMentionLedger {
    async fn record(&self, detected: &ContractMatch) -> Result<RecordOutcome, StoreFault> {
        let mut inner = self.inner.lock().expect("ledger lock poisoned");

        let identity = (detected.contract.clone(), detected.conversation_id, detected.message_id);
        if !inner.identities.insert(identity) {
            return Ok(RecordOutcome::Duplicate);
        }

        inner.rows.push(LedgerRow {
            contract: detected.contract.clone(),
            chain: detected.chain.to_string(),
            conversation_id: detected.conversation_id,
            message_id: detected.message_id,
            observed_at: detected.observed_at,
        });
        Ok(RecordOutcome::Inserted)
    }

    async fn trending(
        &self,
        since: DateTime<Utc>,
        min_mentions: i64,
        min_unique: i64,
        chain: Option<&str>,
    ) -> Result<Vec<MentionAggregate>, StoreFault> {
        let now = Utc::now();
        let inner = self.inner.lock().expect("ledger lock poisoned");

        // Agregación por (contract, chain) sobre la ventana [since, now).
        let mut groups: BTreeMap<(String, String), (i64, HashSet<i64>, DateTime<Utc>, DateTime<Utc>)> =
            BTreeMap::new();

        for row in inner.rows.iter() {
            if row.observed_at < since || row.observed_at >= now {
                continue;
            }
            if let Some(wanted_chain) = chain {
                if row.chain != wanted_chain {
                    continue;
                }
            }

            let entry = groups
                .entry((row.contract.clone(), row.chain.clone()))
                .or_insert_with(|| (0, HashSet::new(), row.observed_at, row.observed_at));
            entry.0 += 1;
            entry.1.insert(row.conversation_id);
            entry.2 = entry.2.min(row.observed_at);
            entry.3 = entry.3.max(row.observed_at);
        }

        Ok(groups
            .into_iter()
            .filter(|(_, (mentions, conversations, _, _))| {
                *mentions >= min_mentions && conversations.len() as i64 >= min_unique
            })
            .map(|((contract, chain), (mentions, conversations, first_seen, last_seen))| {
                MentionAggregate {
                    contract,
                    chain,
                    mentions_in_window: mentions,
                    unique_conversations_in_window: conversations.len() as i64,
                    first_seen_in_window: first_seen,
                    last_seen_in_window: last_seen,
                }
            })
            .collect())
    }

    async fn count(
        &self,
        contract: &str,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64, StoreFault> {
        let inner = self.inner.lock().expect("ledger lock poisoned");
        Ok(inner
            .rows
            .iter()
            .filter(|row| {
                row.contract == contract && row.observed_at >= since && row.observed_at < until
            })
            .count() as i64)
    }

    async fn purge(&self, before: DateTime<Utc>) -> Result<u64, StoreFault> {
        let mut inner = self.inner.lock().expect("ledger lock poisoned");

        let retained: Vec<LedgerRow> =
            inner.rows.iter().filter(|row| row.observed_at >= before).cloned().collect();
        let purged = (inner.rows.len() - retained.len()) as u64;

        // La identidad de dedup muere con la fila: un triple purgado puede
        // reinsertarse, igual que en el almacén real.
        inner.identities =
            retained.iter().map(|row| (row.contract.clone(), row.conversation_id, row.message_id)).collect();
        inner.rows = retained;

        Ok(purged)
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}

/// Archivo de alertas en memoria para los proving grounds.
#[derive(Default)]
pub struct MemoryAlertArchive {
    records: Mutex<Vec<AlertRecord>>,
}

impl MemoryAlertArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<AlertRecord> {
        self.records.lock().expect("archive lock poisoned").clone()
    }
}

#[async_trait]
impl AlertArchive for MemoryAlertArchive {
    async fn append(&self, record: &AlertRecord) -> Result<(), StoreFault> {
        self.records.lock().expect("archive lock poisoned").push(record.clone());
        Ok(())
    }
}
// FIN DEL ARCHIVO [libs/domain/trending/src/memory.rs]
