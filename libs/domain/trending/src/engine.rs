// [libs/domain/trending/src/engine.rs]
/*!
 * =================================================================
 * APARATO: TRENDING ENGINE (V16.4 - FAIL-OPEN SEALED)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: CANDIDATOS VENTANEADOS CON SCORING DE VELOCIDAD
 *
 * # Mathematical Proof (Window Tiling):
 * Con un único instante `now` por escaneo, las ventanas
 * [now-2W, now-W) y [now-W, now) teselan exactamente: ninguna mención
 * cae en ambas ni se pierde en la frontera. La velocidad compara esos
 * dos conteos; la fórmula de score 2·m + 3·u + 5·v está fijada para
 * que el comportamiento de alertas sea reproducible entre despliegues.
 * =================================================================
 */

use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::oracle::LiquidityOracle;
use crate::store::{MentionStore, StoreFault};
use radar_domain_models::{LiquidityVerdict, MentionAggregate, TrendingToken};

/// Umbrales inmutables del motor, construidos una vez en el arranque.
#[derive(Debug, Clone)]
pub struct TrendingThresholds {
    pub window_minutes: i64,
    pub min_mentions: i64,
    pub min_unique_conversations: i64,
    /// Piso de liquidez en USD; solo aplica cuando hay oráculo conectado.
    pub min_liquidity_usd: f64,
}

pub struct TrendingEngine {
    store: Arc<dyn MentionStore>,
    oracle: Option<Arc<dyn LiquidityOracle>>,
    thresholds: TrendingThresholds,
}

/// Crecimiento relativo entre ventanas contiguas de igual longitud.
/// Con ventana previa vacía, la velocidad ES el conteo actual; los valores
/// negativos son válidos y deprimen el score.
pub fn velocity_between_windows(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        current as f64
    } else {
        (current - previous) as f64 / previous as f64
    }
}

/// Combinación lineal fija: énfasis en amplitud y aceleración por encima
/// del volumen bruto. Cambiarla es una ruptura de compatibilidad.
pub fn trending_score(mentions: i64, unique_conversations: i64, velocity: f64) -> f64 {
    2.0 * mentions as f64 + 3.0 * unique_conversations as f64 + 5.0 * velocity
}

/// Orden por grupo de cadena: score desc, menciones desc, conversaciones
/// desc, contrato asc. El orden ENTRE grupos no está especificado; la
/// cadena como clave primaria mantiene cada grupo contiguo.
fn rank_per_chain(tokens: &mut [TrendingToken]) {
    tokens.sort_by(|a, b| {
        a.chain
            .cmp(&b.chain)
            .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
            .then_with(|| b.mentions.cmp(&a.mentions))
            .then_with(|| b.unique_conversations.cmp(&a.unique_conversations))
            .then_with(|| a.contract.cmp(&b.contract))
    });
}

impl TrendingEngine {
    pub fn new(
        store: Arc<dyn MentionStore>,
        oracle: Option<Arc<dyn LiquidityOracle>>,
        thresholds: TrendingThresholds,
    ) -> Self {
        Self { store, oracle, thresholds }
    }

    /// Un ciclo completo de detección de trending sobre el reloj de pared.
    pub async fn scan(&self) -> Result<Vec<TrendingToken>, StoreFault> {
        self.scan_window_ending_at(Utc::now()).await
    }

    /// Ciclo con instante explícito; el daemon y los proving grounds
    /// comparten esta ruta para que las ventanas teselen de forma exacta.
    ///
    /// Un fallo del almacén aborta el escaneo completo (se reintenta en el
    /// próximo tick); un fallo del oráculo jamás lo aborta.
    #[instrument(skip(self))]
    pub async fn scan_window_ending_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<TrendingToken>, StoreFault> {
        let window = Duration::minutes(self.thresholds.window_minutes);
        let since = now - window;
        let prior_since = since - window;

        let candidate_aggregates = self
            .store
            .trending(
                since,
                self.thresholds.min_mentions,
                self.thresholds.min_unique_conversations,
                None,
            )
            .await?;

        let mut ranked_tokens = Vec::with_capacity(candidate_aggregates.len());

        for aggregate in candidate_aggregates {
            let token = self.score_candidate(&aggregate, prior_since, since).await?;

            if self.clears_liquidity_floor(&token).await {
                ranked_tokens.push(token);
            }
        }

        rank_per_chain(&mut ranked_tokens);
        Ok(ranked_tokens)
    }

    async fn score_candidate(
        &self,
        aggregate: &MentionAggregate,
        prior_since: DateTime<Utc>,
        since: DateTime<Utc>,
    ) -> Result<TrendingToken, StoreFault> {
        let current = aggregate.mentions_in_window;
        let previous = self.store.count(&aggregate.contract, prior_since, since).await?;

        let velocity = velocity_between_windows(current, previous);
        let score = trending_score(current, aggregate.unique_conversations_in_window, velocity);

        Ok(TrendingToken {
            contract: aggregate.contract.clone(),
            chain: aggregate.chain.clone(),
            mentions: current,
            unique_conversations: aggregate.unique_conversations_in_window,
            velocity,
            score,
        })
    }

    /// Filtro de liquidez opcional, estrictamente fail-open.
    async fn clears_liquidity_floor(&self, token: &TrendingToken) -> bool {
        let Some(oracle) = &self.oracle else {
            return true;
        };

        match oracle.peak_liquidity_usd(&token.contract).await {
            LiquidityVerdict::Measured(liquidity_usd) => {
                if liquidity_usd < self.thresholds.min_liquidity_usd {
                    debug!(
                        contract = %token.contract,
                        liquidity_usd,
                        "💧 [LIQUIDITY_FLOOR]: Candidate below threshold, dropped."
                    );
                    false
                } else {
                    true
                }
            }
            LiquidityVerdict::Unavailable => {
                debug!(
                    contract = %token.contract,
                    "💧 [LIQUIDITY_ORACLE]: Measurement unavailable, failing open."
                );
                true
            }
        }
    }
}
// FIN DEL ARCHIVO [libs/domain/trending/src/engine.rs]
