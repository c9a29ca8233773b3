// [apps/sentinel/src/kernel.rs]
/*!
 * =================================================================
 * APARATO: SENTINEL SOVEREIGN KERNEL (V15.0 - SHUTDOWN SEALED)
 * CLASIFICACIÓN: COMPOSITION ROOT (ESTRATO L1-APP)
 * RESPONSABILIDAD: BOOTSTRAP DE INFRAESTRUCTURA E IGNICIÓN SEGURA
 *
 * VISION HIPER-HOLÍSTICA:
 * Actúa como la placa base donde se conectan todos los servicios:
 * repositorio (pool acotado + esquema), superficies HTTP, supervisor
 * de transporte, pipeline de ingesta y daemons de trending/retención.
 * El apagado es cooperativo e idempotente: una señal cancela el token,
 * cada tarea lo observa, y recién entonces se drena el pool.
 * =================================================================
 */

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

use crate::config::RadarConfig;
use crate::ingress::IngressPipeline;
use crate::routes::{create_health_router, create_metrics_router};
use crate::services::{RetentionReaper, TrendWatchDaemon, TrendWatchSettings};
use crate::state::metrics::RadarMetrics;
use crate::state::AppState;
use radar_domain_detection::DetectorRegistry;
use radar_domain_trending::{
    AlertArchive, CooldownGate, LiquidityOracle, MentionStore, TrendingEngine,
};
use radar_infra_db::{connect_bounded_pool, AlertHistoryRepository, PostgresMentionRepository};
use radar_infra_dexscreener::DexScreenerOracle;
use radar_infra_telegram::{
    ReconnectPolicy, SelfChatNotifier, TransportSupervisor, UserbotBridgeSession,
};

/// Capacidad del canal transporte → ingesta: acota la memoria y propaga
/// backpressure hacia el enlace cuando el almacén se ralentiza.
const INGRESS_CHANNEL_CAPACITY: usize = 1024;
const OUTBOUND_CHANNEL_CAPACITY: usize = 64;
const NOTIFIER_DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Veredicto final del proceso, mapeado 1:1 a códigos de salida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCondition {
    CleanShutdown,
    StartupFailure,
    RuntimeCollapse,
}

impl ExitCondition {
    pub fn code(self) -> i32 {
        match self {
            ExitCondition::CleanShutdown => 0,
            ExitCondition::StartupFailure => 1,
            ExitCondition::RuntimeCollapse => 2,
        }
    }
}

pub struct SentinelKernel {
    config: RadarConfig,
    dry_run: bool,
}

impl SentinelKernel {
    pub fn new(config: RadarConfig, dry_run: bool) -> Self {
        Self { config, dry_run }
    }

    /// Ignición completa y espera del veredicto del runtime.
    #[instrument(skip(self))]
    pub async fn ignite_and_run(self) -> ExitCondition {
        // --- 1. PERSISTENCIA (fatal en el arranque) ---
        let pool = match connect_bounded_pool(&self.config.store).await {
            Ok(pool) => pool,
            Err(store_fault) => {
                error!("💀 [IGNITION_ABORT]: Store link collapse: {}", store_fault);
                return ExitCondition::StartupFailure;
            }
        };
        let mention_repository = PostgresMentionRepository::new(pool.clone());
        let mention_store: Arc<dyn MentionStore> = Arc::new(mention_repository.clone());
        let alert_archive: Arc<dyn AlertArchive> = Arc::new(AlertHistoryRepository::new(pool));

        // --- 2. ESTADO NEURAL COMPARTIDO ---
        let metrics = Arc::new(RadarMetrics::new());
        let transport_link = Arc::new(AtomicBool::new(false));
        let shared_state = AppState {
            mention_store: mention_store.clone(),
            metrics: metrics.clone(),
            transport_link: transport_link.clone(),
        };

        // --- 3. CABLEADO DE APAGADO COOPERATIVO ---
        let shutdown = CancellationToken::new();
        spawn_signal_listener(shutdown.clone());

        let mut daemon_handles: Vec<JoinHandle<()>> = Vec::new();

        // --- 4. SUPERFICIES HTTP (salud y métricas en puertos separados) ---
        if self.config.surfaces.health_enabled {
            match spawn_http_surface(
                "health",
                self.config.surfaces.health_port,
                create_health_router(shared_state.clone()),
                shutdown.clone(),
            )
            .await
            {
                Ok(handle) => daemon_handles.push(handle),
                Err(exit) => {
                    mention_repository.close().await;
                    return exit;
                }
            }
        }
        if self.config.surfaces.metrics_enabled {
            match spawn_http_surface(
                "metrics",
                self.config.surfaces.metrics_port,
                create_metrics_router(shared_state.clone()),
                shutdown.clone(),
            )
            .await
            {
                Ok(handle) => daemon_handles.push(handle),
                Err(exit) => {
                    shutdown.cancel();
                    mention_repository.close().await;
                    return exit;
                }
            }
        }

        // --- 5. ENLACE DE TRANSPORTE (supervisor con reconexión) ---
        let (ingress_sink, ingress_events) = mpsc::channel(INGRESS_CHANNEL_CAPACITY);
        let (outbound_sink, outbound_alerts) = mpsc::channel(OUTBOUND_CHANNEL_CAPACITY);

        let bridge_session = UserbotBridgeSession::new(
            self.config.telegram.bridge_address.clone(),
            self.config.telegram.credentials.clone(),
        );
        let supervisor = TransportSupervisor::new(
            bridge_session,
            ReconnectPolicy::default(),
            ingress_sink,
            outbound_alerts,
            transport_link,
        );
        let transport_handle = tokio::spawn(supervisor.run(shutdown.clone()));

        // --- 6. PIPELINE DE INGESTA ---
        let ingress_pipeline = IngressPipeline::new(
            Arc::new(DetectorRegistry::with_default_chains()),
            mention_store.clone(),
            metrics.clone(),
            self.config.filters.clone(),
        );
        daemon_handles.push(tokio::spawn(ingress_pipeline.run(ingress_events, shutdown.clone())));

        // --- 7. DAEMON DE TRENDING (scan → cooldown → entrega → archivo) ---
        let liquidity_oracle: Option<Arc<dyn LiquidityOracle>> = if self.config.oracle_enabled {
            Some(Arc::new(DexScreenerOracle::new()))
        } else {
            None
        };
        let trending_engine =
            TrendingEngine::new(mention_store.clone(), liquidity_oracle, self.config.trending.clone());
        let cooldown_gate =
            CooldownGate::new(chrono::Duration::minutes(self.config.cooldown_minutes));
        let self_chat_notifier = SelfChatNotifier::new(outbound_sink, NOTIFIER_DELIVERY_TIMEOUT);

        let trend_watch = TrendWatchDaemon::new(
            trending_engine,
            cooldown_gate,
            self_chat_notifier,
            alert_archive,
            metrics.clone(),
            TrendWatchSettings {
                check_interval: Duration::from_secs(self.config.check_interval_seconds),
                dry_run: self.dry_run,
            },
        );
        daemon_handles.push(tokio::spawn(trend_watch.run(shutdown.clone())));

        // --- 8. DAEMON DE RETENCIÓN ---
        let retention_reaper = RetentionReaper::new(
            mention_store,
            chrono::Duration::hours(self.config.retention_hours),
        );
        daemon_handles.push(tokio::spawn(retention_reaper.run(shutdown.clone())));

        info!("🛰️ [SENTINEL_ONLINE]: All strata operational. Watching the stream.");

        // --- 9. VEREDICTO DEL RUNTIME ---
        // El supervisor retorna Ok en apagado cooperativo y Err cuando el
        // enlace es irrecuperable (reintentos agotados).
        let exit_condition = match transport_handle.await {
            Ok(Ok(())) => ExitCondition::CleanShutdown,
            Ok(Err(transport_fault)) => {
                error!("💀 [RUNTIME_COLLAPSE]: {}", transport_fault);
                ExitCondition::RuntimeCollapse
            }
            Err(join_fault) => {
                error!("💀 [RUNTIME_COLLAPSE]: Transport task aborted: {}", join_fault);
                ExitCondition::RuntimeCollapse
            }
        };

        // --- 10. TEARDOWN IDEMPOTENTE ---
        shutdown.cancel();
        for handle in daemon_handles {
            let _ = handle.await;
        }
        mention_repository.close().await;

        info!("🛑 [SENTINEL_OFFLINE]: Shutdown complete.");
        exit_condition
    }
}

/// Liga un listener y sirve el router con apagado elegante. El fallo de
/// bind es de arranque: puerto ocupado o permisos.
async fn spawn_http_surface(
    surface_name: &'static str,
    port: u16,
    router: axum::Router,
    shutdown: CancellationToken,
) -> Result<JoinHandle<()>, ExitCondition> {
    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(bind_fault) => {
            error!("💀 [IGNITION_ABORT]: {} surface bind on :{} rejected: {}", surface_name, port, bind_fault);
            return Err(ExitCondition::StartupFailure);
        }
    };

    info!("🌐 [{}]: Surface listening on :{}", surface_name.to_uppercase(), port);

    Ok(tokio::spawn(async move {
        let graceful = async move { shutdown.cancelled().await };
        if let Err(serve_fault) = axum::serve(listener, router).with_graceful_shutdown(graceful).await {
            error!("💀 [SURFACE_FAULT]: {} listener collapsed: {}", surface_name, serve_fault);
        }
    }))
}

/// Escucha SIGINT/SIGTERM y dispara la cancelación cooperativa. Señales
/// repetidas son inocuas: cancel() es idempotente.
fn spawn_signal_listener(shutdown: CancellationToken) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(stream) => stream,
                Err(signal_fault) => {
                    error!("💀 [SIGNAL_FAULT]: SIGTERM hook rejected: {}", signal_fault);
                    return;
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => info!("🛑 [SIGNAL]: SIGINT received."),
                _ = sigterm.recv() => info!("🛑 [SIGNAL]: SIGTERM received."),
            }
        }

        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
            info!("🛑 [SIGNAL]: Interrupt received.");
        }

        shutdown.cancel();
    });
}
// FIN DEL ARCHIVO [apps/sentinel/src/kernel.rs]
