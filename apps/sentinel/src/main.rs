// [apps/sentinel/src/main.rs]
/*!
 * =================================================================
 * APARATO: SENTINEL MAIN ENTRY POINT (V12.0 - GOLD MASTER)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L1-APP)
 * RESPONSABILIDAD: BOOTSTRAP DE ENTORNO E IGNICIÓN SEGURA
 *
 * # Mathematical Proof (Deterministic Ignition):
 * La validación de configuración ocurre ANTES de cualquier actividad
 * de red: un entorno inválido aborta con código 1 sin haber tocado ni
 * el almacén ni el transporte. Los códigos de salida son un contrato:
 * 0 apagado limpio, 1 fallo de arranque, 2 colapso de runtime.
 * =================================================================
 */

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use radar_sentinel::prelude::*;
use radar_shared_argus::init_tracing;

fn main() -> anyhow::Result<()> {
    // 1. CARGA DE ENTORNO SOBERANO
    dotenv().ok();

    // 2. SUPERFICIE CLI
    let cli_arguments = SentinelCli::parse();

    // 3. OBSERVABILIDAD
    // El nivel se resuelve antes de la configuración completa para poder
    // trazar sus propios fallos; --debug manda sobre LOG_LEVEL.
    let log_level = if cli_arguments.debug {
        "debug".to_string()
    } else {
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string())
    };
    let log_json = std::env::var("LOG_JSON")
        .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(false);
    init_tracing("radar_sentinel", &log_level, log_json);

    // 4. CONFIGURACIÓN INMUTABLE (aborta con código 1)
    let config = match RadarConfig::from_env() {
        Ok(config) => config,
        Err(config_fault) => {
            error!("💀 [IGNITION_ABORT]: {}", config_fault);
            std::process::exit(ExitCondition::StartupFailure.code());
        }
    };

    info!("🛰️ [COMMAND_CENTER]: Ignition sequence starting (dry_run={}).", cli_arguments.dry_run);

    // 5. RUNTIME SOBERANO
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("CRITICAL: Tokio runtime ignition failed")?;

    let exit_condition = runtime.block_on(async move {
        SentinelKernel::new(config, cli_arguments.dry_run).ignite_and_run().await
    });

    std::process::exit(exit_condition.code());
}
// FIN DEL ARCHIVO [apps/sentinel/src/main.rs]
