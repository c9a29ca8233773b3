// [apps/sentinel/src/cli.rs]
//! Superficie de línea de comandos del centinela.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sentinel", version, about = "Radar de contratos trending sobre chats de Telegram")]
pub struct SentinelCli {
    /// Eleva el nivel de trazas a debug por encima de LOG_LEVEL.
    #[arg(long)]
    pub debug: bool,

    /// Omite el sumidero de notificaciones; el historial de alertas se
    /// registra igualmente.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}
// FIN DEL ARCHIVO [apps/sentinel/src/cli.rs]
