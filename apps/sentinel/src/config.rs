// [apps/sentinel/src/config.rs]
/*!
 * =================================================================
 * APARATO: RADAR CONFIGURATION LOADER (V10.1 - ENV SOVEREIGN)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L1-APP)
 * RESPONSABILIDAD: CONSTRUCCIÓN INMUTABLE Y VALIDADA DEL ENTORNO
 *
 * VISION HIPER-HOLÍSTICA:
 * La configuración se construye UNA vez en el arranque y es de solo
 * lectura desde entonces. Toda clave requerida ausente o todo cast
 * numérico fallido aborta ANTES de cualquier actividad de red, con
 * código de salida 1.
 * =================================================================
 */

use std::str::FromStr;
use thiserror::Error;

use crate::ingress::IngressFilters;
use radar_domain_trending::TrendingThresholds;
use radar_infra_db::StoreSettings;
use radar_infra_telegram::SessionCredentials;

/// Catálogo de fallos de configuración (fatales en el arranque).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigFault {
    #[error("[L0_CONFIG_FAULT]: REQUIRED_KEY_VOID -> {0}")]
    MissingKey(String),

    #[error("[L0_CONFIG_FAULT]: NUMERIC_CAST_REJECTED -> {key}='{value}'")]
    InvalidNumeric { key: String, value: String },

    #[error("[L0_CONFIG_FAULT]: BOOLEAN_CAST_REJECTED -> {key}='{value}'")]
    InvalidBoolean { key: String, value: String },
}

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub credentials: SessionCredentials,
    /// Endpoint TCP del puente userbot (el colaborador MTProto externo).
    pub bridge_address: String,
}

#[derive(Debug, Clone)]
pub struct SurfaceSettings {
    pub health_enabled: bool,
    pub health_port: u16,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

/// Configuración completa e inmutable del proceso.
#[derive(Debug, Clone)]
pub struct RadarConfig {
    pub telegram: TelegramSettings,
    pub store: StoreSettings,
    pub trending: TrendingThresholds,
    pub cooldown_minutes: i64,
    pub check_interval_seconds: u64,
    pub filters: IngressFilters,
    pub oracle_enabled: bool,
    pub retention_hours: i64,
    pub surfaces: SurfaceSettings,
    pub logging: LoggingSettings,
}

type EnvSource<'a> = &'a dyn Fn(&str) -> Option<String>;

fn required(source: EnvSource<'_>, key: &str) -> Result<String, ConfigFault> {
    match source(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigFault::MissingKey(key.to_string())),
    }
}

fn string_or(source: EnvSource<'_>, key: &str, default: &str) -> String {
    source(key).filter(|value| !value.trim().is_empty()).unwrap_or_else(|| default.to_string())
}

fn numeric_required<T: FromStr>(source: EnvSource<'_>, key: &str) -> Result<T, ConfigFault> {
    let raw = required(source, key)?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigFault::InvalidNumeric { key: key.to_string(), value: raw })
}

fn numeric_or<T: FromStr>(source: EnvSource<'_>, key: &str, default: T) -> Result<T, ConfigFault> {
    match source(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigFault::InvalidNumeric { key: key.to_string(), value: raw }),
        _ => Ok(default),
    }
}

/// Booleanos permisivos: true/1/yes/on y false/0/no/off, sin caja.
fn boolean_or(source: EnvSource<'_>, key: &str, default: bool) -> Result<bool, ConfigFault> {
    match source(key) {
        Some(raw) if !raw.trim().is_empty() => {
            match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigFault::InvalidBoolean { key: key.to_string(), value: raw }),
            }
        }
        _ => Ok(default),
    }
}

impl RadarConfig {
    /// Carga desde el entorno del proceso (tras dotenvy).
    pub fn from_env() -> Result<Self, ConfigFault> {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    /// Carga desde una fuente arbitraria; los proving grounds inyectan
    /// mapas en memoria sin mutar el entorno del proceso.
    pub fn from_source(source: EnvSource<'_>) -> Result<Self, ConfigFault> {
        let telegram = TelegramSettings {
            credentials: SessionCredentials {
                api_id: numeric_required::<i64>(source, "TELEGRAM_API_ID")?,
                api_hash: required(source, "TELEGRAM_API_HASH")?,
                phone: required(source, "TELEGRAM_PHONE")?,
                session_name: string_or(source, "TELEGRAM_SESSION_NAME", "alpha_radar"),
            },
            bridge_address: string_or(source, "TELEGRAM_BRIDGE_ADDR", "127.0.0.1:8790"),
        };

        let store = StoreSettings {
            host: string_or(source, "DB_HOST", "localhost"),
            port: numeric_or::<u16>(source, "DB_PORT", 5432)?,
            user: string_or(source, "DB_USER", "radar"),
            password: required(source, "DB_PASSWORD")?,
            database: string_or(source, "DB_NAME", "alpha_radar"),
            pool_min_connections: numeric_or::<u32>(source, "DB_POOL_MIN", 2)?,
            pool_max_connections: numeric_or::<u32>(source, "DB_POOL_MAX", 10)?,
        };

        let trending = TrendingThresholds {
            window_minutes: numeric_or::<i64>(source, "TRENDING_WINDOW_MINUTES", 5)?,
            min_mentions: numeric_or::<i64>(source, "TRENDING_MIN_MENTIONS", 3)?,
            min_unique_conversations: numeric_or::<i64>(source, "TRENDING_MIN_UNIQUE_CHATS", 2)?,
            min_liquidity_usd: numeric_or::<f64>(source, "DEXSCREENER_MIN_LIQUIDITY", 1000.0)?,
        };

        Ok(Self {
            telegram,
            store,
            trending,
            cooldown_minutes: numeric_or::<i64>(source, "TRENDING_COOLDOWN_MINUTES", 15)?,
            check_interval_seconds: numeric_or::<u64>(source, "TRENDING_CHECK_INTERVAL", 30)?,
            filters: IngressFilters {
                min_message_length: numeric_or::<usize>(source, "FILTER_MIN_MSG_LENGTH", 5)?,
                ignore_forwarded: boolean_or(source, "FILTER_IGNORE_FORWARDED", false)?,
            },
            oracle_enabled: boolean_or(source, "DEXSCREENER_ENABLED", false)?,
            retention_hours: numeric_or::<i64>(source, "RETENTION_HOURS", 24)?,
            surfaces: SurfaceSettings {
                health_enabled: boolean_or(source, "HEALTH_ENABLED", true)?,
                health_port: numeric_or::<u16>(source, "HEALTH_PORT", 8080)?,
                metrics_enabled: boolean_or(source, "METRICS_ENABLED", false)?,
                metrics_port: numeric_or::<u16>(source, "METRICS_PORT", 9090)?,
            },
            logging: LoggingSettings {
                level: string_or(source, "LOG_LEVEL", "INFO"),
                json: boolean_or(source, "LOG_JSON", false)?,
            },
        })
    }
}
// FIN DEL ARCHIVO [apps/sentinel/src/config.rs]
