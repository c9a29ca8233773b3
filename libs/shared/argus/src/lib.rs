// [libs/shared/argus/src/lib.rs]
/*!
 * =================================================================
 * APARATO: ARGUS NEURAL OBSERVER (V5.0 - RADAR TUNED)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4/L6)
 * RESPONSABILIDAD: GESTIÓN DE TELEMETRÍA, TRAZADO Y CAPTURA DE PÁNICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL MODE: Emisión JSON plana para ingesta de agregadores o
 *    modo compacto de alta legibilidad para el Arquitecto.
 * 2. SOVEREIGN FILTER: Prioriza los logs del dominio radar y silencia
 *    ruidos de infraestructura (Hyper, Tower, SQLx).
 * 3. ARGUS SHIELD: Hook de pánico que identifica el subsistema caído
 *    (nombre del hilo portador) y vuelca origen y causa como campos
 *    estructurados antes de la defunción del proceso.
 * =================================================================
 */

use std::any::Any;
use std::panic;
use std::thread;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};

/// Inicializa el sistema de trazas Argus con blindaje de pánicos.
///
/// El nivel (`LOG_LEVEL` / `--debug`) y el formato (`LOG_JSON`) llegan ya
/// resueltos desde el shell de la aplicación; `RUST_LOG` conserva la
/// prioridad absoluta cuando está presente.
///
/// # Errors:
/// Provoca pánico si otro suscriptor global ya fue inicializado.
pub fn init_tracing(service_nominal_identifier: &str, log_level_directive: &str, json_output: bool) {
    // 1. CONFIGURACIÓN DEL FILTRO DINÁMICO (Sovereign Filter)
    let environmental_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},hyper=warn,tower_http=warn,sqlx=warn,reqwest=warn",
            level = log_level_directive.to_ascii_lowercase()
        ))
    });

    // 2. CONSTRUCCIÓN DE LA ARQUITECTURA DE SUSCRIPCIÓN (Dual Mode)
    if json_output {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().compact().with_target(false))
            .init();
    }

    // 3. ESCUDO ARGUS (Global Panic Hook)
    install_panic_shield(service_nominal_identifier.to_string());
}

/// Causa textual del pánico. Los payloads de `panic!` son `&str` o
/// `String` en la práctica; cualquier otro tipo se reporta como opaco en
/// lugar de perderse.
fn describe_panic_cause(payload: &dyn Any) -> String {
    if let Some(literal) = payload.downcast_ref::<&str>() {
        (*literal).to_string()
    } else if let Some(owned) = payload.downcast_ref::<String>() {
        owned.clone()
    } else {
        "NON_TEXTUAL_PAYLOAD".to_string()
    }
}

/// Instala el volcado forense global.
///
/// El nombre del hilo portador identifica el subsistema caído: los hilos
/// del runtime llevan nombre propio y los daemons del radar heredan el
/// del worker que los ejecutaba.
fn install_panic_shield(service_tag: String) {
    panic::set_hook(Box::new(move |shield_report| {
        let current_thread = thread::current();
        let failing_subsystem = current_thread.name().unwrap_or("unnamed-worker").to_string();

        let origin = match shield_report.location() {
            Some(source) => format!("{}:{}", source.file(), source.line()),
            None => "ORIGIN_UNTRACEABLE".to_string(),
        };

        let cause = describe_panic_cause(shield_report.payload());

        error!(
            target: "argus_shield",
            service = %service_tag,
            subsystem = %failing_subsystem,
            origin = %origin,
            cause = %cause,
            "🛡️ [ARGUS_SHIELD]: Panic intercepted before process death."
        );
    }));
}
// FIN DEL ARCHIVO [libs/shared/argus/src/lib.rs]
