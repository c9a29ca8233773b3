// [libs/infra/telegram/src/session.rs]
/*!
 * =================================================================
 * APARATO: TELEGRAM SESSION CONTRACT (V7.2)
 * CLASIFICACIÓN: INFRASTRUCTURE PORT (ESTRATO L4)
 * RESPONSABILIDAD: CONTRATO ESTRECHO DE LA SESIÓN DE CHAT
 * =================================================================
 */

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use radar_domain_models::ChatMessageEvent;

/// Credenciales que el puente reenvía al colaborador MTProto durante el
/// handshake. El radar nunca las usa directamente: la autenticación y los
/// archivos de sesión son responsabilidad del sidecar.
#[derive(Debug, Clone)]
pub struct SessionCredentials {
    pub api_id: i64,
    pub api_hash: String,
    pub phone: String,
    pub session_name: String,
}

/// Señal entregada por la sesión viva.
#[derive(Debug)]
pub enum SessionSignal {
    Message(ChatMessageEvent),
    /// Espera impuesta por el proveedor. Se superficie DURMIENDO el
    /// tiempo indicado, nunca como error.
    RateLimited(Duration),
}

/// Catálogo de fallos del enlace de transporte.
#[derive(Error, Debug)]
pub enum TransportFault {
    /// Enlace físico caído o puente inalcanzable.
    #[error("[L4_TRANSPORT_LINK_FAULT]: BRIDGE_UNREACHABLE -> {0}")]
    Link(String),

    /// Trama malformada o protocolo violado en el cable.
    #[error("[L4_TRANSPORT_WIRE_FAULT]: FRAME_REJECTED -> {0}")]
    Wire(String),

    /// El supervisor agotó el techo de reintentos: colapso irrecuperable
    /// del runtime (código de salida 2).
    #[error("[L4_TRANSPORT_FAULT]: RECONNECT_RETRIES_EXHAUSTED after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

/// Sesión de chat autenticada vista desde el núcleo.
///
/// Las implementaciones son máquinas de estado propiedad exclusiva del
/// supervisor: una sola tarea las conduce, sin cerrojos.
#[async_trait]
pub trait TelegramSession: Send {
    async fn connect(&mut self) -> Result<(), TransportFault>;

    /// Siguiente señal de la sesión. Bloquea cooperativamente hasta que
    /// haya un mensaje o una directiva de rate-limit.
    async fn next_signal(&mut self) -> Result<SessionSignal, TransportFault>;

    /// Entrega una alerta formateada al self-chat del usuario autenticado.
    async fn send_to_saved_messages(&mut self, body: &str) -> Result<(), TransportFault>;

    async fn disconnect(&mut self);
}
// FIN DEL ARCHIVO [libs/infra/telegram/src/session.rs]
