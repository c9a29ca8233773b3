// [libs/domain/models/src/ingress.rs]
//! Evento de ingesta entregado por el transporte de chat.

use serde::{Deserialize, Serialize};

/// Un mensaje de chat tal como lo entrega el enlace de transporte.
///
/// `conversation_id` identifica de forma estable el chat, grupo o canal
/// de origen; `message_id` es único dentro de esa conversación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageEvent {
    pub text: String,
    pub conversation_id: i64,
    pub message_id: i64,
    pub is_forwarded: bool,
}
// FIN DEL ARCHIVO [libs/domain/models/src/ingress.rs]
