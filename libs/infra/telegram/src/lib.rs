// [libs/infra/telegram/src/lib.rs]
/*!
 * =================================================================
 * APARATO: TELEGRAM TRANSPORT UPLINK (V10.0 - BRIDGE SOVEREIGN)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L4)
 * RESPONSABILIDAD: CONTRATO ESTRECHO CON EL COLABORADOR MTPROTO
 *
 * VISION HIPER-HOLÍSTICA:
 * La autenticación MTProto, los archivos de sesión y la reconexión
 * hacia Telegram viven en un sidecar externo (el userbot). Este crate
 * define el contrato que el núcleo consume: una sesión que entrega
 * eventos de mensaje, señala esperas de rate-limit (que se duermen,
 * jamás se yerran) y acepta envíos al self-chat. El supervisor añade
 * la reconexión local con backoff y publica el estado del enlace para
 * la superficie de salud.
 * =================================================================
 */

pub mod bridge;
pub mod notifier;
pub mod reconnect;
pub mod session;
pub mod supervisor;

pub use bridge::UserbotBridgeSession;
pub use notifier::{AlertNotifier, SelfChatNotifier};
pub use reconnect::ReconnectPolicy;
pub use session::{SessionCredentials, SessionSignal, TelegramSession, TransportFault};
pub use supervisor::{OutboundAlert, TransportSupervisor};
// FIN DEL ARCHIVO [libs/infra/telegram/src/lib.rs]
