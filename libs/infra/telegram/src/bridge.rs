// [libs/infra/telegram/src/bridge.rs]
/*!
 * =================================================================
 * APARATO: USERBOT BRIDGE SESSION (V8.4 - WIRE SEALED)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L4)
 * RESPONSABILIDAD: SESIÓN CONCRETA SOBRE EL PUENTE TCP DEL USERBOT
 *
 * VISION HIPER-HOLÍSTICA:
 * El sidecar userbot posee la sesión MTProto (autenticación, archivos
 * de sesión, reconexión hacia Telegram). Este adaptador habla con él
 * por tramas JSON delimitadas por línea: handshake con credenciales,
 * luego un stream de mensajes y directivas de rate-limit; los envíos
 * al self-chat viajan en sentido contrario.
 * =================================================================
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::debug;

use crate::session::{SessionCredentials, SessionSignal, TelegramSession, TransportFault};
use radar_domain_models::ChatMessageEvent;

/// Tramas del protocolo puente. El discriminador viaja en `type`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeFrame {
    Handshake { api_id: i64, api_hash: String, phone: String, session: String },
    Ready,
    Message { text: String, conversation_id: i64, message_id: i64, is_forwarded: bool },
    RateLimited { seconds: u64 },
    SendSelf { body: String },
}

struct BridgeLink {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    line_buffer: String,
}

impl BridgeLink {
    async fn write_frame(&mut self, frame: &BridgeFrame) -> Result<(), TransportFault> {
        let mut payload = serde_json::to_string(frame)
            .map_err(|encode_fault| TransportFault::Wire(encode_fault.to_string()))?;
        payload.push('\n');

        self.writer
            .write_all(payload.as_bytes())
            .await
            .map_err(|io_fault| TransportFault::Link(io_fault.to_string()))?;
        self.writer
            .flush()
            .await
            .map_err(|io_fault| TransportFault::Link(io_fault.to_string()))
    }

    async fn read_frame(&mut self) -> Result<BridgeFrame, TransportFault> {
        self.line_buffer.clear();
        let bytes_read = self
            .reader
            .read_line(&mut self.line_buffer)
            .await
            .map_err(|io_fault| TransportFault::Link(io_fault.to_string()))?;

        if bytes_read == 0 {
            return Err(TransportFault::Link("BRIDGE_STREAM_CLOSED".to_string()));
        }

        serde_json::from_str(self.line_buffer.trim_end())
            .map_err(|decode_fault| TransportFault::Wire(decode_fault.to_string()))
    }
}

pub struct UserbotBridgeSession {
    bridge_address: String,
    credentials: SessionCredentials,
    link: Option<BridgeLink>,
}

impl UserbotBridgeSession {
    pub fn new(bridge_address: String, credentials: SessionCredentials) -> Self {
        Self { bridge_address, credentials, link: None }
    }

    fn live_link(&mut self) -> Result<&mut BridgeLink, TransportFault> {
        self.link.as_mut().ok_or_else(|| TransportFault::Link("SESSION_NOT_CONNECTED".to_string()))
    }
}

#[async_trait]
impl TelegramSession for UserbotBridgeSession {
    async fn connect(&mut self) -> Result<(), TransportFault> {
        let stream = TcpStream::connect(&self.bridge_address)
            .await
            .map_err(|io_fault| TransportFault::Link(io_fault.to_string()))?;
        let (read_half, write_half) = stream.into_split();

        let mut link = BridgeLink {
            reader: BufReader::new(read_half),
            writer: write_half,
            line_buffer: String::new(),
        };

        // Handshake: el puente ata la sesión MTProto correcta con estas
        // credenciales y confirma con Ready antes de emitir mensajes.
        link.write_frame(&BridgeFrame::Handshake {
            api_id: self.credentials.api_id,
            api_hash: self.credentials.api_hash.clone(),
            phone: self.credentials.phone.clone(),
            session: self.credentials.session_name.clone(),
        })
        .await?;

        match link.read_frame().await? {
            BridgeFrame::Ready => {
                self.link = Some(link);
                Ok(())
            }
            unexpected => Err(TransportFault::Wire(format!(
                "HANDSHAKE_VIOLATION: expected ready, got {unexpected:?}"
            ))),
        }
    }

    async fn next_signal(&mut self) -> Result<SessionSignal, TransportFault> {
        let link = self.live_link()?;

        loop {
            match link.read_frame().await? {
                BridgeFrame::Message { text, conversation_id, message_id, is_forwarded } => {
                    return Ok(SessionSignal::Message(ChatMessageEvent {
                        text,
                        conversation_id,
                        message_id,
                        is_forwarded,
                    }));
                }
                BridgeFrame::RateLimited { seconds } => {
                    return Ok(SessionSignal::RateLimited(Duration::from_secs(seconds)));
                }
                stray => {
                    debug!("🌫️ [BRIDGE]: Ignoring stray frame {:?}", stray);
                }
            }
        }
    }

    async fn send_to_saved_messages(&mut self, body: &str) -> Result<(), TransportFault> {
        let link = self.live_link()?;
        link.write_frame(&BridgeFrame::SendSelf { body: body.to_string() }).await
    }

    async fn disconnect(&mut self) {
        // El drop del enlace cierra el socket; el puente interpreta EOF
        // como despedida.
        self.link = None;
    }
}
// FIN DEL ARCHIVO [libs/infra/telegram/src/bridge.rs]
