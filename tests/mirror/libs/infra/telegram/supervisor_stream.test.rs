// [tests/mirror/libs/infra/telegram/supervisor_stream.test.rs]
//
// Supervisión de una sesión guionizada: flujo de eventos, reconexión tras
// caída del enlace, rate-limit dormido y agotamiento de reintentos.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use radar_domain_models::{ChatMessageEvent, DeliveryOutcome};
use radar_infra_telegram::{
    AlertNotifier, OutboundAlert, ReconnectPolicy, SelfChatNotifier, SessionSignal,
    TelegramSession, TransportFault, TransportSupervisor,
};

fn chat_event(text: &str, message_id: i64) -> ChatMessageEvent {
    ChatMessageEvent {
        text: text.to_string(),
        conversation_id: 100,
        message_id,
        is_forwarded: false,
    }
}

/// Sesión guionizada: pasos de conexión y señales pre-cargados; cuando el
/// guion se agota, next_signal queda pendiente para siempre.
struct ScriptedSession {
    connect_script: VecDeque<Result<(), TransportFault>>,
    signal_script: VecDeque<Result<SessionSignal, TransportFault>>,
    delivered_bodies: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSession {
    fn new(
        connect_script: Vec<Result<(), TransportFault>>,
        signal_script: Vec<Result<SessionSignal, TransportFault>>,
    ) -> (Self, Arc<Mutex<Vec<String>>>) {
        let delivered_bodies = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                connect_script: connect_script.into(),
                signal_script: signal_script.into(),
                delivered_bodies: delivered_bodies.clone(),
            },
            delivered_bodies,
        )
    }
}

#[async_trait]
impl TelegramSession for ScriptedSession {
    async fn connect(&mut self) -> Result<(), TransportFault> {
        self.connect_script.pop_front().unwrap_or(Ok(()))
    }

    async fn next_signal(&mut self) -> Result<SessionSignal, TransportFault> {
        match self.signal_script.pop_front() {
            Some(step) => step,
            None => std::future::pending().await,
        }
    }

    async fn send_to_saved_messages(&mut self, body: &str) -> Result<(), TransportFault> {
        self.delivered_bodies.lock().unwrap().push(body.to_string());
        Ok(())
    }

    async fn disconnect(&mut self) {}
}

fn fast_policy(max_retries: u32) -> ReconnectPolicy {
    ReconnectPolicy {
        max_retries,
        initial_backoff: Duration::from_millis(1),
        backoff_ceiling: Duration::from_millis(4),
    }
}

#[tokio::test]
async fn certify_events_flow_and_clean_shutdown() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing scripted stream supervision...");

    let (session, _) = ScriptedSession::new(
        vec![Ok(())],
        vec![
            Ok(SessionSignal::Message(chat_event("gm", 1))),
            Ok(SessionSignal::Message(chat_event("wagmi", 2))),
        ],
    );

    let (ingress_sink, mut ingress_events) = mpsc::channel(8);
    let (_outbound_sink, outbound_alerts) = mpsc::channel::<OutboundAlert>(8);
    let link_state = Arc::new(AtomicBool::new(false));

    let supervisor = TransportSupervisor::new(
        session,
        fast_policy(3),
        ingress_sink,
        outbound_alerts,
        link_state.clone(),
    );
    let shutdown = CancellationToken::new();
    let supervisor_handle = tokio::spawn(supervisor.run(shutdown.clone()));

    let first = ingress_events.recv().await.expect("first event");
    let second = ingress_events.recv().await.expect("second event");
    assert_eq!(first.message_id, 1);
    assert_eq!(second.message_id, 2);
    assert!(link_state.load(Ordering::SeqCst), "link flag must be up while streaming");

    shutdown.cancel();
    let verdict = supervisor_handle.await.unwrap();
    assert!(verdict.is_ok(), "cooperative shutdown is not an error");
    assert!(!link_state.load(Ordering::SeqCst), "link flag must drop after shutdown");

    println!("   ✅ Stream supervision certified.");
}

#[tokio::test]
async fn certify_reconnect_after_link_loss() {
    // Primera sesión entrega un evento y muere; la segunda retoma.
    let (session, _) = ScriptedSession::new(
        vec![Ok(()), Ok(())],
        vec![
            Ok(SessionSignal::Message(chat_event("before the drop", 1))),
            Err(TransportFault::Link("mid-stream severance".into())),
            Ok(SessionSignal::RateLimited(Duration::from_millis(1))),
            Ok(SessionSignal::Message(chat_event("after the drop", 2))),
        ],
    );

    let (ingress_sink, mut ingress_events) = mpsc::channel(8);
    let (_outbound_sink, outbound_alerts) = mpsc::channel::<OutboundAlert>(8);
    let link_state = Arc::new(AtomicBool::new(false));

    let supervisor =
        TransportSupervisor::new(session, fast_policy(3), ingress_sink, outbound_alerts, link_state);
    let shutdown = CancellationToken::new();
    let supervisor_handle = tokio::spawn(supervisor.run(shutdown.clone()));

    assert_eq!(ingress_events.recv().await.unwrap().message_id, 1);
    // Tras la reconexión (y el rate-limit dormido) el stream continúa.
    assert_eq!(ingress_events.recv().await.unwrap().message_id, 2);

    shutdown.cancel();
    assert!(supervisor_handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn certify_retry_ceiling_collapses_the_link() {
    let connect_script: Vec<Result<(), TransportFault>> =
        (0..10).map(|_| Err(TransportFault::Link("bridge offline".into()))).collect();
    let (session, _) = ScriptedSession::new(connect_script, vec![]);

    let (ingress_sink, _ingress_events) = mpsc::channel(8);
    let (_outbound_sink, outbound_alerts) = mpsc::channel::<OutboundAlert>(8);
    let link_state = Arc::new(AtomicBool::new(false));

    let supervisor =
        TransportSupervisor::new(session, fast_policy(2), ingress_sink, outbound_alerts, link_state);
    let verdict = supervisor.run(CancellationToken::new()).await;

    match verdict {
        Err(TransportFault::RetriesExhausted { attempts }) => assert_eq!(attempts, 2),
        other => panic!("expected retries-exhausted collapse, got {other:?}"),
    }
}

#[tokio::test]
async fn certify_outbound_alert_acknowledged_as_sent() {
    let (session, delivered_bodies) = ScriptedSession::new(vec![Ok(())], vec![]);

    let (ingress_sink, _ingress_events) = mpsc::channel(8);
    let (outbound_sink, outbound_alerts) = mpsc::channel(8);
    let link_state = Arc::new(AtomicBool::new(false));

    let supervisor =
        TransportSupervisor::new(session, fast_policy(3), ingress_sink, outbound_alerts, link_state);
    let shutdown = CancellationToken::new();
    let supervisor_handle = tokio::spawn(supervisor.run(shutdown.clone()));

    let notifier = SelfChatNotifier::new(outbound_sink, Duration::from_secs(5));
    let outcome = notifier.dispatch("🚨 alerta de prueba").await;

    assert_eq!(outcome, DeliveryOutcome::Sent);
    assert_eq!(delivered_bodies.lock().unwrap().as_slice(), ["🚨 alerta de prueba"]);

    shutdown.cancel();
    assert!(supervisor_handle.await.unwrap().is_ok());
}
