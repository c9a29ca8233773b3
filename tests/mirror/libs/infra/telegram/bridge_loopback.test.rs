// [tests/mirror/libs/infra/telegram/bridge_loopback.test.rs]
//
// Puente de loopback: un TcpListener local interpreta el rol del sidecar
// userbot y certifica el handshake, el stream de tramas y el envío.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use radar_infra_telegram::{
    SessionCredentials, SessionSignal, TelegramSession, UserbotBridgeSession,
};

fn test_credentials() -> SessionCredentials {
    SessionCredentials {
        api_id: 424242,
        api_hash: "cafebabe".to_string(),
        phone: "+5491100000000".to_string(),
        session_name: "alpha_radar".to_string(),
    }
}

#[tokio::test]
async fn certify_handshake_stream_and_self_send() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing userbot bridge wire protocol...");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let bridge_address = listener.local_addr().unwrap().to_string();

    let sidecar = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);
        let mut line = String::new();

        // 1. Handshake con credenciales
        reader.read_line(&mut line).await.unwrap();
        let handshake: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(handshake["type"], "handshake");
        assert_eq!(handshake["api_id"], 424242);
        assert_eq!(handshake["session"], "alpha_radar");

        write_half.write_all(b"{\"type\":\"ready\"}\n").await.unwrap();

        // 2. Stream: mensaje y directiva de rate-limit
        write_half
            .write_all(
                b"{\"type\":\"message\",\"text\":\"gm fam\",\"conversation_id\":-100777,\"message_id\":99,\"is_forwarded\":true}\n",
            )
            .await
            .unwrap();
        write_half.write_all(b"{\"type\":\"rate_limited\",\"seconds\":3}\n").await.unwrap();

        // 3. Envío al self-chat en sentido contrario
        line.clear();
        reader.read_line(&mut line).await.unwrap();
        let outbound: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(outbound["type"], "send_self");
        assert_eq!(outbound["body"], "alerta formateada");
    });

    let mut session = UserbotBridgeSession::new(bridge_address, test_credentials());
    session.connect().await.expect("handshake must succeed");

    match session.next_signal().await.unwrap() {
        SessionSignal::Message(event) => {
            assert_eq!(event.text, "gm fam");
            assert_eq!(event.conversation_id, -100777);
            assert_eq!(event.message_id, 99);
            assert!(event.is_forwarded);
        }
        other => panic!("expected a message frame, got {other:?}"),
    }

    match session.next_signal().await.unwrap() {
        SessionSignal::RateLimited(wait) => assert_eq!(wait, Duration::from_secs(3)),
        other => panic!("expected a rate-limit frame, got {other:?}"),
    }

    session.send_to_saved_messages("alerta formateada").await.unwrap();
    sidecar.await.unwrap();
    session.disconnect().await;

    println!("   ✅ Wire protocol certified.");
}

#[tokio::test]
async fn certify_unreachable_bridge_is_a_link_fault() {
    // Puerto efímero cerrado: nadie escucha.
    let vacant = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let vacant_address = vacant.local_addr().unwrap().to_string();
    drop(vacant);

    let mut session = UserbotBridgeSession::new(vacant_address, test_credentials());
    assert!(session.connect().await.is_err());
}

#[tokio::test]
async fn certify_eof_surfaces_as_link_fault() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let bridge_address = listener.local_addr().unwrap().to_string();

    let sidecar = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        write_half.write_all(b"{\"type\":\"ready\"}\n").await.unwrap();
        // El sidecar muere: EOF inmediato.
    });

    let mut session = UserbotBridgeSession::new(bridge_address, test_credentials());
    session.connect().await.unwrap();
    sidecar.await.unwrap();

    assert!(session.next_signal().await.is_err(), "EOF must surface as a link fault");
}
