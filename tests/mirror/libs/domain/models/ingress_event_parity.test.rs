// [tests/mirror/libs/domain/models/ingress_event_parity.test.rs]

use radar_domain_models::ChatMessageEvent;

/// CERTIFICACIÓN: Paridad JSON del evento de ingesta.
///
/// El evento cruza el puente userbot como JSON por línea; el esquema de
/// campos es un contrato de cable y no puede derivar.
#[test]
fn certify_ingress_event_json_parity() {
    println!("\n🧪 [PROVING_GROUNDS]: Validating ChatMessageEvent wire parity...");

    let event = ChatMessageEvent {
        text: "check 0xABCDEFabcdef0123456789012345678901234567AB".to_string(),
        conversation_id: -1001234567890,
        message_id: 31337,
        is_forwarded: true,
    };

    let serialized = serde_json::to_string(&event).expect("CRITICAL_FAULT: serialization collapsed");

    assert!(serialized.contains("\"conversation_id\":-1001234567890"));
    assert!(serialized.contains("\"message_id\":31337"));
    assert!(serialized.contains("\"is_forwarded\":true"));

    let recovered: ChatMessageEvent =
        serde_json::from_str(&serialized).expect("CRITICAL_FAULT: deserialization collapsed");
    assert_eq!(recovered, event);

    println!("   ✅ Wire parity certified.");
}

#[test]
fn certify_bridge_frame_field_names_match() {
    // El puente emite exactamente estos nombres de campo.
    let raw = r#"{"text":"gm","conversation_id":7,"message_id":1,"is_forwarded":false}"#;
    let event: ChatMessageEvent = serde_json::from_str(raw).unwrap();
    assert_eq!(event.text, "gm");
    assert_eq!(event.conversation_id, 7);
    assert!(!event.is_forwarded);
}
