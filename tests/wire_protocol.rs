// Wire codec properties: inbound routing by shape, state decoding at the
// boundary, and the outbound frame format.

use tokio::sync::mpsc;

use duel_client::domain::{BattleSnapshot, CombatantState, Direction};
use duel_client::interface_adapters::protocol::{ServerEvent, WireFrameDto, decode_server_event};
use duel_client::use_cases::types::OutboundFrame;
use duel_client::use_cases::{ChatCommand, SessionContext};

#[test]
fn chat_shaped_frames_route_to_chat() {
    let event = decode_server_event(r#"{"username":"alice","message":"hello","command":""}"#)
        .expect("chat frame should decode");
    match event {
        ServerEvent::Chat(msg) => {
            assert_eq!(msg.username, "alice");
            assert_eq!(msg.message, "hello");
            assert_eq!(ChatCommand::parse(&msg.command), None);
        }
        ServerEvent::Snapshot(_) => panic!("chat frame routed as snapshot"),
    }
}

#[test]
fn control_frames_carry_commands() {
    let event = decode_server_event(r#"{"username":"bob","message":"bob","command":"START GAME"}"#)
        .expect("control frame should decode");
    let ServerEvent::Chat(msg) = event else {
        panic!("control frame routed as snapshot");
    };
    assert_eq!(ChatCommand::parse(&msg.command), Some(ChatCommand::StartGame));
    // The enemy name rides in the message field.
    assert_eq!(msg.message, "bob");
}

#[test]
fn snapshot_frames_route_by_missing_message_field() {
    let text = r#"{
        "self": {"life": 94, "stamina": 88.5, "state": "light attack", "stateDur": 40},
        "enemy": {"life": 100, "stamina": 97.0, "state": "interrupted heavy_down", "stateDur": 0}
    }"#;
    let event = decode_server_event(text).expect("snapshot frame should decode");
    let ServerEvent::Snapshot(dto) = event else {
        panic!("snapshot frame routed as chat");
    };
    let snap = BattleSnapshot::from(dto);
    assert_eq!(snap.own.life, 94);
    assert_eq!(snap.own.state, CombatantState::LightAttack);
    assert_eq!(snap.own.state_duration, 40);
    assert_eq!(
        snap.enemy.state,
        CombatantState::Interrupted(Direction::Down)
    );
    assert!(!snap.is_finished());
}

#[test]
fn malformed_frames_fail_to_decode() {
    assert!(decode_server_event("not json at all").is_err());
    assert!(decode_server_event(r#"{"unrelated": true}"#).is_err());
    // A snapshot missing one side matches neither shape.
    assert!(
        decode_server_event(r#"{"self": {"life": 1, "stamina": 1.0, "state": "standing", "stateDur": 0}}"#)
            .is_err()
    );
}

fn wire_json(frame: OutboundFrame) -> serde_json::Value {
    serde_json::to_value(WireFrameDto::from(frame)).expect("frame should serialize")
}

#[test]
fn outbound_frames_serialize_to_the_shared_shape() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut session = SessionContext::new("alice".to_string(), tx);

    session.join();
    session.toggle_ready();
    session.toggle_ready();
    session.request_bot_match("AttackBotSlow");
    session.send_chat("good luck");
    session.acknowledge_match_end();

    let frames: Vec<serde_json::Value> = std::iter::from_fn(|| rx.try_recv().ok())
        .map(wire_json)
        .collect();

    assert_eq!(
        frames,
        vec![
            serde_json::json!({"username": "alice", "message": "", "command": "SETNAME"}),
            serde_json::json!({"username": "alice", "message": "", "command": "READY"}),
            serde_json::json!({"username": "alice", "message": "", "command": "UNREADY"}),
            serde_json::json!({"username": "alice", "message": "AttackBotSlow", "command": "BOT MATCH"}),
            serde_json::json!({"username": "alice", "message": "good luck", "command": ""}),
            serde_json::json!({"username": "alice", "message": "", "command": "END MATCH"}),
        ]
    );
}

#[test]
fn action_frames_use_wire_names() {
    use duel_client::domain::Action;

    let (tx, mut rx) = mpsc::channel(8);
    let session = SessionContext::new("alice".to_string(), tx);

    session.send_action(Action::LightAttack);
    session.send_action(Action::Interrupt(Direction::Left));
    session.send_action(Action::None);

    let names: Vec<String> = std::iter::from_fn(|| rx.try_recv().ok())
        .map(|frame| frame.message)
        .collect();
    assert_eq!(names, vec!["LIGHT", "INTERRUPT_LEFT", "NONE"]);
}

#[test]
fn empty_chat_text_is_not_transmitted() {
    let (tx, mut rx) = mpsc::channel(8);
    let session = SessionContext::new("alice".to_string(), tx);
    session.send_chat("");
    assert!(rx.try_recv().is_err());
}
