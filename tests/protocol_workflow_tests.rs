use serde_json::{json, Value};

use gamehelper::protocol::{error_codes, LineTransport};
use gamehelper::Connection;
use tokio::io::AsyncReadExt;

mod utils;

use utils::*;

fn parse(frames: &[String]) -> Vec<Value> {
    frames
        .iter()
        .map(|frame| serde_json::from_str(frame).unwrap())
        .collect()
}

#[tokio::test]
async fn test_full_session_handshake_list_and_call() {
    let setup = TestSetupBuilder::new().build();

    let probe = setup
        .run_session(vec![
            initialize(1),
            initialized(),
            list_tools(2),
            call_tool(
                3,
                "simulate_room_survival_time",
                json!({
                    "player": {"hp": 100, "damage": 10, "attackSpeed": 1},
                    "enemies": [{"hp": 50, "damage": 5, "attackSpeed": 1}]
                }),
            ),
        ])
        .await;

    // The notification gets no reply
    let replies = parse(&probe.sent_messages().await);
    assert_eq!(replies.len(), 3);

    assert_eq!(replies[0]["id"], 1);
    assert_eq!(replies[0]["result"]["protocolVersion"], "2024-11-05");

    assert_eq!(replies[1]["id"], 2);
    let names: Vec<&str> = replies[1]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "suggest_balancing",
            "predict_performance_impact",
            "suggest_ai_state_machine",
            "simulate_combat",
            "simulate_room_survival_time",
            "suggest_wave_timing",
            "simulate_skill_impact",
            "suggest_difficulty_ramp",
        ]
    );
    assert!(replies[1]["result"]["tools"][0]["inputSchema"].is_object());

    assert_eq!(replies[2]["id"], 3);
    ReplyAssertion::of(&replies[2]["result"])
        .succeeded()
        .contains("🟢 LOW risk");

    assert!(probe.is_closed().await);
}

#[tokio::test]
async fn test_bad_frames_do_not_end_the_session() {
    let setup = TestSetupBuilder::new().build();

    let probe = setup
        .run_raw_session(vec![
            "this is not json".to_string(),
            r#"{"jsonrpc":"2.0","id":9}"#.to_string(),
            serde_json::to_string(&call_tool(
                10,
                "suggest_ai_state_machine",
                json!({ "description": "Spots intruders" }),
            ))
            .unwrap(),
        ])
        .await;

    let replies = parse(&probe.sent_messages().await);
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["error"]["code"], error_codes::PARSE_ERROR);
    assert_eq!(replies[1]["error"]["code"], error_codes::INVALID_REQUEST);
    assert_eq!(replies[1]["id"], 9);

    ReplyAssertion::of(&replies[2]["result"])
        .succeeded()
        .contains("🔹 State: Chase");
}

#[tokio::test]
async fn test_invalid_utf8_frame_gets_parse_error_over_line_transport() {
    let setup = TestSetupBuilder::new().build();

    let mut input = b"\xff\xfe{}\n".to_vec();
    input.extend_from_slice(serde_json::to_string(&ping(11)).unwrap().as_bytes());
    input.push(b'\n');

    let (server, mut client) = tokio::io::duplex(4096);
    let transport = LineTransport::new(std::io::Cursor::new(input), server);
    Connection::new(Box::new(transport), setup.rpc_handler.clone())
        .run()
        .await
        .expect("session should survive the bad frame");

    let mut output = String::new();
    client.read_to_string(&mut output).await.unwrap();
    let replies: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["error"]["code"], error_codes::PARSE_ERROR);
    assert_eq!(replies[0]["id"], Value::Null);
    assert_eq!(replies[1]["id"], 11);
    assert_eq!(replies[1]["result"], json!({}));
}

#[tokio::test]
async fn test_unknown_tool_and_schema_violation_are_text_errors() {
    let setup = TestSetupBuilder::new().build();

    let unknown = setup.call("make_coffee", json!({})).await;
    ReplyAssertion::of(&unknown)
        .failed()
        .equals("❌ Error: Unknown tool: make_coffee");

    let invalid = setup
        .call(
            "simulate_room_survival_time",
            json!({ "player": {"hp": 1, "damage": 1, "attackSpeed": 1}, "enemies": [] }),
        )
        .await;
    ReplyAssertion::of(&invalid)
        .failed()
        .contains("`enemies` must contain at least 1 element");
}

#[tokio::test]
async fn test_ping_and_unknown_method() {
    let setup = TestSetupBuilder::new().build();

    let pong = setup
        .request(ping(5))
        .await
        .unwrap();
    assert_eq!(pong["result"], json!({}));

    let missing = setup
        .request(gamehelper::protocol::JsonRpcRequest::new(
            6,
            "prompts/list",
            Value::Null,
        ))
        .await
        .unwrap();
    assert_eq!(missing["error"]["code"], error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let setup = TestSetupBuilder::new().build();

    let (wave, skill) = tokio::join!(
        setup.call(
            "suggest_wave_timing",
            json!({"player": {"damage": 10, "attackSpeed": 1}, "enemyHp": 10, "enemiesPerWave": 3}),
        ),
        setup.call(
            "simulate_skill_impact",
            json!({"skill": {"damage": 50, "cooldown": 5, "area": 3}, "enemies": [{"hp": 10}, {"hp": 20}]}),
        ),
    );

    ReplyAssertion::of(&wave).succeeded().contains("Too easy");
    ReplyAssertion::of(&skill)
        .succeeded()
        .contains("- Enemies hit: 2")
        .contains("✅ High efficiency skill");

    assert_eq!(setup.registry.list().len(), 8);
}
