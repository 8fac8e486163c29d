//! Concierge WebSocket integration tests.
//!
//! Frame protocol: the transcript on connect, then for each accepted `ask`
//! the echoed user message, `typing {active:true}`, the assistant message
//! and `typing {active:false}`.

mod fixtures;
use std::{sync::Arc, time::Duration};

use fixtures::{ScriptedRecommendationService, TestServer};
use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

const GREETING: &str = "Hi! I'm your UniBorrow Concierge. Need help finding gear for a project, a trip, or a class? Ask me anything!";
const FALLBACK: &str = "I'm not sure how to help with that. Try searching the main catalog!";

async fn connect(server: &TestServer) -> Socket {
    let (socket, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");
    socket
}

async fn next_frame(socket: &mut Socket) -> Value {
    let msg = tokio::time::timeout(Duration::from_secs(5), socket.next())
        .await
        .expect("Timed out waiting for a frame")
        .expect("Socket closed")
        .expect("WebSocket error");
    serde_json::from_str(msg.to_text().expect("Non-text frame")).expect("Invalid JSON frame")
}

async fn ask(socket: &mut Socket, content: &str) {
    let frame = json!({"type": "ask", "content": content}).to_string();
    socket
        .send(Message::Text(frame.into()))
        .await
        .expect("Failed to send ask");
}

#[tokio::test]
async fn test_connect_receives_greeting_transcript() {
    // テスト項目: 接続直後に挨拶のみを含むトランスクリプトが送られる
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let mut socket = connect(&server).await;
    let frame = next_frame(&mut socket).await;

    // then (期待する結果):
    assert_eq!(frame["type"], "transcript");
    let messages = frame["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "assistant");
    assert_eq!(messages[0]["content"], GREETING);
}

#[tokio::test]
async fn test_failed_recommendation_appends_fallback() {
    // テスト項目: 推薦サービスが失敗すると、ユーザーメッセージの後にフォールバック文言が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut socket = connect(&server).await;
    next_frame(&mut socket).await;

    // when (操作):
    ask(&mut socket, "I need something for hiking").await;

    // then (期待する結果):
    let echoed = next_frame(&mut socket).await;
    assert_eq!(echoed["type"], "message");
    assert_eq!(echoed["role"], "user");
    assert_eq!(echoed["content"], "I need something for hiking");

    let typing = next_frame(&mut socket).await;
    assert_eq!(typing, json!({"type": "typing", "active": true}));

    let reply = next_frame(&mut socket).await;
    assert_eq!(reply["role"], "assistant");
    assert_eq!(reply["content"], FALLBACK);

    let typing = next_frame(&mut socket).await;
    assert_eq!(typing, json!({"type": "typing", "active": false}));
}

#[tokio::test]
async fn test_recommendation_reply_is_delivered() {
    // テスト項目: 推薦サービスの応答がアシスタントメッセージとして届く
    // given (前提条件):
    let server = TestServer::with_recommender(
        Arc::new(ScriptedRecommendationService::replying(
            "Try the Camping Tent (4-Person)!",
        )),
        None,
    )
    .await;
    let mut socket = connect(&server).await;
    next_frame(&mut socket).await;

    // when (操作):
    ask(&mut socket, "camping trip this weekend").await;

    // then (期待する結果):
    next_frame(&mut socket).await; // echo
    next_frame(&mut socket).await; // typing on
    let reply = next_frame(&mut socket).await;
    assert_eq!(reply["content"], "Try the Camping Tent (4-Person)!");
}

#[tokio::test]
async fn test_blank_ask_is_rejected() {
    // テスト項目: 空白のみの質問は拒否され、トランスクリプトは変わらない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut socket = connect(&server).await;
    next_frame(&mut socket).await;

    // when (操作):
    ask(&mut socket, "   ").await;

    // then (期待する結果):
    let frame = next_frame(&mut socket).await;
    assert_eq!(frame["type"], "rejected");
    assert_eq!(frame["reason"], "message cannot be empty");
}

#[tokio::test]
async fn test_ask_while_awaiting_is_rejected() {
    // テスト項目: 応答待ちの間の質問は拒否され、最初の質問の応答は届く
    // given (前提条件):
    let server = TestServer::with_recommender(
        Arc::new(ScriptedRecommendationService::slow(
            "Canon EOS R5",
            Duration::from_millis(300),
        )),
        None,
    )
    .await;
    let mut socket = connect(&server).await;
    next_frame(&mut socket).await;

    // when (操作):
    ask(&mut socket, "camera for a film class").await;
    next_frame(&mut socket).await; // echo
    next_frame(&mut socket).await; // typing on
    ask(&mut socket, "also a tripod").await;

    // then (期待する結果):
    let rejected = next_frame(&mut socket).await;
    assert_eq!(rejected["type"], "rejected");
    assert_eq!(rejected["reason"], "a request is already in flight");

    let reply = next_frame(&mut socket).await;
    assert_eq!(reply["type"], "message");
    assert_eq!(reply["content"], "Canon EOS R5");
}

#[tokio::test]
async fn test_timeout_appends_fallback() {
    // テスト項目: タイムアウトした呼び出しはフォールバック文言になる
    // given (前提条件):
    let server = TestServer::with_recommender(
        Arc::new(ScriptedRecommendationService::slow(
            "too late",
            Duration::from_secs(10),
        )),
        Some(Duration::from_millis(100)),
    )
    .await;
    let mut socket = connect(&server).await;
    next_frame(&mut socket).await;

    // when (操作):
    ask(&mut socket, "anything?").await;

    // then (期待する結果):
    next_frame(&mut socket).await; // echo
    next_frame(&mut socket).await; // typing on
    let reply = next_frame(&mut socket).await;
    assert_eq!(reply["content"], FALLBACK);
}

#[tokio::test]
async fn test_long_ask_is_answered() {
    // テスト項目: 2000 文字を超える質問も受け付けられ、応答が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut socket = connect(&server).await;
    next_frame(&mut socket).await;
    let question = "Which of your listings would suit a semester-long film project? ".repeat(40);

    // when (操作):
    ask(&mut socket, &question).await;

    // then (期待する結果):
    let echoed = next_frame(&mut socket).await;
    assert_eq!(echoed["type"], "message");
    assert_eq!(echoed["content"], question.as_str());
    next_frame(&mut socket).await; // typing on
    let reply = next_frame(&mut socket).await;
    assert_eq!(reply["role"], "assistant");
    assert_eq!(reply["content"], FALLBACK);
}
