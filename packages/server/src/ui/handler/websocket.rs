//! Concierge WebSocket handler.
//!
//! One connection owns one transcript. The recommendation call runs in a
//! spawned task raced against incoming frames, so at most one call per
//! transcript is outstanding and a second `ask` is rejected.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    future::OptionFuture,
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::task::JoinHandle;

use crate::{
    domain::{ChatMessage, ConciergeSession, ConciergeSessionFactory, Timestamp},
    infrastructure::dto::websocket::{ChatMessageDto, ClientFrame, ServerFrame},
    ui::state::AppState,
    usecase::AskConciergeUseCase,
};

type FrameSink = SplitSink<WebSocket, Message>;

pub async fn concierge_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let mut session = ConciergeSessionFactory::open();
    let usecase = AskConciergeUseCase::new(
        state.listings.clone(),
        state.recommender.clone(),
        state.concierge_timeout,
    );
    let (mut sender, mut receiver) = socket.split();
    tracing::info!("Concierge session {} opened", session.id());

    // Send the transcript (greeting) to the newly connected client
    let transcript = ServerFrame::Transcript {
        messages: session
            .transcript()
            .messages()
            .iter()
            .map(ChatMessageDto::from)
            .collect(),
    };
    if let Err(e) = send_frame(&mut sender, &transcript).await {
        tracing::error!(
            "Failed to send transcript for session {}: {}",
            session.id(),
            e
        );
        return;
    }

    let mut in_flight: Option<JoinHandle<Option<String>>> = None;

    loop {
        tokio::select! {
            Some(joined) = OptionFuture::from(in_flight.as_mut()), if in_flight.is_some() => {
                in_flight = None;
                let reply = joined.unwrap_or_else(|e| {
                    tracing::warn!("Concierge task for session {} failed: {}", session.id(), e);
                    None
                });
                if settle_reply(&mut session, &mut sender, reply).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => {
                let msg = match incoming {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket error in session {}: {}", session.id(), e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => {
                        let frame = match serde_json::from_str::<ClientFrame>(&text) {
                            Ok(frame) => frame,
                            Err(e) => {
                                tracing::warn!("Failed to parse client frame: {}", e);
                                let rejected = ServerFrame::Rejected {
                                    reason: format!("invalid frame: {e}"),
                                };
                                if send_frame(&mut sender, &rejected).await.is_err() {
                                    break;
                                }
                                continue;
                            }
                        };

                        let ClientFrame::Ask { content } = frame;
                        match session.submit(&content, Timestamp::now()) {
                            Ok(prompt) => {
                                if echo_submission(&session, &mut sender).await.is_err() {
                                    break;
                                }
                                let usecase = usecase.clone();
                                in_flight = Some(tokio::spawn(async move {
                                    usecase.request_reply(&prompt).await
                                }));
                            }
                            Err(e) => {
                                tracing::debug!("Ask rejected in session {}: {}", session.id(), e);
                                let rejected = ServerFrame::Rejected { reason: e.to_string() };
                                if send_frame(&mut sender, &rejected).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                    Message::Ping(_) => {
                        tracing::debug!("Received ping");
                    }
                    Message::Close(_) => {
                        tracing::info!("Concierge session {} closed by client", session.id());
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    if in_flight.is_some() {
        tracing::debug!(
            "Concierge session {} closed with a reply pending; it will be discarded",
            session.id()
        );
    }
    tracing::info!(
        "Concierge session {} ended after {} messages",
        session.id(),
        session.transcript().len()
    );
}

/// Echo the user message just appended, then raise the typing indicator.
async fn echo_submission(
    session: &ConciergeSession,
    sender: &mut FrameSink,
) -> Result<(), axum::Error> {
    if let Some(message) = session.transcript().last() {
        send_message(sender, message).await?;
    }
    send_frame(sender, &ServerFrame::Typing { active: true }).await
}

/// Append the reply (or fallback), send it, then lower the typing indicator.
async fn settle_reply(
    session: &mut ConciergeSession,
    sender: &mut FrameSink,
    reply: Option<String>,
) -> Result<(), axum::Error> {
    let session_id = session.id();
    let message = match session.settle(reply, Timestamp::now()) {
        Ok(message) => message.clone(),
        Err(e) => {
            tracing::warn!("Concierge session {} could not settle: {}", session_id, e);
            return Ok(());
        }
    };
    send_message(sender, &message).await?;
    send_frame(sender, &ServerFrame::Typing { active: false }).await
}

async fn send_message(sender: &mut FrameSink, message: &ChatMessage) -> Result<(), axum::Error> {
    send_frame(sender, &ServerFrame::Message(ChatMessageDto::from(message))).await
}

async fn send_frame(sender: &mut FrameSink, frame: &ServerFrame) -> Result<(), axum::Error> {
    let json = match serde_json::to_string(frame) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize server frame: {}", e);
            return Ok(());
        }
    };
    sender.send(Message::Text(json.into())).await
}
