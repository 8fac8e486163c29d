//! Concierge WebSocket connection.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use uniborrow_server::{
    domain::ChatRole,
    infrastructure::dto::websocket::{ChatMessageDto, ClientFrame, ServerFrame},
};

use crate::error::ClientError;

/// WebSocket URL of the concierge endpoint for an HTTP base URL.
pub fn concierge_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{ws_base}/ws/concierge")
}

/// One open chat panel: the server holds the transcript for the lifetime
/// of the connection, the client keeps a copy for display.
pub struct ConciergeConnection {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
    transcript: Vec<ChatMessageDto>,
}

impl ConciergeConnection {
    /// Connect and wait for the initial transcript.
    pub async fn connect(base_url: &str) -> Result<Self, ClientError> {
        let url = concierge_url(base_url);
        let (socket, _) = connect_async(url.as_str()).await?;
        tracing::debug!("Connected to {}", url);

        let mut connection = Self {
            socket,
            transcript: Vec::new(),
        };
        match connection.next_frame().await? {
            ServerFrame::Transcript { messages } => connection.transcript = messages,
            other => tracing::warn!("Expected transcript, got {:?}", other),
        }
        Ok(connection)
    }

    pub fn transcript(&self) -> &[ChatMessageDto] {
        &self.transcript
    }

    /// Send a message and wait for the assistant's reply.
    ///
    /// `on_typing` is called when the server raises the typing indicator.
    pub async fn ask(
        &mut self,
        content: &str,
        mut on_typing: impl FnMut(),
    ) -> Result<ChatMessageDto, ClientError> {
        let frame = serde_json::to_string(&ClientFrame::Ask {
            content: content.to_string(),
        })?;
        self.socket.send(Message::Text(frame.into())).await?;

        let mut reply = None;
        loop {
            match self.next_frame().await? {
                ServerFrame::Message(message) => {
                    if message.role == ChatRole::Assistant {
                        reply = Some(message.clone());
                    }
                    self.transcript.push(message);
                }
                ServerFrame::Typing { active: true } => on_typing(),
                ServerFrame::Typing { active: false } => break,
                ServerFrame::Rejected { reason } => return Err(ClientError::Rejected(reason)),
                ServerFrame::Transcript { messages } => self.transcript = messages,
            }
        }
        reply.ok_or(ClientError::ConnectionClosed)
    }

    pub async fn close(mut self) {
        if let Err(e) = self.socket.close(None).await {
            tracing::debug!("Concierge close failed: {}", e);
        }
    }

    async fn next_frame(&mut self) -> Result<ServerFrame, ClientError> {
        while let Some(msg) = self.socket.next().await {
            match msg? {
                Message::Text(text) => return Ok(serde_json::from_str(text.as_str())?),
                Message::Close(_) => break,
                _ => {}
            }
        }
        Err(ClientError::ConnectionClosed)
    }
}
