//! WebSocket frames for the concierge chat panel.

use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, ChatRole};

/// Frame sent by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientFrame {
    /// Submit a message to the concierge
    Ask { content: String },
}

/// Frame sent by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerFrame {
    /// Full transcript, sent once on connect
    Transcript { messages: Vec<ChatMessageDto> },
    /// One message appended to the transcript
    Message(ChatMessageDto),
    /// Typing indicator; `active` is false once the reply has settled
    Typing { active: bool },
    /// Submission refused; the transcript is unchanged
    Rejected { reason: String },
}

/// Chat message on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub role: ChatRole,
    pub content: String,
    /// Unix timestamp (milliseconds since epoch) in UTC
    pub sent_at: i64,
}

impl From<&ChatMessage> for ChatMessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.as_str().to_string(),
            sent_at: message.sent_at.value(),
        }
    }
}
