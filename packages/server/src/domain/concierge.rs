//! Concierge chat state machine.
//!
//! A `ConciergeSession` owns an append-only transcript and allows at most one
//! outstanding recommendation request. The reply (or the fallback text) for
//! message N is appended before message N+1 can be submitted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    entity::{ChatMessage, ChatRole},
    error::ConciergeError,
    value_object::{MessageContent, Timestamp},
};

/// First assistant message of every transcript.
pub const CONCIERGE_GREETING: &str = "Hi! I'm your UniBorrow Concierge. Need help finding gear for a project, a trip, or a class? Ask me anything!";

/// Assistant reply when the recommendation capability yields nothing.
pub const CONCIERGE_FALLBACK: &str =
    "I'm not sure how to help with that. Try searching the main catalog!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConciergeState {
    Idle,
    AwaitingResponse,
}

/// Ordered, append-only sequence of chat messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// One chat panel's conversation.
#[derive(Debug, Clone)]
pub struct ConciergeSession {
    id: Uuid,
    transcript: Transcript,
    state: ConciergeState,
}

impl ConciergeSession {
    /// Open a conversation seeded with the greeting.
    pub fn new(id: Uuid, opened_at: Timestamp) -> Self {
        let mut transcript = Transcript::default();
        transcript.push(ChatMessage::new(
            ChatRole::Assistant,
            MessageContent::from_static(CONCIERGE_GREETING),
            opened_at,
        ));
        Self {
            id,
            transcript,
            state: ConciergeState::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ConciergeState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether the send action is enabled for `input`.
    pub fn can_send(&self, input: &str) -> bool {
        self.state == ConciergeState::Idle && !input.trim().is_empty()
    }

    /// Append the user's message and wait for a reply.
    ///
    /// # Errors
    ///
    /// * `ConciergeError::RequestInFlight` while a reply is pending
    /// * `ConciergeError::EmptyMessage` for blank input
    ///
    /// Nothing is appended on error.
    pub fn submit(
        &mut self,
        input: &str,
        sent_at: Timestamp,
    ) -> Result<MessageContent, ConciergeError> {
        if self.state == ConciergeState::AwaitingResponse {
            return Err(ConciergeError::RequestInFlight);
        }
        let content = MessageContent::new(input.to_string())
            .map_err(|_| ConciergeError::EmptyMessage)?;

        self.transcript
            .push(ChatMessage::new(ChatRole::User, content.clone(), sent_at));
        self.state = ConciergeState::AwaitingResponse;
        Ok(content)
    }

    /// Append the assistant reply and return to idle.
    ///
    /// An absent or blank reply is replaced by `CONCIERGE_FALLBACK`.
    pub fn settle(
        &mut self,
        reply: Option<String>,
        sent_at: Timestamp,
    ) -> Result<&ChatMessage, ConciergeError> {
        if self.state != ConciergeState::AwaitingResponse {
            return Err(ConciergeError::NoRequestInFlight);
        }
        let content = reply
            .and_then(|text| MessageContent::new(text).ok())
            .unwrap_or_else(|| MessageContent::from_static(CONCIERGE_FALLBACK));

        self.state = ConciergeState::Idle;
        Ok(self
            .transcript
            .push(ChatMessage::new(ChatRole::Assistant, content, sent_at)))
    }
}
