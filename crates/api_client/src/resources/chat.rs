//! Chat widget endpoints.

use super::path_segment;
use crate::{chat::ChatRole, ApiClient, Error};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub session_id: String,
    pub reply: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ApiClient {
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn send_chat_message(&self, request: &ChatMessageRequest) -> Result<ChatReply, Error> {
        self.post("/chat/message", request).await
    }

    /// Conversation history; unknown sessions yield an empty history.
    ///
    /// # Errors
    /// Returns transport, non-404 HTTP or decoding errors.
    pub async fn chat_history(&self, session_id: &str) -> Result<Vec<ChatMessage>, Error> {
        let path = format!("/chat/history/{}", path_segment(session_id)?);
        Ok(self.get_optional(&path).await?.unwrap_or_default())
    }
}
