//! Session-scoped chat conversation state for the site chat widget.
//!
//! The widget is single-threaded: it calls [`ChatSession::prepare`], sends the
//! request, then feeds the outcome to [`ChatSession::apply_reply`]. Native
//! callers can use [`ChatSession::send`] which does all three.

use crate::{
    i18n::{Locale, Message},
    resources::chat::{ChatMessage, ChatMessageRequest, ChatReply},
    ApiClient, Error,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum characters accepted per visitor message.
pub const MAX_MESSAGE_CHARS: usize = 1000;
/// Messages kept in memory; older ones are dropped first.
pub const MAX_HISTORY: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    session_id: String,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Resumes a session persisted by the caller (e.g. in `sessionStorage`).
    #[must_use]
    pub fn with_id(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Replaces the in-memory history with the backend's copy.
    pub fn restore(&mut self, history: Vec<ChatMessage>) {
        self.messages = history;
        self.trim_history();
    }

    /// Validates visitor input, records it and returns the request to send.
    ///
    /// # Errors
    /// Returns a translated message for blank or oversized input; nothing is recorded.
    pub fn prepare(&mut self, text: &str, locale: Locale) -> Result<ChatMessageRequest, String> {
        let message = text.trim();
        if message.is_empty() {
            return Err(Message::ChatEmpty.text(locale).to_string());
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(Message::ChatTooLong.text(locale).to_string());
        }

        self.push(ChatRole::User, message);
        Ok(ChatMessageRequest {
            session_id: self.session_id.clone(),
            message: message.to_string(),
        })
    }

    /// Records the assistant reply, or a translated system notice on failure.
    /// The visitor's message stays in the history either way.
    pub fn apply_reply(&mut self, result: &Result<ChatReply, Error>, locale: Locale) {
        match result {
            Ok(reply) => {
                if !reply.session_id.is_empty() {
                    self.session_id.clone_from(&reply.session_id);
                }
                self.push(ChatRole::Assistant, &reply.reply);
            }
            Err(err) => self.push(ChatRole::System, &err.user_message(locale)),
        }
    }

    /// Sends one visitor message and records the outcome.
    ///
    /// # Errors
    /// Returns `Error::Config` for invalid input, or the transport/HTTP error
    /// after recording it as a system message.
    pub async fn send(&mut self, client: &ApiClient, text: &str) -> Result<(), Error> {
        let locale = client.locale();
        let request = self.prepare(text, locale).map_err(Error::Config)?;
        let result = client.send_chat_message(&request).await;
        self.apply_reply(&result, locale);
        result.map(|_| ())
    }

    fn push(&mut self, role: ChatRole, content: &str) {
        self.messages.push(ChatMessage {
            role,
            content: content.to_string(),
            created_at: None,
        });
        self.trim_history();
    }

    fn trim_history(&mut self) {
        if self.messages.len() > MAX_HISTORY {
            let overflow = self.messages.len() - MAX_HISTORY;
            self.messages.drain(..overflow);
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sessions_get_unique_ids() {
        assert_ne!(ChatSession::new().session_id(), ChatSession::new().session_id());
    }

    #[test]
    fn prepare_rejects_blank_and_long_messages() {
        let mut session = ChatSession::with_id("s-1");
        assert_eq!(
            session.prepare("   ", Locale::En),
            Err(Message::ChatEmpty.text(Locale::En).to_string())
        );
        let long = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            session.prepare(&long, Locale::Es),
            Err(Message::ChatTooLong.text(Locale::Es).to_string())
        );
        assert!(session.messages().is_empty());
    }

    #[test]
    fn reply_and_failure_are_recorded() {
        let mut session = ChatSession::with_id("s-1");
        let request = session.prepare(" Hello ", Locale::En);
        assert_eq!(
            request.map(|r| r.message),
            Ok("Hello".to_string())
        );

        session.apply_reply(
            &Ok(ChatReply {
                session_id: "s-2".to_string(),
                reply: "Hi! How can we help?".to_string(),
            }),
            Locale::En,
        );
        assert_eq!(session.session_id(), "s-2");

        let _ = session.prepare("Pricing?", Locale::En);
        session.apply_reply(&Err(Error::Timeout("slow".to_string())), Locale::En);

        let roles: Vec<ChatRole> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::System]
        );
        assert_eq!(
            session.messages().last().map(|m| m.content.as_str()),
            Some(Message::Timeout.text(Locale::En))
        );
    }

    #[test]
    fn history_is_capped() {
        let mut session = ChatSession::with_id("s-1");
        for i in 0..(MAX_HISTORY + 5) {
            let _ = session.prepare(&format!("message {i}"), Locale::En);
        }
        assert_eq!(session.messages().len(), MAX_HISTORY);
        assert_eq!(
            session.messages().first().map(|m| m.content.as_str()),
            Some("message 5")
        );
    }

    #[test]
    fn restored_history_is_capped_keeping_latest() {
        let history = (0..MAX_HISTORY + 10)
            .map(|i| ChatMessage {
                role: if i % 2 == 0 { ChatRole::User } else { ChatRole::Assistant },
                content: format!("message {i}"),
                created_at: None,
            })
            .collect();

        let mut session = ChatSession::with_id("s-1");
        session.restore(history);

        assert_eq!(session.messages().len(), MAX_HISTORY);
        assert_eq!(
            session.messages().first().map(|m| m.content.as_str()),
            Some("message 10")
        );
        assert_eq!(
            session.messages().last().map(|m| m.content.as_str()),
            Some(format!("message {}", MAX_HISTORY + 9).as_str())
        );
    }
}
