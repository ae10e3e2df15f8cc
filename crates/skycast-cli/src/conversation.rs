//! Conversation transcript kept by the terminal surface

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use skycast_core::Severity;

use crate::assistant::Reply;

/// Questions offered before the user has asked anything
pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "Is this weather good for cricket?",
    "What can I do indoors today?",
    "Summarize the current weather",
    "Is it good weather for a picnic?",
    "Tell me a fun fact",
    "How windy is it now?",
];

/// One line of the chat, from either side
#[derive(Debug, Clone, Serialize)]
pub struct ConversationTurn {
    pub text: String,
    pub from_assistant: bool,
    pub timestamp: DateTime<Utc>,
    pub severity: Option<Severity>,
}

impl ConversationTurn {
    /// Local wall-clock time as HH:MM
    pub fn time_label(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// Ordered transcript of a chat session.
///
/// The assistant itself is stateless; this only exists so the user can
/// scroll back through what was said.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conversation with the greeting for a city
    pub fn welcome(city: &str) -> Self {
        let mut conversation = Self::new();
        conversation.turns.push(ConversationTurn {
            text: format!(
                "Hi! I'm your assistant for {}. Ask me about any activity or any question at all!",
                city
            ),
            from_assistant: true,
            timestamp: Utc::now(),
            severity: Some(Severity::Info),
        });
        conversation
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ConversationTurn {
            text: text.into(),
            from_assistant: false,
            timestamp: Utc::now(),
            severity: None,
        });
    }

    pub fn push_reply(&mut self, reply: &Reply) {
        self.turns.push(ConversationTurn {
            text: reply.message.clone(),
            from_assistant: true,
            timestamp: Utc::now(),
            severity: Some(reply.severity),
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// True until the user has said something
    pub fn is_fresh(&self) -> bool {
        self.turns.iter().all(|turn| turn.from_assistant)
    }

    /// The greeting, if this conversation started with one
    pub fn greeting(&self) -> Option<&ConversationTurn> {
        self.turns.first().filter(|turn| turn.from_assistant)
    }
}
