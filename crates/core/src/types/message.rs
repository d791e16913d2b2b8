//! Chat transcript types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id::MessageId;
use super::product::Product;

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The human shopper.
    User,
    /// The assistant.
    Bot,
}

/// A single message in the conversation transcript.
///
/// Messages are immutable once appended; the transcript is append-only for
/// the lifetime of a session and fully cleared on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: MessageId,
    /// Sender role.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Products attached to a bot reply, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
    /// Suggested follow-up queries attached to a bot reply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ChatMessage {
    /// Create a user message with a fresh ID and the current timestamp.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(Uuid::new_v4().to_string()),
            role: ChatRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            products: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a bot reply with a fresh ID and the current timestamp.
    #[must_use]
    pub fn bot(
        content: impl Into<String>,
        products: Vec<Product>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            id: MessageId::new(Uuid::new_v4().to_string()),
            role: ChatRole::Bot,
            content: content.into(),
            timestamp: Utc::now(),
            products,
            suggestions,
        }
    }
}
