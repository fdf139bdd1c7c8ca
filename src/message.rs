use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::sse::parse_sse_text;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed fragment of a message, e.g. `{"type": "text", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPart {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// A chat message as exchanged with the chat backend.
///
/// # Examples
///
/// ```
/// use lexi_stream::{Message, Role};
///
/// let msg: Message = serde_json::from_str(
///     r#"{"id":"x","role":"assistant","content":"data: hi\n"}"#,
/// ).unwrap();
/// assert_eq!(msg.role, Role::Assistant);
/// assert!(msg.timestamp.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: Role,
    pub content: String,
    /// ISO-8601 creation time, as sent by the backend.
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ChatPart>,
}

/// Produce the display text for a message.
///
/// Assistant content arrives as buffered stream frames and is cleaned with
/// [`parse_sse_text`]. User and system content is already plain text and is
/// returned untouched; neither role is expected to carry stream frames.
pub fn format_content(message: &Message) -> String {
    match message.role {
        Role::Assistant => parse_sse_text(&message.content),
        Role::User | Role::System => message.content.clone(),
    }
}

/// Conversation history as returned by the chat history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory {
    /// Messages in chronological order.
    pub messages: Vec<Message>,
    /// Account the history belongs to.
    #[serde(default)]
    pub user: String,
}

impl ChatHistory {
    /// Decode a history document.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }
}
