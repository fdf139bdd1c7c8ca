use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::FormatError;
use crate::message::{ChatHistory, Message, format_content};
use crate::time_ago::time_ago_since;

/// Render one display line for `message`, or `None` when it has nothing to show.
pub fn render_line(message: &Message, now: DateTime<Utc>) -> Result<Option<String>, FormatError> {
    let text = format_content(message);
    if text.trim().is_empty() {
        return Ok(None);
    }
    let when = time_ago_since(message.timestamp.as_deref(), now)?;
    let line = if when.is_empty() {
        format!("[{}] {}", message.role, text)
    } else {
        format!("[{}] {} ({})", message.role, text, when)
    };
    Ok(Some(line))
}

/// Render a chat history as display lines, oldest first.
///
/// ```
/// use chrono::Utc;
/// use lexi_stream::{ChatHistory, render_transcript};
///
/// let history = ChatHistory::from_json(
///     r#"{"user":"u","messages":[{"role":"assistant","content":"data: Dune\n"}]}"#,
/// ).unwrap();
/// assert_eq!(render_transcript(&history, Utc::now()).unwrap(), vec!["[assistant] Dune"]);
/// ```
pub fn render_transcript(
    history: &ChatHistory,
    now: DateTime<Utc>,
) -> Result<Vec<String>, FormatError> {
    let mut lines = Vec::with_capacity(history.messages.len());
    for message in &history.messages {
        match render_line(message, now)? {
            Some(line) => lines.push(line),
            None => debug!(id = ?message.id, role = %message.role, "skipping empty message"),
        }
    }
    Ok(lines)
}
