//! Cleanup of buffered event-stream text.
//!
//! The assistant's reply arrives as a run of `data:` frames. [`parse_sse_data`]
//! pulls the content out of every frame and joins it into a single line of
//! prose.
//!
//! ```
//! use lexi_stream::sse::parse_sse_text;
//!
//! let raw = "data: Hello\n\ndata: {\"content\":\"World\"}\n\n";
//! assert_eq!(parse_sse_text(raw), "Hello World");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::FormatError;

/// Literal prefix of a content-bearing line.
pub const MARKER: &str = "data:";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

#[derive(Deserialize)]
struct ContentFrame {
    content: String,
}

/// How the text after a marker should be read.
enum Payload<'a> {
    /// A JSON object carrying a string `content` field.
    Content(String),
    /// Anything else, taken verbatim.
    Text(&'a str),
}

fn decode_payload(candidate: &str) -> Payload<'_> {
    // serde accepts arrays for structs; only objects count as frames
    if !candidate.starts_with('{') {
        trace!(payload = candidate, "stream payload treated as plain text");
        return Payload::Text(candidate);
    }
    match serde_json::from_str::<ContentFrame>(candidate) {
        Ok(frame) => Payload::Content(frame.content),
        Err(err) => {
            trace!(%err, payload = candidate, "stream payload treated as plain text");
            Payload::Text(candidate)
        }
    }
}

/// Extract the content tokens from raw event-stream text.
///
/// Only lines starting with [`MARKER`] contribute. Each payload is decoded as
/// `{"content": "..."}` when possible and used verbatim otherwise. Tokens are
/// trimmed, empty ones are dropped, and source order is kept.
pub fn extract_tokens(raw: &str) -> Vec<String> {
    let tokens: Vec<String> = raw
        .split('\n')
        .filter_map(|line| line.strip_prefix(MARKER))
        .filter_map(|rest| {
            let token = match decode_payload(rest.trim()) {
                Payload::Content(content) => content.trim().to_string(),
                Payload::Text(text) => text.to_string(),
            };
            (!token.is_empty()).then_some(token)
        })
        .collect();
    debug!(count = tokens.len(), "extracted stream tokens");
    tokens
}

/// Join tokens with single spaces, collapsing every whitespace run.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let joined = tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    WHITESPACE_RE.replace_all(joined.trim(), " ").into_owned()
}

/// Clean raw event-stream text that is already known to be a string.
///
/// The output holds no `data:` lines, so feeding it back in yields an empty
/// string rather than the same text.
pub fn parse_sse_text(raw: &str) -> String {
    join_tokens(&extract_tokens(raw))
}

/// Validate and clean a raw event-stream payload.
///
/// # Errors
///
/// Returns [`FormatError::InvalidInput`] with the message
/// `Input must be a string.` when `raw` is not a JSON string.
///
/// ```
/// use lexi_stream::sse::parse_sse_data;
/// use serde_json::{json, Value};
///
/// assert_eq!(parse_sse_data(&json!("data: hi\n")).unwrap(), "hi");
/// assert!(parse_sse_data(&Value::Null).is_err());
/// ```
pub fn parse_sse_data(raw: &Value) -> Result<String, FormatError> {
    let raw = raw.as_str().ok_or_else(FormatError::not_a_string)?;
    Ok(parse_sse_text(raw))
}
