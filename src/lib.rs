//! Display-side text handling for the Lexi chat client.
//!
//! Assistant replies arrive as buffered `data:` stream frames. [`sse`] turns
//! them into plain prose, [`message`] decides which messages need that
//! treatment, [`time_ago`] renders timestamps relative to now and
//! [`transcript`] puts the pieces together for a whole history.

pub mod config;
pub mod error;
pub mod message;
pub mod sse;
pub mod time_ago;
pub mod transcript;

pub use error::FormatError;
pub use message::{ChatHistory, ChatPart, Message, Role, format_content};
pub use sse::{extract_tokens, join_tokens, parse_sse_data, parse_sse_text};
pub use time_ago::{get_time_ago, time_ago_since};
pub use transcript::render_transcript;
