use thiserror::Error;

/// Message carried by [`FormatError::InvalidInput`] when the stream parser is
/// handed anything other than a string.
pub const NOT_A_STRING: &str = "Input must be a string.";

/// Errors raised while turning chat data into display text.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The caller supplied a value the formatters cannot interpret.
    #[error("{0}")]
    InvalidInput(String),
    /// A chat history document did not match the expected JSON shape.
    #[error("invalid chat history: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FormatError {
    pub(crate) fn not_a_string() -> Self {
        FormatError::InvalidInput(NOT_A_STRING.to_string())
    }
}
