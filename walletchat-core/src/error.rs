use thiserror::Error;

/// Failures of a chat call, closed so callers can match instead of
/// parsing message strings
///
/// Display strings are kept identical to what the expense tracker UI
/// already shows:
/// - transport problems and uninterpretable bodies surface the generic
///   "Error communicating with AI assistant",
/// - server-reported failures carry the backend's own message verbatim.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never completed: connect failure, send failure, or the
    /// body could not be read.
    #[error("Error communicating with AI assistant")]
    Network(#[from] reqwest::Error),

    /// The backend reported a failure and supplied a message.
    #[error("{0}")]
    Application(String),

    /// A response arrived but its body did not match the envelope shape.
    #[error("Error communicating with AI assistant")]
    MalformedResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_surfaces_message_verbatim() {
        let err = ChatError::Application("rate limited".to_string());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_malformed_response_uses_generic_fallback() {
        assert_eq!(
            ChatError::MalformedResponse.to_string(),
            "Error communicating with AI assistant"
        );
    }
}
