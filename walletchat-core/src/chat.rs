//! Client for the expense tracker's AI chat endpoint
//!
//! One call, one POST to `/api/ai/chat`, one envelope to unwrap. The
//! credential and base URL are handed to the constructor explicitly; nothing
//! here reads globals, retries, or caches.

use crate::config::Config;
use crate::error::ChatError;
use crate::http::get_client;
use crate::models::{ChatEnvelope, ChatRequest, ErrorBody};
use crate::session::SessionStore;
use tracing::debug;

/// Path of the chat endpoint, relative to the configured base URL
const CHAT_ENDPOINT: &str = "/api/ai/chat";

/// Client bound to one backend and one credential
#[derive(Debug, Clone)]
pub struct ChatClient {
    base_url: String,
    token: String,
}

impl ChatClient {
    /// Create a client for `base_url` with the given bearer token
    ///
    /// The token is sent as-is, empty string included; there is no
    /// pre-check. Whether the backend treats an empty token as anonymous
    /// or malformed is the backend's concern.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Wire a client from loaded config and session state
    ///
    /// An absent token becomes the empty string, which yields an
    /// unauthenticated request.
    pub fn from_parts(config: &Config, session: &SessionStore) -> Self {
        Self::new(&config.api_base_url, session.token().unwrap_or_default())
    }

    /// Send a question about a wallet and return the assistant's answer
    ///
    /// Exactly one HTTP call per invocation, no retries, no partial
    /// results. Failure mapping:
    /// - transport failure → [`ChatError::Network`]
    /// - 2xx with `success: false` → [`ChatError::Application`] with the
    ///   generic "Failed to get response from AI"
    /// - non-2xx whose body carries `data` → [`ChatError::Application`]
    ///   with that message verbatim
    /// - anything else the body can't explain → [`ChatError::MalformedResponse`]
    pub async fn send_chat_message(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let url = format!("{}{}", self.base_url, CHAT_ENDPOINT);
        debug!(url = %url, wallet_id = %request.wallet_id, "sending chat request");

        let response = get_client()
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = %status, "chat response received");

        if !status.is_success() {
            let parsed: Result<ErrorBody, _> = serde_json::from_slice(&body);
            return match parsed {
                Ok(ErrorBody { data: Some(message) }) => Err(ChatError::Application(message)),
                _ => Err(ChatError::MalformedResponse),
            };
        }

        let envelope: ChatEnvelope =
            serde_json::from_slice(&body).map_err(|_| ChatError::MalformedResponse)?;

        if envelope.success {
            Ok(envelope.data)
        } else {
            Err(ChatError::Application(
                "Failed to get response from AI".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_maps_missing_token_to_empty() {
        let config = Config {
            api_base_url: "http://localhost:8081".to_string(),
        };
        let session = SessionStore::load(
            std::env::temp_dir().join("walletchat-test-no-such-session.json"),
        )
        .unwrap();

        let client = ChatClient::from_parts(&config, &session);
        assert_eq!(client.token, "");
        assert_eq!(client.base_url, "http://localhost:8081");
    }

    #[test]
    fn test_new_keeps_token_verbatim() {
        let client = ChatClient::new("http://localhost:8081", "null");
        assert_eq!(client.token, "null");
    }
}
