use serde::{Deserialize, Serialize};

/// Request payload for the AI chat endpoint
///
/// Serializes as `{"question": ..., "walletId": ...}` — exactly the two
/// fields the backend expects, nothing injected. Contents are not validated;
/// the backend owns those rules.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(rename = "walletId")]
    pub wallet_id: String,
}

impl ChatRequest {
    pub fn new(question: impl Into<String>, wallet_id: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            wallet_id: wallet_id.into(),
        }
    }
}

/// Response envelope used by the backend for both outcomes
///
/// `data` holds the answer text when `success` is true, or the backend's
/// error message when false.
#[derive(Debug, Deserialize)]
pub struct ChatEnvelope {
    pub success: bool,
    pub data: String,
}

/// Lenient shape for non-2xx bodies, which may or may not carry `data`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_exact_wire_shape() {
        let request = ChatRequest::new("How much did I spend?", "wallet-7");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "question": "How much did I spend?",
                "walletId": "wallet-7",
            })
        );
        // exactly two fields, nothing extra
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_envelope_parses_both_outcomes() {
        let ok: ChatEnvelope = serde_json::from_str(r#"{"success":true,"data":"42"}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.data, "42");

        let err: ChatEnvelope =
            serde_json::from_str(r#"{"success":false,"data":"insufficient funds"}"#).unwrap();
        assert!(!err.success);
        assert_eq!(err.data, "insufficient funds");
    }

    #[test]
    fn test_error_body_data_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"data":"rate limited"}"#).unwrap();
        assert_eq!(with.data.as_deref(), Some("rate limited"));

        let without: ErrorBody = serde_json::from_str(r#"{"status":500}"#).unwrap();
        assert!(without.data.is_none());
    }
}
