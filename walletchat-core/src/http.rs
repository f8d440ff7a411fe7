//! Shared HTTP client
//!
//! One lazily-initialized client for all chat calls, so concurrent calls
//! share a connection pool. No timeout is set here: a hung backend call
//! blocks its caller, bounded only by the HTTP stack's own defaults.

use reqwest::Client;
use std::sync::OnceLock;

/// Global HTTP client for backend API calls
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("walletchat/1.0")
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_client_returns_same_instance() {
        let client1 = get_client();
        let client2 = get_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
