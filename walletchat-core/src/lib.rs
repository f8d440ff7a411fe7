pub mod chat;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use chat::ChatClient;
pub use config::Config;
pub use error::ChatError;
pub use models::{ChatEnvelope, ChatRequest};
pub use session::SessionStore;
