use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a chat transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat API returned HTTP {status}: {description}")]
    Status { status: u16, description: String },

    #[error("chat API rejected the message: {0}")]
    Rejected(String),
}

/// Something that can deliver a text message to a chat.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TransportError>;
}
