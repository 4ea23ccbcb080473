use thiserror::Error;

use crate::types::Channel;

/// Boxed cause carried by errors that wrap a lower-level failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure a poll cycle or the supervisor can produce.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Status API unavailable: {0}")]
    UpstreamUnavailable(#[source] BoxError),

    #[error("Status API returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Missing field `{0}` in API response")]
    MissingField(&'static str),

    #[error("Unexpected API response shape: {0}")]
    UnexpectedShape(String),

    #[error("Unknown homework status `{0}`")]
    UnknownStatus(String),

    #[error("Failed to deliver {channel} notification: {source}")]
    DeliveryFailed {
        channel: Channel,
        #[source]
        source: BoxError,
    },
}

impl PollError {
    /// Delivery failures on the status channel stop the process without
    /// attempting an error-channel report.
    pub fn is_status_delivery_failure(&self) -> bool {
        matches!(
            self,
            PollError::DeliveryFailed {
                channel: Channel::Status,
                ..
            }
        )
    }
}
