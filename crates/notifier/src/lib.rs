//! Notification delivery with per-channel duplicate suppression.
//!
//! A message identical to the last one successfully sent on the same channel
//! is dropped without touching the transport. Status and error channels keep
//! independent history, so an error report never unblocks a repeated status
//! message or vice versa.

pub mod telegram;
pub mod transport;

use homework_common::error::PollError;
use homework_common::types::Channel;

pub use telegram::TelegramTransport;
pub use transport::{Transport, TransportError};

/// Last successfully delivered text per channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    last_status: Option<String>,
    last_error: Option<String>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sent(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::Status => self.last_status.as_deref(),
            Channel::Error => self.last_error.as_deref(),
        }
    }

    fn record(&mut self, channel: Channel, message: &str) {
        let slot = match channel {
            Channel::Status => &mut self.last_status,
            Channel::Error => &mut self.last_error,
        };
        *slot = Some(message.to_string());
    }
}

/// What happened to a notification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Same text as the last delivery on this channel.
    Suppressed,
}

/// Sends notifications to a single chat through a [`Transport`].
pub struct Notifier<T> {
    transport: T,
    chat_id: String,
}

impl<T: Transport> Notifier<T> {
    pub fn new(transport: T, chat_id: impl Into<String>) -> Self {
        Self {
            transport,
            chat_id: chat_id.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Deliver `message` on `channel` unless it repeats the previous one.
    ///
    /// `state` is only updated after the transport confirms delivery, so a
    /// failed message stays eligible for the next attempt.
    pub async fn notify(
        &self,
        state: &mut NotificationState,
        channel: Channel,
        message: &str,
    ) -> Result<Delivery, PollError> {
        if state.last_sent(channel) == Some(message) {
            tracing::debug!(%channel, "Duplicate notification suppressed");
            return Ok(Delivery::Suppressed);
        }

        self.transport
            .send_message(&self.chat_id, message)
            .await
            .map_err(|e| PollError::DeliveryFailed {
                channel,
                source: Box::new(e),
            })?;

        state.record(channel, message);
        tracing::info!(%channel, message, "Notification sent");
        Ok(Delivery::Sent)
    }
}
