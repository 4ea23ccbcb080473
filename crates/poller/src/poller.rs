use std::time::Duration;

use homework_common::config::Credentials;
use homework_common::error::PollError;
use homework_common::types::{Channel, TimeCursor};
use homework_decoders::{CheckedResponse, check_response, parse_status};
use homework_notifier::{Delivery, NotificationState, Notifier, Transport};

use crate::client::StatusApi;

/// Prefix of every message sent on the error channel.
pub const ERROR_MESSAGE_PREFIX: &str = "Сбой в работе программы: ";

/// Mutable state carried from one poll cycle to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub cursor: TimeCursor,
    pub notifications: NotificationState,
}

impl PollState {
    pub fn new(cursor: TimeCursor) -> Self {
        Self {
            cursor,
            notifications: NotificationState::new(),
        }
    }

    /// Fresh state with the cursor at the current time. Updates that arrived
    /// while the process was down are not replayed.
    pub fn starting_now() -> Self {
        Self::new(TimeCursor::now())
    }
}

/// Result of a single successful poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status message was built and either sent or suppressed as a repeat.
    Changed { message: String, delivery: Delivery },
    /// The API reported no changes since the cursor.
    Unchanged,
}

/// Polls the homework API and forwards status changes to the chat.
pub struct HomeworkPoller<A, T> {
    api: A,
    notifier: Notifier<T>,
    credentials: Credentials,
    retry_interval: Duration,
}

impl<A: StatusApi, T: Transport> HomeworkPoller<A, T> {
    pub fn new(
        api: A,
        notifier: Notifier<T>,
        credentials: Credentials,
        retry_interval: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            credentials,
            retry_interval,
        }
    }

    /// Start the polling loop.
    ///
    /// Never returns `Ok`: the loop only ends on a fatal error. Every
    /// iteration, including the one that fails, ends with the retry sleep.
    pub async fn run(&self, state: &mut PollState) -> Result<(), PollError> {
        self.credentials.validate()?;

        tracing::info!(
            cursor = %state.cursor,
            retry_interval_secs = self.retry_interval.as_secs(),
            "Homework poller started"
        );

        loop {
            let result = self.poll_once(state).await;
            let verdict = self.handle_result(result, state).await;

            tokio::time::sleep(self.retry_interval).await;

            verdict?;
        }
    }

    /// Run one query-validate-extract-notify pass.
    ///
    /// The cursor is advanced only once the notification has been sent or
    /// suppressed; any error leaves it untouched.
    pub async fn poll_once(&self, state: &mut PollState) -> Result<CycleOutcome, PollError> {
        let from_date = state.cursor.timestamp();
        tracing::info!(from_date, "Requesting homework statuses");

        let response = self.api.homework_statuses(from_date).await?;

        let (homework, current_date) = match check_response(&response)? {
            CheckedResponse::NoRecentChanges => return Ok(CycleOutcome::Unchanged),
            CheckedResponse::Latest {
                homework,
                current_date,
            } => (homework, current_date),
        };

        let message = parse_status(&homework)?;
        let delivery = self
            .notifier
            .notify(&mut state.notifications, Channel::Status, &message)
            .await?;

        if state.cursor.advance_to(current_date) {
            tracing::debug!(cursor = %state.cursor, "Time cursor advanced");
        }

        Ok(CycleOutcome::Changed { message, delivery })
    }

    /// Classify a cycle result. `Err` means the poller must stop.
    async fn handle_result(
        &self,
        result: Result<CycleOutcome, PollError>,
        state: &mut PollState,
    ) -> Result<(), PollError> {
        match result {
            Ok(CycleOutcome::Unchanged) => {
                tracing::info!("No homework status changes");
                Ok(())
            }
            Ok(CycleOutcome::Changed {
                delivery: Delivery::Suppressed,
                ..
            }) => {
                tracing::debug!("Homework status unchanged since last notification");
                Ok(())
            }
            Ok(CycleOutcome::Changed {
                delivery: Delivery::Sent,
                ..
            }) => Ok(()),
            Err(e) if e.is_status_delivery_failure() => {
                tracing::error!(error = %e, "Bot cannot deliver status notifications, stopping");
                Err(e)
            }
            Err(e) => {
                let message = format!("{}{}", ERROR_MESSAGE_PREFIX, e);
                if let Err(send_err) = self
                    .notifier
                    .notify(&mut state.notifications, Channel::Error, &message)
                    .await
                {
                    tracing::error!(error = %send_err, "Failed to report error to chat");
                }
                tracing::error!(error = %e, "Poll cycle failed, stopping");
                Err(e)
            }
        }
    }
}
