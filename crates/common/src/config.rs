use std::time::Duration;

use crate::error::PollError;

const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_RETRY_TIME_SECS: u64 = 600;

/// Secrets needed to talk to the status API and the chat transport.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Token sent as `Authorization: OAuth <token>` to the status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Destination chat for every notification
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Check that every credential is present and non-blank.
    ///
    /// All missing names are reported in a single `Configuration` error.
    pub fn validate(&self) -> Result<(), PollError> {
        let missing: Vec<&str> = [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PollError::Configuration(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )))
        }
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &redact(&self.practicum_token))
            .field("telegram_token", &redact(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "<unset>" } else { "<redacted>" }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,

    /// Homework status endpoint
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL (overridable for tests and proxies)
    pub telegram_api_url: String,

    /// Pause between poll cycles in seconds (default: 600)
    pub retry_time_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables, honoring a local `.env`.
    ///
    /// Credentials are not validated here; the supervisor does that on entry.
    pub fn from_env() -> Result<Self, PollError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PollError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let retry_time_secs = match lookup("RETRY_TIME_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                PollError::Configuration("RETRY_TIME_SECS must be a valid u64".to_string())
            })?,
            None => DEFAULT_RETRY_TIME_SECS,
        };

        Ok(Self {
            credentials: Credentials {
                practicum_token: lookup("PRACTICUM_TOKEN").unwrap_or_default(),
                telegram_token: lookup("TELEGRAM_TOKEN").unwrap_or_default(),
                telegram_chat_id: lookup("TELEGRAM_CHAT_ID").unwrap_or_default(),
            },
            practicum_endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_time_secs,
        })
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_time_secs)
    }
}
