//! Telegram Bot API transport.
//!
//! Delivers plain-text messages with `sendMessage`. A message counts as
//! delivered only when the API answers 2xx with `"ok": true`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::transport::{Transport, TransportError};

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram transport backed by a shared `reqwest` client.
pub struct TelegramTransport {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl TelegramTransport {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token)
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TransportError> {
        // reqwest errors embed the request URL, which contains the bot token
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;
        let parsed: Option<BotApiResponse> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let description = parsed
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                description,
            });
        }

        match parsed {
            Some(BotApiResponse { ok: true, .. }) => {
                tracing::debug!(chat_id, "Telegram accepted message");
                Ok(())
            }
            Some(BotApiResponse { description, .. }) => Err(TransportError::Rejected(
                description.unwrap_or_else(|| "no description".to_string()),
            )),
            None => Err(TransportError::Rejected(format!(
                "unparsable response body: {}",
                body
            ))),
        }
    }
}
