use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use homework_common::error::PollError;

/// Longest upstream error body kept in `UpstreamStatus`.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Source of homework status updates.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetch every status change since `from_date` (Unix seconds) as raw JSON.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, PollError>;
}

/// Client for the Practicum homework status endpoint.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, PollError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PollError::UpstreamUnavailable(Box::new(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PollError::UpstreamUnavailable(Box::new(e)))?;

        if status != StatusCode::OK {
            return Err(PollError::UpstreamStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| PollError::MalformedResponse(format!("response is not valid JSON: {}", e)))
    }
}
