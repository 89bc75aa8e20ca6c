use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::{LocationQuery, WeatherError};

use super::WeatherClient;

pub const DEFAULT_ENDPOINT: &str = "http://api.weatherstack.com/current";

#[derive(Clone)]
pub struct WeatherstackClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

// Hand-written so the access key never ends up in logs.
impl std::fmt::Debug for WeatherstackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherstackClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WeatherstackClient {
    pub fn new(
        api_key: String,
        endpoint: String,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { api_key, endpoint, http: builder.build()? })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherClient for WeatherstackClient {
    async fn fetch(&self, query: &LocationQuery) -> Result<Value, WeatherError> {
        tracing::debug!(endpoint = %self.endpoint, query = %query, "Requesting current conditions");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("access_key", self.api_key.as_str()), ("query", query.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(status = %status, bytes = body.len(), "Received weatherstack response");

        decode_response(status, &body)
    }
}

/// Non-2xx statuses and undecodable bodies are transport errors; an upstream
/// error inside a 200 response is left for normalization.
fn decode_response(status: StatusCode, body: &str) -> Result<Value, WeatherError> {
    if !status.is_success() {
        return Err(WeatherError::Transport(format!(
            "weatherstack request failed with status {}: {}",
            status,
            truncate_body(body),
        )));
    }

    serde_json::from_str(body)
        .map_err(|err| WeatherError::Transport(format!("Failed to parse weatherstack JSON: {err}")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
