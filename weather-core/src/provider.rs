use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::{Config, LocationQuery, WeatherError, provider::weatherstack::WeatherstackClient};

pub mod weatherstack;

/// Source of raw current-conditions payloads.
///
/// Implementations only fetch and decode JSON; interpreting the payload is
/// left to [`crate::normalize::normalize`], so upstream business errors come
/// back as `Ok(payload)`.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn fetch(&self, query: &LocationQuery) -> Result<Value, WeatherError>;
}

/// Construct the weatherstack client from config.
pub fn client_from_config(config: &Config) -> Result<WeatherstackClient, WeatherError> {
    let api_key = config.api_key()?;
    WeatherstackClient::new(api_key.to_owned(), config.endpoint.clone(), config.timeout())
}
