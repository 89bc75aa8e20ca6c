use chrono::Utc;

use crate::{LocationQuery, Report, WeatherClient, WeatherError, normalize::normalize};

/// One search cycle: validate, fetch, normalize, analyze.
#[derive(Debug)]
pub struct WeatherService<C> {
    client: C,
}

impl<C: WeatherClient> WeatherService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn search(&self, location: &str) -> Result<Report, WeatherError> {
        let query = LocationQuery::new(location)?;

        let payload = self.client.fetch(&query).await.inspect_err(|err| {
            tracing::warn!(query = %query, error = %err, "Weather fetch failed");
        })?;

        let record = normalize(&payload).inspect_err(|err| {
            tracing::warn!(query = %query, error = %err, "Provider reported an error");
        })?;

        let report = Report::analyze(record, Utc::now());
        tracing::info!(
            city = %report.record.city,
            score = report.score,
            advisories = report.advisories.len(),
            "Weather search completed"
        );

        Ok(report)
    }
}
