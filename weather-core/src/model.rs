use chrono::{DateTime, Utc};

use crate::{
    advisory::{Advisory, advise},
    error::WeatherError,
    icon::{IconTag, resolve_icon},
    score::{ScoreBand, score},
};

/// A validated, non-empty location string as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn new(raw: &str) -> Result<Self, WeatherError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WeatherError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized snapshot of one current-conditions response.
///
/// Numeric fields the provider omitted are `None`; they are never replaced by
/// a sentinel value.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city: String,
    pub temperature: Option<f64>,
    pub feelslike: Option<f64>,
    pub description: String,
    pub humidity: Option<u8>,
    pub wind_speed: Option<f64>,
    pub visibility: Option<f64>,
    pub pressure: Option<f64>,
    pub uv_index: Option<f64>,
    pub local_time: Option<String>,
    pub is_day: bool,
}

impl WeatherRecord {
    /// Lower-cased description used by every substring rule.
    pub fn condition(&self) -> String {
        self.description.to_lowercase()
    }
}

impl Default for WeatherRecord {
    fn default() -> Self {
        Self {
            city: "Unknown".to_string(),
            temperature: None,
            feelslike: None,
            description: "Unknown".to_string(),
            humidity: None,
            wind_speed: None,
            visibility: None,
            pressure: None,
            uv_index: None,
            local_time: None,
            is_day: false,
        }
    }
}

/// Everything one render of a successful search needs.
#[derive(Debug, Clone)]
pub struct Report {
    pub record: WeatherRecord,
    pub score: u8,
    pub band: ScoreBand,
    pub advisories: Vec<Advisory>,
    pub icon: IconTag,
    pub fetched_at: DateTime<Utc>,
}

impl Report {
    pub fn analyze(record: WeatherRecord, fetched_at: DateTime<Utc>) -> Self {
        let score = score(&record);
        let advisories = advise(&record);
        let icon = resolve_icon(&record.description);

        Self { band: ScoreBand::from_score(score), score, advisories, icon, record, fetched_at }
    }
}
