//! Weather score: a bounded 0..=100 favourability rating.
//!
//! Each factor is an ordered ladder of `(predicate, delta)` tiers. Within a
//! ladder the first matching tier wins; ladders of different factors are
//! applied independently and summed onto [`BASE_SCORE`].

use crate::model::WeatherRecord;

pub const BASE_SCORE: i32 = 100;

/// Condition words that count as precipitation or storms.
pub const BAD_WEATHER: &[&str] = &["rain", "snow", "thunder", "shower", "drizzle", "sleet", "blizzard"];

/// One rung of a first-match threshold ladder.
pub struct Tier<T: ?Sized> {
    pub applies: fn(&T) -> bool,
    pub delta: i32,
}

/// Temperature in °C. Only 10 <= t < 15 falls through with no change.
pub const TEMPERATURE_TIERS: &[Tier<f64>] = &[
    Tier { applies: |&t| t < 0.0 || t > 35.0, delta: -40 },
    Tier { applies: |&t| t < 5.0 || t > 30.0, delta: -30 },
    Tier { applies: |&t| t < 10.0 || t > 25.0, delta: -15 },
    Tier { applies: |&t| (15.0..=25.0).contains(&t), delta: 10 },
];

/// Lower-cased condition description.
pub const CONDITION_TIERS: &[Tier<str>] = &[
    Tier { applies: |d| BAD_WEATHER.iter().any(|w| d.contains(*w)), delta: -30 },
    Tier { applies: |d| d.contains("fog") || d.contains("haze"), delta: -20 },
    Tier { applies: |d| d.contains("cloud"), delta: -5 },
];

/// Wind speed in km/h.
pub const WIND_TIERS: &[Tier<f64>] = &[
    Tier { applies: |&w| w > 40.0, delta: -30 },
    Tier { applies: |&w| w > 30.0, delta: -20 },
    Tier { applies: |&w| w > 20.0, delta: -10 },
];

pub const UV_TIERS: &[Tier<f64>] = &[
    Tier { applies: |&uv| uv >= 8.0, delta: -15 },
    Tier { applies: |&uv| uv >= 6.0, delta: -5 },
];

/// Relative humidity in percent.
pub const HUMIDITY_TIERS: &[Tier<u8>] = &[Tier { applies: |&h| h > 80 || h < 30, delta: -10 }];

/// Pressure in millibars.
pub const PRESSURE_TIERS: &[Tier<f64>] = &[
    Tier { applies: |&p| p < 990.0 || p > 1030.0, delta: -15 },
    Tier { applies: |&p| p < 1000.0 || p > 1020.0, delta: -5 },
];

/// Delta of the first tier whose predicate holds, or 0.
pub fn first_match<T: ?Sized>(ladder: &[Tier<T>], value: &T) -> i32 {
    ladder.iter().find(|tier| (tier.applies)(value)).map_or(0, |tier| tier.delta)
}

fn optional_delta<T>(ladder: &[Tier<T>], value: Option<T>) -> i32 {
    value.map_or(0, |v| first_match(ladder, &v))
}

/// Per-factor contributions to the score. Absent fields contribute 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub temperature: i32,
    pub condition: i32,
    pub wind: i32,
    pub uv: i32,
    pub humidity: i32,
    pub pressure: i32,
}

impl ScoreBreakdown {
    /// Unclamped sum including the base score.
    pub fn raw(&self) -> i32 {
        BASE_SCORE
            + self.temperature
            + self.condition
            + self.wind
            + self.uv
            + self.humidity
            + self.pressure
    }

    pub fn total(&self) -> u8 {
        // clamp guarantees the value fits
        self.raw().clamp(0, 100) as u8
    }

    /// `(factor name, delta)` pairs in evaluation order.
    pub fn factors(&self) -> [(&'static str, i32); 6] {
        [
            ("temperature", self.temperature),
            ("condition", self.condition),
            ("wind", self.wind),
            ("uv", self.uv),
            ("humidity", self.humidity),
            ("pressure", self.pressure),
        ]
    }
}

pub fn breakdown(record: &WeatherRecord) -> ScoreBreakdown {
    ScoreBreakdown {
        temperature: optional_delta(TEMPERATURE_TIERS, record.temperature),
        condition: first_match(CONDITION_TIERS, record.condition().as_str()),
        wind: optional_delta(WIND_TIERS, record.wind_speed),
        uv: optional_delta(UV_TIERS, record.uv_index),
        humidity: optional_delta(HUMIDITY_TIERS, record.humidity),
        pressure: optional_delta(PRESSURE_TIERS, record.pressure),
    }
}

pub fn score(record: &WeatherRecord) -> u8 {
    breakdown(record).total()
}

/// Coarse rating used to colour the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warning,
    Bad,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            ScoreBand::Good
        } else if score >= 40 {
            ScoreBand::Warning
        } else {
            ScoreBand::Bad
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Warning => "fair",
            ScoreBand::Bad => "poor",
        }
    }
}
