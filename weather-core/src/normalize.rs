use serde_json::Value;

use crate::{error::WeatherError, model::WeatherRecord};

const UNKNOWN: &str = "Unknown";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Build a [`WeatherRecord`] from a decoded weatherstack `current` payload.
///
/// A payload without a `current` section is an upstream error; its `error`
/// field becomes the message. Any other missing or mistyped field is read as
/// absent.
pub fn normalize(payload: &Value) -> Result<WeatherRecord, WeatherError> {
    let Some(current) = payload.get("current") else {
        return Err(WeatherError::Upstream(upstream_message(payload.get("error"))));
    };
    let location = payload.get("location");

    let description = current
        .get("weather_descriptions")
        .and_then(Value::as_array)
        .and_then(|descs| descs.first())
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_string();

    Ok(WeatherRecord {
        city: location
            .and_then(|l| l.get("name"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
            .to_string(),
        temperature: number(current, "temperature"),
        feelslike: number(current, "feelslike"),
        description,
        humidity: number(current, "humidity").and_then(percent),
        wind_speed: number(current, "wind_speed"),
        visibility: number(current, "visibility"),
        pressure: number(current, "pressure"),
        uv_index: number(current, "uv_index"),
        local_time: location
            .and_then(|l| l.get("localtime"))
            .and_then(Value::as_str)
            .map(str::to_string),
        is_day: current.get("is_day").and_then(Value::as_str) == Some("yes"),
    })
}

/// Numeric field, accepting numbers sent as strings.
fn number(section: &Value, key: &str) -> Option<f64> {
    let value = match section.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

/// Whole percent. weatherstack sends integers, so rounding only affects
/// non-conforming payloads; the humidity tier then sees the rounded value.
fn percent(value: f64) -> Option<u8> {
    let rounded = value.round();
    (0.0..=100.0).contains(&rounded).then_some(rounded as u8)
}

/// weatherstack reports errors as `{code, type, info}`; other providers may
/// send a plain string.
fn upstream_message(error: Option<&Value>) -> String {
    match error {
        None | Some(Value::Null) => UNKNOWN_ERROR.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(obj)) => obj
            .get("info")
            .or_else(|| obj.get("type"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| Value::Object(obj.clone()).to_string()),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "request": { "type": "City", "query": "London, United Kingdom" },
            "location": { "name": "London", "country": "United Kingdom", "localtime": "2024-05-01 14:30" },
            "current": {
                "temperature": 18,
                "feelslike": 17,
                "weather_descriptions": ["Partly cloudy"],
                "humidity": 63,
                "wind_speed": 13,
                "visibility": 10,
                "pressure": 1016,
                "uv_index": 4,
                "is_day": "yes"
            }
        })
    }

    #[test]
    fn normalizes_complete_payload() {
        let record = normalize(&full_payload()).expect("valid payload");

        assert_eq!(record.city, "London");
        assert_eq!(record.temperature, Some(18.0));
        assert_eq!(record.feelslike, Some(17.0));
        assert_eq!(record.description, "Partly cloudy");
        assert_eq!(record.humidity, Some(63));
        assert_eq!(record.wind_speed, Some(13.0));
        assert_eq!(record.visibility, Some(10.0));
        assert_eq!(record.pressure, Some(1016.0));
        assert_eq!(record.uv_index, Some(4.0));
        assert_eq!(record.local_time.as_deref(), Some("2024-05-01 14:30"));
        assert!(record.is_day);
    }

    #[test]
    fn missing_fields_are_absent_not_zero() {
        let record = normalize(&json!({ "current": {} })).expect("current present");

        assert_eq!(record, WeatherRecord::default());
    }

    #[test]
    fn mistyped_fields_are_absent() {
        let payload = json!({
            "location": { "name": 42 },
            "current": {
                "temperature": "n/a",
                "humidity": 400,
                "wind_speed": null,
                "weather_descriptions": [],
                "is_day": true
            }
        });
        let record = normalize(&payload).expect("current present");

        assert_eq!(record.city, "Unknown");
        assert_eq!(record.temperature, None);
        assert_eq!(record.humidity, None);
        assert_eq!(record.wind_speed, None);
        assert_eq!(record.description, "Unknown");
        assert!(!record.is_day);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let payload = json!({ "current": { "temperature": " 21.5", "humidity": "49.6" } });
        let record = normalize(&payload).expect("current present");

        assert_eq!(record.temperature, Some(21.5));
        assert_eq!(record.humidity, Some(50));
    }

    #[test]
    fn fractional_humidity_is_rounded_before_scoring() {
        let just_over = normalize(&json!({ "current": { "humidity": 80.4 } })).expect("current present");
        let rounded_up = normalize(&json!({ "current": { "humidity": 80.6 } })).expect("current present");

        assert_eq!(just_over.humidity, Some(80));
        assert_eq!(crate::score::breakdown(&just_over).humidity, 0);
        assert_eq!(rounded_up.humidity, Some(81));
        assert_eq!(crate::score::breakdown(&rounded_up).humidity, -10);
    }

    #[test]
    fn is_day_only_accepts_literal_yes() {
        let night = normalize(&json!({ "current": { "is_day": "no" } })).expect("current present");
        let upper = normalize(&json!({ "current": { "is_day": "YES" } })).expect("current present");

        assert!(!night.is_day);
        assert!(!upper.is_day);
    }

    #[test]
    fn missing_current_surfaces_error_text() {
        let err = normalize(&json!({ "error": "Invalid location" })).unwrap_err();
        assert!(matches!(err, WeatherError::Upstream(ref msg) if msg == "Invalid location"));
    }

    #[test]
    fn missing_current_and_error_is_unknown_error() {
        let err = normalize(&json!({ "success": false })).unwrap_err();
        assert!(matches!(err, WeatherError::Upstream(ref msg) if msg == "Unknown error"));
    }

    #[test]
    fn weatherstack_error_object_uses_info() {
        let payload = json!({
            "success": false,
            "error": {
                "code": 615,
                "type": "request_failed",
                "info": "Your API request failed. Please try again or contact support."
            }
        });
        let err = normalize(&payload).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error fetching data: Your API request failed. Please try again or contact support."
        );
    }

    #[test]
    fn error_object_without_info_falls_back_to_type() {
        let payload = json!({ "error": { "code": 101, "type": "missing_access_key" } });
        let err = normalize(&payload).unwrap_err();

        assert!(matches!(err, WeatherError::Upstream(ref msg) if msg == "missing_access_key"));
    }

    #[test]
    fn non_object_payload_is_upstream_error() {
        let err = normalize(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, WeatherError::Upstream(ref msg) if msg == "Unknown error"));
    }
}
