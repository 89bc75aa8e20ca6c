//! Screen rendering.
//!
//! Each [`ViewState`] renders to a plain string with no I/O so the CLI can
//! print it and tests can inspect it.

use chrono::Local;
use std::fmt::{Display, Write};
use weatherpro_core::{Report, ScoreBreakdown, WeatherError};

const RULE: &str = "────────────────────────────────────────";

#[derive(Debug)]
pub enum ViewState<'a> {
    /// Title plus the shortcut list.
    Main { recent: &'a [String] },

    /// A successful search; `breakdown` is shown when explaining the score.
    Result { report: &'a Report, breakdown: Option<ScoreBreakdown> },

    Error { title: &'static str, message: String },
}

impl ViewState<'_> {
    pub fn error(err: &WeatherError) -> Self {
        ViewState::Error { title: err.title(), message: err.to_string() }
    }

    pub fn render(&self) -> String {
        match self {
            ViewState::Main { recent } => render_main(recent),
            ViewState::Result { report, breakdown } => render_result(report, breakdown.as_ref()),
            ViewState::Error { title, message } => render_error(title, message),
        }
    }
}

fn render_main(recent: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Weather Forecast Pro");
    let _ = writeln!(out, "{RULE}");
    if recent.is_empty() {
        let _ = write!(out, "Type a location to search.");
    } else {
        let _ = write!(out, "Recent searches: {}", recent.join(" · "));
    }
    out
}

fn render_result(report: &Report, breakdown: Option<&ScoreBreakdown>) -> String {
    let record = &report.record;
    let mut out = String::new();

    let _ = writeln!(out, "Weather in {}", record.city);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{} {}", report.icon.glyph(), record.description);
    let _ = writeln!(
        out,
        "{}  (feels like {})",
        or_na(record.temperature, "°C"),
        or_na(record.feelslike, "°C")
    );
    let _ = writeln!(out, "Weather Score: {}/100 ({})", report.score, report.band.as_str());

    if let Some(b) = breakdown {
        for (factor, delta) in b.factors() {
            let _ = writeln!(out, "  {factor:<12} {delta:+}");
        }
        let _ = writeln!(out, "  {:<12} {} (clamped to {})", "raw", b.raw(), b.total());
    }

    let _ = writeln!(out);
    // Emoji with default emoji presentation only: each is one char, two columns wide.
    let details = [
        ("💧", "Humidity", or_na(record.humidity, "%")),
        ("💨", "Wind", or_na(record.wind_speed, " km/h")),
        ("👓", "Visibility", or_na(record.visibility, " km")),
        ("📊", "Pressure", or_na(record.pressure, " mb")),
        ("🌞", "UV Index", or_na(record.uv_index, "")),
        ("🕒", "Local Time", or_na(record.local_time.as_deref(), "")),
        ("🌗", "Daylight", (if record.is_day { "yes" } else { "no" }).to_string()),
    ];
    for (glyph, label, value) in details {
        let _ = writeln!(out, "{glyph} {label:<12} {value}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations");
    if report.advisories.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for advisory in &report.advisories {
        let _ = writeln!(out, "  {} {}", advisory.icon.glyph(), advisory.message);
    }

    let fetched = report.fetched_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    let _ = write!(out, "\nFetched at {fetched}");
    out
}

fn render_error(title: &str, message: &str) -> String {
    format!("✖ {title}\n{RULE}\n{message}")
}

fn or_na<T: Display>(value: Option<T>, unit: &str) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v}{unit}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use weatherpro_core::{WeatherRecord, breakdown};

    fn report(record: WeatherRecord) -> Report {
        Report::analyze(record, Utc::now())
    }

    fn london() -> WeatherRecord {
        WeatherRecord {
            city: "London".into(),
            temperature: Some(20.0),
            feelslike: Some(19.0),
            description: "Clear".into(),
            humidity: Some(50),
            wind_speed: Some(10.0),
            visibility: Some(10.0),
            pressure: Some(1013.0),
            uv_index: Some(3.0),
            local_time: Some("2024-05-01 14:30".into()),
            is_day: true,
        }
    }

    #[test]
    fn main_view_lists_shortcuts() {
        let recent = vec!["London".to_string(), "Paris".to_string()];
        let text = ViewState::Main { recent: &recent }.render();

        assert!(text.contains("Weather Forecast Pro"));
        assert!(text.contains("London · Paris"));
    }

    #[test]
    fn result_view_shows_record_score_and_advice() {
        let report = report(london());
        let text = ViewState::Result { report: &report, breakdown: None }.render();

        assert!(text.contains("Weather in London"));
        assert!(text.contains("☀️ Clear"));
        assert!(text.contains("20°C  (feels like 19°C)"));
        assert!(text.contains("Weather Score: 100/100 (good)"));
        assert!(text.contains("50%"));
        assert!(text.contains("1013 mb"));
        assert!(text.contains("2024-05-01 14:30"));
        assert!(text.contains("Perfect for a walk"));
        assert!(!text.contains("Great for cycling"));
        assert!(!text.contains("temperature  "));
    }

    #[test]
    fn detail_values_share_one_column() {
        let report = report(london());
        let text = ViewState::Result { report: &report, breakdown: None }.render();

        let expected = [
            ("Humidity", "50%"),
            ("Wind", "10 km/h"),
            ("Visibility", "10 km"),
            ("Pressure", "1013 mb"),
            ("UV Index", "3"),
            ("Local Time", "2024-05-01 14:30"),
            ("Daylight", "yes"),
        ];
        for (label, value) in expected {
            let line = text.lines().find(|l| l.contains(label)).expect("detail line present");

            assert!(!line.contains('\u{fe0f}'), "variation selector in {line:?}");
            assert_eq!(line.chars().nth(1), Some(' '), "glyph is one char in {line:?}");
            // glyph + space + 12-wide label + space
            assert_eq!(line.chars().skip(15).collect::<String>(), value);
        }
    }

    #[test]
    fn result_view_marks_absent_values() {
        let report = report(WeatherRecord::default());
        let text = ViewState::Result { report: &report, breakdown: None }.render();

        assert!(text.contains("n/a  (feels like n/a)"));
        assert!(text.contains("(none)"));
        assert!(text.contains("🌈 Unknown"));
    }

    #[test]
    fn explain_lists_every_factor() {
        let report = report(london());
        let b = breakdown(&report.record);
        let text = ViewState::Result { report: &report, breakdown: Some(b) }.render();

        assert!(text.contains("temperature  +10"));
        assert!(text.contains("pressure     +0"));
        assert!(text.contains("110 (clamped to 100)"));
    }

    #[test]
    fn error_view_carries_title_and_message() {
        let err = WeatherError::Upstream("Invalid location".into());
        let text = ViewState::error(&err).render();

        assert!(text.starts_with("✖ Error"));
        assert!(text.ends_with("Error fetching data: Invalid location"));
    }
}
