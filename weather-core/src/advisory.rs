use crate::model::WeatherRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvisoryIcon {
    Umbrella,
    Coat,
    Water,
    Sunscreen,
    Scarf,
    Walk,
    Cycle,
    Beach,
    Ski,
}

impl AdvisoryIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryIcon::Umbrella => "umbrella",
            AdvisoryIcon::Coat => "coat",
            AdvisoryIcon::Water => "water",
            AdvisoryIcon::Sunscreen => "sunscreen",
            AdvisoryIcon::Scarf => "scarf",
            AdvisoryIcon::Walk => "walk",
            AdvisoryIcon::Cycle => "cycle",
            AdvisoryIcon::Beach => "beach",
            AdvisoryIcon::Ski => "ski",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            AdvisoryIcon::Umbrella => "☔",
            AdvisoryIcon::Coat => "🧥",
            AdvisoryIcon::Water => "💧",
            AdvisoryIcon::Sunscreen => "🧴",
            AdvisoryIcon::Scarf => "🧣",
            AdvisoryIcon::Walk => "🚶",
            AdvisoryIcon::Cycle => "🚴",
            AdvisoryIcon::Beach => "🏖️",
            AdvisoryIcon::Ski => "⛷️",
        }
    }
}

impl std::fmt::Display for AdvisoryIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short actionable suggestion derived from current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub icon: AdvisoryIcon,
    pub message: &'static str,
}

/// Fields the advisory rules look at, with the description already lower-cased.
struct Conditions {
    temp: Option<f64>,
    wind: Option<f64>,
    uv: Option<f64>,
    desc: String,
}

type Rule = (fn(&Conditions) -> bool, AdvisoryIcon, &'static str);

/// Evaluated independently, in order; each contributes at most one advisory.
const RULES: &[Rule] = &[
    (
        |c| c.desc.contains("rain") || c.desc.contains("shower"),
        AdvisoryIcon::Umbrella,
        "Bring an umbrella",
    ),
    (|c| c.temp.is_some_and(|t| t < 10.0), AdvisoryIcon::Coat, "Wear warm clothing"),
    (|c| c.temp.is_some_and(|t| t > 25.0), AdvisoryIcon::Water, "Stay hydrated"),
    (|c| c.uv.is_some_and(|uv| uv >= 6.0), AdvisoryIcon::Sunscreen, "Use sun protection"),
    (|c| c.wind.is_some_and(|w| w > 20.0), AdvisoryIcon::Scarf, "Windy — wear a scarf"),
    (
        |c| match (c.temp, c.wind) {
            (Some(t), Some(w)) => (15.0..=25.0).contains(&t) && w < 20.0 && !c.desc.contains("rain"),
            _ => false,
        },
        AdvisoryIcon::Walk,
        "Perfect for a walk",
    ),
    (
        |c| c.temp.is_some_and(|t| t > 20.0) && !c.desc.contains("rain"),
        AdvisoryIcon::Cycle,
        "Great for cycling",
    ),
    (
        |c| c.temp.is_some_and(|t| t > 22.0) && c.uv.is_some_and(|uv| uv < 8.0),
        AdvisoryIcon::Beach,
        "Beach weather!",
    ),
    (|c| c.temp.is_some_and(|t| t < 5.0), AdvisoryIcon::Ski, "Try winter sports"),
];

/// Advisories for a record, in rule order. Overlapping rules (walk, cycling,
/// beach) may all fire; nothing is deduplicated.
pub fn advise(record: &WeatherRecord) -> Vec<Advisory> {
    let conditions = Conditions {
        temp: record.temperature,
        wind: record.wind_speed,
        uv: record.uv_index,
        desc: record.condition(),
    };

    RULES
        .iter()
        .filter(|(applies, _, _)| applies(&conditions))
        .map(|&(_, icon, message)| Advisory { icon, message })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(temp: Option<f64>, desc: &str, wind: Option<f64>, uv: Option<f64>) -> WeatherRecord {
        WeatherRecord {
            temperature: temp,
            description: desc.to_string(),
            wind_speed: wind,
            uv_index: uv,
            ..WeatherRecord::default()
        }
    }

    fn messages(record: &WeatherRecord) -> Vec<&'static str> {
        advise(record).into_iter().map(|a| a.message).collect()
    }

    #[test]
    fn twenty_degrees_suggests_walk_only() {
        let msgs = messages(&record(Some(20.0), "clear", Some(10.0), Some(3.0)));

        assert_eq!(msgs, vec!["Perfect for a walk"]);
    }

    #[test]
    fn just_above_twenty_degrees_suggests_walk_and_cycling() {
        let msgs = messages(&record(Some(20.5), "clear", Some(10.0), Some(3.0)));

        assert_eq!(msgs, vec!["Perfect for a walk", "Great for cycling"]);
        assert!(!msgs.contains(&"Bring an umbrella"));
    }

    #[test]
    fn absent_temperature_skips_every_temperature_rule() {
        let advisories = advise(&record(None, "light rain shower", Some(30.0), Some(7.0)));
        let icons: Vec<_> = advisories.iter().map(|a| a.icon).collect();

        assert_eq!(icons, vec![AdvisoryIcon::Umbrella, AdvisoryIcon::Sunscreen, AdvisoryIcon::Scarf]);
    }

    #[test]
    fn absent_everything_yields_nothing() {
        assert!(advise(&WeatherRecord::default()).is_empty());
    }

    #[test]
    fn walk_requires_wind_to_be_present() {
        let msgs = messages(&record(Some(18.0), "sunny", None, None));
        assert!(!msgs.contains(&"Perfect for a walk"));
        assert!(msgs.is_empty());
    }

    #[test]
    fn hot_sunny_day_fires_overlapping_rules_in_order() {
        let advisories = advise(&record(Some(24.0), "Sunny", Some(5.0), Some(6.0)));
        let icons: Vec<_> = advisories.iter().map(|a| a.icon).collect();

        assert_eq!(
            icons,
            vec![AdvisoryIcon::Sunscreen, AdvisoryIcon::Walk, AdvisoryIcon::Cycle, AdvisoryIcon::Beach]
        );
    }

    #[test]
    fn freezing_day_suggests_coat_and_winter_sports() {
        let msgs = messages(&record(Some(-3.0), "Snow", Some(25.0), Some(1.0)));
        assert_eq!(msgs, vec!["Wear warm clothing", "Windy — wear a scarf", "Try winter sports"]);
    }

    #[test]
    fn rain_blocks_walk_and_cycling_but_shower_does_not() {
        let rain = messages(&record(Some(22.0), "Moderate Rain", Some(5.0), None));
        assert_eq!(rain, vec!["Bring an umbrella"]);

        let shower = messages(&record(Some(22.0), "Passing shower", Some(5.0), None));
        assert_eq!(shower, vec!["Bring an umbrella", "Perfect for a walk", "Great for cycling"]);
    }

    #[test]
    fn extreme_uv_blocks_beach() {
        let msgs = messages(&record(Some(30.0), "clear", Some(5.0), Some(9.0)));
        assert_eq!(msgs, vec!["Stay hydrated", "Use sun protection", "Great for cycling"]);
    }

    #[test]
    fn icon_tags_are_stable() {
        assert_eq!(AdvisoryIcon::Umbrella.to_string(), "umbrella");
        assert_eq!(AdvisoryIcon::Ski.as_str(), "ski");
    }
}
