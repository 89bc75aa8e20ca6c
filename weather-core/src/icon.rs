/// Coarse pictographic category for a condition description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTag {
    Sunny,
    Rainy,
    Cloudy,
    Snowy,
    Stormy,
    Foggy,
    Rainbow,
}

impl IconTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconTag::Sunny => "sunny",
            IconTag::Rainy => "rainy",
            IconTag::Cloudy => "cloudy",
            IconTag::Snowy => "snowy",
            IconTag::Stormy => "stormy",
            IconTag::Foggy => "foggy",
            IconTag::Rainbow => "rainbow",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconTag::Sunny => "☀️",
            IconTag::Rainy => "🌧️",
            IconTag::Cloudy => "☁️",
            IconTag::Snowy => "❄️",
            IconTag::Stormy => "⚡",
            IconTag::Foggy => "🌫️",
            IconTag::Rainbow => "🌈",
        }
    }
}

impl std::fmt::Display for IconTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const ICON_KEYWORDS: &[(&[&str], IconTag)] = &[
    (&["sun", "clear"], IconTag::Sunny),
    (&["rain"], IconTag::Rainy),
    (&["cloud"], IconTag::Cloudy),
    (&["snow"], IconTag::Snowy),
    (&["thunder"], IconTag::Stormy),
    (&["fog", "haze"], IconTag::Foggy),
];

/// First keyword group found in the description wins; falls back to the rainbow.
pub fn resolve_icon(description: &str) -> IconTag {
    let desc = description.to_lowercase();

    ICON_KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| desc.contains(*w)))
        .map_or(IconTag::Rainbow, |&(_, tag)| tag)
}
