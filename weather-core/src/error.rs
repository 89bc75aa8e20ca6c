use std::path::PathBuf;

use thiserror::Error;

/// Failures that can end a single search cycle.
///
/// None of these are fatal to the process; the presentation layer shows the
/// message and returns to a usable state.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The user submitted an empty location.
    #[error("Please enter a location!")]
    EmptyInput,

    /// No API key is available from the config file or the environment.
    #[error(
        "No API key configured.\n\
         Hint: run `weatherpro configure` or set WEATHERPRO_API_KEY."
    )]
    MissingApiKey,

    /// Network failure, non-2xx status or an undecodable body.
    #[error("Error fetching data: {0}")]
    Transport(String),

    /// The provider answered but reported a business error.
    #[error("Error fetching data: {0}")]
    Upstream(String),

    #[error("Failed to export weather data to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // the request URL carries the access key
        WeatherError::Transport(err.without_url().to_string())
    }
}

impl WeatherError {
    /// Short title for an error dialog or banner.
    pub fn title(&self) -> &'static str {
        match self {
            WeatherError::EmptyInput => "Input Error",
            WeatherError::MissingApiKey => "Configuration Error",
            WeatherError::Transport(_) | WeatherError::Upstream(_) => "Error",
            WeatherError::Export { .. } => "Export Error",
        }
    }
}
