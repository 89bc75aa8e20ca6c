use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Select, Text};
use std::{fmt, io, path::PathBuf, process::ExitCode};
use weatherpro_core::{
    Config, CsvExporter, WeatherClient, WeatherstackClient, client_from_config,
};

use crate::{session::Session, view::ViewState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherpro", version, about = "Current weather with a comfort score and advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherstack API key in the config file.
    Configure,

    /// Show weather, score and recommendations for a location.
    Show {
        /// Location name; several words are joined, e.g. `show New York`.
        #[arg(required = true)]
        location: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Pick locations from the recent-city shortcuts or type them in.
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the config file location.
    ConfigPath,
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// Print the per-factor score breakdown.
    #[arg(long)]
    explain: bool,

    /// Write the CSV export here instead of the configured path.
    #[arg(long, value_name = "PATH", conflicts_with = "no_export")]
    export: Option<PathBuf>,

    /// Skip the CSV export.
    #[arg(long)]
    no_export: bool,
}

impl OutputArgs {
    fn exporter(&self, config: &Config) -> Option<CsvExporter> {
        if self.no_export {
            return None;
        }
        let path = self.export.clone().unwrap_or_else(|| config.export_path.clone());
        Some(CsvExporter::new(path))
    }
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure()?,
            Command::ConfigPath => println!("{}", Config::config_file_path()?.display()),
            Command::Show { location, output } => {
                let Some(session) = open_session(&config, &output) else {
                    return Ok(ExitCode::FAILURE);
                };
                let ok = session.search(&location.join(" "), &mut io::stdout()).await?;
                if !ok {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Command::Interactive { output } => {
                let Some(session) = open_session(&config, &output) else {
                    return Ok(ExitCode::FAILURE);
                };
                interactive(&session, &config.recent_cities).await?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Builds the client, or prints the error view when it cannot.
fn open_session(
    config: &Config,
    output: &OutputArgs,
) -> Option<Session<WeatherstackClient>> {
    match client_from_config(config) {
        Ok(client) => Some(Session::new(client, output.exporter(config), output.explain)),
        Err(err) => {
            tracing::error!(error = %err, "Cannot create weather client");
            println!("{}", ViewState::error(&err).render());
            None
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // File values only, so env overrides are not persisted.
    let mut config = Config::load_file()?;

    let api_key = Password::new("weatherstack API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    config.set_api_key(api_key.trim().to_string());

    let endpoint = Text::new("Endpoint:")
        .with_default(&config.endpoint)
        .prompt()
        .context("Failed to read endpoint")?;
    config.endpoint = endpoint.trim().to_string();

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuChoice {
    City(String),
    Other,
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::City(name) => f.write_str(name),
            MenuChoice::Other => f.write_str("Other location…"),
            MenuChoice::Quit => f.write_str("Quit"),
        }
    }
}

fn menu(recent: &[String]) -> Vec<MenuChoice> {
    recent
        .iter()
        .map(|city| MenuChoice::City(city.clone()))
        .chain([MenuChoice::Other, MenuChoice::Quit])
        .collect()
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

async fn interactive<C: WeatherClient>(
    session: &Session<C>,
    recent: &[String],
) -> anyhow::Result<()> {
    loop {
        println!("\n{}\n", ViewState::Main { recent }.render());

        let choice = match Select::new("Search weather for", menu(recent)).prompt() {
            Ok(choice) => choice,
            Err(err) if is_cancel(&err) => return Ok(()),
            Err(err) => return Err(err).context("Failed to read menu choice"),
        };

        let location = match choice {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::City(city) => city,
            MenuChoice::Other => match Text::new("Location:").prompt() {
                Ok(text) => text,
                // Esc goes back to the menu.
                Err(InquireError::OperationCanceled) => continue,
                Err(InquireError::OperationInterrupted) => return Ok(()),
                Err(err) => return Err(err).context("Failed to read location"),
            },
        };

        println!();
        session.search(&location, &mut io::stdout()).await?;
    }
}
