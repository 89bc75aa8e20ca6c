//! Binary crate for the `weatherpro` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive location prompts and API key setup
//! - Rendering the main, result and error screens

use clap::Parser;
use std::process::ExitCode;
use weatherpro_core::Config;

mod cli;
mod session;
mod telemetry;
mod view;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cmd = cli::Cli::parse();
    let config = Config::load()?;
    telemetry::init(&config.log_level)?;

    cmd.run(config).await
}
