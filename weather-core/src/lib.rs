//! Core library for the `weatherpro` CLI.
//!
//! This crate defines:
//! - The weather score and advisory rules
//! - Normalization of weatherstack payloads into [`WeatherRecord`]
//! - The provider abstraction, CSV export and on-disk configuration
//!
//! It is used by `weatherpro-cli`, but the scoring functions are pure and can
//! be reused by any other front end.

pub mod advisory;
pub mod config;
pub mod error;
pub mod export;
pub mod icon;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod score;
pub mod service;

pub use advisory::{Advisory, AdvisoryIcon, advise};
pub use config::Config;
pub use error::WeatherError;
pub use export::CsvExporter;
pub use icon::{IconTag, resolve_icon};
pub use model::{LocationQuery, Report, WeatherRecord};
pub use normalize::normalize;
pub use provider::{WeatherClient, client_from_config, weatherstack::WeatherstackClient};
pub use score::{ScoreBand, ScoreBreakdown, breakdown, score};
pub use service::WeatherService;
