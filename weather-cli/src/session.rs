use std::io::{self, Write};
use weatherpro_core::{CsvExporter, WeatherClient, WeatherService, breakdown};

use crate::view::ViewState;

/// Runs search → render → export cycles against one client.
///
/// Every failure is rendered as an error view; the session stays usable.
#[derive(Debug)]
pub struct Session<C> {
    service: WeatherService<C>,
    exporter: Option<CsvExporter>,
    explain: bool,
}

impl<C: WeatherClient> Session<C> {
    pub fn new(client: C, exporter: Option<CsvExporter>, explain: bool) -> Self {
        Self { service: WeatherService::new(client), exporter, explain }
    }

    /// Returns whether the search (and export, if enabled) succeeded.
    pub async fn search<W: Write>(&self, location: &str, out: &mut W) -> io::Result<bool> {
        let report = match self.service.search(location).await {
            Ok(report) => report,
            Err(err) => {
                writeln!(out, "{}", ViewState::error(&err).render())?;
                return Ok(false);
            }
        };

        let breakdown = self.explain.then(|| breakdown(&report.record));
        writeln!(out, "{}", ViewState::Result { report: &report, breakdown }.render())?;

        if let Some(exporter) = &self.exporter {
            if let Err(err) = exporter.export(&report.record, report.score) {
                tracing::error!(error = %err, "Export failed");
                writeln!(out, "{}", ViewState::error(&err).render())?;
                return Ok(false);
            }
            writeln!(out, "Saved to {}", exporter.path().display())?;
        }

        Ok(true)
    }
}
