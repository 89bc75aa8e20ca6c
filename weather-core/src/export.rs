use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{WeatherError, model::WeatherRecord};

pub const HEADER: [&str; 11] = [
    "City",
    "Temp (°C)",
    "Feels Like (°C)",
    "Condition",
    "Humidity (%)",
    "Wind (km/h)",
    "Visibility (km)",
    "Pressure (mb)",
    "UV Index",
    "Local Time",
    "Score",
];

/// Writes the latest search to a CSV file, replacing whatever was there.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file and write the header plus one row.
    pub fn export(&self, record: &WeatherRecord, score: u8) -> Result<(), WeatherError> {
        let export_err = |source| WeatherError::Export { path: self.path.clone(), source };

        let file = File::create(&self.path).map_err(|err| export_err(csv::Error::from(err)))?;
        write_csv(file, record, score).map_err(export_err)?;

        tracing::debug!(path = %self.path.display(), city = %record.city, "Exported weather data");
        Ok(())
    }
}

/// Header and a single data row. Absent values become empty cells.
pub fn write_csv<W: Write>(writer: W, record: &WeatherRecord, score: u8) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(HEADER)?;
    wtr.write_record([
        record.city.clone(),
        cell(record.temperature),
        cell(record.feelslike),
        record.description.clone(),
        cell(record.humidity),
        cell(record.wind_speed),
        cell(record.visibility),
        cell(record.pressure),
        cell(record.uv_index),
        record.local_time.clone().unwrap_or_default(),
        score.to_string(),
    ])?;
    wtr.flush()?;

    Ok(())
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
