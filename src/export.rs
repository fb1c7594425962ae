//! CSV and JSON encodings of the readings.

use std::{fmt::Write as _, fs, path::Path};

use crate::{core::reading::CellReading, prelude::*};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Csv => "battery_cells_data.csv",
            Self::Json => "battery_cells_data.json",
        }
    }

    pub fn encode(self, readings: &[CellReading]) -> Result<String> {
        match self {
            Self::Csv => Ok(to_csv(readings)),
            Self::Json => to_json(readings),
        }
    }

    #[instrument(skip(self, readings), fields(format = ?self, n_readings = readings.len()))]
    pub fn write_to(self, path: &Path, readings: &[CellReading]) -> Result {
        fs::write(path, self.encode(readings)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        info!("exported");
        Ok(())
    }
}

const CSV_HEADER: &str = "id,chemistry,voltage_nominal,current_amps,temperature_c,capacity_wh,voltage_max,voltage_min";

/// Header and one row per reading, without an index column.
///
/// Reals are written in their shortest round-trip form with at least one fractional digit.
#[must_use]
pub fn to_csv(readings: &[CellReading]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for reading in readings {
        // Writing into a `String` does not fail:
        let _ = writeln!(
            csv,
            "{},{},{:?},{:?},{:?},{:?},{:?},{:?}",
            reading.id,
            reading.chemistry,
            reading.nominal_voltage.0,
            reading.current.0,
            reading.temperature.0,
            reading.capacity.0,
            reading.max_voltage.0,
            reading.min_voltage.0,
        );
    }
    csv
}

/// Array of reading objects with 2-space indentation.
pub fn to_json(readings: &[CellReading]) -> Result<String> {
    serde_json::to_string_pretty(readings).context("failed to serialize the readings")
}
