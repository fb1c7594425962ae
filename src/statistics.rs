pub mod breakdown;
pub mod normalized;

use std::fmt::{Display, Formatter};

use average::Mean;
use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::{
    core::{cell::CellNumber, reading::CellReading, temperature::TemperatureStatus},
    error::ValidationError,
    quantity::{electric::Amperes, energy::WattHours, temperature::Celsius},
};

/// Aggregate over all readings of one generation.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_capacity: WattHours,
    pub mean_capacity: WattHours,
    pub mean_temperature: Celsius,
    pub total_current: Amperes,
    pub mean_current: Amperes,

    /// Per-cell temperature statuses.
    pub statuses: StatusTally,
}

impl Summary {
    /// Every mean is taken over exactly [`Summary::count`] readings.
    pub fn aggregate(readings: &[CellReading]) -> Result<Self, ValidationError> {
        if readings.is_empty() {
            return Err(ValidationError::EmptyReadings);
        }

        let total_capacity: WattHours = readings.iter().map(|reading| reading.capacity).sum();
        let total_current: Amperes = readings.iter().map(|reading| reading.current).sum();
        let mean_capacity: Mean = readings.iter().map(|reading| reading.capacity.0).collect();
        let mean_temperature: Mean = readings.iter().map(|reading| reading.temperature.0).collect();
        let mean_current: Mean = readings.iter().map(|reading| reading.current.0).collect();

        Ok(Self {
            count: readings.len(),
            total_capacity,
            mean_capacity: WattHours(mean_capacity.mean()),
            mean_temperature: Celsius(mean_temperature.mean()),
            total_current,
            mean_current: Amperes(mean_current.mean()),
            statuses: readings.iter().map(CellReading::temperature_status).collect(),
        })
    }

    /// Status of the mean temperature.
    pub fn temperature_status(&self) -> TemperatureStatus {
        TemperatureStatus::classify(self.mean_temperature)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = self.temperature_status();
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .enforce_styling()
            .set_header(vec![
                Cell::new("Total cells"),
                Cell::new("Total capacity").set_alignment(CellAlignment::Right),
                Cell::new("Avg temperature").set_alignment(CellAlignment::Right),
                Cell::new("Total current").set_alignment(CellAlignment::Right),
                Cell::new("Cell temperatures"),
            ])
            .add_row(vec![
                Cell::new(self.count),
                Cell::new(self.total_capacity).set_alignment(CellAlignment::Right),
                Cell::new(self.mean_temperature)
                    .set_alignment(CellAlignment::Right)
                    .fg(status.color()),
                Cell::new(self.total_current).set_alignment(CellAlignment::Right),
                Cell::new(self.statuses),
            ])
            .add_row(vec![
                Cell::new(format!("{}/{} configured", self.count, CellNumber::MAX))
                    .add_attribute(Attribute::Dim),
                Cell::new(format!("Avg: {}", self.mean_capacity))
                    .set_alignment(CellAlignment::Right)
                    .add_attribute(Attribute::Dim),
                Cell::new(format!("{} {status}", status.marker()))
                    .set_alignment(CellAlignment::Right)
                    .fg(status.color()),
                Cell::new(format!("Avg: {}", self.mean_current))
                    .set_alignment(CellAlignment::Right)
                    .add_attribute(Attribute::Dim),
                Cell::new(""),
            ]);
        write!(f, "{table}")
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusTally {
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
}

impl Display for StatusTally {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            TemperatureStatus::Normal.marker(),
            self.normal,
            TemperatureStatus::Warning.marker(),
            self.warning,
            TemperatureStatus::Critical.marker(),
            self.critical,
        )
    }
}

impl FromIterator<TemperatureStatus> for StatusTally {
    fn from_iter<T: IntoIterator<Item = TemperatureStatus>>(statuses: T) -> Self {
        let mut tally = Self::default();
        for status in statuses {
            match status {
                TemperatureStatus::Normal => tally.normal += 1,
                TemperatureStatus::Warning => tally.warning += 1,
                TemperatureStatus::Critical => tally.critical += 1,
            }
        }
        tally
    }
}
