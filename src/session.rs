use std::collections::HashSet;

use crate::{
    core::{
        cell::CellConfig,
        reading::CellReading,
        source::TemperatureSource,
    },
    error::ValidationError,
    prelude::*,
    statistics::Summary,
};

/// Readings of the latest generation, owned by whoever drives the session.
///
/// The readings are only ever replaced or cleared as a whole.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct SessionResultSet {
    /// In cell configuration order; identifiers are unique.
    readings: Vec<CellReading>,

    is_generated: bool,
}

impl SessionResultSet {
    /// Derive readings for every ready cell and replace the previous generation.
    ///
    /// Nothing changes when no cell is ready or a cell number repeats.
    #[instrument(skip_all, fields(n_configs = configs.len()))]
    pub fn generate(
        &mut self,
        configs: &[CellConfig],
        temperatures: &mut impl TemperatureSource,
    ) -> Result<usize, ValidationError> {
        let mut numbers = HashSet::with_capacity(configs.len());
        let ready: Vec<_> = configs
            .iter()
            .filter_map(|config| config.ready().map(|ready| (config.number, ready)))
            .collect();
        if ready.is_empty() {
            return Err(ValidationError::NoCellsConfigured);
        }
        for (number, _) in &ready {
            if !numbers.insert(*number) {
                return Err(ValidationError::DuplicateCell(*number));
            }
        }

        let readings: Vec<_> = ready
            .into_iter()
            .map(|(number, (chemistry, current))| {
                CellReading::derive(number, chemistry, current, temperatures)
            })
            .collect();
        let n_readings = readings.len();
        *self = Self { readings, is_generated: true };
        info!(n_readings, "generated");
        Ok(n_readings)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        info!("cleared");
    }

    pub const fn is_generated(&self) -> bool {
        self.is_generated
    }

    pub fn readings(&self) -> &[CellReading] {
        &self.readings
    }

    pub fn summary(&self) -> Result<Summary, ValidationError> {
        Summary::aggregate(&self.readings)
    }
}
