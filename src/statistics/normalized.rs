//! Min-max normalized comparison of the cells.

use itertools::{Itertools, MinMaxResult};

use crate::core::reading::{CellId, CellReading};

/// Reading metrics scaled to `0..=100` across the generation.
///
/// A metric is [`None`] when all cells share the same value.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedReading {
    pub id: CellId,
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub capacity: Option<f64>,
    pub temperature: Option<f64>,
}

pub fn normalize(readings: &[CellReading]) -> Vec<NormalizedReading> {
    let voltage = Scale::fit(readings.iter().map(|reading| reading.nominal_voltage.0));
    let current = Scale::fit(readings.iter().map(|reading| reading.current.0));
    let capacity = Scale::fit(readings.iter().map(|reading| reading.capacity.0));
    let temperature = Scale::fit(readings.iter().map(|reading| reading.temperature.0));
    readings
        .iter()
        .map(|reading| NormalizedReading {
            id: reading.id.clone(),
            voltage: voltage.apply(reading.nominal_voltage.0),
            current: current.apply(reading.current.0),
            capacity: capacity.apply(reading.capacity.0),
            temperature: temperature.apply(reading.temperature.0),
        })
        .collect()
}

#[derive(Copy, Clone)]
struct Scale {
    min: f64,

    /// [`None`] for zero spread.
    range: Option<f64>,
}

impl Scale {
    fn fit(values: impl Iterator<Item = f64>) -> Self {
        match values.minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => Self { min: 0.0, range: None },
            MinMaxResult::OneElement(value) => Self { min: value, range: None },
            MinMaxResult::MinMax(min, max) => {
                let range = max - min;
                Self { min, range: (range > 0.0).then_some(range) }
            }
        }
    }

    fn apply(self, value: f64) -> Option<f64> {
        self.range.map(|range| (value - self.min) / range * 100.0)
    }
}
