//! Entropy behind the synthetic cell temperature.

use crate::{error::ValidationError, quantity::temperature::Celsius};

/// Source of synthetic cell temperatures.
pub trait TemperatureSource {
    /// Draw the next temperature from [`Celsius::SYNTHETIC_RANGE`].
    fn draw(&mut self) -> Celsius;
}

/// Uniform draws from the pseudo-random generator, which may be seeded for reproducible runs.
impl TemperatureSource for fastrand::Rng {
    fn draw(&mut self) -> Celsius {
        let (low, high) = (*Celsius::SYNTHETIC_RANGE.start(), *Celsius::SYNTHETIC_RANGE.end());
        Celsius(self.f64().mul_add(high - low, low))
    }
}

/// Replays the given temperatures in a loop.
#[must_use]
pub struct Sequence {
    temperatures: Vec<Celsius>,
    position: usize,
}

impl Sequence {
    pub fn new(temperatures: impl IntoIterator<Item = Celsius>) -> Result<Self, ValidationError> {
        let temperatures: Vec<_> = temperatures.into_iter().collect();
        if temperatures.is_empty() {
            return Err(ValidationError::EmptyTemperatureSequence);
        }
        Ok(Self { temperatures, position: 0 })
    }
}

impl TemperatureSource for Sequence {
    fn draw(&mut self) -> Celsius {
        let temperature = self.temperatures[self.position];
        self.position = (self.position + 1) % self.temperatures.len();
        temperature
    }
}
