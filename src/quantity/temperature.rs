use std::ops::RangeInclusive;

quantity!(Celsius, suffix: "°C", precision: 1);

impl Celsius {
    /// Bounds of the synthetic cell temperature.
    pub const SYNTHETIC_RANGE: RangeInclusive<f64> = 25.0..=40.0;

    pub fn is_synthetic(self) -> bool {
        Self::SYNTHETIC_RANGE.contains(&self.0)
    }
}
