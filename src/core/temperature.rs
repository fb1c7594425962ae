use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::quantity::temperature::Celsius;

/// Qualitative cell temperature.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub enum TemperatureStatus {
    Normal,
    Warning,
    Critical,
}

impl TemperatureStatus {
    /// Lowest warning temperature.
    pub const WARNING_THRESHOLD: Celsius = Celsius(35.0);

    /// Highest temperature that is still a warning.
    pub const CRITICAL_THRESHOLD: Celsius = Celsius(38.0);

    /// Total over `f64`: anything that is neither below 35 °C nor within 35..=38 °C,
    /// including NaN, is critical.
    pub fn classify(temperature: Celsius) -> Self {
        if temperature.0 < Self::WARNING_THRESHOLD.0 {
            Self::Normal
        } else if temperature.0 <= Self::CRITICAL_THRESHOLD.0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Normal => Color::Green,
            Self::Warning => Color::DarkYellow,
            Self::Critical => Color::Red,
        }
    }

    pub const fn marker(self) -> &'static str {
        match self {
            Self::Normal => "🟢",
            Self::Warning => "🟡",
            Self::Critical => "🔴",
        }
    }
}

impl Display for TemperatureStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(TemperatureStatus::classify(Celsius(34.99)), TemperatureStatus::Normal);
        assert_eq!(TemperatureStatus::classify(Celsius(35.0)), TemperatureStatus::Warning);
        assert_eq!(TemperatureStatus::classify(Celsius(38.0)), TemperatureStatus::Warning);
        assert_eq!(TemperatureStatus::classify(Celsius(38.01)), TemperatureStatus::Critical);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(TemperatureStatus::classify(Celsius(f64::NEG_INFINITY)), TemperatureStatus::Normal);
        assert_eq!(TemperatureStatus::classify(Celsius(f64::INFINITY)), TemperatureStatus::Critical);
        assert_eq!(TemperatureStatus::classify(Celsius(f64::NAN)), TemperatureStatus::Critical);
    }

    proptest! {
        #[test]
        fn classify_partitions_the_line(temperature in any::<f64>()) {
            let expected = if temperature < 35.0 {
                TemperatureStatus::Normal
            } else if (35.0..=38.0).contains(&temperature) {
                TemperatureStatus::Warning
            } else {
                TemperatureStatus::Critical
            };
            prop_assert_eq!(TemperatureStatus::classify(Celsius(temperature)), expected);
        }

        #[test]
        fn classify_is_monotonic(lower in -100.0..100.0_f64, delta in 0.0..50.0_f64) {
            let upper = lower + delta;
            prop_assert!(
                TemperatureStatus::classify(Celsius(lower)) <= TemperatureStatus::classify(Celsius(upper))
            );
        }
    }
}
