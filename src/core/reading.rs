use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::{
        cell::CellNumber,
        chemistry::Chemistry,
        source::TemperatureSource,
        temperature::TemperatureStatus,
    },
    prelude::*,
    quantity::{
        electric::{Amperes, Volts},
        energy::WattHours,
        power::Watts,
        temperature::Celsius,
        time::Hours,
    },
};

/// Reading key, unique within one generation: `cell_<number>_<chemistry code>`.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    pub fn new(number: CellNumber, chemistry: Chemistry) -> Self {
        Self(format!("cell_{number}_{}", chemistry.code()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derived record of one cell.
///
/// Everything but the temperature follows from the chemistry and the current.
/// Field order is the export column order.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellReading {
    pub id: CellId,

    pub chemistry: Chemistry,

    #[serde(rename = "voltage_nominal")]
    pub nominal_voltage: Volts,

    #[serde(rename = "current_amps")]
    pub current: Amperes,

    #[serde(rename = "temperature_c")]
    pub temperature: Celsius,

    #[serde(rename = "capacity_wh")]
    pub capacity: WattHours,

    #[serde(rename = "voltage_max")]
    pub max_voltage: Volts,

    #[serde(rename = "voltage_min")]
    pub min_voltage: Volts,
}

impl CellReading {
    /// Derive the reading consuming exactly one temperature draw.
    ///
    /// The caller filters out cells without chemistry or with non-positive current;
    /// the current is taken as is, without any upper bound.
    pub fn derive(
        number: CellNumber,
        chemistry: Chemistry,
        current: Amperes,
        temperatures: &mut impl TemperatureSource,
    ) -> Self {
        let nominal_voltage = chemistry.nominal_voltage();
        let reading = Self {
            id: CellId::new(number, chemistry),
            chemistry,
            nominal_voltage,
            current,
            temperature: temperatures.draw().round_to(1),
            capacity: (nominal_voltage * current * Hours::ONE).round_to(2),
            max_voltage: chemistry.max_voltage(),
            min_voltage: chemistry.min_voltage(),
        };
        debug!(
            id = %reading.id,
            capacity = ?reading.capacity,
            temperature = ?reading.temperature,
            "derived",
        );
        reading
    }

    /// Power draw at the nominal voltage.
    pub fn power(&self) -> Watts {
        self.nominal_voltage * self.current
    }

    pub fn temperature_status(&self) -> TemperatureStatus {
        TemperatureStatus::classify(self.temperature)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{core::source::Sequence, quantity::round_to};

    pub fn derive(number: u8, chemistry: Chemistry, current: f64, temperature: f64) -> CellReading {
        let mut temperatures = Sequence::new([Celsius(temperature)]).unwrap();
        CellReading::derive(
            CellNumber::try_from(number).unwrap(),
            chemistry,
            Amperes(current),
            &mut temperatures,
        )
    }

    #[test]
    fn test_lfp() {
        let reading = derive(1, Chemistry::Lfp, 10.0, 30.0);
        assert_eq!(reading.id.as_str(), "cell_1_lfp");
        assert_eq!(reading.nominal_voltage, Volts(3.2));
        assert_eq!(reading.min_voltage, Volts(2.8));
        assert_eq!(reading.max_voltage, Volts(4.0));
        assert_abs_diff_eq!(reading.capacity.0, 32.0);
        assert_abs_diff_eq!(reading.power().0, 32.0);
    }

    #[test]
    fn test_mnc() {
        let reading = derive(2, Chemistry::Mnc, 5.0, 30.0);
        assert_eq!(reading.id.as_str(), "cell_2_mnc");
        assert_eq!(reading.nominal_voltage, Volts(3.6));
        assert_eq!(reading.min_voltage, Volts(3.2));
        assert_eq!(reading.max_voltage, Volts(3.4));
        assert_abs_diff_eq!(reading.capacity.0, 18.0);
    }

    #[test]
    fn test_other() {
        let reading = derive(3, Chemistry::Other, 2.5, 30.0);
        assert_eq!(reading.id.as_str(), "cell_3_other");
        assert_eq!(reading.nominal_voltage, Volts(3.6));
        assert_eq!(reading.min_voltage, Volts(3.2));
        assert_eq!(reading.max_voltage, Volts(4.0));
        assert_abs_diff_eq!(reading.capacity.0, 9.0);
    }

    #[test]
    fn test_temperature_is_rounded() {
        let reading = derive(4, Chemistry::Lfp, 1.0, 36.44);
        assert_eq!(reading.temperature, Celsius(36.4));
        assert_eq!(reading.temperature_status(), TemperatureStatus::Warning);
    }

    #[test]
    fn test_unbounded_current() {
        let reading = derive(5, Chemistry::Mnc, 1_000.0, 30.0);
        assert_abs_diff_eq!(reading.capacity.0, 3_600.0);
    }

    fn chemistry() -> impl Strategy<Value = Chemistry> {
        prop_oneof![Just(Chemistry::Lfp), Just(Chemistry::Mnc), Just(Chemistry::Other)]
    }

    proptest! {
        #[test]
        fn voltages_depend_on_chemistry_only(
            chemistry in chemistry(),
            current_1 in 0.1..100.0_f64,
            current_2 in 0.1..100.0_f64,
        ) {
            let first = derive(1, chemistry, current_1, 30.0);
            let second = derive(1, chemistry, current_2, 30.0);
            prop_assert_eq!(first.nominal_voltage, second.nominal_voltage);
            prop_assert_eq!(first.min_voltage, second.min_voltage);
            prop_assert_eq!(first.max_voltage, second.max_voltage);
        }

        #[test]
        fn capacity_is_rounded_product(chemistry in chemistry(), current in 0.1..1_000.0_f64) {
            let reading = derive(1, chemistry, current, 30.0);
            prop_assert_eq!(reading.capacity.0, round_to(reading.nominal_voltage.0 * current, 2));
        }

        #[test]
        fn temperature_is_bounded(seed in any::<u64>(), chemistry in chemistry()) {
            let mut rng = fastrand::Rng::with_seed(seed);
            let reading = CellReading::derive(
                CellNumber::try_from(1).unwrap(),
                chemistry,
                Amperes(1.0),
                &mut rng,
            );
            prop_assert!(reading.temperature.is_synthetic());
        }
    }
}
