use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    core::chemistry::Chemistry,
    error::ValidationError,
    prelude::*,
    quantity::{
        electric::{Amperes, Volts},
        energy::WattHours,
        time::Hours,
    },
};

/// User-assigned cell number, `1..=8`.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellNumber(u8);

impl CellNumber {
    pub const MAX: u8 = 8;

    /// All valid cell numbers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::MAX).map(Self)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot index.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for CellNumber {
    type Error = ValidationError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if (1..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ValidationError::CellNumberOutOfRange(number))
        }
    }
}

impl FromStr for CellNumber {
    type Err = Error;

    fn from_str(number: &str) -> Result<Self, Self::Err> {
        let number: u8 = number.parse().with_context(|| format!("`{number}` is not a cell number"))?;
        Ok(Self::try_from(number)?)
    }
}

impl From<CellNumber> for u8 {
    fn from(number: CellNumber) -> Self {
        number.0
    }
}

impl Display for CellNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Single cell as configured by the user.
///
/// A cell without chemistry, or with non-positive current, is kept in the form
/// but never reaches the derivation model.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
pub struct CellConfig {
    pub number: CellNumber,

    pub chemistry: Option<Chemistry>,

    #[serde(default)]
    #[builder(default)]
    pub current: Amperes,
}

impl CellConfig {
    /// Chemistry and current if the cell is ready to be derived.
    #[must_use]
    pub fn ready(&self) -> Option<(Chemistry, Amperes)> {
        // NaN is not positive either:
        self.chemistry.filter(|_| self.current.0 > 0.0).map(|chemistry| (chemistry, self.current))
    }

    /// Nominal voltage and capacity, shown while the cell is being configured.
    #[must_use]
    pub fn preview(&self) -> Option<(Volts, WattHours)> {
        self.ready().map(|(chemistry, current)| {
            let voltage = chemistry.nominal_voltage();
            (voltage, (voltage * current * Hours::ONE).round_to(2))
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_cell_number_range() {
        assert_eq!(CellNumber::try_from(0), Err(ValidationError::CellNumberOutOfRange(0)));
        assert_eq!(CellNumber::try_from(1).unwrap().get(), 1);
        assert_eq!(CellNumber::try_from(8).unwrap().index(), 7);
        assert_eq!(CellNumber::try_from(9), Err(ValidationError::CellNumberOutOfRange(9)));
        assert_eq!(CellNumber::all().count(), 8);
    }

    #[test]
    fn test_cell_number_from_str() {
        assert_eq!("5".parse::<CellNumber>().unwrap().get(), 5);
        assert!("0".parse::<CellNumber>().is_err());
        assert!("one".parse::<CellNumber>().is_err());
    }

    #[test]
    fn test_ready() {
        let number = CellNumber::try_from(1).unwrap();
        let config = CellConfig::builder().number(number).chemistry(Chemistry::Lfp).build();
        assert_eq!(config.ready(), None, "zero current");

        let config = CellConfig::builder().number(number).current(Amperes(3.0)).build();
        assert_eq!(config.ready(), None, "no chemistry");

        let config = CellConfig::builder()
            .number(number)
            .chemistry(Chemistry::Mnc)
            .current(Amperes(f64::NAN))
            .build();
        assert_eq!(config.ready(), None, "NaN current");

        let config = CellConfig::builder()
            .number(number)
            .chemistry(Chemistry::Mnc)
            .current(Amperes(3.0))
            .build();
        assert_eq!(config.ready(), Some((Chemistry::Mnc, Amperes(3.0))));
    }

    #[test]
    fn test_preview() {
        let config = CellConfig::builder()
            .number(CellNumber::try_from(2).unwrap())
            .chemistry(Chemistry::Lfp)
            .current(Amperes(10.0))
            .build();
        let (voltage, capacity) = config.preview().unwrap();
        assert_eq!(voltage, Volts(3.2));
        assert_abs_diff_eq!(capacity.0, 32.0);
    }

    #[test]
    fn test_deserialize() {
        // language=toml
        let config: CellConfig = toml::from_str("number = 3\nchemistry = \"other\"").unwrap();
        assert_eq!(config.number.get(), 3);
        assert_eq!(config.chemistry, Some(Chemistry::Other));
        assert_eq!(config.current, Amperes::ZERO);

        assert!(toml::from_str::<CellConfig>("number = 9").is_err());
    }
}
