//! Per-cell and per-chemistry breakdowns of a generation.

use average::Mean;
use itertools::Itertools;

use crate::{
    core::{
        chemistry::Chemistry,
        reading::{CellId, CellReading},
    },
    quantity::{electric::Volts, power::Watts},
};

/// Share of one cell in the total power draw.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct PowerShare {
    pub id: CellId,
    pub power: Watts,

    /// Fraction of the total, `0..=1`.
    pub share: f64,
}

/// Power of each reading and its fraction of the total, in reading order.
///
/// Shares are zero when the total power is zero.
pub fn power_shares(readings: &[CellReading]) -> Vec<PowerShare> {
    let total: Watts = readings.iter().map(CellReading::power).sum();
    readings
        .iter()
        .map(|reading| {
            let power = reading.power();
            let share = if total > Watts::ZERO { power / total } else { 0.0 };
            PowerShare { id: reading.id.clone(), power, share }
        })
        .collect()
}

/// Mean nominal voltage of each chemistry present, in chemistry order.
pub fn mean_voltage_by_chemistry(readings: &[CellReading]) -> Vec<(Chemistry, Volts)> {
    readings
        .iter()
        .into_group_map_by(|reading| reading.chemistry)
        .into_iter()
        .map(|(chemistry, group)| {
            let mean: Mean = group.into_iter().map(|reading| reading.nominal_voltage.0).collect();
            (chemistry, Volts(mean.mean()))
        })
        .sorted_by_key(|(chemistry, _)| *chemistry)
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::reading::tests::derive;

    #[test]
    fn test_power_shares() {
        let readings = [derive(1, Chemistry::Lfp, 10.0, 30.0), derive(2, Chemistry::Mnc, 5.0, 30.0)];
        let shares = power_shares(&readings);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].id.as_str(), "cell_1_lfp");
        assert_abs_diff_eq!(shares[0].power.0, 32.0);
        assert_abs_diff_eq!(shares[0].share, 32.0 / 50.0);
        assert_abs_diff_eq!(shares[1].share, 18.0 / 50.0);
    }

    #[test]
    fn test_power_shares_empty() {
        assert!(power_shares(&[]).is_empty());
    }

    #[test]
    fn test_mean_voltage_by_chemistry() {
        let readings = [
            derive(1, Chemistry::Other, 1.0, 30.0),
            derive(2, Chemistry::Lfp, 1.0, 30.0),
            derive(3, Chemistry::Lfp, 2.0, 30.0),
        ];
        assert_eq!(
            mean_voltage_by_chemistry(&readings),
            vec![(Chemistry::Lfp, Volts(3.2)), (Chemistry::Other, Volts(3.6))],
        );
    }
}
