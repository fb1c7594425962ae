use std::ops::Mul;

use crate::quantity::power::Watts;

quantity!(Volts, suffix: "V", precision: 1);
quantity!(Amperes, suffix: "A", precision: 1);

impl Mul<Amperes> for Volts {
    type Output = Watts;

    fn mul(self, current: Amperes) -> Self::Output {
        Watts(self.0 * current.0)
    }
}

impl Mul<Volts> for Amperes {
    type Output = Watts;

    fn mul(self, voltage: Volts) -> Self::Output {
        voltage * self
    }
}
