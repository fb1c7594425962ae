use std::fmt::{Display, Formatter};

/// Share of a total, stored as a fraction and shown as a percentage with one decimal.
pub struct FormattedPercentage(pub f64);

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
