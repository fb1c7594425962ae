use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::quantity::electric::Volts;

/// Battery cell chemistry.
#[derive(
    Debug,
    Hash,
    Ord,
    PartialOrd,
    clap::ValueEnum,
    enumset::EnumSetType,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all(serialize = "UPPERCASE", deserialize = "lowercase"))]
pub enum Chemistry {
    /// Lithium iron phosphate.
    #[serde(alias = "LFP")]
    Lfp,

    /// Manganese nickel cobalt.
    #[serde(alias = "MNC")]
    Mnc,

    /// Anything else, rated like MNC but with the wider upper voltage bound.
    #[serde(alias = "OTHER")]
    Other,
}

impl Chemistry {
    pub const fn nominal_voltage(self) -> Volts {
        match self {
            Self::Lfp => Volts(3.2),
            Self::Mnc | Self::Other => Volts(3.6),
        }
    }

    pub const fn max_voltage(self) -> Volts {
        match self {
            Self::Mnc => Volts(3.4),
            Self::Lfp | Self::Other => Volts(4.0),
        }
    }

    pub const fn min_voltage(self) -> Volts {
        match self {
            Self::Lfp => Volts(2.8),
            Self::Mnc | Self::Other => Volts(3.2),
        }
    }

    /// Lowercase code as used in cell identifiers and on the command line.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Lfp => "lfp",
            Self::Mnc => "mnc",
            Self::Other => "other",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Lfp => "LFP (Lithium Iron Phosphate)",
            Self::Mnc => "MNC (Manganese Nickel Cobalt)",
            Self::Other => "Other",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Lfp => Color::Green,
            Self::Mnc => Color::Blue,
            Self::Other => Color::Magenta,
        }
    }
}

impl Display for Chemistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lfp => write!(f, "LFP"),
            Self::Mnc => write!(f, "MNC"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}
