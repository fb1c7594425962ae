use thiserror::Error;

use crate::{core::cell::CellNumber, form::CellForm, quantity::electric::Amperes};

/// Invalid user input or a request the model cannot serve.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("no readings to aggregate")]
    EmptyReadings,

    #[error("please configure at least one cell with a chemistry and a positive current")]
    NoCellsConfigured,

    #[error("cell {0} is configured more than once")]
    DuplicateCell(CellNumber),

    #[error("cell number {0} is out of range 1..={max}", max = CellNumber::MAX)]
    CellNumberOutOfRange(u8),

    #[error("number of cells {0} is out of range 1..={max}", max = CellNumber::MAX)]
    CellCountOutOfRange(usize),

    #[error(
        "current {0} is out of range {min}..={max}",
        min = CellForm::CURRENT_MIN,
        max = CellForm::CURRENT_MAX
    )]
    CurrentOutOfRange(Amperes),

    #[error("temperature sequence must not be empty")]
    EmptyTemperatureSequence,
}
