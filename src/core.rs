//! Cell derivation model: from a cell configuration to its reading.

pub mod cell;
pub mod chemistry;
pub mod reading;
pub mod source;
pub mod temperature;
