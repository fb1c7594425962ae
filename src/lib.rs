//! Battery cell configuration, derived cell readings, summaries, and exports.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
mod fmt;
pub mod form;
pub mod prelude;
pub mod quantity;
pub mod session;
pub mod statistics;
pub mod tables;
