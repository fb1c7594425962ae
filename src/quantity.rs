#[macro_use]
mod macros;

pub mod electric;
pub mod energy;
pub mod power;
pub mod temperature;
pub mod time;

/// Round half away from zero to the specified number of decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
