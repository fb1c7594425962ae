use std::io::Write;

use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};
use enumset::EnumSet;

use crate::{
    core::{
        cell::CellConfig,
        chemistry::Chemistry,
        reading::CellReading,
        temperature::TemperatureStatus,
    },
    fmt::FormattedPercentage,
    prelude::*,
    quantity::electric::Volts,
    statistics::{
        Summary,
        breakdown::{PowerShare, mean_voltage_by_chemistry, power_shares},
        normalized::{NormalizedReading, normalize},
    },
};

/// Overview, detailed cell data, and the breakdowns of one generation.
pub fn write_report(mut output: impl Write, readings: &[CellReading]) -> Result {
    let summary = Summary::aggregate(readings)?;
    writeln!(output, "📊 System overview\n{summary}")?;
    writeln!(output, "📈 Detailed cell data\n{}", build_readings_table(readings))?;
    writeln!(
        output,
        "🌡️ Warning from {}, critical above {}",
        TemperatureStatus::WARNING_THRESHOLD,
        TemperatureStatus::CRITICAL_THRESHOLD,
    )?;
    writeln!(output, "⚡ Power distribution\n{}", build_power_table(&power_shares(readings)))?;
    writeln!(
        output,
        "🔋 Voltage by type\n{}",
        build_voltage_by_chemistry_table(&mean_voltage_by_chemistry(readings)),
    )?;
    writeln!(
        output,
        "📈 Normalized comparison\n{}",
        build_normalized_table(&normalize(readings)),
    )?;
    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn right(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

pub fn build_readings_table(readings: &[CellReading]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Cell ID"),
        Cell::new("Type"),
        right("Voltage"),
        right("Current"),
        right("Temperature"),
        Cell::new("Temp status"),
        right("Capacity"),
        right("Max voltage"),
        right("Min voltage"),
    ]);
    for reading in readings {
        let status = reading.temperature_status();
        table.add_row(vec![
            Cell::new(&reading.id),
            Cell::new(reading.chemistry).fg(reading.chemistry.color()),
            right(reading.nominal_voltage),
            right(reading.current),
            right(reading.temperature).fg(status.color()),
            Cell::new(format!("{} {status}", status.marker())).fg(status.color()),
            right(reading.capacity),
            right(reading.max_voltage).add_attribute(Attribute::Dim),
            right(reading.min_voltage).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// Cell settings as entered, with the voltage and capacity preview of the ready ones.
pub fn build_form_table(configs: &[CellConfig]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        right("Cell"),
        Cell::new("Type"),
        right("Current"),
        right("Voltage"),
        right("Capacity"),
    ]);
    for config in configs {
        let chemistry = config.chemistry.map_or_else(
            || Cell::new("Select type…").add_attribute(Attribute::Dim),
            |chemistry| Cell::new(chemistry.description()).fg(chemistry.color()),
        );
        let (voltage, capacity) = config.preview().map_or_else(
            || (Cell::new("—"), Cell::new("—")),
            |(voltage, capacity)| (Cell::new(voltage), Cell::new(capacity)),
        );
        table.add_row(vec![
            right(config.number),
            chemistry,
            right(config.current),
            voltage.set_alignment(CellAlignment::Right),
            capacity.set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_chemistries_table() -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Type"),
        Cell::new("Description"),
        right("Nominal"),
        right("Min"),
        right("Max"),
    ]);
    for chemistry in EnumSet::<Chemistry>::all() {
        table.add_row(vec![
            Cell::new(chemistry.code()).fg(chemistry.color()),
            Cell::new(chemistry.description()),
            right(chemistry.nominal_voltage()),
            right(chemistry.min_voltage()),
            right(chemistry.max_voltage()),
        ]);
    }
    table
}

pub fn build_power_table(shares: &[PowerShare]) -> Table {
    let mut table = new_table();
    table.set_header(vec![Cell::new("Cell ID"), right("Power"), right("Share")]);
    for share in shares {
        table.add_row(vec![
            Cell::new(&share.id),
            right(share.power),
            right(FormattedPercentage(share.share)),
        ]);
    }
    table
}

pub fn build_voltage_by_chemistry_table(voltages: &[(Chemistry, Volts)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![Cell::new("Type"), right("Avg voltage")]);
    for (chemistry, voltage) in voltages {
        table.add_row(vec![Cell::new(chemistry).fg(chemistry.color()), right(voltage)]);
    }
    table
}

pub fn build_normalized_table(normalized: &[NormalizedReading]) -> Table {
    fn score(value: Option<f64>) -> Cell {
        value.map_or_else(
            || right("—").add_attribute(Attribute::Dim),
            |value| right(format!("{value:.0}")),
        )
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Cell ID"),
        right("Voltage"),
        right("Current"),
        right("Capacity"),
        right("Temperature"),
    ]);
    for reading in normalized {
        table.add_row(vec![
            Cell::new(&reading.id),
            score(reading.voltage),
            score(reading.current),
            score(reading.capacity),
            score(reading.temperature),
        ]);
    }
    table
}
