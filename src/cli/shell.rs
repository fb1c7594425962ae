//! Interactive session that mirrors the dashboard: a cell form, generate and reset actions,
//! the report, and exports.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};

use crate::{
    cli::cells::CellsArgs,
    core::{cell::CellNumber, chemistry::Chemistry, source::TemperatureSource},
    export::ExportFormat,
    form::CellForm,
    prelude::*,
    quantity::electric::Amperes,
    session::SessionResultSet,
    tables::{build_chemistries_table, build_form_table, write_report},
};

#[derive(Parser)]
pub struct ShellArgs {
    /// Initial cells.
    #[clap(flatten)]
    pub cells: CellsArgs,

    /// Seed for the synthetic temperatures, for reproducible runs.
    #[clap(long, env = "TEMPERATURE_SEED")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Set the number of cells, 1 to 8.
    Cells { count: usize },

    /// Set the cell type, or clear it when omitted.
    Chemistry { cell: CellNumber, chemistry: Option<Chemistry> },

    /// Set the cell current in amperes, 0 to 100.
    Current { cell: CellNumber, current: Amperes },

    /// Show the cell settings.
    Form,

    /// Derive readings for the configured cells, replacing the previous ones.
    Generate,

    /// Clear the readings.
    Reset,

    /// Show the overview, the cell data, and the breakdowns.
    Show,

    /// Export the readings.
    Export { format: ExportFormat, path: Option<PathBuf> },

    /// List the supported cell types and their voltages.
    Chemistries,

    /// Leave the session.
    #[clap(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Form and readings of one interactive session.
#[must_use]
pub struct Shell<T> {
    form: CellForm,
    session: SessionResultSet,
    temperatures: T,
}

impl<T: TemperatureSource> Shell<T> {
    pub fn new(form: CellForm, temperatures: T) -> Self {
        Self { form, session: SessionResultSet::default(), temperatures }
    }

    pub const fn session(&self) -> &SessionResultSet {
        &self.session
    }

    /// Execute the commands line by line until the input ends or `quit`.
    ///
    /// Invalid commands are reported to the output and do not stop the session.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result {
        writeln!(output, "👋 Configure the cells, then `generate`. Type `help` for the commands.")?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let Some(words) = shlex::split(&line) else {
                writeln!(output, "❌ unbalanced quotes")?;
                continue;
            };
            if words.is_empty() {
                continue;
            }
            let action = match Line::try_parse_from(words) {
                Ok(line) => line.action,
                Err(error) => {
                    writeln!(output, "{}", error.render())?;
                    continue;
                }
            };
            match self.execute(action, &mut output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(error) => {
                    warn!("{error:#}");
                    writeln!(output, "❌ {error:#}")?;
                }
            }
        }
        output.flush()?;
        Ok(())
    }

    fn execute(&mut self, action: Action, output: &mut impl Write) -> Result<Flow> {
        match action {
            Action::Cells { count } => {
                self.form.set_cell_count(count)?;
                writeln!(output, "{}", build_form_table(&self.form.configs()))?;
            }
            Action::Chemistry { cell, chemistry } => {
                self.ensure_shown(cell)?;
                self.form.set_chemistry(cell, chemistry);
                self.preview(cell, output)?;
            }
            Action::Current { cell, current } => {
                self.ensure_shown(cell)?;
                self.form.set_current(cell, current)?;
                self.preview(cell, output)?;
            }
            Action::Form => {
                writeln!(output, "{}", build_form_table(&self.form.configs()))?;
            }
            Action::Generate => {
                let n_readings =
                    self.session.generate(&self.form.configs(), &mut self.temperatures)?;
                writeln!(output, "✅ Generated data for {n_readings} cells!")?;
            }
            Action::Reset => {
                self.session.reset();
                writeln!(output, "🔄 All data cleared!")?;
            }
            Action::Show => {
                if self.session.is_generated() {
                    write_report(&mut *output, self.session.readings())?;
                } else {
                    writeln!(output, "👋 Nothing generated yet, configure the cells and `generate`.")?;
                }
            }
            Action::Export { format, path } => {
                ensure!(self.session.is_generated(), "nothing to export, `generate` first");
                let path = path.unwrap_or_else(|| PathBuf::from(format.default_file_name()));
                format.write_to(&path, self.session.readings())?;
                writeln!(output, "📥 Exported to `{}`", path.display())?;
            }
            Action::Chemistries => {
                writeln!(output, "{}", build_chemistries_table())?;
            }
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn ensure_shown(&self, cell: CellNumber) -> Result {
        ensure!(
            cell.index() < self.form.n_cells(),
            "cell {cell} is not shown, raise `cells` first",
        );
        Ok(())
    }

    /// Show the voltage and capacity a ready cell would get.
    fn preview(&self, cell: CellNumber, output: &mut impl Write) -> Result {
        let config = self.form.configs()[cell.index()];
        if let Some((voltage, capacity)) = config.preview() {
            writeln!(output, "💡 Voltage: {voltage} | Capacity: {capacity}")?;
        }
        Ok(())
    }
}
