use std::{
    io::{Write, stdout},
    path::PathBuf,
};

use clap::Parser;

use crate::{
    cli::{cells::CellsArgs, temperature_source},
    export::ExportFormat,
    prelude::*,
    session::SessionResultSet,
    tables::write_report,
};

#[derive(Parser)]
pub struct GenerateArgs {
    #[clap(flatten)]
    cells: CellsArgs,

    /// Seed for the synthetic temperatures, for reproducible runs.
    #[clap(long, env = "TEMPERATURE_SEED")]
    seed: Option<u64>,

    /// What to print to the standard output.
    #[clap(long, default_value = "table")]
    output: OutputFormat,

    /// Also write the readings as CSV to this file.
    #[clap(long = "csv-path")]
    csv_path: Option<PathBuf>,

    /// Also write the readings as JSON to this file.
    #[clap(long = "json-path")]
    json_path: Option<PathBuf>,
}

impl GenerateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let form = self.cells.load_form()?;
        let mut session = SessionResultSet::default();
        session.generate(&form.configs(), &mut temperature_source(self.seed))?;

        let mut stdout = stdout().lock();
        match self.output {
            OutputFormat::Table => write_report(&mut stdout, session.readings())?,
            OutputFormat::Csv => write!(stdout, "{}", ExportFormat::Csv.encode(session.readings())?)?,
            OutputFormat::Json => {
                writeln!(stdout, "{}", ExportFormat::Json.encode(session.readings())?)?;
            }
        }

        if let Some(path) = &self.csv_path {
            ExportFormat::Csv.write_to(path, session.readings())?;
        }
        if let Some(path) = &self.json_path {
            ExportFormat::Json.write_to(path, session.readings())?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Overview, cell data, and breakdown tables.
    Table,

    Csv,

    Json,
}
