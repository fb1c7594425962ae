mod cells;
mod generate;
mod shell;

use std::io::{BufWriter, stdin, stdout};

use clap::{Parser, Subcommand};

pub use self::shell::Shell;
use crate::{
    cli::{cells::CellsArgs, generate::GenerateArgs, shell::ShellArgs},
    prelude::*,
    tables::{build_chemistries_table, build_form_table},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Generate(args) => args.run(),
            Command::Preview(args) => {
                let form = args.load_form()?;
                println!("{}", build_form_table(&form.configs()));
                Ok(())
            }
            Command::Chemistries => {
                println!("{}", build_chemistries_table());
                Ok(())
            }
            Command::Shell(args) => {
                let mut shell = Shell::new(args.cells.load_form()?, temperature_source(args.seed));
                shell.run(stdin().lock(), BufWriter::new(stdout().lock()))
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive readings for the configured cells, then print and export them.
    #[clap(name = "generate")]
    Generate(Box<GenerateArgs>),

    /// Show voltage and capacity of the configured cells without generating readings.
    #[clap(name = "preview")]
    Preview(CellsArgs),

    /// List the supported cell types and their voltages.
    #[clap(name = "chemistries")]
    Chemistries,

    /// Interactive session: configure the cells, generate, reset, and export.
    #[clap(name = "shell")]
    Shell(Box<ShellArgs>),
}

/// Seeded generator for reproducible temperatures, otherwise seeded from the system entropy.
fn temperature_source(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, |seed| {
        info!(seed, "using a fixed temperature seed");
        fastrand::Rng::with_seed(seed)
    })
}
