//! Cell configuration from the command line and the cells file.

use std::{path::PathBuf, str::FromStr};

use clap::{Parser, ValueEnum};
use itertools::Itertools;

use crate::{
    config::CellsFile,
    core::{
        cell::{CellConfig, CellNumber},
        chemistry::Chemistry,
    },
    error::ValidationError,
    form::CellForm,
    prelude::*,
    quantity::electric::Amperes,
};

#[derive(Parser)]
pub struct CellsArgs {
    /// Cell as `NUMBER=CHEMISTRY:CURRENT`, for example `1=lfp:10.0`. Repeat for more cells.
    #[clap(long = "cell", value_name = "NUMBER=CHEMISTRY:CURRENT")]
    cells: Vec<CellSpec>,

    /// TOML file with the `[[cells]]` tables. Cells given with `--cell` take precedence.
    #[clap(long = "cells-file", env = "CELLS_FILE")]
    cells_file: Option<PathBuf>,
}

impl CellsArgs {
    /// Build the form from the cells file and the command line.
    ///
    /// The form shows as many cells as the highest configured number,
    /// or the default count when nothing is configured. A number may appear once
    /// in the file and once on the command line, where the latter wins.
    pub fn load_form(&self) -> Result<CellForm> {
        let file = match &self.cells_file {
            Some(path) => CellsFile::read_from(path)?,
            None => CellsFile::default(),
        };
        let overrides: Vec<_> = self.cells.iter().map(|spec| spec.0).collect();
        ensure_unique(&file.cells).context("invalid cells file")?;
        ensure_unique(&overrides)?;

        let configs: Vec<_> = file.cells.iter().chain(&overrides).collect();
        let mut form = CellForm::default();
        if !configs.is_empty() {
            form.set_cell_count(1)?;
        }
        for config in configs {
            form.apply(config).with_context(|| format!("invalid cell {}", config.number))?;
        }
        Ok(form)
    }
}

fn ensure_unique(configs: &[CellConfig]) -> Result<(), ValidationError> {
    match configs.iter().map(|config| config.number).duplicates().next() {
        Some(number) => Err(ValidationError::DuplicateCell(number)),
        None => Ok(()),
    }
}

/// `NUMBER=CHEMISTRY:CURRENT`.
#[derive(Clone)]
struct CellSpec(CellConfig);

impl FromStr for CellSpec {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (number, rest) =
            spec.split_once('=').context("expected `NUMBER=CHEMISTRY:CURRENT`")?;
        let (chemistry, current) = rest.split_once(':').context("expected `CHEMISTRY:CURRENT`")?;
        let chemistry = Chemistry::from_str(chemistry, true)
            .map_err(|error| anyhow!("invalid cell type `{chemistry}`: {error}"))?;
        let current: Amperes =
            current.parse().with_context(|| format!("`{current}` is not a current"))?;
        Ok(Self(
            CellConfig::builder()
                .number(number.parse::<CellNumber>()?)
                .chemistry(chemistry)
                .current(current)
                .build(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec() -> Result {
        let spec: CellSpec = "3=MNC:5.5".parse()?;
        assert_eq!(spec.0.number.get(), 3);
        assert_eq!(spec.0.ready(), Some((Chemistry::Mnc, Amperes(5.5))));
        Ok(())
    }

    #[test]
    fn test_parse_invalid_spec() {
        assert!("3".parse::<CellSpec>().is_err());
        assert!("3=lfp".parse::<CellSpec>().is_err());
        assert!("3=lead:1".parse::<CellSpec>().is_err());
        assert!("3=lfp:lots".parse::<CellSpec>().is_err());
        assert!("0=lfp:1".parse::<CellSpec>().is_err());
    }

    #[test]
    fn test_load_form() -> Result {
        let args = CellsArgs::try_parse_from(["cells", "--cell", "2=lfp:1", "--cell", "5=other:3"])?;
        let form = args.load_form()?;
        assert_eq!(form.n_cells(), 5);
        let ready: Vec<_> = form.configs().iter().filter_map(CellConfig::ready).collect();
        assert_eq!(ready, [(Chemistry::Lfp, Amperes(1.0)), (Chemistry::Other, Amperes(3.0))]);
        Ok(())
    }

    #[test]
    fn test_load_form_empty() -> Result {
        let form = CellsArgs::try_parse_from(["cells"])?.load_form()?;
        assert_eq!(form.n_cells(), CellForm::DEFAULT_N_CELLS);
        Ok(())
    }

    #[test]
    fn test_load_form_current_out_of_range() -> Result {
        let args = CellsArgs::try_parse_from(["cells", "--cell", "1=lfp:150"])?;
        assert!(args.load_form().is_err());
        Ok(())
    }

    #[test]
    fn test_load_form_duplicate_cell() -> Result {
        let args = CellsArgs::try_parse_from(["cells", "--cell", "1=lfp:10", "--cell", "1=mnc:5"])?;
        let error = args.load_form().unwrap_err();
        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::DuplicateCell(CellNumber::try_from(1)?)),
        );
        Ok(())
    }

    #[test]
    fn test_load_form_overrides_file() -> Result {
        let path =
            std::env::temp_dir().join(format!("cell-manager-cells-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[[cells]]\nnumber = 1\nchemistry = \"lfp\"\ncurrent = 10.0\n\n\
             [[cells]]\nnumber = 2\nchemistry = \"other\"\ncurrent = 1.0\n",
        )?;
        let args = CellsArgs::try_parse_from([
            "cells",
            "--cells-file",
            path.to_str().context("non-UTF-8 temporary path")?,
            "--cell",
            "1=mnc:5",
        ])?;
        let form = args.load_form();
        std::fs::remove_file(&path)?;

        let ready: Vec<_> = form?.configs().iter().filter_map(CellConfig::ready).collect();
        assert_eq!(ready, [(Chemistry::Mnc, Amperes(5.0)), (Chemistry::Other, Amperes(1.0))]);
        Ok(())
    }
}
