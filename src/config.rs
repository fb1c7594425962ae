use std::{fmt::Debug, fs, path::Path};

use serde::Deserialize;

use crate::{core::cell::CellConfig, prelude::*};

/// Cells file, for example:
///
/// ```toml
/// [[cells]]
/// number = 1
/// chemistry = "lfp"
/// current = 10.0
/// ```
#[must_use]
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellsFile {
    #[serde(default)]
    pub cells: Vec<CellConfig>,
}

impl CellsFile {
    #[instrument]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let file: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        info!(n_cells = file.cells.len(), "read the cells");
        Ok(file)
    }
}
