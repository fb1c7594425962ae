use crate::{
    core::{
        cell::{CellConfig, CellNumber},
        chemistry::Chemistry,
    },
    error::ValidationError,
    quantity::electric::Amperes,
};

/// Editable configuration of up to eight cells.
///
/// Cells beyond the visible count keep their settings, so raising the count back
/// restores them.
#[must_use]
#[derive(Clone, Debug)]
pub struct CellForm {
    n_cells: usize,
    slots: [Slot; CellNumber::MAX as usize],
}

#[derive(Copy, Clone, Debug, Default)]
struct Slot {
    chemistry: Option<Chemistry>,
    current: Amperes,
}

impl Default for CellForm {
    fn default() -> Self {
        Self { n_cells: Self::DEFAULT_N_CELLS, slots: [Slot::default(); CellNumber::MAX as usize] }
    }
}

impl CellForm {
    pub const DEFAULT_N_CELLS: usize = 4;
    pub const CURRENT_MIN: Amperes = Amperes(0.0);
    pub const CURRENT_MAX: Amperes = Amperes(100.0);

    pub const fn n_cells(&self) -> usize {
        self.n_cells
    }

    pub fn set_cell_count(&mut self, n_cells: usize) -> Result<(), ValidationError> {
        if !(1..=usize::from(CellNumber::MAX)).contains(&n_cells) {
            return Err(ValidationError::CellCountOutOfRange(n_cells));
        }
        self.n_cells = n_cells;
        Ok(())
    }

    pub fn set_chemistry(&mut self, number: CellNumber, chemistry: Option<Chemistry>) {
        self.slots[number.index()].chemistry = chemistry;
    }

    pub fn set_current(&mut self, number: CellNumber, current: Amperes) -> Result<(), ValidationError> {
        if !(Self::CURRENT_MIN.0..=Self::CURRENT_MAX.0).contains(&current.0) {
            return Err(ValidationError::CurrentOutOfRange(current));
        }
        self.slots[number.index()].current = current;
        Ok(())
    }

    /// Apply an existing configuration, growing the visible count to include the cell.
    pub fn apply(&mut self, config: &CellConfig) -> Result<(), ValidationError> {
        self.set_current(config.number, config.current)?;
        self.set_chemistry(config.number, config.chemistry);
        self.n_cells = self.n_cells.max(usize::from(config.number.get()));
        Ok(())
    }

    /// Configurations of the visible cells in cell number order, including the incomplete ones.
    pub fn configs(&self) -> Vec<CellConfig> {
        CellNumber::all()
            .take(self.n_cells)
            .map(|number| {
                let slot = self.slots[number.index()];
                CellConfig::builder()
                    .number(number)
                    .maybe_chemistry(slot.chemistry)
                    .current(slot.current)
                    .build()
            })
            .collect()
    }
}
