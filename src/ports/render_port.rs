//! View rendering port trait.

use std::path::{Path, PathBuf};

use crate::domain::error::PortvalError;
use crate::domain::ledger::Instrument;
use crate::domain::model::Valuation;
use crate::domain::selection::OutputSelection;
use crate::domain::valuation::YearValue;

/// Inputs for one render pass.
pub struct RenderRequest<'a> {
    pub selection: &'a OutputSelection,
    pub portfolio: Vec<YearValue>,
    pub profit_loss: Vec<YearValue>,
    pub instruments: Vec<&'a Instrument>,
    pub first_year: i32,
}

impl<'a> RenderRequest<'a> {
    pub fn new(valuation: &'a Valuation, instruments: Vec<&'a Instrument>, first_year: i32) -> Self {
        RenderRequest {
            selection: &valuation.selection,
            portfolio: valuation.portfolio.points(),
            profit_loss: valuation.profit_loss.points(),
            instruments,
            first_year,
        }
    }
}

/// Port for drawing the selected views.
pub trait RenderPort {
    /// Render every selected view into `output_dir`; returns the written files.
    fn render(
        &self,
        request: &RenderRequest<'_>,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, PortvalError>;
}
