//! One valuation run: ledger, selection and diagnostics owned together.

use tracing::{debug, info, warn};

use crate::domain::config::ValuationConfig;
use crate::domain::error::DirectiveError;
use crate::domain::ledger::Ledger;
use crate::domain::program::Program;
use crate::domain::selection::{classify, OutputSelection};
use crate::domain::valuation::{
    compute_series, profit_loss_series, PortfolioSeries, ProfitLossSeries,
};

/// Everything a renderer needs from a finished run.
#[derive(Debug, Clone)]
pub struct Valuation {
    pub portfolio: PortfolioSeries,
    pub profit_loss: ProfitLossSeries,
    pub selection: OutputSelection,
    pub diagnostics: Vec<DirectiveError>,
}

#[derive(Debug, Clone)]
pub struct PortfolioModel {
    config: ValuationConfig,
    ledger: Ledger,
    selection: OutputSelection,
    diagnostics: Vec<DirectiveError>,
}

impl PortfolioModel {
    pub fn new(config: ValuationConfig) -> Self {
        let ledger = Ledger::with_instruments(config.base_horizon, &config.instruments)
            .with_max_year(config.max_year);
        PortfolioModel {
            config,
            ledger,
            selection: OutputSelection::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Classify `program` and record its directives in input order.
    ///
    /// Entries that fail are skipped and kept as diagnostics; the rest of the
    /// program is still applied.
    pub fn apply(&mut self, program: &Program) {
        let classification = classify(program);
        debug!(
            directives = classification.directives.len(),
            views = classification.selection.len(),
            rejected = classification.rejected.len(),
            "classified program"
        );

        for view in classification.selection.iter() {
            self.selection.insert(view);
        }
        for err in classification.rejected {
            warn!("skipping entry: {err}");
            self.diagnostics.push(err);
        }

        for directive in &classification.directives {
            if let Err(err) = self.ledger.record_directive(directive) {
                warn!("skipping transaction: {err}");
                self.diagnostics.push(err);
            }
        }
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn selection(&self) -> &OutputSelection {
        &self.selection
    }

    pub fn diagnostics(&self) -> &[DirectiveError] {
        &self.diagnostics
    }

    pub fn portfolio_series(&self) -> PortfolioSeries {
        compute_series(
            &self.ledger,
            self.config.initial_balance,
            self.config.base_horizon,
            self.config.mode,
        )
    }

    pub fn profit_loss_series(&self) -> ProfitLossSeries {
        profit_loss_series(&self.ledger, self.config.base_horizon)
    }

    pub fn valuation(&self) -> Valuation {
        let portfolio = self.portfolio_series();
        info!(
            years = portfolio.len(),
            instruments = self.ledger.instrument_count(),
            skipped = self.diagnostics.len(),
            "computed portfolio series"
        );
        Valuation {
            portfolio,
            profit_loss: self.profit_loss_series(),
            selection: self.selection.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

/// Evaluate `program` on a fresh model.
pub fn evaluate(config: &ValuationConfig, program: &Program) -> (PortfolioModel, Valuation) {
    let mut model = PortfolioModel::new(config.clone());
    model.apply(program);
    let valuation = model.valuation();
    (model, valuation)
}
