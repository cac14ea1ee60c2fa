//! Valuation aggregation: folds the ledger into per-year portfolio values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::horizon::YearHorizon;
use crate::domain::ledger::Ledger;

/// How yearly deltas reach the portfolio value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuationMode {
    /// Each year holds its seed plus only the transactions dated that year.
    #[default]
    PerYear,
    /// Each year also carries every earlier year's transactions forward.
    Cumulative,
}

impl FromStr for ValuationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per_year" | "per-year" => Ok(ValuationMode::PerYear),
            "cumulative" => Ok(ValuationMode::Cumulative),
            other => Err(format!(
                "unknown valuation mode '{}', expected per_year or cumulative",
                other
            )),
        }
    }
}

impl fmt::Display for ValuationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationMode::PerYear => f.write_str("per_year"),
            ValuationMode::Cumulative => f.write_str("cumulative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// Ordered year to value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearSeries {
    values: BTreeMap<i32, f64>,
}

pub type PortfolioSeries = YearSeries;
/// Realized profit/loss per year. Realization is not modelled, so every
/// value is zero.
pub type ProfitLossSeries = YearSeries;

impl YearSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.values.contains_key(&year)
    }

    /// Insert `value` for `year` only if the year has no entry yet.
    pub fn seed(&mut self, year: i32, value: f64) {
        self.values.entry(year).or_insert(value);
    }

    pub fn add(&mut self, year: i32, delta: f64) {
        *self.values.entry(year).or_insert(0.0) += delta;
    }

    pub fn years(&self) -> Vec<i32> {
        self.values.keys().copied().collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.values.values().copied().collect()
    }

    /// The series as `(year, value)` pairs in ascending year order.
    pub fn points(&self) -> Vec<YearValue> {
        self.values
            .iter()
            .map(|(&year, &value)| YearValue { year, value })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Compute the portfolio value for every tracked year.
///
/// Base-horizon years start at `initial_balance`; years the ledger added past
/// the horizon start at zero. The horizon's first year never receives
/// transaction deltas.
pub fn compute_series(
    ledger: &Ledger,
    initial_balance: f64,
    base: YearHorizon,
    mode: ValuationMode,
) -> PortfolioSeries {
    let mut series = YearSeries::new();
    for year in base.years() {
        series.seed(year, initial_balance);
    }
    let tracked = ledger.tracked_horizon();
    for year in tracked.years() {
        series.seed(year, 0.0);
    }

    let mut deltas: BTreeMap<i32, f64> = BTreeMap::new();
    for instrument in ledger.instruments() {
        for (offset, amount) in instrument.yearly.iter().enumerate().skip(1) {
            let year = tracked.start + offset as i32;
            *deltas.entry(year).or_insert(0.0) += amount;
        }
    }

    match mode {
        ValuationMode::PerYear => {
            for (year, delta) in deltas {
                series.add(year, delta);
            }
        }
        ValuationMode::Cumulative => {
            let mut carried = 0.0;
            for (year, delta) in deltas {
                carried += delta;
                series.add(year, carried);
            }
        }
    }

    series
}

/// A zeroed profit/loss entry for every year the portfolio series covers.
pub fn profit_loss_series(ledger: &Ledger, base: YearHorizon) -> ProfitLossSeries {
    let mut series = YearSeries::new();
    for year in base.years().chain(ledger.tracked_horizon().years()) {
        series.seed(year, 0.0);
    }
    series
}
