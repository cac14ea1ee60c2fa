//! Transaction ledger: signed per-year totals for each instrument.
//!
//! Every instrument spans the same tracked year range. The range starts at
//! the base horizon and grows forward when a later year is recorded, up to
//! the ledger's `max_year`, so all instruments always have a slot for every
//! tracked year.

use std::collections::BTreeMap;

use crate::domain::directive::{Direction, Directive};
use crate::domain::error::DirectiveError;
use crate::domain::horizon::YearHorizon;

/// Years past the base horizon a ledger may grow by unless configured.
pub const DEFAULT_EXTENSION_YEARS: i32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub code: String,
    /// Signed totals, one per tracked year starting at the ledger's start year.
    pub yearly: Vec<f64>,
    /// Running grand total across all years.
    pub total: f64,
}

impl Instrument {
    fn new(code: &str, years: usize) -> Self {
        Instrument {
            code: code.to_string(),
            yearly: vec![0.0; years],
            total: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    base: YearHorizon,
    tracked: YearHorizon,
    max_year: i32,
    instruments: BTreeMap<String, Instrument>,
}

impl Ledger {
    pub fn new(base: YearHorizon) -> Self {
        Ledger {
            base,
            tracked: base,
            max_year: base.end + DEFAULT_EXTENSION_YEARS,
            instruments: BTreeMap::new(),
        }
    }

    /// Cap forward extension at `year`. Never below the base horizon's end.
    pub fn with_max_year(mut self, year: i32) -> Self {
        self.max_year = year.max(self.base.end);
        self
    }

    /// A ledger with zero-initialized entries for `codes`.
    pub fn with_instruments(base: YearHorizon, codes: &[String]) -> Self {
        let mut ledger = Ledger::new(base);
        for code in codes {
            ledger.register(code);
        }
        ledger
    }

    pub fn base_horizon(&self) -> YearHorizon {
        self.base
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Every year with a slot in the instrument table.
    pub fn tracked_horizon(&self) -> YearHorizon {
        self.tracked
    }

    /// Tracked years past the base horizon, introduced by later transactions.
    pub fn extended_years(&self) -> impl Iterator<Item = i32> {
        (self.base.end + 1)..=self.tracked.end
    }

    pub fn instrument(&self, code: &str) -> Option<&Instrument> {
        self.instruments.get(code)
    }

    pub fn instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.values()
    }

    pub fn instrument_count(&self) -> usize {
        self.instruments.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.instruments.contains_key(code)
    }

    /// The signed total for `code` in `year`, if both are tracked.
    pub fn amount(&self, code: &str, year: i32) -> Option<f64> {
        let index = self.tracked.index_of(year)?;
        self.instruments.get(code).map(|i| i.yearly[index])
    }

    /// Register `code` if unseen. Returns true when a new entry was created.
    pub fn register(&mut self, code: &str) -> bool {
        if self.instruments.contains_key(code) {
            return false;
        }
        let years = self.tracked.len();
        self.instruments
            .insert(code.to_string(), Instrument::new(code, years));
        true
    }

    /// Apply one transaction.
    ///
    /// Validation happens before any mutation: a rejected transaction leaves
    /// the ledger exactly as it was.
    pub fn record(
        &mut self,
        code: &str,
        year: i32,
        direction_code: char,
        magnitude: f64,
    ) -> Result<(), DirectiveError> {
        let direction = Direction::try_from(direction_code).map_err(|direction| {
            DirectiveError::UnknownTransactionType {
                instrument: code.to_string(),
                year,
                direction,
            }
        })?;

        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(DirectiveError::MalformedDirective {
                key: format!("{}{}{}", code, year, direction_code),
                reason: format!("magnitude must be a non-negative number, got {}", magnitude),
            });
        }

        if year < self.tracked.start || year > self.max_year {
            return Err(DirectiveError::UnsupportedYear {
                instrument: code.to_string(),
                year,
                earliest: self.tracked.start,
                latest: self.max_year,
            });
        }

        let index = (year - self.tracked.start) as usize;
        let delta = direction.sign() * magnitude;
        let (slot, total) = match self.instruments.get(code) {
            Some(instrument) => (
                instrument.yearly.get(index).copied().unwrap_or(0.0) + delta,
                instrument.total + delta,
            ),
            None => (delta, delta),
        };
        if !slot.is_finite() || !total.is_finite() {
            return Err(DirectiveError::MalformedDirective {
                key: format!("{}{}{}", code, year, direction_code),
                reason: format!("amount {} would overflow the running total", magnitude),
            });
        }

        if year > self.tracked.end {
            self.extend_to(year);
        }
        self.register(code);

        if let Some(instrument) = self.instruments.get_mut(code) {
            instrument.yearly[index] = slot;
            instrument.total = total;
        }
        Ok(())
    }

    pub fn record_directive(&mut self, directive: &Directive) -> Result<(), DirectiveError> {
        self.record(
            &directive.instrument,
            directive.year,
            directive.direction_code,
            directive.magnitude,
        )
    }

    fn extend_to(&mut self, year: i32) {
        tracing::debug!(from = self.tracked.end, to = year, "extending tracked years");
        self.tracked.end = year;
        let years = self.tracked.len();
        for instrument in self.instruments.values_mut() {
            instrument.yearly.resize(years, 0.0);
        }
    }
}
