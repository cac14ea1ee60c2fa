//! Valuation settings read from the `[valuation]` config section.
//!
//! Every key is optional; missing keys fall back to a balance of 1000 over
//! 2015-2020, per-year valuation and no seeded instruments. A key that is
//! present but malformed is an error, never a silent default.

use crate::domain::error::PortvalError;
use crate::domain::horizon::YearHorizon;
use crate::domain::instruments::parse_instrument_codes;
use crate::domain::ledger::DEFAULT_EXTENSION_YEARS;
use crate::domain::valuation::ValuationMode;
use crate::ports::config_port::ConfigPort;

pub const SECTION: &str = "valuation";
pub const DEFAULT_INITIAL_BALANCE: f64 = 1000.0;
pub const MIN_YEAR: i64 = 1000;
pub const MAX_YEAR: i64 = 9999;

#[derive(Debug, Clone, PartialEq)]
pub struct ValuationConfig {
    pub initial_balance: f64,
    pub base_horizon: YearHorizon,
    pub mode: ValuationMode,
    /// Instruments registered before any transaction is recorded.
    pub instruments: Vec<String>,
    /// Last year a transaction may extend the tracked range to.
    pub max_year: i32,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        ValuationConfig {
            initial_balance: DEFAULT_INITIAL_BALANCE,
            base_horizon: YearHorizon::default(),
            mode: ValuationMode::default(),
            instruments: Vec::new(),
            max_year: YearHorizon::default().end + DEFAULT_EXTENSION_YEARS,
        }
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> PortvalError {
    PortvalError::ConfigInvalid {
        section: SECTION.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

pub fn build_valuation_config(config: &dyn ConfigPort) -> Result<ValuationConfig, PortvalError> {
    let defaults = ValuationConfig::default();

    let initial_balance = config
        .get_double(SECTION, "initial_balance")
        .map_err(|reason| invalid("initial_balance", reason))?
        .unwrap_or(defaults.initial_balance);
    validate_initial_balance(initial_balance)?;

    let start = read_year(config, "base_year_start", defaults.base_horizon.start)?;
    let end = read_year(config, "base_year_end", defaults.base_horizon.end)?;
    let base_horizon = YearHorizon::new(start, end)
        .ok_or_else(|| invalid("base_year_start", "base_year_start must not be after base_year_end"))?;

    let max_year = read_year(config, "max_year", end + DEFAULT_EXTENSION_YEARS)?;
    if max_year < end {
        return Err(invalid("max_year", "max_year must not be before base_year_end"));
    }

    let mode = match config.get_string(SECTION, "mode") {
        Some(value) => value.parse::<ValuationMode>().map_err(|reason: String| invalid("mode", reason))?,
        None => defaults.mode,
    };

    let instruments = match config.get_string(SECTION, "instruments") {
        Some(list) => {
            parse_instrument_codes(&list).map_err(|e| invalid("instruments", e.to_string()))?
        }
        None => defaults.instruments,
    };

    Ok(ValuationConfig {
        initial_balance,
        base_horizon,
        mode,
        instruments,
        max_year,
    })
}

fn read_year(config: &dyn ConfigPort, key: &str, default: i32) -> Result<i32, PortvalError> {
    match config.get_int(SECTION, key).map_err(|reason| invalid(key, reason))? {
        Some(value) => validate_year(value, key),
        None => Ok(default),
    }
}

fn validate_initial_balance(value: f64) -> Result<(), PortvalError> {
    if !value.is_finite() {
        return Err(invalid("initial_balance", "initial_balance must be a finite number"));
    }
    Ok(())
}

fn validate_year(value: i64, key: &str) -> Result<i32, PortvalError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(invalid(
            key,
            format!("{} must be between {} and {}", key, MIN_YEAR, MAX_YEAR),
        ));
    }
    Ok(value as i32)
}
