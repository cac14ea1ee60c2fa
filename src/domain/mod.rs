//! Valuation core: ledger, aggregation and output selection.

pub mod config;
pub mod directive;
pub mod error;
pub mod horizon;
pub mod instruments;
pub mod ledger;
pub mod model;
pub mod program;
pub mod selection;
pub mod valuation;
