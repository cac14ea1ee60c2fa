//! portval — yearly portfolio valuation from buy/sell transaction programs.
//!
//! Hexagonal architecture: valuation logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
