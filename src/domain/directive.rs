//! Transaction directives and transaction-code parsing.
//!
//! A transaction code packs an instrument, a year and a direction into one
//! key: `GOLD2016B` is "buy GOLD in 2016". Characters past the direction are
//! ignored.

use crate::domain::error::DirectiveError;

pub const INSTRUMENT_LEN: usize = 4;
pub const YEAR_LEN: usize = 4;
/// Minimum key length: instrument, year and one direction character.
pub const MIN_CODE_LEN: usize = INSTRUMENT_LEN + YEAR_LEN + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Sign applied to a magnitude: buying is a cash outflow.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Buy => -1.0,
            Direction::Sell => 1.0,
        }
    }

    pub fn code(self) -> char {
        match self {
            Direction::Buy => 'B',
            Direction::Sell => 'S',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'B' => Ok(Direction::Buy),
            'S' => Ok(Direction::Sell),
            other => Err(other),
        }
    }
}

/// One parsed transaction entry.
///
/// The direction is kept as its raw code so an unknown direction survives
/// parsing and is reported by the ledger when the directive is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub instrument: String,
    pub year: i32,
    pub direction_code: char,
    pub magnitude: f64,
}

impl Directive {
    pub fn new(instrument: &str, year: i32, direction: Direction, magnitude: f64) -> Self {
        Directive {
            instrument: instrument.to_string(),
            year,
            direction_code: direction.code(),
            magnitude,
        }
    }

    pub fn direction(&self) -> Result<Direction, DirectiveError> {
        Direction::try_from(self.direction_code).map_err(|direction| {
            DirectiveError::UnknownTransactionType {
                instrument: self.instrument.clone(),
                year: self.year,
                direction,
            }
        })
    }
}

/// Split a transaction code into `(instrument, year, direction_code)`.
pub fn parse_transaction_code(key: &str) -> Result<(String, i32, char), DirectiveError> {
    let malformed = |reason: &str| DirectiveError::MalformedDirective {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let chars: Vec<char> = key.chars().collect();
    if chars.len() < MIN_CODE_LEN {
        return Err(malformed(&format!(
            "transaction code needs at least {} characters",
            MIN_CODE_LEN
        )));
    }

    let instrument: String = chars[..INSTRUMENT_LEN].iter().collect();
    if instrument.chars().any(char::is_whitespace) {
        return Err(malformed("instrument code contains whitespace"));
    }

    let year_chars = &chars[INSTRUMENT_LEN..INSTRUMENT_LEN + YEAR_LEN];
    if !year_chars.iter().all(char::is_ascii_digit) {
        return Err(malformed("year must be four digits"));
    }
    let year: i32 = year_chars
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| malformed("year must be four digits"))?;

    let direction_code = chars[INSTRUMENT_LEN + YEAR_LEN];

    Ok((instrument.to_uppercase(), year, direction_code))
}

/// Build a directive from a transaction code and its magnitude.
pub fn parse_directive(key: &str, magnitude: f64) -> Result<Directive, DirectiveError> {
    let (instrument, year, direction_code) = parse_transaction_code(key)?;
    Ok(Directive {
        instrument,
        year,
        direction_code,
        magnitude,
    })
}
