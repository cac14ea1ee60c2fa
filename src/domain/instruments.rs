//! Seed instrument lists from configuration.

use std::collections::HashSet;

use crate::domain::directive::INSTRUMENT_LEN;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InstrumentListError {
    #[error("empty token in instrument list")]
    EmptyToken,

    #[error("duplicate instrument: {0}")]
    DuplicateCode(String),

    #[error("instrument code {0} must be 4 characters long")]
    BadLength(String),
}

/// Parse a comma-separated list such as `GOLD, slvr ,TSLA` into upper-case codes.
pub fn parse_instrument_codes(input: &str) -> Result<Vec<String>, InstrumentListError> {
    let mut codes = Vec::new();
    let mut seen = HashSet::new();

    if input.trim().is_empty() {
        return Ok(codes);
    }

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(InstrumentListError::EmptyToken);
        }
        let code = trimmed.to_uppercase();
        if code.chars().count() != INSTRUMENT_LEN {
            return Err(InstrumentListError::BadLength(code));
        }
        if !seen.insert(code.clone()) {
            return Err(InstrumentListError::DuplicateCode(code));
        }
        codes.push(code);
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_basic() {
        let result = parse_instrument_codes("GOLD,SLVR,TSLA").unwrap();
        assert_eq!(result, vec!["GOLD", "SLVR", "TSLA"]);
    }

    #[test]
    fn test_parse_codes_with_whitespace_and_case() {
        let result = parse_instrument_codes("  gold , Slvr ,TSLA ").unwrap();
        assert_eq!(result, vec!["GOLD", "SLVR", "TSLA"]);
    }

    #[test]
    fn test_parse_codes_blank_is_empty_list() {
        assert!(parse_instrument_codes("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_codes_empty_token() {
        let result = parse_instrument_codes("GOLD,,SLVR");
        assert!(matches!(result, Err(InstrumentListError::EmptyToken)));
    }

    #[test]
    fn test_parse_codes_duplicate() {
        let result = parse_instrument_codes("GOLD,SLVR,gold");
        assert!(matches!(result, Err(InstrumentListError::DuplicateCode(s)) if s == "GOLD"));
    }

    #[test]
    fn test_parse_codes_bad_length() {
        let result = parse_instrument_codes("GOLD,BHP");
        assert!(matches!(result, Err(InstrumentListError::BadLength(s)) if s == "BHP"));
    }
}
