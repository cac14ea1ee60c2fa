//! The input program: an ordered list of keyed entries.
//!
//! Each value is tagged when the program is parsed, so downstream code never
//! has to guess whether a value is a magnitude or a view flag.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramValue {
    Flag(bool),
    Amount(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramEntry {
    pub key: String,
    pub value: ProgramValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    entries: Vec<ProgramEntry>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, key: &str, amount: f64) -> Self {
        self.push(key, ProgramValue::Amount(amount));
        self
    }

    pub fn with_flag(mut self, key: &str, flag: bool) -> Self {
        self.push(key, ProgramValue::Flag(flag));
        self
    }

    pub fn push(&mut self, key: &str, value: ProgramValue) {
        self.entries.push(ProgramEntry {
            key: key.to_string(),
            value,
        });
    }

    pub fn entries(&self) -> &[ProgramEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ProgramEntry> for Program {
    fn from_iter<T: IntoIterator<Item = ProgramEntry>>(iter: T) -> Self {
        Program {
            entries: iter.into_iter().collect(),
        }
    }
}
