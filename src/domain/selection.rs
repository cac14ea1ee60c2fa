//! Output selection: splits a program into transaction directives and view
//! flags.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::directive::{parse_directive, Directive};
use crate::domain::error::DirectiveError;
use crate::domain::program::{Program, ProgramValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum View {
    Portfolio,
    BarGraph,
    TimeSeries,
}

impl View {
    pub const ALL: [View; 3] = [View::Portfolio, View::BarGraph, View::TimeSeries];

    pub fn key(self) -> &'static str {
        match self {
            View::Portfolio => "portfolio",
            View::BarGraph => "bargraph",
            View::TimeSeries => "timeseries",
        }
    }
}

impl FromStr for View {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portfolio" => Ok(View::Portfolio),
            "bargraph" => Ok(View::BarGraph),
            "timeseries" => Ok(View::TimeSeries),
            _ => Err(()),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSelection {
    views: BTreeSet<View>,
}

impl OutputSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, view: View) -> bool {
        self.views.insert(view)
    }

    pub fn contains(&self, view: View) -> bool {
        self.views.contains(&view)
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = View> + '_ {
        self.views.iter().copied()
    }
}

impl FromIterator<View> for OutputSelection {
    fn from_iter<T: IntoIterator<Item = View>>(iter: T) -> Self {
        OutputSelection {
            views: iter.into_iter().collect(),
        }
    }
}

/// Result of classifying a program.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Transaction directives in input order.
    pub directives: Vec<Directive>,
    pub selection: OutputSelection,
    /// Entries that were neither a transaction nor a recognized view flag.
    pub rejected: Vec<DirectiveError>,
}

pub fn classify(program: &Program) -> Classification {
    let mut classification = Classification::default();

    for entry in program.entries() {
        match entry.value {
            ProgramValue::Flag(flag) => match entry.key.parse::<View>() {
                Ok(view) => {
                    if flag {
                        classification.selection.insert(view);
                    }
                }
                Err(()) => classification
                    .rejected
                    .push(DirectiveError::MalformedDirective {
                        key: entry.key.clone(),
                        reason: "boolean value on a key that is not a view flag".to_string(),
                    }),
            },
            ProgramValue::Amount(magnitude) => match parse_directive(&entry.key, magnitude) {
                Ok(directive) => classification.directives.push(directive),
                Err(err) => classification.rejected.push(err),
            },
        }
    }

    classification
}
