//! Domain error types.

/// A per-entry problem found while classifying or recording a program.
///
/// These never abort a run: the offending entry is skipped and the error is
/// collected into the run's diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DirectiveError {
    #[error("unknown transaction type '{direction}' for {instrument} in {year}")]
    UnknownTransactionType {
        instrument: String,
        year: i32,
        direction: char,
    },

    #[error("malformed directive '{key}': {reason}")]
    MalformedDirective { key: String, reason: String },

    #[error("unsupported year {year} for {instrument}: tracked years are {earliest}-{latest}")]
    UnsupportedYear {
        instrument: String,
        year: i32,
        earliest: i32,
        latest: i32,
    },
}

/// Top-level error type for portval.
#[derive(Debug, thiserror::Error)]
pub enum PortvalError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("program parse error in {source_name}: {reason}")]
    ProgramParse { source_name: String, reason: String },

    #[error("render error: {reason}")]
    Render { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&PortvalError> for std::process::ExitCode {
    fn from(err: &PortvalError) -> Self {
        let code: u8 = match err {
            PortvalError::Io(_) => 1,
            PortvalError::ConfigParse { .. }
            | PortvalError::ConfigMissing { .. }
            | PortvalError::ConfigInvalid { .. } => 2,
            PortvalError::ProgramParse { .. } => 3,
            PortvalError::Render { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
