//! JSON program adapter.
//!
//! A program is one JSON object. Numbers become amounts, booleans become
//! view flags, and entry order follows the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::error::PortvalError;
use crate::domain::program::{Program, ProgramEntry, ProgramValue};
use crate::ports::program_port::ProgramPort;

pub struct JsonProgramAdapter {
    path: PathBuf,
}

impl JsonProgramAdapter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse_str(content: &str, source_name: &str) -> Result<Program, PortvalError> {
        let parse_error = |reason: String| PortvalError::ProgramParse {
            source_name: source_name.to_string(),
            reason,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let object: Map<String, Value> = match value {
            Value::Object(object) => object,
            other => {
                return Err(parse_error(format!(
                    "expected a JSON object, found {}",
                    json_type(&other)
                )))
            }
        };

        object
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::Bool(flag) => ProgramValue::Flag(flag),
                    Value::Number(n) => match n.as_f64() {
                        Some(amount) => ProgramValue::Amount(amount),
                        None => {
                            return Err(parse_error(format!(
                                "value for '{}' is not representable as a number",
                                key
                            )))
                        }
                    },
                    other => {
                        return Err(parse_error(format!(
                            "value for '{}' must be a number or a boolean, found {}",
                            key,
                            json_type(&other)
                        )))
                    }
                };
                Ok(ProgramEntry { key, value })
            })
            .collect()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl ProgramPort for JsonProgramAdapter {
    fn load_program(&self) -> Result<Program, PortvalError> {
        let content = fs::read_to_string(&self.path).map_err(|e| PortvalError::ProgramParse {
            source_name: self.source_name(),
            reason: e.to_string(),
        })?;
        Self::parse_str(&content, &self.source_name())
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
