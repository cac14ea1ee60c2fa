//! Program source port trait.

use crate::domain::error::PortvalError;
use crate::domain::program::Program;

/// Produces a tagged program from some upstream representation.
pub trait ProgramPort {
    fn load_program(&self) -> Result<Program, PortvalError>;

    /// Human-readable origin used in error messages.
    fn source_name(&self) -> String;
}
