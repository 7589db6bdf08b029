//! The final result of running a program.

use std::fmt;

use crate::{EvalError, Value};

/// Appended to every rendered error reason. Part of the output format.
pub const ERROR_SUFFIX: &str = " banana";

/// What a program run produced.
///
/// `Display` renders the single output line.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Value(Value),
    /// A language error ended the program.
    Error(EvalError),
    /// The top-level body produced no value: no `return` ran and the last
    /// statement was not an expression statement.
    Fallthrough,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => fmt::Display::fmt(value, f),
            Outcome::Error(err) => write!(f, "(error \"{}{ERROR_SUFFIX}\")", err.kind.reason()),
            Outcome::Fallthrough => f.write_str("(value (function))"),
        }
    }
}
