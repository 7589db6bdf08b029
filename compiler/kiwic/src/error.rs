//! Driver errors.

use std::path::PathBuf;

use kiwi_eval::EvalError;
use kiwi_ir::InputError;

/// Everything that stops the driver from printing a result line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read `{}`: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read standard input: {0}")]
    ReadStdin(#[source] std::io::Error),

    #[error("input contains no JSON object")]
    NoDocument,

    #[error(transparent)]
    Input(#[from] InputError),

    /// A fatal evaluator fault, such as an exceeded call depth.
    #[error("evaluation aborted: {0}")]
    Eval(#[from] EvalError),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Resource faults (call depth, input nesting) exit with 2, everything
    /// else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Eval(_) | CliError::Input(InputError::NestingTooDeep { .. }) => 2,
            _ => 1,
        }
    }
}
