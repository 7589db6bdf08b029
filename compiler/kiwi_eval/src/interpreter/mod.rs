//! Tree-walking interpreter over the arena IR.
//!
//! Expressions are evaluated against an [`Environment`]; statement
//! sequences (the program body and function bodies) run through
//! `exec_body`. The interpreter itself only holds the arena, the interner
//! (for trace output) and the live call stack.

mod body;
mod builder;
mod config;
mod expr;
mod function_call;

pub use builder::InterpreterBuilder;
pub use config::{EvalConfig, DEFAULT_MAX_CALL_DEPTH};

use kiwi_ir::{ExprArena, Program, StmtRange, StringInterner};

use crate::diagnostics::CallStack;
use crate::{Environment, EvalError, Outcome};

/// Tree-walking interpreter.
///
/// Borrows the arena of the program it runs; create one with
/// [`InterpreterBuilder`].
pub struct Interpreter<'a> {
    pub(crate) arena: &'a ExprArena,
    pub(crate) interner: &'a StringInterner,
    pub(crate) call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with the default configuration.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Run a top-level statement sequence in a fresh root environment.
    ///
    /// Language errors become [`Outcome::Error`]; only a fatal error is
    /// returned as `Err`.
    pub fn run(&mut self, body: StmtRange) -> Result<Outcome, EvalError> {
        let env = Environment::root();
        tracing::debug!(statements = body.len(), "running program");

        let outcome = match self.exec_body(body, &env) {
            Ok(Some(value)) => Outcome::Value(value),
            Ok(None) => Outcome::Fallthrough,
            Err(err) if err.is_fatal() => {
                tracing::error!(error = %err, "evaluation aborted");
                return Err(err);
            }
            Err(err) => {
                tracing::debug!(reason = err.kind.reason(), "program ended with an error");
                Outcome::Error(err)
            }
        };
        tracing::debug!(%outcome, "program finished");
        Ok(outcome)
    }

    /// Current depth of the call stack.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }
}

/// Run a lowered program with the given configuration.
pub fn run_program(
    program: &Program,
    interner: &StringInterner,
    config: EvalConfig,
) -> Result<Outcome, EvalError> {
    InterpreterBuilder::new(interner, &program.arena)
        .config(config)
        .build()
        .run(program.body)
}
