#![deny(clippy::arithmetic_side_effects)]
//! Kiwi Eval - tree-walking evaluator for lowered Kiwi programs.
//!
//! # Architecture
//!
//! - `Environment`: parent-linked scope chain shared by closures
//! - `evaluate_binary` / `evaluate_logical`: direct enum-based operator dispatch
//! - `evaluate_unary`: logical negation
//! - `Interpreter`: walks the arena IR, tracking calls on a bounded `CallStack`
//!
//! Language-level errors (`divide by zero`, `not a function`, ...) travel as
//! the `Err` arm of [`EvalResult`] and end the program; [`run_program`]
//! turns them into an [`Outcome`]. Only a fatal error such as an exceeded
//! call depth escapes `run_program` as `Err`.

mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod outcome;
mod unary_operators;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{run_program, EvalConfig, Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_logical, floor_div};
pub use outcome::Outcome;
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, Value};

#[cfg(test)]
mod tests;
