//! `InterpreterBuilder` for creating Interpreter instances.

use kiwi_ir::{ExprArena, StringInterner};

use super::{EvalConfig, Interpreter};
use crate::diagnostics::CallStack;

/// Builder for [`Interpreter`].
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    config: EvalConfig,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            config: EvalConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            arena: self.arena,
            interner: self.interner,
            call_stack: CallStack::new(self.config.max_call_depth),
        }
    }
}
