//! Evaluator configuration.

/// Call depth allowed when nothing else is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Limits applied to one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested function calls. `None` disables the limit,
    /// leaving only the host's memory as a bound.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    /// No call depth limit.
    pub const fn unbounded() -> Self {
        EvalConfig {
            max_call_depth: None,
        }
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: Option<usize>) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}
