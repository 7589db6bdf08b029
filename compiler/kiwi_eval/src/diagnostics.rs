//! Call stack tracking for the evaluator.
//!
//! Each function call pushes a [`CallFrame`]; the depth check is part of
//! [`CallStack::push`], so a runaway recursion becomes a
//! `RecursionLimit` error instead of exhausting memory.

use kiwi_ir::Name;

use crate::errors::recursion_limit_exceeded;
use crate::EvalError;

/// A single frame in the live call stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Name the callee was called through, `None` for an immediately
    /// invoked function expression.
    pub callee: Option<Name>,
}

/// Live call stack for the interpreter.
///
/// # Example
///
/// ```ignore
/// let mut stack = CallStack::new(Some(10_000));
/// stack.push(CallFrame { callee: Some(name) })?;
/// // ... evaluate function body ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` is `None` for unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    #[inline]
    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvalErrorKind;

    #[test]
    fn push_respects_limit() {
        let mut stack = CallStack::new(Some(2));
        stack.push(CallFrame { callee: None }).unwrap();
        stack.push(CallFrame { callee: None }).unwrap();

        let err = stack.push(CallFrame { callee: None }).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::RecursionLimit { limit: 2 });
        assert_eq!(stack.depth(), 2);

        stack.pop();
        assert_eq!(stack.depth(), 1);
        stack.push(CallFrame { callee: None }).unwrap();
    }

    #[test]
    fn unlimited_stack_never_refuses() {
        let mut stack = CallStack::new(None);
        for _ in 0..50_000 {
            stack.push(CallFrame { callee: None }).unwrap();
        }
        assert_eq!(stack.depth(), 50_000);
    }
}
