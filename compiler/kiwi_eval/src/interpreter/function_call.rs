//! Function call evaluation.

use kiwi_ir::{Expr, ExprId, ExprRange, Name};
use smallvec::SmallVec;

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::errors::{arity_mismatch, missing_return, not_a_function};
use crate::{Environment, EvalResult, FunctionValue, Value};

/// Evaluated call arguments. Most calls take few.
type Args = SmallVec<[Value; 4]>;

impl Interpreter<'_> {
    /// Evaluate a call expression: arguments left to right, then the callee.
    pub(super) fn eval_call_expr(
        &mut self,
        callee: ExprId,
        args: ExprRange,
        env: &Environment,
    ) -> EvalResult {
        let arena = self.arena;
        let arg_ids = arena.get_expr_list(args);
        let mut values = Args::with_capacity(arg_ids.len());
        for &arg in arg_ids {
            values.push(self.eval(arg, env)?);
        }

        let (func, name) = self.resolve_callee(callee, env)?;
        self.eval_call(&func, name, &values)
    }

    /// A bare identifier callee must be bound to a function; any other callee
    /// expression is evaluated and must produce one.
    fn resolve_callee(
        &mut self,
        callee: ExprId,
        env: &Environment,
    ) -> EvalResult<(FunctionValue, Option<Name>)> {
        let arena = self.arena;
        let (value, name) = match *arena.get_expr(callee) {
            Expr::Ident(name) => (self.lookup(name, env)?, Some(name)),
            _ => (self.eval(callee, env)?, None),
        };
        match value {
            Value::Function(func) => Ok((func, name)),
            other => {
                tracing::trace!(found = other.type_name(), "callee is not a function");
                Err(not_a_function())
            }
        }
    }

    /// Invoke `func` with already-evaluated arguments.
    ///
    /// Parameters are bound in a fresh frame whose parent is the closure's
    /// captured environment; the body runs in a further child frame. A body
    /// that falls through is a `missing return` error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_call(
        &mut self,
        func: &FunctionValue,
        callee: Option<Name>,
        args: &[Value],
    ) -> EvalResult {
        if func.arity() != args.len() {
            return Err(arity_mismatch(func.arity(), args.len()));
        }

        self.call_stack.push(CallFrame { callee })?;
        tracing::debug!(
            callee = callee.map_or("<anonymous>", |name| self.interner.lookup(name)),
            depth = self.call_stack.depth(),
            "call"
        );

        let params = self.arena.get_params(func.params());
        let param_env = func.captured().child();
        for (&name, arg) in params.iter().zip(args) {
            param_env.declare(name, arg.clone());
        }
        let body_env = param_env.child();
        let result = self.exec_body(func.body(), &body_env);
        self.call_stack.pop();

        result?.ok_or_else(missing_return)
    }
}
