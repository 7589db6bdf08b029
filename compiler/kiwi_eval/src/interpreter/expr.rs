//! Expression evaluation.

use kiwi_ir::{Expr, ExprId, Literal, Name};
use kiwi_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{invalid_conditional_types, not_a_whole_number, unbound_identifier};
use crate::{
    evaluate_binary, evaluate_logical, evaluate_unary, Environment, EvalError, EvalResult,
    FunctionValue, Value,
};

impl Interpreter<'_> {
    /// Evaluate one expression in `env`.
    ///
    /// Deeply nested expressions grow the native stack on demand instead of
    /// overflowing it.
    pub fn eval(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        let arena = self.arena;
        match *arena.get_expr(id) {
            Expr::Ident(name) => self.lookup(name, env),
            Expr::Literal(literal) => eval_literal(literal),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(&left, &right, op)
            }
            Expr::Unary { op, operand } => {
                let operand = self.eval(operand, env)?;
                evaluate_unary(&operand, op)
            }
            // Both sides are always evaluated; only an error short-circuits.
            Expr::Logical { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_logical(&left, &right, op)
            }
            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => match self.eval(test, env)?.as_boolean() {
                Some(true) => self.eval(consequent, env),
                Some(false) => self.eval(alternate, env),
                None => Err(invalid_conditional_types()),
            },
            Expr::Function { params, body } => Ok(Value::Function(FunctionValue::new(
                params,
                body,
                env.clone(),
            ))),
            Expr::Call { callee, args } => self.eval_call_expr(callee, args, env),
            Expr::Assign { target, value } => self.eval_assign(target, value, env),
        }
    }

    pub(super) fn lookup(&self, name: Name, env: &Environment) -> EvalResult {
        env.lookup(name).ok_or_else(|| self.unbound(name))
    }

    /// The target must already be bound before the right side is evaluated.
    fn eval_assign(&mut self, target: Name, value: ExprId, env: &Environment) -> EvalResult {
        if !env.contains(target) {
            return Err(self.unbound(target));
        }
        let value = self.eval(value, env)?;
        env.assign(target, value).map_err(|_| self.unbound(target))?;
        Ok(Value::Void)
    }

    #[cold]
    pub(super) fn unbound(&self, name: Name) -> EvalError {
        tracing::trace!(name = self.interner.lookup(name), "unbound identifier");
        unbound_identifier(name)
    }
}

fn eval_literal(literal: Literal) -> EvalResult {
    match literal {
        Literal::Int(n) => Ok(Value::Number(n)),
        Literal::Bool(b) => Ok(Value::Boolean(b)),
        Literal::NotWhole => Err(not_a_whole_number()),
    }
}
