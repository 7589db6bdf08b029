//! Unary operator implementations.

use kiwi_ir::UnaryOp;

use crate::errors::invalid_unary_type;
use crate::{EvalResult, Value};

/// Evaluate a unary operator on an already evaluated operand.
///
/// `!` requires a boolean operand. No other operator applies to any value.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (UnaryOp::Not | UnaryOp::Other, _) => Err(invalid_unary_type()),
    }
}
