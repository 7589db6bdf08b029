//! Binary and logical operator implementations.
//!
//! Both operand values are always fully evaluated before these run; an
//! error on either side never reaches here.

use kiwi_ir::{BinaryOp, LogicalOp};

use crate::errors::{divide_by_zero, invalid_binary_types, invalid_logical_types};
use crate::{EvalResult, Value};

/// Evaluate a binary operator. Both operands must be numbers.
///
/// `+`, `-` and `*` wrap on overflow; `/` is [`floor_div`].
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
        return Err(invalid_binary_types());
    };
    let value = match op {
        BinaryOp::Add => Value::Number(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Number(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Number(a.wrapping_mul(b)),
        BinaryOp::Div => Value::Number(floor_div(a, b).ok_or_else(divide_by_zero)?),
        BinaryOp::Eq => Value::Boolean(a == b),
        BinaryOp::Lt => Value::Boolean(a < b),
        BinaryOp::Gt => Value::Boolean(a > b),
        BinaryOp::LtEq => Value::Boolean(a <= b),
        BinaryOp::GtEq => Value::Boolean(a >= b),
    };
    Ok(value)
}

/// Integer division rounding toward negative infinity.
///
/// `None` when `b == 0`. `i64::MIN / -1` wraps to `i64::MIN`.
pub fn floor_div(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    let quotient = a.wrapping_div(b);
    if a.wrapping_rem(b) != 0 && ((a < 0) != (b < 0)) {
        // Truncation rounded toward zero; step down one.
        Some(quotient.wrapping_sub(1))
    } else {
        Some(quotient)
    }
}

/// Evaluate `&&` or `||`. Both operands must be booleans.
pub fn evaluate_logical(left: &Value, right: &Value, op: LogicalOp) -> EvalResult {
    let (Some(a), Some(b)) = (left.as_boolean(), right.as_boolean()) else {
        return Err(invalid_logical_types());
    };
    Ok(Value::Boolean(match op {
        LogicalOp::And => a && b,
        LogicalOp::Or => a || b,
    }))
}
