//! Runtime values.

use std::fmt;
use std::rc::Rc;

use kiwi_ir::{ParamRange, StmtRange};

use crate::Environment;

/// A Kiwi runtime value.
///
/// Errors are not values here: they travel as [`EvalError`](crate::EvalError)
/// through the `Err` arm of every evaluation result.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(i64),
    Boolean(bool),
    Function(FunctionValue),
    /// Result of an assignment.
    Void,
}

impl Value {
    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in trace output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Function(_) => "function",
            Value::Void => "void",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "(value (number {n}))"),
            Value::Boolean(b) => write!(f, "(value (boolean {b}))"),
            Value::Function(_) => write!(f, "(value (function))"),
            Value::Void => write!(f, "(value (void))"),
        }
    }
}

/// A closure: parameter names, body, and the environment it was created in.
///
/// Cloning shares the closure. Two function values are equal only when they
/// come from the same evaluation of a function expression.
#[derive(Clone)]
pub struct FunctionValue(Rc<Closure>);

struct Closure {
    params: ParamRange,
    body: StmtRange,
    captured: Environment,
}

impl FunctionValue {
    pub fn new(params: ParamRange, body: StmtRange, captured: Environment) -> Self {
        FunctionValue(Rc::new(Closure {
            params,
            body,
            captured,
        }))
    }

    #[inline]
    pub fn params(&self) -> ParamRange {
        self.0.params
    }

    #[inline]
    pub fn body(&self) -> StmtRange {
        self.0.body
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.0.params.len()
    }

    /// The environment active when the function expression was evaluated.
    #[inline]
    pub fn captured(&self) -> &Environment {
        &self.0.captured
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// The captured environment is left out: a recursive closure reaches itself
// through it.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.0.params)
            .field("body", &self.0.body)
            .finish_non_exhaustive()
    }
}
