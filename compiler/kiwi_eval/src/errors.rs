//! Evaluation errors and their centralized constructors.
//!
//! Every language-level failure has a fixed reason string; the rendered
//! program result appends the `banana` suffix (see [`Outcome`](crate::Outcome)).

use std::fmt;

use kiwi_ir::Name;

/// Result of evaluating an expression.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names and calls
    UnboundIdentifier { name: Name },
    NotAFunction,
    ArityMismatch { expected: usize, got: usize },
    MissingReturn,

    // Operators
    InvalidBinaryTypes,
    InvalidUnaryType,
    InvalidLogicalTypes,
    InvalidConditionalTypes,
    DivideByZero,

    // Literals
    NotAWholeNumber,

    /// The configured call depth was exceeded. Fatal: it aborts the run
    /// instead of becoming the program's result.
    RecursionLimit { limit: usize },
}

impl EvalErrorKind {
    /// The fixed reason text, as it appears in the rendered result.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnboundIdentifier { .. } => "unbound identifier",
            Self::NotAFunction => "not a function",
            Self::ArityMismatch { .. } => "arity mismatch",
            Self::MissingReturn => "missing return",

            Self::InvalidBinaryTypes => "invalid binary type(s)",
            Self::InvalidUnaryType => "invalid unary type",
            Self::InvalidLogicalTypes => "invalid logical type(s)",
            Self::InvalidConditionalTypes => "invalid conditional type(s)",
            Self::DivideByZero => "divide by zero",

            Self::NotAWholeNumber => "not a whole number",

            Self::RecursionLimit { .. } => "maximum call depth exceeded",
        }
    }

    /// `true` for errors that are not part of the language's error values.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, EvalErrorKind::RecursionLimit { .. })
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecursionLimit { limit } => write!(f, "{} (limit: {limit})", self.reason()),
            _ => f.write_str(self.reason()),
        }
    }
}

/// An evaluation error.
///
/// `Display` yields the bare reason (`"divide by zero"`), never the
/// rendered `(error ...)` form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    #[inline]
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Names and Calls

#[cold]
pub fn unbound_identifier(name: Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier { name })
}

#[cold]
pub fn not_a_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction)
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

/// A function body ran to completion without reaching `return`.
#[cold]
pub fn missing_return() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingReturn)
}

// Operators

#[cold]
pub fn invalid_binary_types() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryTypes)
}

#[cold]
pub fn invalid_unary_type() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryType)
}

#[cold]
pub fn invalid_logical_types() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLogicalTypes)
}

#[cold]
pub fn invalid_conditional_types() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidConditionalTypes)
}

#[cold]
pub fn divide_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivideByZero)
}

// Literals

#[cold]
pub fn not_a_whole_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAWholeNumber)
}

// Limits

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}
