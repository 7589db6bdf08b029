//! Flat AST node types.
//!
//! Children are referenced by index into the owning [`ExprArena`](crate::ExprArena);
//! lists (arguments, parameters, declarators, statements) are contiguous
//! ranges in the arena's side tables.

use std::fmt;

use crate::Name;

/// Index into the expression table of an arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn len(self) -> usize {
                self.len as usize
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.len == 0
            }

            #[inline]
            pub(crate) fn as_range(self) -> std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }
    };
}

define_range!(
    /// Call arguments.
    ExprRange
);
define_range!(
    /// A statement sequence: the program body or a function body.
    StmtRange
);
define_range!(
    /// Function parameter names.
    ParamRange
);
define_range!(
    /// Declarators of one `var` statement.
    DeclRange
);

/// Arithmetic and comparison operators of `BinaryExpression`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "==" => BinaryOp::Eq,
            "<" => BinaryOp::Lt,
            ">" => BinaryOp::Gt,
            "<=" => BinaryOp::LtEq,
            ">=" => BinaryOp::GtEq,
            _ => return None,
        })
    }

}

/// Operators of `LogicalExpression`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "&&" => Some(LogicalOp::And),
            "||" => Some(LogicalOp::Or),
            _ => None,
        }
    }
}

/// Operators of `UnaryExpression`.
///
/// Only logical negation has a meaning. Any other operator (`-`, `+`, `~`,
/// `typeof`) still evaluates its operand and then fails with
/// `invalid unary type`, so it is accepted here rather than rejected as
/// malformed input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
    Other,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Self {
        if symbol == "!" {
            UnaryOp::Not
        } else {
            UnaryOp::Other
        }
    }
}

/// A literal, classified from its raw source text during lowering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    /// Anything that is neither a whole number nor `true`/`false`
    /// (fractions, strings, `null`, integers outside `i64`).
    NotWhole,
}

impl Literal {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "true" => Literal::Bool(true),
            "false" => Literal::Bool(false),
            _ => raw.parse::<i64>().map_or(Literal::NotWhole, Literal::Int),
        }
    }
}

/// Expression node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Ident(Name),
    Literal(Literal),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },
    Conditional {
        test: ExprId,
        consequent: ExprId,
        alternate: ExprId,
    },
    Function {
        params: ParamRange,
        body: StmtRange,
    },
    Call {
        callee: ExprId,
        args: ExprRange,
    },
    /// `target = value`. The target is always a plain identifier.
    Assign {
        target: Name,
        value: ExprId,
    },
}

/// One `name = init` pair of a `var` statement.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Declarator {
    pub name: Name,
    pub init: ExprId,
}

/// Statement node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    VarDecl(DeclRange),
    Return(ExprId),
    Expr(ExprId),
}
