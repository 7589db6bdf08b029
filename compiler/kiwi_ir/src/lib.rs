//! Kiwi IR - input model and intermediate representation.
//!
//! Programs reach Kiwi as an ESTree-shaped JSON document produced by an
//! upstream parser. This crate owns everything between that document and the
//! evaluator:
//!
//! - [`estree`]: serde model of the accepted JSON node shapes
//! - [`lower_program`]: conversion into a flat [`ExprArena`]
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`InputError`]: malformed-input failures, all reported before evaluation
//!
//! # Design
//!
//! - **Intern identifiers**: `Name(u32)` keys make scope lookups a hash of an
//!   integer instead of a string.
//! - **Flatten the tree**: nodes refer to each other through `ExprId` and
//!   range indices, and a function body is a `StmtRange` that closures can
//!   hold without borrowing the JSON model.

mod arena;
mod ast;
mod error;
pub mod estree;
mod interner;
mod lower;
mod name;

pub use arena::{ExprArena, Program};
pub use ast::{
    BinaryOp, DeclRange, Declarator, Expr, ExprId, ExprRange, Literal, LogicalOp, ParamRange,
    Stmt, StmtRange, UnaryOp,
};
pub use error::InputError;
pub use interner::StringInterner;
pub use lower::lower_program;
pub use name::Name;
