//! Malformed-input errors.

use thiserror::Error;

/// The input is not a program Kiwi can evaluate.
///
/// Distinct from evaluation errors: these are detected while decoding and
/// lowering, before any node is evaluated, and never reach the rendered
/// `(error "...")` output.
#[derive(Debug, Error)]
pub enum InputError {
    /// JSON that does not match the accepted node shapes (unknown `type`,
    /// missing field, wrong JSON type).
    #[error("malformed AST: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{node}` is missing required field `{field}`")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },

    #[error("{role} must be an Identifier, found `{found}`")]
    ExpectedIdentifier {
        role: &'static str,
        found: &'static str,
    },

    /// The document nests objects and arrays deeper than the decoder accepts.
    /// Not malformed: the driver treats it as a resource fault.
    #[error("input nests {depth} levels deep, the limit is {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("unsupported {kind} operator `{operator}`")]
    UnsupportedOperator {
        kind: &'static str,
        operator: String,
    },
}
