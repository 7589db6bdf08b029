//! Serde model of the ESTree JSON input.
//!
//! Only the node types and fields Kiwi evaluates are modelled. Every other
//! field an ESTree producer emits (`value`, `range`, `loc`, `kind`, `prefix`,
//! the `type` of blocks and declarators) is ignored. An unknown `type` on a
//! statement or expression, or a missing required field, fails decoding.

use serde::Deserialize;

use crate::InputError;

/// Root `Program` node.
#[derive(Clone, Debug, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
}

/// Deepest nesting of JSON objects and arrays accepted in a document.
///
/// A left-nested sum of `n` terms nests `n + 3` levels. Decoding recurses
/// once per level inside serde, so callers run it on a stack sized for this
/// limit (see `kiwi_stack::with_stack_size`).
pub const MAX_NESTING: usize = 2048;

/// Parse `text` as exactly one JSON document.
///
/// serde_json's own recursion limit is disabled. [`MAX_NESTING`] is checked
/// up front instead and reported as [`InputError::NestingTooDeep`].
pub fn parse_document(text: &str) -> Result<serde_json::Value, InputError> {
    let depth = nesting_depth(text);
    if depth > MAX_NESTING {
        return Err(InputError::NestingTooDeep {
            depth,
            limit: MAX_NESTING,
        });
    }

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = serde_json::Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Maximum bracket depth of `text`, ignoring brackets inside strings.
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

impl Program {
    /// Decode a program from an already-parsed JSON document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, InputError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    VariableDeclaration {
        declarations: Vec<VariableDeclarator>,
    },
    ReturnStatement {
        #[serde(default)]
        argument: Option<Node>,
    },
    ExpressionStatement {
        expression: Node,
    },
}

#[derive(Clone, Debug, Deserialize)]
pub struct VariableDeclarator {
    pub id: Node,
    #[serde(default)]
    pub init: Option<Node>,
}

/// Function body.
#[derive(Clone, Debug, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Identifier {
        name: String,
    },
    Literal {
        raw: String,
    },
    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryExpression {
        operator: String,
        argument: Box<Node>,
    },
    LogicalExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    FunctionExpression {
        params: Vec<Node>,
        body: BlockStatement,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    AssignmentExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// The ESTree `type` tag of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Identifier { .. } => "Identifier",
            Node::Literal { .. } => "Literal",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::UnaryExpression { .. } => "UnaryExpression",
            Node::LogicalExpression { .. } => "LogicalExpression",
            Node::ConditionalExpression { .. } => "ConditionalExpression",
            Node::FunctionExpression { .. } => "FunctionExpression",
            Node::CallExpression { .. } => "CallExpression",
            Node::AssignmentExpression { .. } => "AssignmentExpression",
        }
    }
}
