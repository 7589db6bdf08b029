//! Crate-level tests: operator semantics, properties, and the AST builders
//! shared by the interpreter tests.
