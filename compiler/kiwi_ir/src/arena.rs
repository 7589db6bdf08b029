//! Arena storage for lowered programs.

use crate::ast::{DeclRange, Declarator, Expr, ExprId, ExprRange, ParamRange, Stmt, StmtRange};
use crate::Name;

/// Flat storage for every node of one program.
///
/// Lists are appended in one piece so each range is contiguous. Nested
/// function bodies are lowered before the enclosing list is appended, which
/// is why lowering collects a list first and allocates it afterwards.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    expr_lists: Vec<ExprId>,
    params: Vec<Name>,
    decls: Vec<Declarator>,
}

/// Convert a table length to a `u32` index.
///
/// # Panics
/// Panics once a table outgrows `u32` indices.
#[inline]
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` belongs to another arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn alloc_stmts(&mut self, stmts: Vec<Stmt>) -> StmtRange {
        let start = to_index(self.stmts.len());
        let len = to_index(stmts.len());
        self.stmts.extend(stmts);
        StmtRange::new(start, len)
    }

    #[inline]
    pub fn get_stmts(&self, range: StmtRange) -> &[Stmt] {
        &self.stmts[range.as_range()]
    }

    pub fn alloc_expr_list(&mut self, exprs: Vec<ExprId>) -> ExprRange {
        let start = to_index(self.expr_lists.len());
        let len = to_index(exprs.len());
        self.expr_lists.extend(exprs);
        ExprRange::new(start, len)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.as_range()]
    }

    pub fn alloc_params(&mut self, params: Vec<Name>) -> ParamRange {
        let start = to_index(self.params.len());
        let len = to_index(params.len());
        self.params.extend(params);
        ParamRange::new(start, len)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.as_range()]
    }

    pub fn alloc_decls(&mut self, decls: Vec<Declarator>) -> DeclRange {
        let start = to_index(self.decls.len());
        let len = to_index(decls.len());
        self.decls.extend(decls);
        DeclRange::new(start, len)
    }

    #[inline]
    pub fn get_decls(&self, range: DeclRange) -> &[Declarator] {
        &self.decls[range.as_range()]
    }

    /// Number of expression nodes.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }
}

/// A lowered program: its arena plus the top-level statement sequence.
#[derive(Clone, Debug)]
pub struct Program {
    pub arena: ExprArena,
    pub body: StmtRange,
}
