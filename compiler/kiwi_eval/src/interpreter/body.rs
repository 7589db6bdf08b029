//! Statement sequences: the program body and function bodies.

use kiwi_ir::{Stmt, StmtRange};

use super::Interpreter;
use crate::{Environment, EvalError, Value};

impl Interpreter<'_> {
    /// Execute `body` in `env`, in order.
    ///
    /// Yields `Some` when a `return` runs, or when the last statement is an
    /// expression statement and `env` is the root frame (the program's
    /// result). Yields `None` when the body falls through. A `var` statement
    /// binds in `env` itself; no new frame is created.
    pub(crate) fn exec_body(
        &mut self,
        body: StmtRange,
        env: &Environment,
    ) -> Result<Option<Value>, EvalError> {
        let arena = self.arena;
        let stmts = arena.get_stmts(body);
        let last = stmts.len().checked_sub(1);

        for (index, stmt) in stmts.iter().enumerate() {
            match *stmt {
                Stmt::VarDecl(decls) => {
                    for decl in arena.get_decls(decls) {
                        let value = self.eval(decl.init, env)?;
                        env.declare(decl.name, value);
                    }
                }
                Stmt::Return(expr) => return self.eval(expr, env).map(Some),
                Stmt::Expr(expr) => {
                    let value = self.eval(expr, env)?;
                    if Some(index) == last && env.is_root() {
                        return Ok(Some(value));
                    }
                }
            }
        }
        Ok(None)
    }
}
