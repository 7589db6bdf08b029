//! Lowering from the ESTree model to the arena IR.
//!
//! All structural validation happens here, so the evaluator only ever sees
//! well-formed nodes: binary, logical and assignment operators are known,
//! declarators and parameters are identifiers, and every `return` carries an
//! expression.

use kiwi_stack::ensure_sufficient_stack;

use crate::ast::{
    BinaryOp, Declarator, Expr, ExprId, Literal, LogicalOp, Stmt, StmtRange, UnaryOp,
};
use crate::estree::{Node, Statement};
use crate::{estree, ExprArena, InputError, Name, Program, StringInterner};

/// Lower a decoded program, interning every identifier into `interner`.
pub fn lower_program(
    program: &estree::Program,
    interner: &StringInterner,
) -> Result<Program, InputError> {
    let mut lowerer = Lowerer {
        arena: ExprArena::new(),
        interner,
    };
    let body = lowerer.lower_block(&program.body)?;
    Ok(Program {
        arena: lowerer.arena,
        body,
    })
}

struct Lowerer<'a> {
    arena: ExprArena,
    interner: &'a StringInterner,
}

impl Lowerer<'_> {
    fn lower_block(&mut self, statements: &[Statement]) -> Result<StmtRange, InputError> {
        let stmts = statements
            .iter()
            .map(|stmt| self.lower_stmt(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.arena.alloc_stmts(stmts))
    }

    fn lower_stmt(&mut self, stmt: &Statement) -> Result<Stmt, InputError> {
        match stmt {
            Statement::VariableDeclaration { declarations } => {
                let mut decls = Vec::with_capacity(declarations.len());
                for declarator in declarations {
                    let name = self.identifier(&declarator.id, "variable declarator id")?;
                    let init = declarator.init.as_ref().ok_or(InputError::MissingField {
                        node: "VariableDeclarator",
                        field: "init",
                    })?;
                    let init = self.lower_expr(init)?;
                    decls.push(Declarator { name, init });
                }
                Ok(Stmt::VarDecl(self.arena.alloc_decls(decls)))
            }
            Statement::ReturnStatement { argument } => {
                let argument = argument.as_ref().ok_or(InputError::MissingField {
                    node: "ReturnStatement",
                    field: "argument",
                })?;
                Ok(Stmt::Return(self.lower_expr(argument)?))
            }
            Statement::ExpressionStatement { expression } => {
                Ok(Stmt::Expr(self.lower_expr(expression)?))
            }
        }
    }

    fn lower_expr(&mut self, node: &Node) -> Result<ExprId, InputError> {
        ensure_sufficient_stack(|| self.lower_expr_inner(node))
    }

    fn lower_expr_inner(&mut self, node: &Node) -> Result<ExprId, InputError> {
        let expr = match node {
            Node::Identifier { name } => Expr::Ident(self.interner.intern(name)),
            Node::Literal { raw } => Expr::Literal(Literal::from_raw(raw)),
            Node::BinaryExpression {
                operator,
                left,
                right,
            } => {
                let op = BinaryOp::from_symbol(operator)
                    .ok_or_else(|| unsupported("binary", operator))?;
                Expr::Binary {
                    op,
                    left: self.lower_expr(left)?,
                    right: self.lower_expr(right)?,
                }
            }
            Node::UnaryExpression { operator, argument } => {
                Expr::Unary {
                    op: UnaryOp::from_symbol(operator),
                    operand: self.lower_expr(argument)?,
                }
            }
            Node::LogicalExpression {
                operator,
                left,
                right,
            } => {
                let op = LogicalOp::from_symbol(operator)
                    .ok_or_else(|| unsupported("logical", operator))?;
                Expr::Logical {
                    op,
                    left: self.lower_expr(left)?,
                    right: self.lower_expr(right)?,
                }
            }
            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => Expr::Conditional {
                test: self.lower_expr(test)?,
                consequent: self.lower_expr(consequent)?,
                alternate: self.lower_expr(alternate)?,
            },
            Node::FunctionExpression { params, body } => {
                let names = params
                    .iter()
                    .map(|param| self.identifier(param, "function parameter"))
                    .collect::<Result<Vec<_>, _>>()?;
                let params = self.arena.alloc_params(names);
                let body = self.lower_block(&body.body)?;
                Expr::Function { params, body }
            }
            Node::CallExpression { callee, arguments } => {
                let callee = self.lower_expr(callee)?;
                let args = arguments
                    .iter()
                    .map(|arg| self.lower_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Expr::Call {
                    callee,
                    args: self.arena.alloc_expr_list(args),
                }
            }
            Node::AssignmentExpression {
                operator,
                left,
                right,
            } => {
                if operator != "=" {
                    return Err(unsupported("assignment", operator));
                }
                Expr::Assign {
                    target: self.identifier(left, "assignment target")?,
                    value: self.lower_expr(right)?,
                }
            }
        };
        Ok(self.arena.alloc_expr(expr))
    }

    fn identifier(&self, node: &Node, role: &'static str) -> Result<Name, InputError> {
        match node {
            Node::Identifier { name } => Ok(self.interner.intern(name)),
            other => Err(InputError::ExpectedIdentifier {
                role,
                found: other.type_name(),
            }),
        }
    }
}

fn unsupported(kind: &'static str, operator: &str) -> InputError {
    InputError::UnsupportedOperator {
        kind,
        operator: operator.to_owned(),
    }
}

#[cfg(test)]
mod tests;
