use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn lower(value: serde_json::Value) -> Result<(Program, StringInterner), InputError> {
    let interner = StringInterner::new();
    let program = estree::Program::from_value(value)?;
    let lowered = lower_program(&program, &interner)?;
    Ok((lowered, interner))
}

fn expression_statement(expression: serde_json::Value) -> serde_json::Value {
    json!({
        "type": "Program",
        "body": [{ "type": "ExpressionStatement", "expression": expression }]
    })
}

fn top_level_expr(program: &Program) -> &Expr {
    match program.arena.get_stmts(program.body) {
        [Stmt::Expr(id)] => program.arena.get_expr(*id),
        other => panic!("expected a single expression statement, got {other:?}"),
    }
}

#[test]
fn lowers_binary_expression() {
    let (program, _) = lower(expression_statement(json!({
        "type": "BinaryExpression",
        "operator": "*",
        "left": { "type": "Literal", "value": 6, "raw": "6" },
        "right": { "type": "Literal", "value": 7, "raw": "7" }
    })))
    .unwrap();

    let Expr::Binary { op, left, right } = top_level_expr(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!(*op, BinaryOp::Mul);
    assert_eq!(program.arena.get_expr(*left), &Expr::Literal(Literal::Int(6)));
    assert_eq!(program.arena.get_expr(*right), &Expr::Literal(Literal::Int(7)));
}

#[test]
fn classifies_literals() {
    assert_eq!(Literal::from_raw("42"), Literal::Int(42));
    assert_eq!(Literal::from_raw("true"), Literal::Bool(true));
    assert_eq!(Literal::from_raw("false"), Literal::Bool(false));
    assert_eq!(Literal::from_raw("3.5"), Literal::NotWhole);
    assert_eq!(Literal::from_raw("\"text\""), Literal::NotWhole);
    assert_eq!(Literal::from_raw("null"), Literal::NotWhole);
    assert_eq!(Literal::from_raw("99999999999999999999"), Literal::NotWhole);
}

#[test]
fn function_bodies_are_contiguous() {
    // var f = function(a) { var g = function() { return a; }; return g; };
    let (program, interner) = lower(json!({
        "type": "Program",
        "body": [{
            "type": "VariableDeclaration",
            "kind": "var",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "f" },
                "init": {
                    "type": "FunctionExpression",
                    "params": [{ "type": "Identifier", "name": "a" }],
                    "body": {
                        "type": "BlockStatement",
                        "body": [
                            {
                                "type": "VariableDeclaration",
                                "declarations": [{
                                    "type": "VariableDeclarator",
                                    "id": { "type": "Identifier", "name": "g" },
                                    "init": {
                                        "type": "FunctionExpression",
                                        "params": [],
                                        "body": {
                                            "type": "BlockStatement",
                                            "body": [{
                                                "type": "ReturnStatement",
                                                "argument": { "type": "Identifier", "name": "a" }
                                            }]
                                        }
                                    }
                                }]
                            },
                            {
                                "type": "ReturnStatement",
                                "argument": { "type": "Identifier", "name": "g" }
                            }
                        ]
                    }
                }
            }]
        }]
    }))
    .unwrap();

    let [Stmt::VarDecl(decls)] = program.arena.get_stmts(program.body) else {
        panic!("expected one declaration");
    };
    let [decl] = program.arena.get_decls(*decls) else {
        panic!("expected one declarator");
    };
    assert_eq!(interner.lookup(decl.name), "f");

    let Expr::Function { params, body } = program.arena.get_expr(decl.init) else {
        panic!("expected function expression");
    };
    let params: Vec<_> = program
        .arena
        .get_params(*params)
        .iter()
        .map(|p| interner.lookup(*p))
        .collect();
    assert_eq!(params, vec!["a"]);

    let body = program.arena.get_stmts(*body);
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0], Stmt::VarDecl(_)));
    assert!(matches!(body[1], Stmt::Return(_)));
}

#[test]
fn rejects_unknown_node_type() {
    let err = lower(expression_statement(json!({
        "type": "ArrayExpression",
        "elements": []
    })))
    .unwrap_err();
    assert!(matches!(err, InputError::Json(_)), "{err}");
}

#[test]
fn rejects_missing_field() {
    let err = lower(expression_statement(json!({
        "type": "BinaryExpression",
        "operator": "+",
        "left": { "type": "Literal", "raw": "1" }
    })))
    .unwrap_err();
    assert!(err.to_string().contains("right"), "{err}");
}

#[test]
fn rejects_unsupported_operators() {
    let err = lower(expression_statement(json!({
        "type": "BinaryExpression",
        "operator": "%",
        "left": { "type": "Literal", "raw": "1" },
        "right": { "type": "Literal", "raw": "2" }
    })))
    .unwrap_err();
    assert_eq!(err.to_string(), "unsupported binary operator `%`");

    let err = lower(expression_statement(json!({
        "type": "AssignmentExpression",
        "operator": "+=",
        "left": { "type": "Identifier", "name": "x" },
        "right": { "type": "Literal", "raw": "1" }
    })))
    .unwrap_err();
    assert_eq!(err.to_string(), "unsupported assignment operator `+=`");
}

#[test]
fn accepts_any_unary_operator() {
    let cases = [
        ("!", UnaryOp::Not),
        ("-", UnaryOp::Other),
        ("typeof", UnaryOp::Other),
    ];
    for (operator, expected) in cases {
        let (program, _) = lower(expression_statement(json!({
            "type": "UnaryExpression",
            "operator": operator,
            "prefix": true,
            "argument": { "type": "Literal", "raw": "2" }
        })))
        .unwrap();

        let Expr::Unary { op, operand } = top_level_expr(&program) else {
            panic!("expected unary expression for `{operator}`");
        };
        assert_eq!(*op, expected);
        assert_eq!(program.arena.get_expr(*operand), &Expr::Literal(Literal::Int(2)));
    }
}

#[test]
fn rejects_non_identifier_assignment_target() {
    let err = lower(expression_statement(json!({
        "type": "AssignmentExpression",
        "operator": "=",
        "left": { "type": "Literal", "raw": "1" },
        "right": { "type": "Literal", "raw": "2" }
    })))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "assignment target must be an Identifier, found `Literal`"
    );
}

#[test]
fn rejects_bare_return_and_uninitialized_declarator() {
    let err = lower(json!({
        "type": "Program",
        "body": [{ "type": "ReturnStatement", "argument": null }]
    }))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "`ReturnStatement` is missing required field `argument`"
    );

    let err = lower(json!({
        "type": "Program",
        "body": [{
            "type": "VariableDeclaration",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "x" },
                "init": null
            }]
        }]
    }))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "`VariableDeclarator` is missing required field `init`"
    );
}
