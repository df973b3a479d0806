use crate::expr::{Expr, ExprKind};
use crate::stmt::Stmt;
use std::fmt::{self, Write};

#[derive(Clone, Copy)]
enum Node<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::Stmt(stmt) => match stmt {
                Stmt::Block(stmts) => stmts.iter().map(Node::Stmt).collect(),
                Stmt::Expr(e) => vec![Node::Expr(e)],
                Stmt::VarDecl(_, init) => vec![Node::Expr(init)],
                Stmt::If(cond, then, r#else) => {
                    let mut v = vec![Node::Expr(cond), Node::Stmt(then)];
                    v.extend(r#else.as_deref().map(Node::Stmt));
                    v
                }
                Stmt::While(cond, body) => vec![Node::Expr(cond), Node::Stmt(body)],
                Stmt::For(f) => vec![
                    Node::Expr(&f.lower),
                    Node::Expr(&f.upper),
                    Node::Stmt(&f.body),
                ],
            },
            Node::Expr(expr) => match &expr.kind {
                ExprKind::Lit(_) | ExprKind::Variable(_) => vec![],
                ExprKind::Unary(_, operand) => vec![Node::Expr(operand)],
                ExprKind::Binary(lhs, _, rhs) => vec![Node::Expr(lhs), Node::Expr(rhs)],
                ExprKind::Assign(_, e) | ExprKind::Paren(e) => vec![Node::Expr(e)],
            },
        }
    }

    fn write_label(self, out: &mut impl Write) -> fmt::Result {
        match self {
            Node::Stmt(stmt) => match stmt {
                Stmt::Block(_) => write!(out, "BlockStatement"),
                Stmt::Expr(_) => write!(out, "ExpressionStatement"),
                Stmt::VarDecl(var, _) => write!(out, "VariableDeclaration {var}"),
                Stmt::If(..) => write!(out, "IfStatement"),
                Stmt::While(..) => write!(out, "WhileStatement"),
                Stmt::For(f) => write!(out, "ForStatement {}", f.var),
            },
            Node::Expr(expr) => {
                match &expr.kind {
                    ExprKind::Lit(lit) => write!(out, "LiteralExpression {lit}")?,
                    ExprKind::Unary(op, _) => write!(out, "UnaryExpression {:?}", op.kind)?,
                    ExprKind::Binary(_, op, _) => write!(out, "BinaryExpression {:?}", op.kind)?,
                    ExprKind::Variable(var) => write!(out, "VariableExpression {}", var.name())?,
                    ExprKind::Assign(var, _) => write!(out, "AssignmentExpression {}", var.name())?,
                    ExprKind::Paren(_) => write!(out, "ParenthesizedExpression")?,
                }
                write!(out, " -> {}", expr.ty)
            }
        }
    }
}

/// Writes a bound statement as an indented tree, one node per line.
pub fn write_tree(out: &mut impl Write, stmt: &Stmt) -> fmt::Result {
    write_node(out, Node::Stmt(stmt), "", true)
}

fn write_node(out: &mut impl Write, node: Node<'_>, indent: &str, last: bool) -> fmt::Result {
    let marker = if last { "└──" } else { "├──" };
    write!(out, "{indent}{marker}")?;
    node.write_label(out)?;
    writeln!(out)?;

    let indent = format!("{indent}{}", if last { "    " } else { "│   " });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        write_node(out, child, &indent, i + 1 == count)?;
    }

    Ok(())
}
