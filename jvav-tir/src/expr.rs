use crate::op::{BinaryOperator, UnaryOperator};
use crate::symbol::VariableSymbol;
use crate::ty::Type;
use jvav_ast::Literal;

#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    Lit(Literal),
    Unary(&'static UnaryOperator, Box<Expr>),
    Binary(Box<Expr>, &'static BinaryOperator, Box<Expr>),
    Variable(VariableSymbol),
    Assign(VariableSymbol, Box<Expr>),
    Paren(Box<Expr>),
}

impl Expr {
    pub fn lit(lit: Literal) -> Self {
        Self {
            kind: ExprKind::Lit(lit),
            ty: Type::of(lit),
        }
    }

    pub fn unary(op: &'static UnaryOperator, operand: Self) -> Self {
        Self {
            kind: ExprKind::Unary(op, operand.into()),
            ty: op.ty,
        }
    }

    pub fn binary(lhs: Self, op: &'static BinaryOperator, rhs: Self) -> Self {
        Self {
            kind: ExprKind::Binary(lhs.into(), op, rhs.into()),
            ty: op.ty,
        }
    }

    pub fn variable(var: VariableSymbol) -> Self {
        let ty = var.ty();

        Self {
            kind: ExprKind::Variable(var),
            ty,
        }
    }

    pub fn assign(var: VariableSymbol, expr: Self) -> Self {
        let ty = expr.ty;

        Self {
            kind: ExprKind::Assign(var, expr.into()),
            ty,
        }
    }

    pub fn paren(expr: Self) -> Self {
        let ty = expr.ty;

        Self {
            kind: ExprKind::Paren(expr.into()),
            ty,
        }
    }
}
