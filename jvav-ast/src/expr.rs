use crate::node::SyntaxNode;
use crate::token::{Literal, SyntaxToken};
use jvav_span::Span;

#[derive(Debug, Clone)]
pub enum Expr {
    Lit(LiteralExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Paren(ParenExpr),
    Name(NameExpr),
    Assign(AssignExpr),
}

impl Expr {
    pub fn lit(token: SyntaxToken, value: Option<Literal>) -> Self {
        Self::Lit(LiteralExpr { token, value })
    }

    pub fn unary(op: SyntaxToken, operand: Self) -> Self {
        Self::Unary(UnaryExpr {
            op,
            operand: operand.into(),
        })
    }

    pub fn binary(lhs: Self, op: SyntaxToken, rhs: Self) -> Self {
        Self::Binary(BinaryExpr {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        })
    }

    pub fn paren(open: SyntaxToken, expr: Self, close: SyntaxToken) -> Self {
        Self::Paren(ParenExpr {
            open,
            expr: expr.into(),
            close,
        })
    }

    pub fn name(ident: SyntaxToken) -> Self {
        Self::Name(NameExpr { ident })
    }

    pub fn assign(ident: SyntaxToken, eq: SyntaxToken, expr: Self) -> Self {
        Self::Assign(AssignExpr {
            ident,
            eq,
            expr: expr.into(),
        })
    }

    pub fn span(&self) -> Span {
        SyntaxNode::Expr(self).span()
    }
}

/// `12`, `true`; `value` is `None` when the literal text did not fit.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub token: SyntaxToken,
    pub value: Option<Literal>,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: SyntaxToken,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub lhs: Box<Expr>,
    pub op: SyntaxToken,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct ParenExpr {
    pub open: SyntaxToken,
    pub expr: Box<Expr>,
    pub close: SyntaxToken,
}

#[derive(Debug, Clone)]
pub struct NameExpr {
    pub ident: SyntaxToken,
}

/// `a = expr`, itself an expression so `a = b = 1` nests to the right.
#[derive(Debug, Clone)]
pub struct AssignExpr {
    pub ident: SyntaxToken,
    pub eq: SyntaxToken,
    pub expr: Box<Expr>,
}
