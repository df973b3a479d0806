use crate::block::BlockStmt;
use crate::decl::VarDecl;
use crate::expr::Expr;
use crate::node::SyntaxNode;
use crate::token::SyntaxToken;
use jvav_span::Span;

#[derive(Debug, Clone)]
pub enum Stmt {
    Block(BlockStmt),
    Expr(ExprStmt),
    VarDecl(VarDecl),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        SyntaxNode::Stmt(self).span()
    }
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub keyword: SyntaxToken,
    pub cond: Expr,
    pub then: Box<Stmt>,
    pub r#else: Option<ElseClause>,
}

#[derive(Debug, Clone)]
pub struct ElseClause {
    pub keyword: SyntaxToken,
    pub stmt: Box<Stmt>,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub keyword: SyntaxToken,
    pub cond: Expr,
    pub body: Box<Stmt>,
}

/// `for i = lower to upper body`, both bounds inclusive.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub keyword: SyntaxToken,
    pub ident: SyntaxToken,
    pub eq: SyntaxToken,
    pub lower: Expr,
    pub to: SyntaxToken,
    pub upper: Expr,
    pub body: Box<Stmt>,
}
