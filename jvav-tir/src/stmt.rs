use crate::expr::Expr;
use crate::symbol::VariableSymbol;

#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Expr(Expr),
    VarDecl(VariableSymbol, Expr),
    If(Expr, Box<Stmt>, Option<Box<Stmt>>),
    While(Expr, Box<Stmt>),
    For(ForStmt),
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub var: VariableSymbol,
    pub lower: Expr,
    pub upper: Expr,
    pub body: Box<Stmt>,
}
