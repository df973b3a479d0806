use crate::stmt::Stmt;
use crate::token::SyntaxToken;

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub open: SyntaxToken,
    pub stmts: Vec<Stmt>,
    pub close: SyntaxToken,
}

impl BlockStmt {
    pub fn new(open: SyntaxToken, stmts: Vec<Stmt>, close: SyntaxToken) -> Self {
        Self { open, stmts, close }
    }
}
