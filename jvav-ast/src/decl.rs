use crate::expr::Expr;
use crate::token::{SyntaxToken, TokenKind};

/// `let x = init` or `var x = init`.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub keyword: SyntaxToken,
    pub ident: SyntaxToken,
    pub eq: SyntaxToken,
    pub init: Expr,
}

impl VarDecl {
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.keyword.kind == TokenKind::Let
    }
}
