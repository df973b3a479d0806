pub use jvav_span::Span;

pub mod block;
pub mod decl;
pub mod expr;
pub mod node;
pub mod print;
pub mod stmt;
pub mod token;

pub use node::SyntaxNode;
pub use token::{Literal, SyntaxToken, TokenKind};

use crate::stmt::Stmt;

/// Root of one parsed fragment: a single statement followed by the end token.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub stmt: Stmt,
    pub eof: SyntaxToken,
}

impl CompilationUnit {
    pub fn new(stmt: Stmt, eof: SyntaxToken) -> Self {
        Self { stmt, eof }
    }

    pub fn span(&self) -> Span {
        SyntaxNode::Unit(self).span()
    }
}
