use crate::Parser;
use jvav_ast::decl::VarDecl;
use jvav_ast::stmt::{ElseClause, ExprStmt, ForStmt, IfStmt, Stmt, WhileStmt};
use jvav_ast::TokenKind;

impl Parser {
    pub fn parse_stmt(&mut self) -> Stmt {
        match self.current().kind {
            TokenKind::OpenBrace => Stmt::Block(self.parse_block_stmt()),
            TokenKind::Let | TokenKind::Var => Stmt::VarDecl(self.parse_var_decl()),
            TokenKind::If => Stmt::If(self.parse_if_stmt()),
            TokenKind::While => Stmt::While(self.parse_while_stmt()),
            TokenKind::For => Stmt::For(self.parse_for_stmt()),
            _ => Stmt::Expr(ExprStmt {
                expr: self.parse_expr(),
            }),
        }
    }

    fn parse_var_decl(&mut self) -> VarDecl {
        let expected = match self.current().kind {
            TokenKind::Let => TokenKind::Let,
            _ => TokenKind::Var,
        };
        let keyword = self.match_token(expected);
        let ident = self.match_token(TokenKind::Identifier);
        let eq = self.match_token(TokenKind::Eq);
        let init = self.parse_expr();

        VarDecl {
            keyword,
            ident,
            eq,
            init,
        }
    }

    fn parse_if_stmt(&mut self) -> IfStmt {
        let keyword = self.match_token(TokenKind::If);
        let cond = self.parse_expr();
        let then = self.parse_stmt();
        let r#else = self.parse_else_clause();

        IfStmt {
            keyword,
            cond,
            then: then.into(),
            r#else,
        }
    }

    fn parse_else_clause(&mut self) -> Option<ElseClause> {
        if self.current().kind != TokenKind::Else {
            return None;
        }

        let keyword = self.next_token();
        let stmt = self.parse_stmt();

        Some(ElseClause {
            keyword,
            stmt: stmt.into(),
        })
    }

    fn parse_while_stmt(&mut self) -> WhileStmt {
        let keyword = self.match_token(TokenKind::While);
        let cond = self.parse_expr();
        let body = self.parse_stmt();

        WhileStmt {
            keyword,
            cond,
            body: body.into(),
        }
    }

    fn parse_for_stmt(&mut self) -> ForStmt {
        let keyword = self.match_token(TokenKind::For);
        let ident = self.match_token(TokenKind::Identifier);
        let eq = self.match_token(TokenKind::Eq);
        let lower = self.parse_expr();
        let to = self.match_token(TokenKind::To);
        let upper = self.parse_expr();
        let body = self.parse_stmt();

        ForStmt {
            keyword,
            ident,
            eq,
            lower,
            to,
            upper,
            body: body.into(),
        }
    }
}
