use super::Parser;
use jvav_ast::expr::Expr;
use jvav_ast::{Literal, TokenKind};

impl Parser {
    pub fn parse_expr(&mut self) -> Expr {
        self.parse_assign_expr()
    }

    /// assign -> IDENT '=' assign | binary
    fn parse_assign_expr(&mut self) -> Expr {
        if self.peek(0).kind == TokenKind::Identifier && self.peek(1).kind == TokenKind::Eq {
            let ident = self.next_token();
            let eq = self.next_token();
            let rhs = self.parse_assign_expr();

            return Expr::assign(ident, eq, rhs);
        }

        self.parse_binary_expr(0)
    }

    /// Precedence climbing. Operators binding tighter than `parent` are
    /// folded in; equal precedence stops, which makes every level left
    /// associative.
    pub fn parse_binary_expr(&mut self, parent: u32) -> Expr {
        let unary = self.current().kind.unary_precedence();

        let mut lhs = if unary != 0 && unary >= parent {
            let op = self.next_token();
            let operand = self.parse_binary_expr(unary);
            Expr::unary(op, operand)
        } else {
            self.parse_primary_expr()
        };

        loop {
            let prec = self.current().kind.binary_precedence();
            if prec == 0 || prec <= parent {
                break;
            }

            let op = self.next_token();
            let rhs = self.parse_binary_expr(prec);
            lhs = Expr::binary(lhs, op, rhs);
        }

        lhs
    }

    fn parse_primary_expr(&mut self) -> Expr {
        match self.current().kind {
            TokenKind::OpenParen => {
                let open = self.next_token();
                let e = self.parse_expr();
                let close = self.match_token(TokenKind::CloseParen);
                Expr::paren(open, e, close)
            }
            lit @ (TokenKind::True | TokenKind::False) => {
                let tk = self.next_token();
                Expr::lit(tk, Some(Literal::Bool(lit == TokenKind::True)))
            }
            TokenKind::Number => {
                let tk = self.next_token();
                let value = tk.value;
                Expr::lit(tk, value)
            }
            _ => {
                let ident = self.match_token(TokenKind::Identifier);
                Expr::name(ident)
            }
        }
    }
}
