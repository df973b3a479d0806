use crate::Parser;
use jvav_ast::block::BlockStmt;
use jvav_ast::TokenKind;

impl Parser {
    pub fn parse_block_stmt(&mut self) -> BlockStmt {
        let open = self.match_token(TokenKind::OpenBrace);
        let mut stmts = vec![];

        while !matches!(
            self.current().kind,
            TokenKind::End | TokenKind::CloseBrace
        ) {
            let start = self.position();
            stmts.push(self.parse_stmt());

            // a statement that consumed nothing would loop forever
            if self.position() == start {
                self.next_token();
            }
        }

        let close = self.match_token(TokenKind::CloseBrace);

        BlockStmt::new(open, stmts, close)
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;
    use jvav_ast::stmt::Stmt;

    #[test]
    fn nested_blocks() {
        let mut parser = Parser::new("{ var x = 1 { x = 2 } x }");
        let block = parser.parse_block_stmt();

        assert!(parser.into_diagnostics().is_empty());
        assert_eq!(block.stmts.len(), 3);
        assert!(matches!(&block.stmts[1], Stmt::Block(b) if b.stmts.len() == 1));
    }

    #[test]
    fn empty_block() {
        let mut parser = Parser::new("{}");
        let block = parser.parse_block_stmt();

        assert!(parser.into_diagnostics().is_empty());
        assert!(block.stmts.is_empty());
    }

    #[test]
    fn stray_token_terminates() {
        // ')' starts no statement; the block must still make progress
        let mut parser = Parser::new("{ ) ) 1 }");
        let block = parser.parse_block_stmt();
        let diagnostics = parser.into_diagnostics();

        assert!(!block.close.is_missing());
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(block.stmts.len(), 3);
    }

    #[test]
    fn unterminated_block() {
        let mut parser = Parser::new("{ var x = 1");
        let block = parser.parse_block_stmt();

        assert!(block.close.is_missing());
        assert_eq!(parser.into_diagnostics().len(), 1);
    }
}
