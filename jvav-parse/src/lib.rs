use jvav_ast::{CompilationUnit, SyntaxToken, TokenKind};
use jvav_error::{Diagnostic, Diagnostics};

mod block;
mod expr;
mod stmt;
mod stream;

pub use stream::Lexer;

/// Recursive-descent parser over the whitespace-free token list of one
/// fragment. It never fails: missing tokens are reported and replaced by
/// zero-width placeholders so a tree is always produced.
pub struct Parser {
    tokens: Vec<SyntaxToken>,
    position: usize,
    diagnostics: Diagnostics,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let mut tokens = vec![];

        loop {
            let tk = lexer.lex();
            let kind = tk.kind;

            if !matches!(kind, TokenKind::Whitespace | TokenKind::Bad) {
                tokens.push(tk);
            }
            if kind == TokenKind::End {
                break;
            }
        }

        tracing::trace!(tokens = tokens.len(), "lexed fragment");

        Self {
            tokens,
            position: 0,
            diagnostics: lexer.into_diagnostics(),
        }
    }

    /// Token `offset` positions ahead, or the end token past the end.
    pub fn peek(&self, offset: usize) -> &SyntaxToken {
        let idx = (self.position + offset).min(self.tokens.len() - 1);

        &self.tokens[idx]
    }

    #[inline]
    pub fn current(&self) -> &SyntaxToken {
        self.peek(0)
    }

    pub fn next_token(&mut self) -> SyntaxToken {
        let tk = self.current().clone();
        self.position += 1;

        tk
    }

    /// Consumes the current token if it is `kind`; otherwise reports it and
    /// returns a placeholder without advancing.
    pub fn match_token(&mut self, kind: TokenKind) -> SyntaxToken {
        if self.current().kind == kind {
            return self.next_token();
        }

        let current = self.current();
        let (span, actual, pos) = (current.span, current.kind.name(), current.span.pos());
        self.diagnostics
            .report_unexpected_token(span, actual, kind.name());

        SyntaxToken::missing(kind, pos)
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    pub fn parse_compilation_unit(&mut self) -> CompilationUnit {
        let stmt = self.parse_stmt();
        let eof = self.match_token(TokenKind::End);

        CompilationUnit::new(stmt, eof)
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// A parsed fragment together with its source text and the lexical and
/// syntactic diagnostics found while parsing it.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    text: String,
    root: CompilationUnit,
    diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    pub fn parse(text: &str) -> Self {
        let mut parser = Parser::new(text);
        let root = parser.parse_compilation_unit();
        let diagnostics = parser.into_diagnostics().into_vec();

        tracing::debug!(diagnostics = diagnostics.len(), "parsed syntax tree");

        Self {
            text: text.to_owned(),
            root,
            diagnostics,
        }
    }

    /// Every token of `text` including whitespace and bad tokens, without the end token.
    pub fn parse_tokens(text: &str) -> Vec<SyntaxToken> {
        Lexer::new(text).collect()
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn root(&self) -> &CompilationUnit {
        &self.root
    }

    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use crate::SyntaxTree;
    use jvav_ast::{SyntaxNode, TokenKind};
    use jvav_error::DiagnosticKind;

    fn leaf_texts(tree: &SyntaxTree) -> String {
        SyntaxNode::Unit(tree.root())
            .tokens()
            .into_iter()
            .map(|t| t.text.as_str())
            .collect()
    }

    #[test]
    fn leaf_tokens_reconstruct_source() {
        for src in [
            "1 + 2 * 3",
            "{ var x = 10 (x = x + 1) }",
            "{ var result = 0 for i = 1 to 5 { result = result + i } }",
            "if a <= b { a = b } else { b = a }",
            "while x != 0 x = x - 1",
            "let flag = !true & false | true ^ false",
        ] {
            let tree = SyntaxTree::parse(src);
            assert!(tree.diagnostics().is_empty(), "{src}: {:?}", tree.diagnostics());

            let expected: String = src.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(leaf_texts(&tree), expected);
        }
    }

    #[test]
    fn unit_span_covers_statement() {
        let tree = SyntaxTree::parse("  1 + 2  ");
        assert_eq!(tree.root().stmt.span().range(), 2..7);
    }

    #[test]
    fn lexical_diagnostics_come_first() {
        let tree = SyntaxTree::parse("1 + $");
        let kinds: Vec<_> = tree.diagnostics().iter().map(|d| d.kind().clone()).collect();

        assert!(matches!(kinds[0], DiagnosticKind::BadCharacter { ch: '$' }));
        assert!(matches!(
            kinds[1],
            DiagnosticKind::UnexpectedToken {
                actual: "End",
                expected: "Identifier"
            }
        ));
    }

    #[test]
    fn trailing_tokens_are_reported() {
        let tree = SyntaxTree::parse("1 2");
        assert_eq!(tree.diagnostics().len(), 1);
        assert!(matches!(
            tree.diagnostics()[0].kind(),
            DiagnosticKind::UnexpectedToken {
                actual: "Number",
                expected: "End"
            }
        ));
        assert_eq!(tree.root().eof.kind, TokenKind::End);
    }

    #[test]
    fn parse_tokens_keeps_whitespace() {
        let kinds: Vec<_> = SyntaxTree::parse_tokens("a + 1")
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Plus,
                TokenKind::Whitespace,
                TokenKind::Number,
            ]
        );
    }
}
