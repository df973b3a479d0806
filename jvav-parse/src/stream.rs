use jvav_ast::{Literal, SyntaxToken, TokenKind};
use jvav_error::Diagnostics;
use jvav_lexer::TokenKind as LxTkKind;
use jvav_lexer::{Cursor, EOF_CHAR};
use jvav_span::Span;

/// Cooks raw lexer tokens into `SyntaxToken`s: glues two-character
/// operators, classifies keywords, parses integer values and reports
/// lexical errors. Returns `End` forever once the input is exhausted.
pub struct Lexer<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    lookahead: Option<jvav_lexer::Token>,
    pos: usize,
    diagnostics: Diagnostics,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SyntaxToken;

    fn next(&mut self) -> Option<Self::Item> {
        let tk = self.lex();

        if tk.kind == TokenKind::End {
            None
        } else {
            Some(tk)
        }
    }
}

impl<'a> Lexer<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            cursor: Cursor::new(input),
            lookahead: None,
            pos: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn lex(&mut self) -> SyntaxToken {
        macro_rules! op_match {
            ($($lxkind:ident => $tk:ident),+; $else:ident) => {
                match self.peek_next().kind {
                    $(
                    LxTkKind::$lxkind => {
                        self.bump();
                        TokenKind::$tk
                    },
                    )+
                    _ => TokenKind::$else
                }
            };
        }

        let source = self.source;
        let start = self.pos;
        let tk = self.next_cursor_token();
        let mut value = None;

        let kind = match tk.kind {
            LxTkKind::Eof => TokenKind::End,
            LxTkKind::Whitespace => TokenKind::Whitespace,
            LxTkKind::Plus => TokenKind::Plus,
            LxTkKind::Minus => TokenKind::Minus,
            LxTkKind::Star => TokenKind::Star,
            LxTkKind::Slash => TokenKind::Slash,
            LxTkKind::OpenParen => TokenKind::OpenParen,
            LxTkKind::CloseParen => TokenKind::CloseParen,
            LxTkKind::OpenBrace => TokenKind::OpenBrace,
            LxTkKind::CloseBrace => TokenKind::CloseBrace,
            LxTkKind::Caret => TokenKind::Hat,
            // a lone '&' or '|' is the bitwise form
            LxTkKind::And => op_match!(And => AmpAmp; Amp),
            LxTkKind::Or => op_match!(Or => PipePipe; Pipe),
            LxTkKind::Eq => op_match!(Eq => EqEq; Eq),
            LxTkKind::Bang => op_match!(Eq => BangEq; Bang),
            LxTkKind::Lt => op_match!(Eq => LessEq; Less),
            LxTkKind::Gt => op_match!(Eq => GreaterEq; Greater),
            LxTkKind::Int => {
                let span = Span::new_with_end(start, self.pos);
                let text = span.str_slice(source);

                match text.parse::<i32>() {
                    Ok(int) => value = Some(Literal::Int(int)),
                    Err(_) => self.diagnostics.report_invalid_number(span, text, "Int"),
                }

                TokenKind::Number
            }
            LxTkKind::Ident => TokenKind::keyword_or_ident(&source[start..self.pos]),
            LxTkKind::Unknown => {
                let ch = source[start..].chars().next().unwrap_or(EOF_CHAR);
                self.diagnostics.report_bad_character(start, ch);

                TokenKind::Bad
            }
        };

        let span = Span::new_with_end(start, self.pos);
        let text = match kind.text() {
            Some(text) => text,
            None => span.str_slice(source),
        };

        SyntaxToken::new(kind, span, text, value)
    }

    fn peek_next(&mut self) -> jvav_lexer::Token {
        if let Some(tk) = self.lookahead {
            return tk;
        }

        let tk = self.cursor.advance_token();
        self.lookahead = Some(tk);

        tk
    }

    fn next_cursor_token(&mut self) -> jvav_lexer::Token {
        let tk = self
            .lookahead
            .take()
            .unwrap_or_else(|| self.cursor.advance_token());
        self.pos += tk.len as usize;

        tk
    }

    #[inline]
    fn bump(&mut self) {
        self.next_cursor_token();
    }

    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use crate::stream::Lexer;
    use jvav_ast::{Literal, TokenKind};
    use jvav_error::DiagnosticKind;
    use jvav_span::Span;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .map(|t| t.kind)
            .filter(|k| *k != TokenKind::Whitespace)
            .collect()
    }

    #[test]
    fn operators() {
        use TokenKind::*;

        assert_eq!(
            kinds("+ - * / ! = == != < <= > >= && || & | ^ ( ) { }"),
            vec![
                Plus, Minus, Star, Slash, Bang, Eq, EqEq, BangEq, Less, LessEq, Greater,
                GreaterEq, AmpAmp, PipePipe, Amp, Pipe, Hat, OpenParen, CloseParen, OpenBrace,
                CloseBrace,
            ]
        );
    }

    #[test]
    fn no_whitespace_needed_between_operators() {
        use TokenKind::*;

        assert_eq!(kinds("a<=b"), vec![Identifier, LessEq, Identifier]);
        assert_eq!(kinds("!!x"), vec![Bang, Bang, Identifier]);
        assert_eq!(kinds("a&&&b"), vec![Identifier, AmpAmp, Amp, Identifier]);
        assert_eq!(kinds("x===y"), vec![Identifier, EqEq, Eq, Identifier]);
    }

    #[test]
    fn keywords_and_identifiers() {
        use TokenKind::*;

        assert_eq!(
            kinds("true false let var if else while for to foo"),
            vec![True, False, Let, Var, If, Else, While, For, To, Identifier]
        );
    }

    #[test]
    fn number_value_and_span() {
        let tokens: Vec<_> = Lexer::new("  123").collect();
        assert_eq!(tokens.len(), 2);

        let num = &tokens[1];
        assert_eq!(num.kind, TokenKind::Number);
        assert_eq!(num.span, Span::new(2, 3));
        assert_eq!(num.text, "123");
        assert_eq!(num.value, Some(Literal::Int(123)));
    }

    #[test]
    fn overflowing_number_still_a_token() {
        let mut lexer = Lexer::new("99999999999");
        let tk = lexer.lex();

        assert_eq!(tk.kind, TokenKind::Number);
        assert_eq!(tk.value, None);
        assert_eq!(lexer.diagnostics().len(), 1);
        assert!(matches!(
            lexer.diagnostics().as_slice()[0].kind(),
            DiagnosticKind::InvalidNumber { .. }
        ));
        assert_eq!(lexer.diagnostics().as_slice()[0].span(), Span::new(0, 11));
    }

    #[test]
    fn bad_character_advances() {
        let mut lexer = Lexer::new("1 $ 2");
        let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();

        assert!(kinds.contains(&TokenKind::Bad));
        assert_eq!(kinds.last(), Some(&TokenKind::Number));
        assert_eq!(lexer.diagnostics().len(), 1);
        assert_eq!(
            lexer.diagnostics().as_slice()[0].kind(),
            &DiagnosticKind::BadCharacter { ch: '$' }
        );
    }

    #[test]
    fn end_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.lex().kind, TokenKind::Identifier);

        for _ in 0..3 {
            let end = lexer.lex();
            assert_eq!(end.kind, TokenKind::End);
            assert_eq!(end.span, Span::empty(1));
        }
    }
}
