use jvav_span::Span;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i32),
    Bool(bool),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// character the lexer could not classify
    Bad,
    /// end of input
    End,
    /// whitespace run, never reaches the parser
    Whitespace,
    /// integer literal
    Number,
    /// ident
    Identifier,
    /// \+
    Plus,
    /// \-
    Minus,
    /// \*
    Star,
    /// /
    Slash,
    /// !
    Bang,
    /// &
    Amp,
    /// &&
    AmpAmp,
    /// |
    Pipe,
    /// ||
    PipePipe,
    /// ^
    Hat,
    /// =
    Eq,
    /// ==
    EqEq,
    /// !=
    BangEq,
    /// <
    Less,
    /// <=
    LessEq,
    /// >
    Greater,
    /// >=
    GreaterEq,
    /// (
    OpenParen,
    /// )
    CloseParen,
    /// {
    OpenBrace,
    /// }
    CloseBrace,
    /// true
    True,
    /// false
    False,
    /// let
    Let,
    /// var
    Var,
    /// if
    If,
    /// else
    Else,
    /// while
    While,
    /// for
    For,
    /// to
    To,
}

impl TokenKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bad => "Bad",
            Self::End => "End",
            Self::Whitespace => "Whitespace",
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::Bang => "Bang",
            Self::Amp => "Amp",
            Self::AmpAmp => "AmpAmp",
            Self::Pipe => "Pipe",
            Self::PipePipe => "PipePipe",
            Self::Hat => "Hat",
            Self::Eq => "Eq",
            Self::EqEq => "EqEq",
            Self::BangEq => "BangEq",
            Self::Less => "Less",
            Self::LessEq => "LessEq",
            Self::Greater => "Greater",
            Self::GreaterEq => "GreaterEq",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::OpenBrace => "OpenBrace",
            Self::CloseBrace => "CloseBrace",
            Self::True => "TrueKeyword",
            Self::False => "FalseKeyword",
            Self::Let => "LetKeyword",
            Self::Var => "VarKeyword",
            Self::If => "IfKeyword",
            Self::Else => "ElseKeyword",
            Self::While => "WhileKeyword",
            Self::For => "ForKeyword",
            Self::To => "ToKeyword",
        }
    }

    /// Source text of tokens that always spell the same way.
    pub const fn text(self) -> Option<&'static str> {
        Some(match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::Amp => "&",
            Self::AmpAmp => "&&",
            Self::Pipe => "|",
            Self::PipePipe => "||",
            Self::Hat => "^",
            Self::Eq => "=",
            Self::EqEq => "==",
            Self::BangEq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::True => "true",
            Self::False => "false",
            Self::Let => "let",
            Self::Var => "var",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::To => "to",
            _ => return None,
        })
    }

    /// 0 when the token is not a prefix operator.
    pub const fn unary_precedence(self) -> u32 {
        match self {
            Self::Plus | Self::Minus | Self::Bang => 6,
            _ => 0,
        }
    }

    /// 0 when the token is not an infix operator.
    pub const fn binary_precedence(self) -> u32 {
        match self {
            Self::Star | Self::Slash => 5, // Multiplicative
            Self::Plus | Self::Minus => 4, // Additive
            Self::EqEq
            | Self::BangEq
            | Self::Less
            | Self::LessEq
            | Self::Greater
            | Self::GreaterEq => 3, // Comparison
            Self::Amp | Self::AmpAmp => 2, // Conjunction
            Self::Pipe | Self::PipePipe | Self::Hat => 1, // Disjunction
            _ => 0,
        }
    }

    pub fn keyword_or_ident(s: &str) -> Self {
        match s {
            "true" => Self::True,
            "false" => Self::False,
            "let" => Self::Let,
            "var" => Self::Var,
            "if" => Self::If,
            "else" => Self::Else,
            "while" => Self::While,
            "for" => Self::For,
            "to" => Self::To,
            _ => Self::Identifier,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
    pub value: Option<Literal>,
}

impl SyntaxToken {
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>, value: Option<Literal>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            value,
        }
    }

    /// Placeholder the parser inserts when the expected token is absent.
    pub fn missing(kind: TokenKind, pos: usize) -> Self {
        Self::new(kind, Span::empty(pos), String::new(), None)
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.span.is_empty() && self.kind != TokenKind::End
    }
}

#[cfg(test)]
mod tests {
    use crate::TokenKind;

    #[test]
    fn keywords() {
        assert_eq!(TokenKind::keyword_or_ident("while"), TokenKind::While);
        assert_eq!(TokenKind::keyword_or_ident("to"), TokenKind::To);
        assert_eq!(TokenKind::keyword_or_ident("tO"), TokenKind::Identifier);
        assert_eq!(TokenKind::keyword_or_ident("lets"), TokenKind::Identifier);
    }

    #[test]
    fn precedence_order() {
        assert!(TokenKind::Star.binary_precedence() > TokenKind::Plus.binary_precedence());
        assert!(TokenKind::Plus.binary_precedence() > TokenKind::Less.binary_precedence());
        assert!(TokenKind::EqEq.binary_precedence() > TokenKind::AmpAmp.binary_precedence());
        assert!(TokenKind::AmpAmp.binary_precedence() > TokenKind::PipePipe.binary_precedence());
        assert_eq!(TokenKind::Bang.binary_precedence(), 0);
        assert_eq!(TokenKind::Star.unary_precedence(), 0);
        assert!(TokenKind::Minus.unary_precedence() > TokenKind::Star.binary_precedence());
    }
}
