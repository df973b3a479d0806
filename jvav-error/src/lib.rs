use jvav_span::Span;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Every message the front-end can report. None of them stops the stage that
/// reports it; any of them blocks evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("bad character input: '{ch}'")]
    BadCharacter { ch: char },
    #[error("invalid integral constant '{text}' for type {ty}")]
    InvalidNumber { text: String, ty: &'static str },
    #[error("unexpected token <{actual}>, expected <{expected}>")]
    UnexpectedToken {
        actual: &'static str,
        expected: &'static str,
    },
    #[error("undefined name '{name}'")]
    UndefinedName { name: String },
    #[error("variable '{name}' is already declared")]
    VariableAlreadyDeclared { name: String },
    #[error("cannot convert type '{from}' to '{to}'")]
    CannotConvert {
        from: &'static str,
        to: &'static str,
    },
    #[error("variable '{name}' is read-only and cannot be assigned to")]
    CannotAssign { name: String },
    #[error("unary operator '{op}' is not defined for type '{operand}'")]
    UndefinedUnaryOperator { op: String, operand: &'static str },
    #[error("binary operator '{op}' is not defined for types '{lhs}' and '{rhs}'")]
    UndefinedBinaryOperator {
        op: String,
        lhs: &'static str,
        rhs: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    span: Span,
    kind: DiagnosticKind,
}

impl Diagnostic {
    #[inline]
    pub const fn new(span: Span, kind: DiagnosticKind) -> Self {
        Self { span, kind }
    }

    #[inline]
    pub const fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub const fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (at {} to {})",
            self.kind,
            self.span.pos(),
            self.span.end()
        )
    }
}

/// Ordered, append-only collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn report(&mut self, span: Span, kind: DiagnosticKind) {
        self.items.push(Diagnostic::new(span, kind));
    }

    pub fn report_bad_character(&mut self, pos: usize, ch: char) {
        let span = Span::new(pos, ch.len_utf8() as u32);
        self.report(span, DiagnosticKind::BadCharacter { ch });
    }

    pub fn report_invalid_number(&mut self, span: Span, text: &str, ty: &'static str) {
        let text = text.to_owned();
        self.report(span, DiagnosticKind::InvalidNumber { text, ty });
    }

    pub fn report_unexpected_token(
        &mut self,
        span: Span,
        actual: &'static str,
        expected: &'static str,
    ) {
        self.report(span, DiagnosticKind::UnexpectedToken { actual, expected });
    }

    pub fn report_undefined_name(&mut self, span: Span, name: &str) {
        let name = name.to_owned();
        self.report(span, DiagnosticKind::UndefinedName { name });
    }

    pub fn report_variable_already_declared(&mut self, span: Span, name: &str) {
        let name = name.to_owned();
        self.report(span, DiagnosticKind::VariableAlreadyDeclared { name });
    }

    pub fn report_cannot_convert(&mut self, span: Span, from: &'static str, to: &'static str) {
        self.report(span, DiagnosticKind::CannotConvert { from, to });
    }

    pub fn report_cannot_assign(&mut self, span: Span, name: &str) {
        let name = name.to_owned();
        self.report(span, DiagnosticKind::CannotAssign { name });
    }

    pub fn report_undefined_unary_operator(&mut self, span: Span, op: &str, operand: &'static str) {
        let op = op.to_owned();
        self.report(span, DiagnosticKind::UndefinedUnaryOperator { op, operand });
    }

    pub fn report_undefined_binary_operator(
        &mut self,
        span: Span,
        op: &str,
        lhs: &'static str,
        rhs: &'static str,
    ) {
        let op = op.to_owned();
        self.report(span, DiagnosticKind::UndefinedBinaryOperator { op, lhs, rhs });
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
