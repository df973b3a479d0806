use crate::ty::Type;
use jvav_ast::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    /// "+x"
    Identity,
    /// "-x"
    Negation,
    /// "!x"
    LogicalNegation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// "&&", both sides are always evaluated
    LogicalAnd,
    /// "||", both sides are always evaluated
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Equals,
    NotEquals,
    Less,
    LessOrEquals,
    Greater,
    GreaterOrEquals,
}

/// One row of the unary operator table.
#[derive(Debug, PartialEq, Eq)]
pub struct UnaryOperator {
    pub token: TokenKind,
    pub kind: UnaryOpKind,
    pub operand: Type,
    pub ty: Type,
}

impl UnaryOperator {
    const fn new(token: TokenKind, kind: UnaryOpKind, ty: Type) -> Self {
        Self {
            token,
            kind,
            operand: ty,
            ty,
        }
    }

    /// Exact-match lookup, no conversions.
    pub fn bind(token: TokenKind, operand: Type) -> Option<&'static Self> {
        UNARY_OPERATORS
            .iter()
            .find(|op| op.token == token && op.operand == operand)
    }
}

static UNARY_OPERATORS: [UnaryOperator; 3] = [
    UnaryOperator::new(TokenKind::Plus, UnaryOpKind::Identity, Type::Int),
    UnaryOperator::new(TokenKind::Minus, UnaryOpKind::Negation, Type::Int),
    UnaryOperator::new(TokenKind::Bang, UnaryOpKind::LogicalNegation, Type::Bool),
];

/// One row of the binary operator table.
#[derive(Debug, PartialEq, Eq)]
pub struct BinaryOperator {
    pub token: TokenKind,
    pub kind: BinaryOpKind,
    pub lhs: Type,
    pub rhs: Type,
    pub ty: Type,
}

impl BinaryOperator {
    const fn new(token: TokenKind, kind: BinaryOpKind, ty: Type) -> Self {
        Self::with_result(token, kind, ty, ty)
    }

    const fn with_result(token: TokenKind, kind: BinaryOpKind, operand: Type, ty: Type) -> Self {
        Self {
            token,
            kind,
            lhs: operand,
            rhs: operand,
            ty,
        }
    }

    /// Exact-match lookup, no conversions.
    pub fn bind(token: TokenKind, lhs: Type, rhs: Type) -> Option<&'static Self> {
        BINARY_OPERATORS
            .iter()
            .find(|op| op.token == token && op.lhs == lhs && op.rhs == rhs)
    }
}

static BINARY_OPERATORS: [BinaryOperator; 20] = {
    use BinaryOpKind::*;
    use TokenKind as Tk;
    use Type::{Bool, Int};

    [
        BinaryOperator::new(Tk::Plus, Addition, Int),
        BinaryOperator::new(Tk::Minus, Subtraction, Int),
        BinaryOperator::new(Tk::Star, Multiplication, Int),
        BinaryOperator::new(Tk::Slash, Division, Int),
        BinaryOperator::with_result(Tk::EqEq, Equals, Int, Bool),
        BinaryOperator::with_result(Tk::BangEq, NotEquals, Int, Bool),
        BinaryOperator::new(Tk::Amp, BitwiseAnd, Int),
        BinaryOperator::new(Tk::Pipe, BitwiseOr, Int),
        BinaryOperator::new(Tk::Hat, BitwiseXor, Int),
        BinaryOperator::with_result(Tk::Less, Less, Int, Bool),
        BinaryOperator::with_result(Tk::LessEq, LessOrEquals, Int, Bool),
        BinaryOperator::with_result(Tk::Greater, Greater, Int, Bool),
        BinaryOperator::with_result(Tk::GreaterEq, GreaterOrEquals, Int, Bool),
        BinaryOperator::new(Tk::Amp, BitwiseAnd, Bool),
        BinaryOperator::new(Tk::AmpAmp, LogicalAnd, Bool),
        BinaryOperator::new(Tk::Pipe, BitwiseOr, Bool),
        BinaryOperator::new(Tk::PipePipe, LogicalOr, Bool),
        BinaryOperator::new(Tk::Hat, BitwiseXor, Bool),
        BinaryOperator::new(Tk::EqEq, Equals, Bool),
        BinaryOperator::new(Tk::BangEq, NotEquals, Bool),
    ]
};

#[cfg(test)]
mod tests {
    use crate::op::{BinaryOpKind, BinaryOperator, UnaryOpKind, UnaryOperator};
    use crate::Type;
    use jvav_ast::TokenKind;

    #[test]
    fn unary() {
        let neg = UnaryOperator::bind(TokenKind::Minus, Type::Int).unwrap();
        assert_eq!(neg.kind, UnaryOpKind::Negation);
        assert_eq!(neg.ty, Type::Int);

        assert!(UnaryOperator::bind(TokenKind::Minus, Type::Bool).is_none());
        assert!(UnaryOperator::bind(TokenKind::Bang, Type::Int).is_none());
    }

    #[test]
    fn comparison_yields_bool() {
        for tk in [TokenKind::Less, TokenKind::LessEq, TokenKind::Greater, TokenKind::GreaterEq] {
            let op = BinaryOperator::bind(tk, Type::Int, Type::Int).unwrap();
            assert_eq!(op.ty, Type::Bool);
            assert!(BinaryOperator::bind(tk, Type::Bool, Type::Bool).is_none());
        }
    }

    #[test]
    fn equality_for_both_types() {
        let int = BinaryOperator::bind(TokenKind::EqEq, Type::Int, Type::Int).unwrap();
        let boolean = BinaryOperator::bind(TokenKind::EqEq, Type::Bool, Type::Bool).unwrap();
        assert_eq!(int.kind, BinaryOpKind::Equals);
        assert_eq!(boolean.kind, BinaryOpKind::Equals);
        assert_eq!(int.ty, Type::Bool);
        assert!(BinaryOperator::bind(TokenKind::EqEq, Type::Int, Type::Bool).is_none());
    }

    #[test]
    fn bitwise_applies_to_bool() {
        let op = BinaryOperator::bind(TokenKind::Hat, Type::Bool, Type::Bool).unwrap();
        assert_eq!(op.kind, BinaryOpKind::BitwiseXor);
        assert_eq!(op.ty, Type::Bool);

        let op = BinaryOperator::bind(TokenKind::Amp, Type::Int, Type::Int).unwrap();
        assert_eq!(op.ty, Type::Int);
    }

    #[test]
    fn logical_only_on_bool() {
        assert!(BinaryOperator::bind(TokenKind::AmpAmp, Type::Int, Type::Int).is_none());
        assert!(BinaryOperator::bind(TokenKind::PipePipe, Type::Bool, Type::Bool).is_some());
        assert!(BinaryOperator::bind(TokenKind::Plus, Type::Bool, Type::Bool).is_none());
    }
}
