use jvav_ast::Literal;
use std::fmt::{Display, Formatter};

/// A runtime value. Equality is structural, so an `Int` never equals a
/// `Bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i32),
    Bool(bool),
}

impl Value {
    #[inline]
    pub fn as_int(self) -> i32 {
        match self {
            Self::Int(i) => i,
            Self::Bool(_) => panic!("expected Int value, found {self}"),
        }
    }

    #[inline]
    pub fn as_bool(self) -> bool {
        match self {
            Self::Bool(b) => b,
            Self::Int(_) => panic!("expected Bool value, found {self}"),
        }
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        match lit {
            Literal::Int(i) => Self::Int(i),
            Literal::Bool(b) => Self::Bool(b),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
