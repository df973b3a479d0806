use jvav_ast::Literal;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Type {
    Int,
    Bool,
}

impl Type {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Bool => "Bool",
        }
    }

    pub const fn of(lit: Literal) -> Self {
        match lit {
            Literal::Int(_) => Self::Int,
            Literal::Bool(_) => Self::Bool,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
