use crate::ty::Type;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A declared variable. Identity is name plus type; `read_only` does not
/// take part in equality or hashing, so the evaluator's store keys on
/// `(name, type)` alone.
#[derive(Debug, Clone)]
pub struct VariableSymbol {
    name: Arc<str>,
    read_only: bool,
    ty: Type,
}

impl VariableSymbol {
    pub fn new(name: impl Into<Arc<str>>, read_only: bool, ty: Type) -> Self {
        Self {
            name: name.into(),
            read_only,
            ty,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }
}

impl PartialEq for VariableSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ty == other.ty
    }
}

impl Eq for VariableSymbol {}

impl Hash for VariableSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.ty.hash(state);
    }
}

impl Display for VariableSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
