pub mod expr;
pub mod op;
pub mod print;
pub mod stmt;
pub mod symbol;
pub mod ty;

pub use symbol::VariableSymbol;
pub use ty::Type;
