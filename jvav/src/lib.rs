//! Session-level entry point: parse, bind and evaluate fragments that build
//! on each other.

mod compilation;
pub mod text;

pub use compilation::{Compilation, EvaluationResult};
pub use jvav_error::{Diagnostic, DiagnosticKind};
pub use jvav_eval::{RuntimeError, Value, Variables};
pub use jvav_parse::SyntaxTree;
