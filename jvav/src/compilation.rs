use jvav_binding::{bind_global_scope, GlobalScope};
use jvav_error::Diagnostic;
use jvav_eval::{Evaluator, RuntimeError, Value, Variables};
use jvav_parse::SyntaxTree;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// One submitted fragment plus the fragments submitted before it.
///
/// Binding happens on first use of [`Compilation::global_scope`] and is
/// memoized, so a caller that only wants diagnostics never evaluates.
#[derive(Debug)]
pub struct Compilation {
    previous: Option<Arc<Compilation>>,
    syntax_tree: SyntaxTree,
    global_scope: OnceCell<Arc<GlobalScope>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub diagnostics: Vec<Diagnostic>,
    pub value: Option<Value>,
}

impl Compilation {
    pub fn new(syntax_tree: SyntaxTree) -> Self {
        Self::with_previous(None, syntax_tree)
    }

    fn with_previous(previous: Option<Arc<Compilation>>, syntax_tree: SyntaxTree) -> Self {
        Self {
            previous,
            syntax_tree,
            global_scope: OnceCell::new(),
        }
    }

    /// The next fragment of the same session. Names declared by `self` and
    /// everything before it are visible to `syntax_tree`.
    pub fn continue_with(self: &Arc<Self>, syntax_tree: SyntaxTree) -> Compilation {
        Self::with_previous(Some(Arc::clone(self)), syntax_tree)
    }

    #[inline]
    pub fn previous(&self) -> Option<&Arc<Compilation>> {
        self.previous.as_ref()
    }

    #[inline]
    pub fn syntax_tree(&self) -> &SyntaxTree {
        &self.syntax_tree
    }

    /// Binds the fragment on first call. Concurrent first callers block until
    /// one of them finishes and all get the same instance.
    pub fn global_scope(&self) -> &Arc<GlobalScope> {
        self.global_scope.get_or_init(|| {
            let previous = self.previous.as_ref().map(|p| p.global_scope());
            let global = bind_global_scope(previous, self.syntax_tree.root());

            Arc::new(global)
        })
    }

    /// Syntax diagnostics of this fragment followed by the binding
    /// diagnostics of the whole chain. Nothing runs unless both are empty.
    pub fn evaluate(&self, variables: &mut Variables) -> Result<EvaluationResult, RuntimeError> {
        let global = self.global_scope();
        let diagnostics: Vec<Diagnostic> = self
            .syntax_tree
            .diagnostics()
            .iter()
            .chain(global.diagnostics())
            .cloned()
            .collect();

        if !diagnostics.is_empty() {
            tracing::debug!(count = diagnostics.len(), "evaluation skipped");
            return Ok(EvaluationResult {
                diagnostics,
                value: None,
            });
        }

        let value = Evaluator::new(global.stmt(), variables).evaluate()?;

        Ok(EvaluationResult {
            diagnostics,
            value,
        })
    }

    /// Writes the bound tree of this fragment.
    pub fn emit_tree(&self, out: &mut impl fmt::Write) -> fmt::Result {
        jvav_tir::print::write_tree(out, self.global_scope().stmt())
    }
}

#[cfg(test)]
mod tests {
    use crate::compilation::Compilation;
    use jvav_eval::{Value, Variables};
    use jvav_parse::SyntaxTree;
    use std::sync::Arc;

    #[test]
    fn global_scope_is_memoized() {
        let compilation = Compilation::new(SyntaxTree::parse("var x = 1"));
        let a = Arc::clone(compilation.global_scope());
        let b = Arc::clone(compilation.global_scope());
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn continuation_links_previous() {
        let first = Arc::new(Compilation::new(SyntaxTree::parse("var x = 1")));
        let second = first.continue_with(SyntaxTree::parse("x + 1"));

        assert!(Arc::ptr_eq(second.previous().unwrap(), &first));
        assert!(Arc::ptr_eq(
            second.global_scope().previous().unwrap(),
            first.global_scope()
        ));

        let mut vars = Variables::default();
        first.evaluate(&mut vars).unwrap();
        let result = second.evaluate(&mut vars).unwrap();
        assert_eq!(result.value, Some(Value::Int(2)));
    }

    #[test]
    fn syntax_diagnostics_come_first() {
        let compilation = Compilation::new(SyntaxTree::parse("(y"));
        let result = compilation.evaluate(&mut Variables::default()).unwrap();

        assert_eq!(result.diagnostics.len(), 2);
        assert_eq!(result.diagnostics[0].message(), "unexpected token <End>, expected <CloseParen>");
        assert_eq!(result.diagnostics[1].message(), "undefined name 'y'");
        assert_eq!(result.value, None);
    }

    #[test]
    fn emit_bound_tree() {
        let compilation = Compilation::new(SyntaxTree::parse("let a = true"));
        let mut out = String::new();
        compilation.emit_tree(&mut out).unwrap();

        assert_eq!(
            out,
            "└──VariableDeclaration a: Bool\n    └──LiteralExpression true -> Bool\n"
        );
    }
}
