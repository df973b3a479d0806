use jvav_ast::CompilationUnit;
use jvav_error::{Diagnostic, Diagnostics};
use jvav_tir::stmt::Stmt;
use jvav_tir::VariableSymbol;
use std::sync::Arc;

mod expr;
pub mod scope;
mod stmt;

use crate::scope::ScopeStack;

/// Resolves names and operators over a syntax tree and produces the typed
/// tree. Semantic errors are collected, never returned early.
pub struct Binder {
    scopes: ScopeStack,
    diagnostics: Diagnostics,
}

impl Binder {
    /// Binder whose own top-level scope sits inside `parent`.
    pub fn new(parent: ScopeStack) -> Self {
        let mut scopes = parent;
        scopes.enter_scope();

        Self {
            scopes,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Closes the binder's top-level scope and returns what was declared in
    /// it together with the diagnostics.
    pub fn finish(mut self) -> (Vec<VariableSymbol>, Diagnostics) {
        let variables = self
            .scopes
            .exit_scope()
            .map(|scope| scope.into_variables())
            .unwrap_or_default();

        (variables, self.diagnostics)
    }
}

/// The immutable outcome of binding one fragment. `previous` links to the
/// fragment submitted before it in the same session.
#[derive(Debug)]
pub struct GlobalScope {
    previous: Option<Arc<GlobalScope>>,
    diagnostics: Vec<Diagnostic>,
    variables: Vec<VariableSymbol>,
    stmt: Stmt,
}

impl GlobalScope {
    #[inline]
    pub fn previous(&self) -> Option<&Arc<GlobalScope>> {
        self.previous.as_ref()
    }

    /// Diagnostics of every earlier fragment followed by this one's.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn variables(&self) -> &[VariableSymbol] {
        &self.variables
    }

    #[inline]
    pub fn stmt(&self) -> &Stmt {
        &self.stmt
    }
}

/// One scope per earlier fragment, oldest outermost.
fn create_parent_scopes(previous: Option<&Arc<GlobalScope>>) -> ScopeStack {
    let mut chain = vec![];
    let mut prev = previous;
    while let Some(global) = prev {
        chain.push(global);
        prev = global.previous();
    }

    let mut scopes = ScopeStack::new();
    for global in chain.into_iter().rev() {
        scopes.enter_scope();
        for var in global.variables() {
            scopes.try_declare(var.clone());
        }
    }

    scopes
}

pub fn bind_global_scope(
    previous: Option<&Arc<GlobalScope>>,
    unit: &CompilationUnit,
) -> GlobalScope {
    let parent = create_parent_scopes(previous);
    let mut binder = Binder::new(parent);
    let stmt = binder.bind_stmt(&unit.stmt);
    let (variables, own) = binder.finish();

    let mut diagnostics = previous
        .map(|p| p.diagnostics().to_vec())
        .unwrap_or_default();
    diagnostics.extend(own);

    tracing::debug!(
        variables = variables.len(),
        diagnostics = diagnostics.len(),
        "bound global scope"
    );

    GlobalScope {
        previous: previous.cloned(),
        diagnostics,
        variables,
        stmt,
    }
}
