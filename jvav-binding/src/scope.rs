use jvav_tir::VariableSymbol;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// One lexical scope: the variables declared directly in it, in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    names: FxHashMap<Box<str>, usize>,
    variables: Vec<VariableSymbol>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when the name is already declared in this scope; the existing
    /// declaration is kept.
    pub fn try_declare(&mut self, var: VariableSymbol) -> bool {
        if self.names.contains_key(var.name()) {
            return false;
        }

        self.names.insert(var.name().into(), self.variables.len());
        self.variables.push(var);

        true
    }

    pub fn lookup(&self, name: &str) -> Option<&VariableSymbol> {
        self.names.get(name).map(|&i| &self.variables[i])
    }

    pub fn declared_variables(&self) -> &[VariableSymbol] {
        &self.variables
    }

    pub fn into_variables(self) -> Vec<VariableSymbol> {
        self.variables
    }
}

/// Chain of scopes, innermost last. Lookups walk outwards, declarations go
/// into the innermost scope.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: SmallVec<[Scope; 8]>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    pub fn exit_scope(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn try_declare(&mut self, var: VariableSymbol) -> bool {
        match self.scopes.last_mut() {
            Some(scope) => scope.try_declare(var),
            None => panic!("declaration of '{}' outside of any scope", var.name()),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&VariableSymbol> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }
}
