use crate::Binder;
use jvav_ast::block::BlockStmt;
use jvav_ast::decl::VarDecl;
use jvav_ast::stmt::{ForStmt as AstForStmt, IfStmt, Stmt as AstStmt, WhileStmt};
use jvav_tir::stmt::{ForStmt, Stmt};
use jvav_tir::{Type, VariableSymbol};

impl Binder {
    pub fn bind_stmt(&mut self, stmt: &AstStmt) -> Stmt {
        match stmt {
            AstStmt::Block(block) => self.bind_block_stmt(block),
            AstStmt::Expr(expr) => Stmt::Expr(self.bind_expr(&expr.expr)),
            AstStmt::VarDecl(decl) => self.bind_var_decl(decl),
            AstStmt::If(r#if) => self.bind_if_stmt(r#if),
            AstStmt::While(r#while) => self.bind_while_stmt(r#while),
            AstStmt::For(r#for) => self.bind_for_stmt(r#for),
        }
    }

    fn bind_block_stmt(&mut self, block: &BlockStmt) -> Stmt {
        self.scopes.enter_scope();

        let mut stmts = Vec::with_capacity(block.stmts.len());
        for stmt in &block.stmts {
            stmts.push(self.bind_stmt(stmt));
        }

        self.scopes.exit_scope();

        Stmt::Block(stmts)
    }

    fn bind_var_decl(&mut self, decl: &VarDecl) -> Stmt {
        let name = decl.ident.text.as_str();
        let init = self.bind_expr(&decl.init);
        let var = VariableSymbol::new(name, decl.is_read_only(), init.ty);

        self.declare(&decl.ident, var.clone());

        Stmt::VarDecl(var, init)
    }

    fn bind_if_stmt(&mut self, r#if: &IfStmt) -> Stmt {
        let cond = self.bind_expr_as(&r#if.cond, Type::Bool);
        let then = self.bind_body_stmt(&r#if.then);
        let r#else = r#if
            .r#else
            .as_ref()
            .map(|clause| Box::new(self.bind_body_stmt(&clause.stmt)));

        Stmt::If(cond, then.into(), r#else)
    }

    fn bind_while_stmt(&mut self, r#while: &WhileStmt) -> Stmt {
        let cond = self.bind_expr_as(&r#while.cond, Type::Bool);
        let body = self.bind_body_stmt(&r#while.body);

        Stmt::While(cond, body.into())
    }

    fn bind_for_stmt(&mut self, r#for: &AstForStmt) -> Stmt {
        let lower = self.bind_expr_as(&r#for.lower, Type::Int);
        let upper = self.bind_expr_as(&r#for.upper, Type::Int);

        self.scopes.enter_scope();

        let var = VariableSymbol::new(r#for.ident.text.as_str(), false, Type::Int);
        self.declare(&r#for.ident, var.clone());
        let body = self.bind_stmt(&r#for.body);

        self.scopes.exit_scope();

        Stmt::For(ForStmt {
            var,
            lower,
            upper,
            body: body.into(),
        })
    }

    /// Binds a branch or loop body in a scope of its own.
    fn bind_body_stmt(&mut self, body: &AstStmt) -> Stmt {
        self.scopes.enter_scope();
        let body = self.bind_stmt(body);
        self.scopes.exit_scope();

        body
    }

    fn declare(&mut self, ident: &jvav_ast::SyntaxToken, var: VariableSymbol) {
        if ident.is_missing() {
            return;
        }

        tracing::trace!(name = var.name(), ty = %var.ty(), "declare variable");

        if !self.scopes.try_declare(var) {
            self.diagnostics
                .report_variable_already_declared(ident.span, &ident.text);
        }
    }
}
