use crate::Binder;
use jvav_ast::expr::{AssignExpr, BinaryExpr, Expr as AstExpr, LiteralExpr, NameExpr, UnaryExpr};
use jvav_ast::Literal;
use jvav_tir::expr::Expr;
use jvav_tir::op::{BinaryOperator, UnaryOperator};
use jvav_tir::Type;

impl Binder {
    pub fn bind_expr(&mut self, expr: &AstExpr) -> Expr {
        match expr {
            AstExpr::Lit(lit) => Self::bind_lit_expr(lit),
            AstExpr::Unary(unary) => self.bind_unary_expr(unary),
            AstExpr::Binary(binary) => self.bind_binary_expr(binary),
            AstExpr::Paren(paren) => Expr::paren(self.bind_expr(&paren.expr)),
            AstExpr::Name(name) => self.bind_name_expr(name),
            AstExpr::Assign(assign) => self.bind_assign_expr(assign),
        }
    }

    /// Binds `expr` and reports when its type is not `target`. The bound
    /// expression is returned either way.
    pub fn bind_expr_as(&mut self, expr: &AstExpr, target: Type) -> Expr {
        let bound = self.bind_expr(expr);

        if bound.ty != target {
            self.diagnostics
                .report_cannot_convert(expr.span(), bound.ty.name(), target.name());
        }

        bound
    }

    fn bind_lit_expr(lit: &LiteralExpr) -> Expr {
        // an out of range number was already reported by the lexer
        Expr::lit(lit.value.unwrap_or(Literal::Int(0)))
    }

    fn bind_name_expr(&mut self, name: &NameExpr) -> Expr {
        let ident = &name.ident;

        // the parser already complained about a missing identifier
        if ident.is_missing() {
            return Expr::lit(Literal::Int(0));
        }

        match self.scopes.lookup(&ident.text) {
            Some(var) => Expr::variable(var.clone()),
            None => {
                self.diagnostics
                    .report_undefined_name(ident.span, &ident.text);
                Expr::lit(Literal::Int(0))
            }
        }
    }

    fn bind_assign_expr(&mut self, assign: &AssignExpr) -> Expr {
        let name = assign.ident.text.as_str();
        let bound = self.bind_expr(&assign.expr);

        let Some(var) = self.scopes.lookup(name).cloned() else {
            self.diagnostics
                .report_undefined_name(assign.ident.span, name);
            return bound;
        };

        if var.is_read_only() {
            self.diagnostics.report_cannot_assign(assign.eq.span, name);
        }

        if bound.ty != var.ty() {
            self.diagnostics.report_cannot_convert(
                assign.expr.span(),
                bound.ty.name(),
                var.ty().name(),
            );
            return bound;
        }

        Expr::assign(var, bound)
    }

    fn bind_unary_expr(&mut self, unary: &UnaryExpr) -> Expr {
        let operand = self.bind_expr(&unary.operand);

        match UnaryOperator::bind(unary.op.kind, operand.ty) {
            Some(op) => Expr::unary(op, operand),
            None => {
                self.diagnostics.report_undefined_unary_operator(
                    unary.op.span,
                    &unary.op.text,
                    operand.ty.name(),
                );
                operand
            }
        }
    }

    fn bind_binary_expr(&mut self, binary: &BinaryExpr) -> Expr {
        let lhs = self.bind_expr(&binary.lhs);
        let rhs = self.bind_expr(&binary.rhs);

        match BinaryOperator::bind(binary.op.kind, lhs.ty, rhs.ty) {
            Some(op) => Expr::binary(lhs, op, rhs),
            None => {
                self.diagnostics.report_undefined_binary_operator(
                    binary.op.span,
                    &binary.op.text,
                    lhs.ty.name(),
                    rhs.ty.name(),
                );
                lhs
            }
        }
    }
}
