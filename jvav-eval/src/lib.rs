use jvav_tir::expr::{Expr, ExprKind};
use jvav_tir::op::{BinaryOpKind, BinaryOperator, UnaryOpKind, UnaryOperator};
use jvav_tir::stmt::{ForStmt, Stmt};
use jvav_tir::VariableSymbol;
use rustc_hash::FxHashMap;
use thiserror::Error;

mod value;

pub use value::Value;

/// The variable store shared by every fragment of a session.
pub type Variables = FxHashMap<VariableSymbol, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("attempt to divide {dividend} by zero")]
    DivisionByZero { dividend: i32 },
}

/// Walks a bound tree against a caller-owned variable store.
pub struct Evaluator<'a> {
    root: &'a Stmt,
    variables: &'a mut Variables,
    last_value: Option<Value>,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Stmt, variables: &'a mut Variables) -> Self {
        Self {
            root,
            variables,
            last_value: None,
        }
    }

    /// Runs the whole tree. Returns the value of the last expression
    /// statement or declaration executed, if any.
    ///
    /// Writes made before a runtime error stay in the store.
    pub fn evaluate(mut self) -> Result<Option<Value>, RuntimeError> {
        let root = self.root;
        self.eval_stmt(root)?;

        tracing::debug!(value = ?self.last_value, "evaluated");

        Ok(self.last_value)
    }

    fn eval_stmt(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Block(stmts) => {
                for stmt in stmts {
                    self.eval_stmt(stmt)?;
                }
            }
            Stmt::Expr(expr) => {
                self.last_value = Some(self.eval_expr(expr)?);
            }
            Stmt::VarDecl(var, init) => {
                let value = self.eval_expr(init)?;
                self.variables.insert(var.clone(), value);
                self.last_value = Some(value);
            }
            Stmt::If(cond, then, r#else) => {
                if self.eval_expr(cond)?.as_bool() {
                    self.eval_stmt(then)?;
                } else if let Some(r#else) = r#else {
                    self.eval_stmt(r#else)?;
                }
            }
            Stmt::While(cond, body) => {
                while self.eval_expr(cond)?.as_bool() {
                    self.eval_stmt(body)?;
                }
            }
            Stmt::For(r#for) => self.eval_for_stmt(r#for)?,
        }

        Ok(())
    }

    fn eval_for_stmt(&mut self, r#for: &ForStmt) -> Result<(), RuntimeError> {
        let lower = self.eval_expr(&r#for.lower)?.as_int();
        let upper = self.eval_expr(&r#for.upper)?.as_int();

        tracing::trace!(var = r#for.var.name(), lower, upper, "for loop");

        // inclusive on both ends
        for i in lower..=upper {
            self.variables.insert(r#for.var.clone(), Value::Int(i));
            self.eval_stmt(&r#for.body)?;
        }

        Ok(())
    }

    fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        let value = match &expr.kind {
            ExprKind::Lit(lit) => Value::from(*lit),
            ExprKind::Variable(var) => match self.variables.get(var) {
                Some(&value) => value,
                None => panic!("read of unassigned variable '{var}'"),
            },
            ExprKind::Assign(var, expr) => {
                let value = self.eval_expr(expr)?;
                self.variables.insert(var.clone(), value);
                value
            }
            ExprKind::Unary(op, operand) => {
                let operand = self.eval_expr(operand)?;
                eval_unary(op, operand)
            }
            ExprKind::Binary(lhs, op, rhs) => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                eval_binary(op, lhs, rhs)?
            }
            ExprKind::Paren(expr) => self.eval_expr(expr)?,
        };

        Ok(value)
    }
}

fn eval_unary(op: &UnaryOperator, operand: Value) -> Value {
    match op.kind {
        UnaryOpKind::Identity => Value::Int(operand.as_int()),
        UnaryOpKind::Negation => Value::Int(operand.as_int().wrapping_neg()),
        UnaryOpKind::LogicalNegation => Value::Bool(!operand.as_bool()),
    }
}

fn eval_binary(op: &BinaryOperator, lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
    use BinaryOpKind::*;

    let value = match op.kind {
        Addition => Value::Int(lhs.as_int().wrapping_add(rhs.as_int())),
        Subtraction => Value::Int(lhs.as_int().wrapping_sub(rhs.as_int())),
        Multiplication => Value::Int(lhs.as_int().wrapping_mul(rhs.as_int())),
        Division => {
            let dividend = lhs.as_int();
            match rhs.as_int() {
                0 => return Err(RuntimeError::DivisionByZero { dividend }),
                divisor => Value::Int(dividend.wrapping_div(divisor)),
            }
        }
        LogicalAnd => Value::Bool(lhs.as_bool() && rhs.as_bool()),
        LogicalOr => Value::Bool(lhs.as_bool() || rhs.as_bool()),
        BitwiseAnd | BitwiseOr | BitwiseXor => bitwise(op.kind, lhs, rhs),
        Equals => Value::Bool(lhs == rhs),
        NotEquals => Value::Bool(lhs != rhs),
        Less => Value::Bool(lhs.as_int() < rhs.as_int()),
        LessOrEquals => Value::Bool(lhs.as_int() <= rhs.as_int()),
        Greater => Value::Bool(lhs.as_int() > rhs.as_int()),
        GreaterOrEquals => Value::Bool(lhs.as_int() >= rhs.as_int()),
    };

    Ok(value)
}

fn bitwise(kind: BinaryOpKind, lhs: Value, rhs: Value) -> Value {
    match (kind, lhs, rhs) {
        (BinaryOpKind::BitwiseAnd, Value::Int(a), Value::Int(b)) => Value::Int(a & b),
        (BinaryOpKind::BitwiseOr, Value::Int(a), Value::Int(b)) => Value::Int(a | b),
        (BinaryOpKind::BitwiseXor, Value::Int(a), Value::Int(b)) => Value::Int(a ^ b),
        (BinaryOpKind::BitwiseAnd, Value::Bool(a), Value::Bool(b)) => Value::Bool(a & b),
        (BinaryOpKind::BitwiseOr, Value::Bool(a), Value::Bool(b)) => Value::Bool(a | b),
        (BinaryOpKind::BitwiseXor, Value::Bool(a), Value::Bool(b)) => Value::Bool(a ^ b),
        _ => unreachable!("{kind:?} on {lhs} and {rhs}"),
    }
}

#[cfg(test)]
mod tests {
    use crate::{Evaluator, RuntimeError, Value, Variables};
    use jvav_binding::bind_global_scope;
    use jvav_parse::SyntaxTree;

    fn eval_with(src: &str, variables: &mut Variables) -> Result<Option<Value>, RuntimeError> {
        let tree = SyntaxTree::parse(src);
        let global = bind_global_scope(None, tree.root());
        assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());
        assert!(global.diagnostics().is_empty(), "{:?}", global.diagnostics());

        Evaluator::new(global.stmt(), variables).evaluate()
    }

    fn eval(src: &str) -> Value {
        eval_with(src, &mut Variables::default())
            .unwrap()
            .expect("no value")
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("12 + 34"), Value::Int(46));
        assert_eq!(eval("1 + 2 * 3"), Value::Int(7));
        assert_eq!(eval("(1 + 2) * 3"), Value::Int(9));
        assert_eq!(eval("2 - 3 - 4"), Value::Int(-5));
        assert_eq!(eval("7 / 2"), Value::Int(3));
        assert_eq!(eval("-(-5)"), Value::Int(5));
        assert_eq!(eval("+3"), Value::Int(3));
    }

    #[test]
    fn wrapping() {
        assert_eq!(eval("2147483647 + 1"), Value::Int(i32::MIN));
        assert_eq!(eval("-2147483647 - 2"), Value::Int(i32::MAX));
    }

    #[test]
    fn logic_and_comparison() {
        assert_eq!(eval("!true"), Value::Bool(false));
        assert_eq!(eval("true && false || true"), Value::Bool(true));
        assert_eq!(eval("1 <= 1 && 2 > 1"), Value::Bool(true));
        assert_eq!(eval("1 != 2"), Value::Bool(true));
        assert_eq!(eval("true != true"), Value::Bool(false));
        assert_eq!(eval("3 == 3"), Value::Bool(true));
    }

    #[test]
    fn bitwise() {
        assert_eq!(eval("6 & 3"), Value::Int(2));
        assert_eq!(eval("6 | 3"), Value::Int(7));
        assert_eq!(eval("6 ^ 3"), Value::Int(5));
        assert_eq!(eval("true ^ true"), Value::Bool(false));
        assert_eq!(eval("false | true"), Value::Bool(true));
    }

    #[test]
    fn block_assignment() {
        assert_eq!(eval("{ var x = 10 (x = x + 1) }"), Value::Int(11));
        assert_eq!(eval("{ var a = 0 var b = 0 a = b = 4 a + b }"), Value::Int(8));
    }

    #[test]
    fn for_is_inclusive() {
        let mut vars = Variables::default();
        eval_with("{ var result = 0 for i = 1 to 5 { result = result + i } }", &mut vars).unwrap();

        let result = vars.iter().find(|(k, _)| k.name() == "result").unwrap().1;
        assert_eq!(*result, Value::Int(15));
    }

    #[test]
    fn for_empty_range() {
        let src = "{ var n = 0 for i = 3 to 1 n = n + 1 n }";
        assert_eq!(eval(src), Value::Int(0));
    }

    #[test]
    fn while_and_if() {
        let src = "{ var i = 0 var even = 0 while i < 10 { if (i / 2) * 2 == i even = even + 1 else 0 i = i + 1 } even }";
        assert_eq!(eval(src), Value::Int(5));
    }

    #[test]
    fn statement_without_value() {
        let result = eval_with("if false 1", &mut Variables::default()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn division_by_zero() {
        let mut vars = Variables::default();
        let err = eval_with("{ var x = 1 x = x / 0 }", &mut vars).unwrap_err();
        assert_eq!(err, RuntimeError::DivisionByZero { dividend: 1 });
        assert_eq!(vars.values().copied().collect::<Vec<_>>(), [Value::Int(1)]);
    }
}
