use crate::expr::Expr;
use crate::stmt::{ElseClause, Stmt};
use crate::token::SyntaxToken;
use crate::CompilationUnit;
use jvav_span::Span;
use smallvec::{smallvec, SmallVec};

pub type Children<'a> = SmallVec<[SyntaxNode<'a>; 8]>;

/// Borrowed view over any node of the syntax tree, so printing and span
/// computation can walk the tree without knowing every variant.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    Token(&'a SyntaxToken),
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Else(&'a ElseClause),
    Unit(&'a CompilationUnit),
}

impl<'a> SyntaxNode<'a> {
    pub fn name(self) -> &'static str {
        match self {
            Self::Token(tk) => tk.kind.name(),
            Self::Expr(expr) => match expr {
                Expr::Lit(_) => "LiteralExpression",
                Expr::Unary(_) => "UnaryExpression",
                Expr::Binary(_) => "BinaryExpression",
                Expr::Paren(_) => "ParenthesizedExpression",
                Expr::Name(_) => "NameExpression",
                Expr::Assign(_) => "AssignmentExpression",
            },
            Self::Stmt(stmt) => match stmt {
                Stmt::Block(_) => "BlockStatement",
                Stmt::Expr(_) => "ExpressionStatement",
                Stmt::VarDecl(_) => "VariableDeclaration",
                Stmt::If(_) => "IfStatement",
                Stmt::While(_) => "WhileStatement",
                Stmt::For(_) => "ForStatement",
            },
            Self::Else(_) => "ElseClause",
            Self::Unit(_) => "CompilationUnit",
        }
    }

    /// Direct children in source order. Tokens have none.
    pub fn children(self) -> Children<'a> {
        use SyntaxNode as N;

        match self {
            N::Token(_) => SmallVec::new(),
            N::Expr(expr) => match expr {
                Expr::Lit(lit) => smallvec![N::Token(&lit.token)],
                Expr::Unary(u) => smallvec![N::Token(&u.op), N::Expr(&u.operand)],
                Expr::Binary(b) => smallvec![N::Expr(&b.lhs), N::Token(&b.op), N::Expr(&b.rhs)],
                Expr::Paren(p) => {
                    smallvec![N::Token(&p.open), N::Expr(&p.expr), N::Token(&p.close)]
                }
                Expr::Name(n) => smallvec![N::Token(&n.ident)],
                Expr::Assign(a) => {
                    smallvec![N::Token(&a.ident), N::Token(&a.eq), N::Expr(&a.expr)]
                }
            },
            N::Stmt(stmt) => match stmt {
                Stmt::Block(b) => {
                    let mut v: Children<'a> = smallvec![N::Token(&b.open)];
                    v.extend(b.stmts.iter().map(N::Stmt));
                    v.push(N::Token(&b.close));
                    v
                }
                Stmt::Expr(e) => smallvec![N::Expr(&e.expr)],
                Stmt::VarDecl(d) => smallvec![
                    N::Token(&d.keyword),
                    N::Token(&d.ident),
                    N::Token(&d.eq),
                    N::Expr(&d.init),
                ],
                Stmt::If(i) => {
                    let mut v: Children<'a> =
                        smallvec![N::Token(&i.keyword), N::Expr(&i.cond), N::Stmt(&i.then)];
                    if let Some(e) = &i.r#else {
                        v.push(N::Else(e));
                    }
                    v
                }
                Stmt::While(w) => {
                    smallvec![N::Token(&w.keyword), N::Expr(&w.cond), N::Stmt(&w.body)]
                }
                Stmt::For(f) => smallvec![
                    N::Token(&f.keyword),
                    N::Token(&f.ident),
                    N::Token(&f.eq),
                    N::Expr(&f.lower),
                    N::Token(&f.to),
                    N::Expr(&f.upper),
                    N::Stmt(&f.body),
                ],
            },
            N::Else(e) => smallvec![N::Token(&e.keyword), N::Stmt(&e.stmt)],
            N::Unit(u) => smallvec![N::Stmt(&u.stmt), N::Token(&u.eof)],
        }
    }

    pub fn span(self) -> Span {
        if let Self::Token(tk) = self {
            return tk.span;
        }

        let children = self.children();
        match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span().to(last.span()),
            // every composite node owns at least one token
            _ => unreachable!("syntax node {} without children", self.name()),
        }
    }

    /// All leaf tokens below this node, in source order.
    pub fn tokens(self) -> Vec<&'a SyntaxToken> {
        let mut out = vec![];
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens(self, out: &mut Vec<&'a SyntaxToken>) {
        match self {
            Self::Token(tk) => out.push(tk),
            _ => {
                for child in self.children() {
                    child.collect_tokens(out);
                }
            }
        }
    }
}
