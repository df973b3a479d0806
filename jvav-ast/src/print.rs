use crate::node::SyntaxNode;
use std::fmt::{self, Write};

/// Writes `node` and everything below it as an indented tree, one node per line.
pub fn write_tree(out: &mut impl Write, node: SyntaxNode<'_>) -> fmt::Result {
    write_node(out, node, "", true)
}

fn write_node(out: &mut impl Write, node: SyntaxNode<'_>, indent: &str, last: bool) -> fmt::Result {
    let marker = if last { "└──" } else { "├──" };
    write!(out, "{indent}{marker}{}", node.name())?;

    if let SyntaxNode::Token(tk) = node {
        if !tk.text.is_empty() {
            write!(out, " {}", tk.text)?;
        }
        if let Some(value) = tk.value {
            write!(out, " ({value})")?;
        }
    }
    writeln!(out)?;

    let indent = format!("{indent}{}", if last { "    " } else { "│   " });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        write_node(out, child, &indent, i + 1 == count)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::expr::Expr;
    use crate::node::SyntaxNode;
    use crate::print::write_tree;
    use crate::token::{Literal, SyntaxToken, TokenKind};
    use jvav_span::Span;

    #[test]
    fn nested_layout() {
        let one = SyntaxToken::new(TokenKind::Number, Span::new(1, 1), "1", Some(Literal::Int(1)));
        let expr = Expr::unary(
            SyntaxToken::new(TokenKind::Minus, Span::new(0, 1), "-", None),
            Expr::lit(one, Some(Literal::Int(1))),
        );

        let mut s = String::new();
        write_tree(&mut s, SyntaxNode::Expr(&expr)).unwrap();

        assert_eq!(
            s,
            "└──UnaryExpression\n    ├──Minus -\n    └──LiteralExpression\n        └──Number 1 (1)\n"
        );
    }
}
