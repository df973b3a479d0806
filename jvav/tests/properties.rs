use jvav::{Compilation, DiagnosticKind, EvaluationResult, SyntaxTree, Value, Variables};
use jvav_ast::SyntaxNode;

fn run(src: &str) -> EvaluationResult {
    Compilation::new(SyntaxTree::parse(src))
        .evaluate(&mut Variables::default())
        .unwrap()
}

fn value(src: &str) -> Value {
    let result = run(src);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    result.value.expect("no value")
}

#[test]
fn integer_literals_survive_the_pipeline() {
    for n in [0, 1, 7, 42, 1000, 65535, i32::MAX] {
        assert_eq!(value(&n.to_string()), Value::Int(n));
    }
    assert_eq!(value("12 + 34"), Value::Int(46));
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(value("1 + 2 * 3"), Value::Int(7));
    assert_eq!(value("(1 + 2) * 3"), Value::Int(9));
    assert_eq!(value("2 - 3 - 4"), Value::Int(-5));
    assert_eq!(value("8 / 4 / 2"), Value::Int(1));
    assert_eq!(value("-2 * 3"), Value::Int(-6));
    assert_eq!(value("1 < 2 == true"), Value::Bool(true));
    assert_eq!(value("false || true && false"), Value::Bool(false));
}

#[test]
fn unary_operators() {
    assert_eq!(value("!true"), Value::Bool(false));
    assert_eq!(value("-(-5)"), Value::Int(5));
    assert_eq!(value("!!false"), Value::Bool(false));
}

#[test]
fn block_scoping() {
    assert_eq!(value("{ var x = 10 (x = x + 1) }"), Value::Int(11));
}

#[test]
fn read_only_reassignment() {
    let result = run("{ let x = 10 x = 11 }");

    assert_eq!(result.value, None);
    let kinds: Vec<_> = result.diagnostics.iter().map(|d| d.kind().clone()).collect();
    assert_eq!(kinds, [DiagnosticKind::CannotAssign { name: "x".into() }]);
}

#[test]
fn for_loop_is_inclusive() {
    let src = "{ var result = 0 for i = 1 to 5 { result = result + i } result }";
    assert_eq!(value(src), Value::Int(15));
}

#[test]
fn while_loop() {
    let src = "{ var i = 0 var fact = 1 while i < 5 { i = i + 1 fact = fact * i } fact }";
    assert_eq!(value(src), Value::Int(120));
}

#[test]
fn if_else() {
    assert_eq!(value("{ var a = 0 if 1 > 2 a = 1 else a = 2 a }"), Value::Int(2));
    assert_eq!(value("{ var a = 0 if 1 < 2 a = 1 else a = 2 a }"), Value::Int(1));
}

#[test]
fn undefined_name_blocks_evaluation() {
    let result = run("x + 1");

    assert_eq!(result.value, None);
    let kinds: Vec<_> = result.diagnostics.iter().map(|d| d.kind().clone()).collect();
    assert_eq!(kinds, [DiagnosticKind::UndefinedName { name: "x".into() }]);
}

#[test]
fn type_mismatch_on_assignment() {
    let src = "{ var x = 1 x = 2 < 3 }";
    let result = run(src);

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(
        diagnostic.kind(),
        &DiagnosticKind::CannotConvert {
            from: "Bool",
            to: "Int"
        }
    );
    assert_eq!(diagnostic.span().str_slice(src), "2 < 3");
}

#[test]
fn diagnostics_are_repeatable() {
    let tree = SyntaxTree::parse("{ let a = 1 a = true b + !3 $ }");
    let first = Compilation::new(tree.clone()).evaluate(&mut Variables::default()).unwrap();
    let second = Compilation::new(tree).evaluate(&mut Variables::default()).unwrap();

    assert!(first.diagnostics.len() >= 4);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn leaf_tokens_reconstruct_source() {
    let src = "{ var x = 10 for i = 1 to 3 { if x >= i & true x = x - 1 else x = (x + 2) } }";
    let tree = SyntaxTree::parse(src);
    assert!(tree.diagnostics().is_empty());

    let leaves: String = SyntaxNode::Unit(tree.root())
        .tokens()
        .iter()
        .map(|tk| tk.span.str_slice(src))
        .collect();
    let expected: String = src.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(leaves, expected);
}

#[test]
fn bitwise_operators_lex_alone() {
    assert_eq!(value("12 & 10"), Value::Int(8));
    assert_eq!(value("12 | 3"), Value::Int(15));
    assert_eq!(value("true & false"), Value::Bool(false));
}

#[test]
fn not_equals_negates() {
    assert_eq!(value("1 != 1"), Value::Bool(false));
    assert_eq!(value("1 != 2"), Value::Bool(true));
    assert_eq!(value("false != true"), Value::Bool(true));
}

#[test]
fn oversized_literal() {
    let result = run("2147483648");
    let kinds: Vec<_> = result.diagnostics.iter().map(|d| d.kind().clone()).collect();

    assert_eq!(
        kinds,
        [DiagnosticKind::InvalidNumber {
            text: "2147483648".into(),
            ty: "Int"
        }]
    );
}
