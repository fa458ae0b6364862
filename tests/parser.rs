use pretty_assertions::assert_eq;
use soch::{
    ast::Node,
    error::SyntaxError,
    interpreter::{lexer::tokenize, parser::core::Parser},
};

fn parse(text: &str) -> Result<Node, SyntaxError> {
    let tokens = tokenize(text).unwrap_or_else(|e| panic!("failed to lex {text:?}: {e}"));
    Parser::new(&tokens).parse()
}

/// Prints a tree as an s-expression so shapes can be compared as strings.
fn sexpr(node: &Node) -> String {
    match node {
        Node::Number { value, .. } => value.to_string(),
        Node::VarAccess { name, .. } => name.clone(),
        Node::UnaryOp { op, operand, .. } => format!("({op} {})", sexpr(operand)),
        Node::BinaryOp { left, op, right, .. } => {
            format!("({op} {} {})", sexpr(left), sexpr(right))
        },
        Node::VarAssign { name, value, .. } => format!("(soch {name} {})", sexpr(value)),
        Node::Conditions { cases, else_case, .. } => {
            let mut out = String::from("(if");
            for case in cases {
                out.push_str(&format!(" [{} {}]", sexpr(&case.condition), sexpr(&case.result)));
            }
            if let Some(otherwise) = else_case {
                out.push_str(&format!(" else {}", sexpr(otherwise)));
            }
            out.push(')');
            out
        },
    }
}

fn shape(text: &str) -> String {
    sexpr(&parse(text).unwrap_or_else(|e| panic!("failed to parse {text:?}: {e}")))
}

#[test]
fn precedence_levels() {
    assert_eq!(shape("2 + 3 * 4"), "(+ 2 (* 3 4))");
    assert_eq!(shape("(2 + 3) * 4"), "(* (+ 2 3) 4)");
    assert_eq!(shape("1 + 2 < 3 * 4"), "(< (+ 1 2) (* 3 4))");
    assert_eq!(shape("1 < 2 aur 3 ya 4"), "(ya (aur (< 1 2) 3) 4)");
}

#[test]
fn left_and_right_associativity() {
    assert_eq!(shape("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(shape("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(shape("2 ^ 3 ^ 2"), "(^ 2 (^ 3 2))");
}

#[test]
fn unary_operators() {
    assert_eq!(shape("--x"), "(- (- x))");
    assert_eq!(shape("-2 ^ 2"), "(- (^ 2 2))");
    assert_eq!(shape("2 ^ -1"), "(^ 2 (- 1))");
    assert_eq!(shape("+a * b"), "(* (+ a) b)");
    assert_eq!(shape("ulta 1 = 2 aur 3"), "(aur (ulta (= 1 2)) 3)");
    assert_eq!(shape("ulta ulta 0"), "(ulta (ulta 0))");
}

#[test]
fn assignments() {
    assert_eq!(shape("soch x 1 + 2 hai"), "(soch x (+ 1 2))");
    assert_eq!(shape("soch y soch z 2 hai hai"), "(soch y (soch z 2))");
}

#[test]
fn conditionals() {
    assert_eq!(shape("if a then 1 elif b then 2 else 3"), "(if [a 1] [b 2] else 3)");
    assert_eq!(shape("if a then 1"), "(if [a 1])");
    assert_eq!(shape("if a then if b then 1 else 2 else 3"),
               "(if [a (if [b 1] else 2)] else 3)");
    assert_eq!(shape("1 + if a then 2 else 3"), "(+ 1 (if [a 2] else 3))");
}

#[test]
fn spans_cover_the_whole_construct() {
    let ast = parse("soch x\n  1 + 2 hai").unwrap();
    let span = ast.span();
    assert_eq!((span.start.line, span.start.column), (0, 0));
    assert_eq!((span.end.line, span.end.column), (1, 11));

    let ast = parse("if 1 then 2 elif 0 then 3").unwrap();
    assert_eq!((ast.span().start.column, ast.span().end.column), (0, 25));

    let ast = parse("(1 + 2)").unwrap();
    assert_eq!((ast.span().start.column, ast.span().end.column), (1, 6));
}

fn assert_children_within(node: &Node) {
    let children: Vec<&Node> = match node {
        Node::Number { .. } | Node::VarAccess { .. } => vec![],
        Node::UnaryOp { operand, .. } => vec![operand.as_ref()],
        Node::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        Node::VarAssign { value, .. } => vec![value.as_ref()],
        Node::Conditions { cases, else_case, .. } => {
            cases.iter()
                 .flat_map(|c| [&c.condition, &c.result])
                 .chain(else_case.as_deref())
                 .collect()
        },
    };

    for child in children {
        assert!(node.span().contains(&child.span()),
                "{} does not contain {}",
                node.span(),
                child.span());
        assert_children_within(child);
    }
}

#[test]
fn parent_spans_contain_child_spans() {
    for text in ["soch x -(1 + 2) * 3 ^ 2 hai",
                 "if ulta a then b elif c >= 1 then d ya e else -f",
                 "1 +\n2 *\n(3 - 4)"]
    {
        assert_children_within(&parse(text).unwrap());
    }
}

#[test]
fn syntax_errors_point_at_the_offending_token() {
    let cases = [("1 2", 2, "Expected '+', '-', '*', '/', '^', comparison, 'aur' or 'ya'"),
                 ("1.2.3", 3, "Expected '+', '-', '*', '/', '^', comparison, 'aur' or 'ya'"),
                 ("(1", 2, "Expected ')'"),
                 ("soch 1 hai", 5, "Expected identifier after 'soch'"),
                 ("soch x 1", 8, "Expected assignment to end with 'hai'"),
                 ("if 1 2", 5, "Expected 'then' after 'if' condition"),
                 ("1 + * 2", 4, "Expected a number, identifier, '+', '-', '(' or 'if'"),
                 (")",
                  0,
                  "Expected 'soch', 'if', 'ulta', number, identifier, '+', '-' or '('"),
                 ("", 0, "Expected 'soch', 'if', 'ulta', number, identifier, '+', '-' or '('")];

    for (text, column, details) in cases {
        let error = parse(text).unwrap_err();
        assert_eq!((error.span.start.column, error.details.as_str()),
                   (column, details),
                   "parsing {text:?}");
    }
}
