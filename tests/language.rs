use std::fs;

use pretty_assertions::assert_eq;
use soch::{
    get_result,
    interpreter::{
        evaluator::core::Interpreter, lexer::tokenize, parser::core::Parser,
        value::numeric::Numeric,
    },
    run,
    util::position::Source,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_produce_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "soch"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        count += 1;
        match get_result(&path.display().to_string(), &code) {
            Ok(Some(value)) => assert_eq!(value.to_string(), expected.trim(), "in {path:?}"),
            Ok(None) => panic!("Demo {path:?} produced no value"),
            Err(report) => panic!("Demo {path:?} failed:\n{code}\n{report}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn value_of(src: &str) -> Numeric {
    match get_result("test", src) {
        Ok(Some(number)) => number.value,
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\n{e}"),
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_eq!(value_of(src), Numeric::Int(expected), "evaluating {src:?}");
}

fn assert_float(src: &str, expected: f64) {
    assert_eq!(value_of(src), Numeric::Float(expected), "evaluating {src:?}");
}

fn assert_failure(src: &str) -> String {
    match get_result("test", src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(report) => report,
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_int("5", 5);
    assert_int("0", 0);
    assert_float("2.5", 2.5);
    assert_float(".5", 0.5);
    assert_float("3.", 3.0);
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_int("2 + 3 * 4", 14);
    assert_int("(2 + 3) * 4", 20);
    assert_int("2 ^ 3 ^ 2", 512);
    assert_int("10 - 4 - 3", 3);
    assert_int("-2 ^ 2", -4);
    assert_int("--3", 3);
    assert_int("+5", 5);
    assert_int("2 * -3", -6);
}

#[test]
fn division_always_yields_a_float() {
    assert_float("10 / 2", 5.0);
    assert_float("7 / 2", 3.5);
    assert_eq!(get_result("test", "10 / 2").unwrap().unwrap().to_string(), "5.0");
}

#[test]
fn integer_overflow_widens_to_float() {
    assert!(matches!(value_of("9223372036854775807 + 1"), Numeric::Float(_)));
    assert!(matches!(value_of("99999999999999999999"), Numeric::Float(_)));
    assert!(matches!(value_of("2 ^ 100"), Numeric::Float(_)));
    assert_int("2 ^ 10", 1024);
    assert_float("2 ^ -1", 0.5);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_int("3 > 2", 1);
    assert_int("2 >= 3", 0);
    assert_int("2 < 3", 1);
    assert_int("3 <= 3", 1);
    assert_int("2 = 2", 1);
    assert_int("2 != 2", 0);
    assert_int("2 = 2.0", 1);
    assert_int("1 + 1 = 2", 1);
}

#[test]
fn logical_operators_yield_the_deciding_operand() {
    assert_int("2 aur 3", 3);
    assert_int("2 aur 0", 0);
    assert_int("0 aur 5", 0);
    assert_int("0 ya 0", 0);
    assert_int("0 ya 7", 7);
    assert_int("4 ya 7", 4);
    assert_int("2.5 ya 0", 2);
    assert_int("0.0 ya -1.5", -1);
    assert_int("1.5 aur 0.25", 0);
}

#[test]
fn logical_negation_and_chains() {
    assert_int("ulta 0", 1);
    assert_int("ulta 5", 0);
    assert_int("ulta 1 = 2", 1);
    assert_int("1 < 2 aur 3 > 4 ya 1", 1);
}

#[test]
fn assignment_binds_and_yields_value() {
    let mut interpreter = Interpreter::new();
    let mut eval = |text: &str| {
        run(&Source::new("<stdin>", text), &mut interpreter).unwrap()
                                                            .map(|n| n.value)
    };

    assert_eq!(eval("soch x 5 hai"), Some(Numeric::Int(5)));
    assert_eq!(eval("x"), Some(Numeric::Int(5)));
    assert_eq!(eval("soch x x + 1 hai"), Some(Numeric::Int(6)));
    assert_eq!(eval("x * 2"), Some(Numeric::Int(12)));
    assert_eq!(eval("soch y soch z 2 hai hai"), Some(Numeric::Int(2)));
    assert_eq!(eval("y + z"), Some(Numeric::Int(4)));
}

#[test]
fn variable_names_in_any_script() {
    let mut interpreter = Interpreter::new();
    run(&Source::new("<stdin>", "soch नाम 5 hai"), &mut interpreter).unwrap();
    run(&Source::new("<stdin>", "soch café 2 hai"), &mut interpreter).unwrap();

    let value = run(&Source::new("<stdin>", "नाम * café"), &mut interpreter).unwrap();
    assert_eq!(value.map(|n| n.value), Some(Numeric::Int(10)));
}

#[test]
fn sessions_do_not_share_bindings() {
    let mut first = Interpreter::new();
    run(&Source::new("a", "soch x 1 hai"), &mut first).unwrap();

    let error = run(&Source::new("b", "x"), &mut Interpreter::new()).unwrap_err();
    assert_eq!(error.to_string(), "Runtime Error: x is not defined!");
}

#[test]
fn conditionals_pick_first_true_branch() {
    assert_int("if 0 then 1 elif 1 then 2 else 3", 2);
    assert_int("if 1 then 10 elif 1 then 20", 10);
    assert_int("if 0 then 1 else 3", 3);
    assert_int("if 2 > 1 then if 0 then 1 else 2 else 3", 2);
    assert_int("soch x if 1 then 4 hai", 4);
}

#[test]
fn later_branches_are_not_evaluated() {
    assert_int("if 1 then 10 elif 1 / 0 then 20", 10);
    assert_int("if 1 then 10 else undefined", 10);
}

#[test]
fn conditional_without_taken_branch_has_no_value() {
    assert_eq!(get_result("test", "if 0 then 1").unwrap(), None);
    assert_eq!(get_result("test", "if 0 then 1 elif 0 then 2").unwrap(), None);

    let report = assert_failure("(if 0 then 1) + 2");
    assert!(report.ends_with("Runtime Error: Expression produced no value"), "{report}");
    let report = assert_failure("soch x if 0 then 1 hai");
    assert!(report.ends_with("Runtime Error: Expression produced no value"), "{report}");
}

#[test]
fn operands_evaluate_left_to_right() {
    let report = assert_failure("y + 1 / 0");
    assert!(report.ends_with("Runtime Error: y is not defined!"), "{report}");

    let report = assert_failure("1 / 0 + y");
    assert!(report.ends_with("Runtime Error: Division by zero not defined"), "{report}");
}

#[test]
fn failures_of_every_stage() {
    assert!(assert_failure("1 @ 2").ends_with("Invalid Character: '@'"));
    assert!(assert_failure("1 ! 2").ends_with("Expected Character: '=' after !"));
    assert!(assert_failure("(1 + 2").ends_with("Invalid Syntax: Expected ')'"));
    assert!(assert_failure("10 / 0").ends_with("Runtime Error: Division by zero not defined"));
    assert!(assert_failure("10 / 0.0").ends_with("Runtime Error: Division by zero not defined"));
    assert!(assert_failure("y").ends_with("Runtime Error: y is not defined!"));
}

#[test]
fn evaluation_is_repeatable() {
    let source = Source::new("test", "soch x 2 hai");
    let mut interpreter = Interpreter::new();

    let first = run(&source, &mut interpreter).unwrap();
    let second = run(&source, &mut interpreter).unwrap();
    assert_eq!(first, second);
    assert_eq!(run(&Source::new("test", "x ^ 3"), &mut interpreter).unwrap()
                                                                  .map(|n| n.value),
               Some(Numeric::Int(8)));
}

#[test]
fn visiting_the_same_tree_twice_gives_the_same_value() {
    let mut interpreter = Interpreter::new();
    run(&Source::new("test", "soch x 3 hai"), &mut interpreter).unwrap();
    let binding = interpreter.symbols().get("x").copied();

    for text in ["x * 2 + x", "if x > 1 then 7 / 2 else 0", "x aur 2.5"] {
        let tokens = tokenize(text).unwrap();
        let ast = Parser::new(&tokens).parse().unwrap();

        let first = interpreter.visit(&ast).unwrap();
        let second = interpreter.visit(&ast).unwrap();
        assert_eq!(first, second, "evaluating {text:?}");
        assert_eq!(interpreter.symbols().get("x").copied(), binding);
    }
}

#[test]
fn newlines_are_whitespace() {
    assert_int("1 +\n2", 3);
    assert_int("soch x\n  7\nhai", 7);
    assert_int("if 0 then 1\r\nelse 2", 2);
}
