use pretty_assertions::assert_eq;
use soch::{
    error::{Error, RuntimeErrorKind},
    get_result,
    interpreter::evaluator::core::Interpreter,
    run,
    util::position::{Position, Source},
};

fn report(text: &str) -> String {
    get_result("demo", text).expect_err("expected the program to fail")
}

#[test]
fn invalid_character_points_at_the_character() {
    assert_eq!(report("1 @ 2"),
               "Error in file demo, line 1\n\n1 @ 2\n  ^\n\nInvalid Character: '@'");
}

#[test]
fn invalid_character_on_a_later_line() {
    assert_eq!(report("1 +\n  (2 @"),
               "Error in file demo, line 2\n\n  (2 @\n     ^\n\nInvalid Character: '@'");
}

#[test]
fn lone_bang_expects_equals() {
    assert_eq!(report("1 ! 2"),
               "Error in file demo, line 1\n\n1 ! 2\n  ^^\n\nExpected Character: '=' after !");
    assert_eq!(report("1 !"),
               "Error in file demo, line 1\n\n1 !\n  ^\n\nExpected Character: '=' after !");
}

#[test]
fn unclosed_parenthesis_points_past_the_end() {
    assert_eq!(report("(1 + 2"),
               "Error in file demo, line 1\n\n(1 + 2\n      ^\n\nInvalid Syntax: Expected ')'");
}

#[test]
fn assignment_needs_an_identifier() {
    assert_eq!(report("soch 5 hai"),
               "Error in file demo, line 1\n\nsoch 5 hai\n     ^\n\nInvalid Syntax: Expected \
                identifier after 'soch'");
}

#[test]
fn assignment_needs_a_closing_hai() {
    assert_eq!(report("soch x 5"),
               "Error in file demo, line 1\n\nsoch x 5\n        ^\n\nInvalid Syntax: Expected \
                assignment to end with 'hai'");
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(report("1 2"),
               "Error in file demo, line 1\n\n1 2\n  ^\n\nInvalid Syntax: Expected '+', '-', \
                '*', '/', '^', comparison, 'aur' or 'ya'");
}

#[test]
fn expression_that_cannot_start_gets_the_generic_message() {
    assert_eq!(report("* 2"),
               "Error in file demo, line 1\n\n* 2\n^\n\nInvalid Syntax: Expected 'soch', 'if', \
                'ulta', number, identifier, '+', '-' or '('");
}

#[test]
fn missing_then_names_the_branch() {
    assert!(report("if 1 2").ends_with("Invalid Syntax: Expected 'then' after 'if' condition"));
    assert!(report("if 0 then 1 elif 1 2")
            .ends_with("Invalid Syntax: Expected 'then' after 'elif' condition"));
}

#[test]
fn division_by_zero_points_at_the_divisor() {
    assert_eq!(report("10 / 0"),
               "Traceback:\n\tError in file demo, line 1 of <MAIN>,\n\n10 / 0\n     ^\nRuntime \
                Error: Division by zero not defined");
}

#[test]
fn undefined_variable_points_at_the_access() {
    assert_eq!(report("y"),
               "Traceback:\n\tError in file demo, line 1 of <MAIN>,\n\ny\n^\nRuntime Error: y is \
                not defined!");
}

#[test]
fn multi_line_spans_mark_every_line() {
    assert_eq!(report("10 / (1\n- 1)"),
               "Traceback:\n\tError in file demo, line 1 of <MAIN>,\n\n10 / (1\n      ^\n- \
                1)\n^^^\nRuntime Error: Division by zero not defined");
}

#[test]
fn traceback_lists_frames_outermost_first() {
    let source = Source::new("demo", "1 +\ny");
    let mut interpreter = Interpreter::new();
    interpreter.enter_frame("<inner>", Position::new(0, 0, 0));

    let error = run(&source, &mut interpreter).unwrap_err();
    assert_eq!(error.render(&source),
               "Traceback:\n\tError in file demo, line 1 of <MAIN>,\n\tError in file demo, line \
                2 of <inner>,\n\ny\n^\nRuntime Error: y is not defined!");
}

#[test]
fn runtime_errors_carry_kind_span_and_frame() {
    let source = Source::new("demo", "1 + (2 / 0)");
    let Err(Error::Runtime(error)) = run(&source, &mut Interpreter::new()) else {
        panic!("expected a runtime error");
    };

    assert_eq!(error.kind, RuntimeErrorKind::DivisionByZero);
    assert_eq!((error.span.start.column, error.span.end.column), (9, 10));
    assert_eq!(error.context.name(), "<MAIN>");
}

#[test]
fn error_names_and_one_line_messages() {
    let cases = [("@", "Invalid Character", "Invalid Character: '@'"),
                 ("(", "Invalid Syntax", "Invalid Syntax: Expected 'soch', 'if', 'ulta', \
                                          number, identifier, '+', '-' or '('"),
                 ("x", "Runtime Error", "Runtime Error: x is not defined!")];

    for (text, name, message) in cases {
        let error = run(&Source::new("demo", text), &mut Interpreter::new()).unwrap_err();
        assert_eq!(error.name(), name);
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn every_stage_reports_its_span() {
    let cases = [("1 + @", (4, 5)), ("1 + )", (4, 5)), ("2 * (1 / 0)", (9, 10))];

    for (text, columns) in cases {
        let error = run(&Source::new("demo", text), &mut Interpreter::new()).unwrap_err();
        let span = error.span();
        assert_eq!((span.start.column, span.end.column), columns, "in {text:?}");
    }
}
