use std::fs;

use spi::{
    error::ErrorKind,
    evaluate_line,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_transcripts(&content) {
            count += 1;
            let actual = render(&input);
            assert_eq!(actual, expected, "example `{input}` in {path:?} printed the wrong answer");
        }
    }

    assert!(count > 0, "No spi examples found in book/src");
}

/// Collects `(input, expected output)` pairs from ```spi blocks.
fn extract_transcripts(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut inside = false;
    let mut pending: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```spi") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            assert!(pending.is_none(), "transcript ends without an answer");
            continue;
        }
        if !inside {
            continue;
        }
        match pending.take() {
            Some(input) => pairs.push((input, line.to_string())),
            None => {
                let input = line.strip_prefix("spi> ")
                                .unwrap_or_else(|| panic!("expected a prompt line, got {line:?}"));
                pending = Some(input.to_string());
            },
        }
    }

    pairs
}

fn render(src: &str) -> String {
    match evaluate_line(src) {
        Ok(value) => value.to_string(),
        Err(e) => e.to_string(),
    }
}

fn assert_value(src: &str, expected: Value) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for `{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind, position: usize) {
    match evaluate_line(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "wrong error kind for `{src}`: {e}");
            assert_eq!(e.position(), position, "wrong position for `{src}`: {e}");
        },
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", Value::Integer(7));
    assert_value("(1 + 2) * 3", Value::Integer(9));
    assert_value("2 * 3 + 4", Value::Integer(10));
    assert_value("2 * (3 + 4)", Value::Integer(14));
    assert_value("((((5))))", Value::Integer(5));
    assert_value("(2 + 3) * (4 - 1)", Value::Integer(15));
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", Value::Integer(5));
    assert_value("100 - 50 + 25", Value::Integer(75));
    assert_value("8 / 2 / 2", Value::Real(2.0));
    assert_value("2 * 6 / 4", Value::Real(3.0));
}

#[test]
fn division_is_always_real() {
    assert_value("7 / 2", Value::Real(3.5));
    assert_value("6 / 2", Value::Real(3.0));
    assert_value("0 / 5", Value::Real(0.0));
    assert_value("1 + 7 / 2", Value::Real(4.5));
    assert_value("7 / 2 * 2", Value::Real(7.0));
    assert!(evaluate_line("4 / 2").unwrap().is_real());
    assert!(evaluate_line("4 * 2").unwrap().is_integer());
}

#[test]
fn reals_print_with_a_fraction() {
    assert_eq!(render("6 / 2"), "3.0");
    assert_eq!(render("7 / 2"), "3.5");
    assert_eq!(render("0 - 6 / 4"), "-1.5");
    assert_eq!(render("1 + 2"), "3");
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("3+4", Value::Integer(7));
    assert_value("   3   +   4   ", Value::Integer(7));
    assert_value("\t3\t*\t4", Value::Integer(12));
    assert_value("( 1 + 2 )*3", Value::Integer(9));
}

#[test]
fn evaluation_is_repeatable() {
    for _ in 0..3 {
        assert_value("2 * (3 + 4) - 7 / 2", Value::Real(10.5));
    }
}

#[test]
fn integer_limits() {
    assert_value("9223372036854775807", Value::Integer(i64::MAX));
    assert_value("0 - 9223372036854775807 - 1", Value::Integer(i64::MIN));
    assert_failure("9223372036854775807 + 1", ErrorKind::Overflow, 20);
    assert_failure("0 - 9223372036854775807 - 2", ErrorKind::Overflow, 24);
    assert_failure("4611686018427387904 * 2", ErrorKind::Overflow, 20);
    assert_failure("9223372036854775808", ErrorKind::Overflow, 0);
}

#[test]
fn division_by_zero() {
    assert_failure("5 / 0", ErrorKind::DivisionByZero, 2);
    assert_failure("1 + 8 / (4 - 4)", ErrorKind::DivisionByZero, 6);
    assert_failure("1 / (1 / 2 - 1 / 2)", ErrorKind::DivisionByZero, 2);
}

#[test]
fn large_integers_round_when_mixed_with_reals() {
    assert_value("9007199254740993 / 1", Value::Real(9_007_199_254_740_992.0));
    assert_value("9223372036854775807 / 1", Value::Real(9_223_372_036_854_775_808.0));
    assert_value("7 / 2 + 9007199254740993", Value::Real(9_007_199_254_740_996.0));
    assert_value("9007199254740993 - 1", Value::Integer(9_007_199_254_740_992));
    assert_eq!(render("9007199254740993 / 1"), "9007199254740992.0");
}

#[test]
fn invalid_characters() {
    assert_failure("3 # 4", ErrorKind::Lex, 2);
    assert_failure("1.5", ErrorKind::Lex, 1);
    assert_failure("abc", ErrorKind::Lex, 0);
    assert_failure("2 ^ 3", ErrorKind::Lex, 2);
    assert_failure("é + 1", ErrorKind::Lex, 0);
    assert_failure("1 + é", ErrorKind::Lex, 4);
}

#[test]
fn syntax_errors() {
    assert_failure("3 +", ErrorKind::Syntax, 3);
    assert_failure("3 + ", ErrorKind::Syntax, 4);
    assert_failure("(1 + 2", ErrorKind::Syntax, 6);
    assert_failure("()", ErrorKind::Syntax, 1);
    assert_failure("-3", ErrorKind::Syntax, 0);
    assert_failure("3 + 4 )", ErrorKind::Syntax, 6);
    assert_failure("2 3", ErrorKind::Syntax, 2);
    assert_failure("1 + * 2", ErrorKind::Syntax, 4);
    assert_failure("", ErrorKind::Syntax, 0);
}

#[test]
fn error_messages() {
    assert_eq!(render("3 + "),
               "Syntax error at position 4: Expected integer or '(', found end of input.");
    assert_eq!(render("3 # 4"), "Lex error at position 2: Invalid character '#'.");
    assert_eq!(render("5 / 0"), "Division by zero at position 2.");
    assert_eq!(render("(1"), "Syntax error at position 2: Expected ')', found end of input.");
    assert_eq!(render("1 )"),
               "Syntax error at position 2: Extra tokens after expression, found ')'.");
}

#[test]
fn positions_count_characters() {
    assert_failure("«1» + 1", ErrorKind::Lex, 0);
    assert_failure("1 + ü", ErrorKind::Lex, 4);
    assert_failure("1 + 2 ü", ErrorKind::Lex, 6);
}

#[test]
fn first_error_wins() {
    assert_failure("1 / 0 + 1 / 0", ErrorKind::DivisionByZero, 2);
    assert_failure("(1 / 0) # 2", ErrorKind::Lex, 8);
    assert_failure("3 + # + 4", ErrorKind::Lex, 4);
}
