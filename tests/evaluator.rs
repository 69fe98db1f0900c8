//! 수식 평가기 테스트: 문법, 우선순위, 허용 목록, 정의역 오류.
use advanced_calculator::error::ErrorKind;
use advanced_calculator::expr::{evaluate, factorial_of, parse, reciprocal_of, EvalError, Expression};

fn eval_ok(input: &str) -> f64 {
    evaluate(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"))
}

fn assert_invalid(input: &str) {
    match evaluate(input) {
        Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidExpression, "{input:?}: {e}"),
        Ok(v) => panic!("{input:?} should fail, got {v}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_ok("2+2"), 4.0);
    assert_eq!(eval_ok("2 + 3 * 4"), 14.0);
    assert_eq!(eval_ok("(2 + 3) * 4"), 20.0);
    assert_eq!(eval_ok("10 / 4"), 2.5);
    assert_eq!(eval_ok("7 - 10"), -3.0);
    assert_eq!(eval_ok("  42  "), 42.0);
}

#[test]
fn both_power_spellings() {
    assert_eq!(eval_ok("2^3"), 8.0);
    assert_eq!(eval_ok("2**3"), 8.0);
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("-2^2"), -4.0);
    assert_eq!(eval_ok("(-2)^2"), 4.0);
    assert_eq!(eval_ok("2^-1"), 0.5);
}

#[test]
fn unary_signs() {
    assert_eq!(eval_ok("-3"), -3.0);
    assert_eq!(eval_ok("--3"), 3.0);
    assert_eq!(eval_ok("+3 - -2"), 5.0);
}

#[test]
fn number_literals() {
    assert_eq!(eval_ok("1.5e3"), 1500.0);
    assert_eq!(eval_ok("2E-2"), 0.02);
    assert_eq!(eval_ok(".5 + 0.25"), 0.75);
}

#[test]
fn display_glyphs_are_normalized() {
    assert_eq!(eval_ok("6×7"), 42.0);
    assert_eq!(eval_ok("9÷3"), 3.0);
}

#[test]
fn functions_and_constants() {
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert!((eval_ok("sin(pi/2)") - 1.0).abs() < 1e-12);
    assert!((eval_ok("cos(0)") - 1.0).abs() < 1e-12);
    assert!((eval_ok("2*π") - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    assert!((eval_ok("log(e)") - 1.0).abs() < 1e-12);
    assert!((eval_ok("log10(1000)") - 3.0).abs() < 1e-12);
    assert_eq!(eval_ok("abs(-5)"), 5.0);
    assert_eq!(eval_ok("pow(2, 10)"), 1024.0);
    assert!((eval_ok("atan(1)*4") - std::f64::consts::PI).abs() < 1e-12);
    assert!((eval_ok("asin(1)") - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn keypad_insertions_evaluate() {
    // x², %, ln 버튼이 넣는 문자열
    assert_eq!(eval_ok("3**2"), 9.0);
    assert_eq!(eval_ok("50/100"), 0.5);
    assert!((eval_ok("log(1)")).abs() < 1e-12);
}

#[test]
fn division_by_zero_is_invalid_expression() {
    assert_invalid("1/0");
    assert_invalid("5/(2-2)");
    assert_invalid("0^-1");
}

#[test]
fn math_domain_errors() {
    assert_invalid("sqrt(-1)");
    assert_invalid("log(0)");
    assert_invalid("log10(-10)");
    assert_invalid("asin(2)");
    assert_invalid("acos(-1.5)");
}

#[test]
fn non_finite_results_are_rejected() {
    assert_invalid("10^400");
    assert_invalid("1e400");
    assert_invalid("(-8)^(1/3)");
}

#[test]
fn syntax_errors() {
    for input in ["", "   ", "2+", "(1+2", "1+2)", "2 3", "*3", "2e", ".", "sqrt()", "pow(2)", "sin(1, 2)"] {
        assert_invalid(input);
    }
}

#[test]
fn deep_nesting_is_rejected_without_overflow() {
    let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_invalid(&parens);
    assert_invalid(&format!("{}1", "-".repeat(100_000)));
    assert_invalid(&format!("{}1", "1+".repeat(10_000)));
    assert_invalid(&format!("{}1", "2*".repeat(10_000)));
    assert_invalid(&format!("2{}", "^2".repeat(10_000)));
    assert_invalid(&format!("{}1{}", "sqrt(".repeat(10_000), ")".repeat(10_000)));

    let err = parse(&parens).unwrap_err();
    assert!(err.message.contains("nested too deeply"), "{}", err.message);
}

#[test]
fn moderate_nesting_still_evaluates() {
    assert_eq!(eval_ok(&format!("{}7{}", "(".repeat(50), ")".repeat(50))), 7.0);
    assert_eq!(eval_ok(&format!("{}1", "-".repeat(40))), 1.0);
    assert_eq!(eval_ok(&format!("{}1", "1+".repeat(200))), 201.0);
    assert!((eval_ok(&format!("{}16{}", "sqrt(".repeat(2), ")".repeat(2))) - 2.0).abs() < 1e-12);
}

#[test]
fn only_whitelisted_names_resolve() {
    for input in [
        "import os",
        "__import__('os')",
        "exec(1)",
        "x + 1",
        "PI",
        "Sin(0)",
        "sqrt",
        "pi(2)",
        "open('f')",
        "2 # comment",
        "a.b",
        "[1, 2]",
    ] {
        assert_invalid(input);
    }
}

#[test]
fn parse_builds_tree() {
    let tree = parse("1 + 2").unwrap();
    assert!(matches!(tree, Expression::BinaryOp { .. }));
    assert!(parse("sin").is_err());
}

#[test]
fn factorial() {
    assert_eq!(factorial_of(0.0), Ok(1.0));
    assert_eq!(factorial_of(5.0), Ok(120.0));
    assert!(factorial_of(170.0).unwrap().is_finite());
    assert!(factorial_of(171.0).is_err());
    assert!(factorial_of(-1.0).is_err());
    assert!(factorial_of(3.5).is_err());
    assert!(factorial_of(f64::NAN).is_err());
}

#[test]
fn reciprocal() {
    assert_eq!(reciprocal_of(4.0), Ok(0.25));
    assert_eq!(reciprocal_of(-0.5), Ok(-2.0));
    assert_eq!(reciprocal_of(0.0), Err(EvalError::DivisionByZero));
    assert_eq!(
        reciprocal_of(0.0).unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
    assert!(reciprocal_of(f64::INFINITY).is_err());
}
