use numeval::{error::EvalError, evaluate};

const TOLERANCE: f64 = 1e-9;

fn assert_value(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(value) => {
            let allowed = TOLERANCE.max(expected.abs() * TOLERANCE);
            assert!((value - expected).abs() <= allowed,
                    "'{expression}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str) -> EvalError {
    match evaluate(expression) {
        Ok(value) => panic!("'{expression}' succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_operations() {
    assert_value("2+3", 5.0);
    assert_value("10-3", 7.0);
    assert_value("4*5", 20.0);
    assert_value("15/3", 5.0);
    assert_value("2^3", 8.0);
}

#[test]
fn spaces_parentheses_and_negatives() {
    assert_value("2 + 3", 5.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("-5+10", 5.0);
    assert_value("(3-5)*-2", 4.0);
    assert_value("((2+3)*(4+1))", 25.0);
    assert_value("2^-3", 0.125);
}

#[test]
fn decimals() {
    assert_value("2.5+3.5", 6.0);
    assert_value("0.1*10", 1.0);
    assert_value("3.14*2", 6.28);
    assert_value(".5*4", 2.0);
}

#[test]
fn operator_precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    // Right-associative power: 2^(3^2), not (2^3)^2.
    assert_value("2^3^2", 512.0);
    assert_value("2-3-4", -5.0);
    assert_value("100/10/2", 5.0);
}

#[test]
fn division_by_zero_is_distinct() {
    assert_eq!(assert_failure("10/0"), EvalError::DivisionByZero);
    assert_eq!(assert_failure("10/(5-5)"), EvalError::DivisionByZero);
}

#[test]
fn domain_errors() {
    assert!(matches!(assert_failure("sqrt(-4)"), EvalError::Domain { .. }));
    assert!(matches!(assert_failure("log(0)"), EvalError::Domain { .. }));
    assert!(matches!(assert_failure("log(-1)"), EvalError::Domain { .. }));
    // Negative base with fractional exponent has no real value.
    assert!(matches!(assert_failure("(0-8)^0.5"), EvalError::Domain { .. }));
}

#[test]
fn unknown_functions() {
    assert_eq!(assert_failure("foo(2)"),
               EvalError::UnknownFunction { name: "foo".to_string() });
    assert_eq!(assert_failure("2+pie(1)"),
               EvalError::UnknownFunction { name: "pie".to_string() });
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(assert_failure("("), EvalError::UnbalancedParentheses);
    assert_eq!(assert_failure(")"), EvalError::UnbalancedParentheses);
    assert_eq!(assert_failure("((1+2)"), EvalError::UnbalancedParentheses);
    assert_eq!(assert_failure("2+3)"), EvalError::UnbalancedParentheses);
    assert_eq!(assert_failure("sin(1"), EvalError::UnbalancedParentheses);
}

#[test]
fn malformed_expressions() {
    assert!(matches!(assert_failure("2++3"),
                     EvalError::InsufficientOperands { operator: '+' }));
    assert!(matches!(assert_failure("2 3"), EvalError::Malformed { .. }));
    assert!(matches!(assert_failure("2x"), EvalError::Malformed { .. }));
    assert!(matches!(assert_failure("()"), EvalError::Malformed { .. }));
    assert!(matches!(assert_failure("-(2+3)"), EvalError::Malformed { .. }));
    assert!(matches!(assert_failure("2 $ 3"), EvalError::Malformed { .. }));
}

#[test]
fn empty_input() {
    assert_eq!(assert_failure(""), EvalError::EmptyExpression);
    assert_eq!(assert_failure("   "), EvalError::EmptyExpression);
    assert_eq!(assert_failure("\t\n"), EvalError::EmptyExpression);
}

#[test]
fn builtin_functions() {
    assert_value("sin(pi/2)", 1.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(pi/4)", 1.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("log(e)", 1.0);
    assert_value("exp(1)", std::f64::consts::E);
}

#[test]
fn degree_arguments() {
    assert_value("sin(90deg)", 1.0);
    assert_value("cos(180deg)", -1.0);
    assert_value("tan(45deg)", 1.0);
    assert_value("sin((45+45)deg)", 90.0_f64.to_radians().sin());
}

#[test]
fn nested_functions_resolve_inside_out() {
    assert_value("sin(cos(0))", 0.0_f64.cos().sin());
    assert_value("sqrt(sin(pi/2)+cos(0))", 2.0_f64.sqrt());
    assert_value("log(exp(1))", 1.0);
}

#[test]
fn constants_do_not_corrupt_identifiers() {
    // A naive substring replacement of `e` would mangle `exp`.
    assert_value("exp(1)", std::f64::consts::E);
    assert_value("exp(0)+pi", 1.0 + std::f64::consts::PI);
    // Constants glued to digits are not standalone identifiers.
    assert!(matches!(assert_failure("2pi"), EvalError::Malformed { .. }));
}

#[test]
fn compound_expressions() {
    assert_value("((2+3)*4)^2", 400.0);
    assert_value("(2^3)+(4^2)", 24.0);
    assert_value("exp(log(e^2))",
                 std::f64::consts::E * std::f64::consts::E);
}

#[test]
fn evaluation_is_pure() {
    let first = evaluate("sin(pi/3)^2 + cos(pi/3)^2").unwrap();
    let second = evaluate("sin(pi/3)^2 + cos(pi/3)^2").unwrap();
    assert_eq!(first, second);
}

#[test]
fn deep_nesting_is_rejected() {
    let mut deep = "sin(".repeat(100);
    deep.push('0');
    deep.push_str(&")".repeat(100));
    assert!(matches!(assert_failure(&deep), EvalError::Malformed { .. }));
}

#[test]
fn reasonable_nesting_is_accepted() {
    let mut nested = "sin(".repeat(20);
    nested.push('0');
    nested.push_str(&")".repeat(20));
    assert_value(&nested, 0.0);
}
