//! Tests for the `evaluate` entry points.
//!
//! These cases exercise precedence, associativity, whitespace handling and
//! fault classification through the public API of both strategies.

mod test_util;

use arith_eval::{
    ArithmeticError, EvalError, Evaluator, MAX_NESTING, Number, PrecedenceClimbing,
    RecursiveDescent, Strategy, SyntaxError, UnknownStrategy, evaluate, evaluate_with,
};
use rstest::rstest;
use test_util::{evaluate_all, is_lexical, is_syntax};

#[rstest]
fn subtraction_is_left_associative() {
    assert_eq!(evaluate("1 - 2 - 3"), Ok(Number::Int(-4)));
}

#[rstest]
fn division_is_left_associative() {
    assert_eq!(evaluate("16 / 4 / 2"), Ok(Number::Float(2.0)));
}

#[rstest]
#[case("2 + 3 * 4", 14)]
#[case("(2 + 3) * 4", 20)]
#[case("2 * 3 + 4", 10)]
#[case("2 * (3 + 4)", 14)]
#[case("((1 + 2) * (3 + 4)) - 5", 16)]
fn precedence_and_grouping(#[case] src: &str, #[case] expected: i64) {
    for result in evaluate_all(src) {
        assert_eq!(result, Ok(Number::Int(expected)), "{src:?}");
    }
}

#[rstest]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate(" 1   +   1 "), evaluate("1+1"));
    assert_eq!(evaluate("1+1"), Ok(Number::Int(2)));
}

#[rstest]
fn decimals_propagate_through_arithmetic() {
    let value = evaluate("1.5 + 2.5").unwrap_or_else(|e| panic!("source errors: {e}"));
    assert_eq!(value, Number::Float(4.0));
    assert!(value.is_float());
}

#[rstest]
#[case("!1+1")]
#[case("1+!1")]
#[case("1+1!")]
fn lexical_faults(#[case] src: &str) {
    for result in evaluate_all(src) {
        assert!(is_lexical(&result), "{src:?}: {result:?}");
    }
}

#[rstest]
#[case("1++1")]
#[case("+1")]
#[case("")]
#[case("(1 + 2")]
fn syntax_faults(#[case] src: &str) {
    for result in evaluate_all(src) {
        assert!(is_syntax(&result), "{src:?}: {result:?}");
    }
}

#[rstest]
fn division_by_zero_is_an_arithmetic_fault() {
    for result in evaluate_all("1 / 0") {
        assert_eq!(
            result,
            Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }
}

#[rstest]
fn repeated_evaluation_is_identical() {
    let src = "3 * (4 - 1.5) / 2";
    assert_eq!(evaluate(src), evaluate(src));
}

#[rstest]
fn strategies_are_interchangeable() {
    let evaluators: [&dyn Evaluator; 2] = [&RecursiveDescent, &PrecedenceClimbing];
    for evaluator in evaluators {
        assert_eq!(evaluator.evaluate("8 - 3 - 2 * 2"), Ok(Number::Int(1)));
    }
}

#[rstest]
fn default_strategy_is_recursive_descent() {
    assert_eq!(Strategy::default(), Strategy::RecursiveDescent);
    assert_eq!(
        evaluate_with("2 * 3", Strategy::PrecedenceClimbing),
        evaluate("2 * 3")
    );
}

#[rstest]
fn errors_render_with_their_class() {
    let Err(err) = evaluate("1 / 0") else {
        panic!("expected error");
    };
    assert_eq!(err.to_string(), "arithmetic error: division by zero");
    let Err(err) = evaluate("1 + #") else {
        panic!("expected error");
    };
    assert_eq!(
        err.to_string(),
        "lexical error: unexpected character '#' at offset 4"
    );
}

#[rstest]
fn unknown_strategy_names_the_input() {
    let Err(err): Result<Strategy, UnknownStrategy> = "shunting-yard".parse() else {
        panic!("expected an unknown strategy");
    };
    assert!(err.to_string().contains("\"shunting-yard\""), "{err}");
}

#[rstest]
fn deep_nesting_is_a_syntax_fault() {
    let depth = 100_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    for result in evaluate_all(&src) {
        assert!(
            matches!(
                &result,
                Err(EvalError::Syntax(SyntaxError::NestingTooDeep { found })) if found.offset() == MAX_NESTING
            ),
            "{result:?}"
        );
    }
}
