//! Condition expression evaluator
//!
//! Pure function of `(expression, environment snapshot)`: resolves each
//! term against the snapshot, then folds the per-term booleans
//! left-to-right. No precedence, no short-circuiting - every term is
//! evaluated so a malformed version literal in a later term still errors
//! even when the fold result is already determined.

use super::ast::{BoolOp, Comparator, ConditionExpression, Term};
use super::version;
use crate::envgate::environment::EnvironmentView;
use crate::envgate::error::ConditionError;

/// Evaluate a parsed expression against an environment snapshot
pub fn evaluate(
    expr: &ConditionExpression,
    env: &EnvironmentView,
) -> Result<bool, ConditionError> {
    let mut results = Vec::with_capacity(expr.terms().len());
    for term in expr.terms() {
        results.push(evaluate_term(term, env)?);
    }
    Ok(combine(&results, expr.operators()))
}

fn evaluate_term(term: &Term, env: &EnvironmentView) -> Result<bool, ConditionError> {
    let current = env.resolve(&term.variable);
    match (term.comparator, current) {
        (None, current) => Ok(current.is_some()),
        // An unset variable fails every comparison
        (Some(_), None) => Ok(false),
        (Some(op), Some(value)) => compare(op, value, term.literal.as_deref().unwrap_or("")),
    }
}

fn compare(op: Comparator, current: &str, literal: &str) -> Result<bool, ConditionError> {
    // Version semantics only when both sides look version-like
    if current.contains('.') && literal.contains('.') {
        return version::compare(op, current, literal);
    }
    Ok(match op {
        Comparator::Eq => current == literal,
        Comparator::Gt => current > literal,
        Comparator::Lt => current < literal,
    })
}

/// Left-to-right fold of the per-term results.
///
/// Comma-separated terms carry no operator token and combine as AND.
fn combine(results: &[bool], operators: &[BoolOp]) -> bool {
    let mut acc = results[0];
    for (i, result) in results.iter().enumerate().skip(1) {
        acc = match operators.get(i - 1).copied().unwrap_or(BoolOp::And) {
            BoolOp::And => acc && *result,
            BoolOp::Or => acc || *result,
        };
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envgate::condition::parse;

    fn env_with(pairs: &[(&str, &str)]) -> EnvironmentView {
        EnvironmentView::from_pairs(pairs.iter().copied())
    }

    fn eval(payload: &str, env: &EnvironmentView) -> Result<bool, ConditionError> {
        evaluate(&parse(payload).unwrap(), env)
    }

    #[test]
    fn test_defined_variable() {
        let env = env_with(&[("FOO", "1")]);
        assert!(eval("FOO", &env).unwrap());
        assert!(!eval("BAR", &env).unwrap());
    }

    #[test]
    fn test_empty_value_counts_as_undefined() {
        let env = env_with(&[("FOO", "")]);
        assert!(!eval("FOO", &env).unwrap());
        assert!(!eval("FOO=", &env).unwrap());
    }

    #[test]
    fn test_scalar_equality() {
        let env = env_with(&[("STAGE", "prod")]);
        assert!(eval("STAGE=prod", &env).unwrap());
        assert!(!eval("STAGE=dev", &env).unwrap());
    }

    #[test]
    fn test_scalar_ordering_is_lexicographic() {
        let env = env_with(&[("NAME", "beta")]);
        assert!(eval("NAME>alpha", &env).unwrap());
        assert!(eval("NAME<gamma", &env).unwrap());
        assert!(!eval("NAME<alpha", &env).unwrap());
    }

    #[test]
    fn test_unset_variable_fails_every_comparison() {
        let env = EnvironmentView::empty();
        assert!(!eval("V=1.2.3", &env).unwrap());
        assert!(!eval("V>1.0", &env).unwrap());
        assert!(!eval("V<9.9", &env).unwrap());
    }

    #[test]
    fn test_version_comparison_triggers_on_both_dots() {
        let env = env_with(&[("V", "1.2.3")]);
        assert!(eval("V>1.2.0", &env).unwrap());
        assert!(!eval("V<1.2.0", &env).unwrap());
        // Literal without a dot falls back to lexicographic comparison
        assert!(eval("V>1", &env).unwrap());
    }

    #[test]
    fn test_version_charset_error_surfaces() {
        let env = env_with(&[("V", "1.2.3")]);
        assert_eq!(eval("V=1.2.x", &env), Err(ConditionError::VersionCharset));
    }

    #[test]
    fn test_later_term_error_surfaces_despite_decided_fold() {
        // FOO||... is already true, but evaluation stays eager
        let env = env_with(&[("FOO", "yes"), ("V", "1.2.3")]);
        assert_eq!(eval("FOO||V>1.2", &env), Err(ConditionError::VersionArity));
    }

    #[test]
    fn test_and_or_combination() {
        let env = env_with(&[("A", "x"), ("B", "y")]);
        assert!(!eval("A=x&&B=z", &env).unwrap());
        assert!(eval("A=x||B=z", &env).unwrap());
    }

    #[test]
    fn test_comma_list_is_implicit_and() {
        let env = env_with(&[("A", "1"), ("B", "2")]);
        assert!(eval("A,B", &env).unwrap());
        assert!(!eval("A,B,C", &env).unwrap());
    }

    #[test]
    fn test_fold_is_left_to_right_without_precedence() {
        // T1 || T2 && T3 folds as (T1 || T2) && T3, not T1 || (T2 && T3)
        let env = env_with(&[("T1", "1")]);
        assert!(!eval("T1||T2&&T3", &env).unwrap());
    }

    #[test]
    fn test_fold_truth_table_and_then_or() {
        // (T1 && T2) || T3 over all eight combinations
        for bits in 0..8u8 {
            let t1 = bits & 4 != 0;
            let t2 = bits & 2 != 0;
            let t3 = bits & 1 != 0;
            let mut pairs = Vec::new();
            if t1 {
                pairs.push(("T1", "1"));
            }
            if t2 {
                pairs.push(("T2", "1"));
            }
            if t3 {
                pairs.push(("T3", "1"));
            }
            let env = env_with(&pairs);
            let expected = (t1 && t2) || t3;
            assert_eq!(
                eval("T1&&T2||T3", &env).unwrap(),
                expected,
                "combination {bits:03b}"
            );
        }
    }

    #[test]
    fn test_idempotent_for_fixed_environment() {
        let env = env_with(&[("V", "1.0-2.0")]);
        let expr = parse("V=1.0-2.0").unwrap();
        let first = evaluate(&expr, &env).unwrap();
        let second = evaluate(&expr, &env).unwrap();
        assert!(first);
        assert_eq!(first, second);
    }
}
