//! Condition payload parser
//!
//! Turns a raw `runOnEnv`/`skipOnEnv` payload into a [`ConditionExpression`]:
//! - `FOO` - variable is defined (non-empty)
//! - `FOO=1.2.3`, `FOO>1.0`, `FOO<2.0` - comparison against a literal
//! - terms joined by `&&`, `||` or `,` (comma carries no operator token)

use super::ast::{BoolOp, Comparator, ConditionExpression, Term};
use super::tokenizer::{tokenize, Token};
use crate::envgate::error::ConditionError;

/// Parse a condition payload into an expression
pub fn parse(payload: &str) -> Result<ConditionExpression, ConditionError> {
    let mut raw_terms: Vec<String> = Vec::new();
    let mut operators: Vec<BoolOp> = Vec::new();
    for token in tokenize(payload)? {
        match token {
            Token::Term(raw) => raw_terms.push(raw),
            Token::Op(op) => operators.push(op),
        }
    }

    match raw_terms.first() {
        None => return Err(ConditionError::EmptyParams),
        Some(first) if first.starts_with('@') => {
            return Err(ConditionError::TagInPayload(payload.to_string()));
        }
        _ => {}
    }

    // `@` is only meaningful as the leading tag-name guard above
    if raw_terms.iter().any(|t| t.contains('@')) {
        return Err(ConditionError::InvalidOperator);
    }

    if !operators.is_empty() && operators.len() != raw_terms.len() - 1 {
        return Err(ConditionError::OperatorCount);
    }

    if raw_terms[0].is_empty() {
        return Err(ConditionError::EmptyParams);
    }

    let terms = raw_terms.iter().map(|raw| parse_term(raw)).collect();
    Ok(ConditionExpression::new(terms, operators))
}

/// Split one raw term on its comparison symbol.
///
/// `=` takes priority over `>` over `<`; a term is assumed to use at most
/// one of them. Empty variable names are allowed through and resolve as
/// undefined.
fn parse_term(raw: &str) -> Term {
    for (symbol, comparator) in [
        ('=', Comparator::Eq),
        ('>', Comparator::Gt),
        ('<', Comparator::Lt),
    ] {
        if let Some(pos) = raw.find(symbol) {
            return Term::compare(&raw[..pos], comparator, &raw[pos + 1..]);
        }
    }
    Term::defined(raw)
}
