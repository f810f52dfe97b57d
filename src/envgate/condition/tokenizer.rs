//! Single-pass tokenizer for condition payloads
//!
//! Walks the payload once, classifying characters into the term class
//! (letters, digits, `._-` and the comparator symbols `=<>`), the boolean
//! operators `&&`/`||`, and the `,` separator. This replaces the
//! split-for-terms-then-split-and-filter-for-operators approach with a
//! scanner that emits both token kinds in order.

use super::ast::BoolOp;
use crate::envgate::error::ConditionError;

/// A lexical token inside a condition payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A raw term, still unsplit into variable/comparator/literal
    Term(String),
    /// A joining boolean operator
    Op(BoolOp),
}

/// Split a payload into term and operator tokens in one pass.
///
/// `,` separates terms without contributing an operator token. Trailing
/// empty terms are dropped so that a dangling operator surfaces as an
/// operator-count mismatch in the parser rather than an empty term.
pub fn tokenize(payload: &str) -> Result<Vec<Token>, ConditionError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = payload.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '-' | '=' | '<' | '>' | '@' => {
                current.push(c);
            }
            ',' => {
                tokens.push(Token::Term(current.trim().to_string()));
                current.clear();
            }
            '&' | '|' => {
                // Operators are exactly two identical characters
                if chars.next_if_eq(&c).is_none() {
                    return Err(ConditionError::InvalidOperator);
                }
                tokens.push(Token::Term(current.trim().to_string()));
                current.clear();
                let op = if c == '&' { BoolOp::And } else { BoolOp::Or };
                tokens.push(Token::Op(op));
            }
            c if c.is_ascii_whitespace() => current.push(c),
            _ => return Err(ConditionError::InvalidOperator),
        }
    }
    tokens.push(Token::Term(current.trim().to_string()));

    while tokens.len() > 1 && matches!(tokens.last(), Some(Token::Term(t)) if t.is_empty()) {
        tokens.pop();
    }

    Ok(tokens)
}
