// SPDX-License-Identifier: MIT

//! Abstract syntax for environment condition expressions

use std::fmt;

/// A parsed condition payload: terms joined left-to-right by operators.
///
/// Immutable once built. When more than one term is present the parser
/// guarantees `operators.len() == terms.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionExpression {
    terms: Vec<Term>,
    operators: Vec<BoolOp>,
}

impl ConditionExpression {
    pub(crate) fn new(terms: Vec<Term>, operators: Vec<BoolOp>) -> Self {
        debug_assert!(!terms.is_empty());
        debug_assert!(operators.is_empty() || operators.len() == terms.len() - 1);
        Self { terms, operators }
    }

    /// The terms, in payload order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The joining operators, in payload order
    pub fn operators(&self) -> &[BoolOp] {
        &self.operators
    }
}

/// One atomic `variable[comparator literal]` unit inside a payload.
///
/// Without a comparator the term means "variable is defined (non-empty)".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub variable: String,
    pub comparator: Option<Comparator>,
    pub literal: Option<String>,
}

impl Term {
    /// A bare definedness test
    pub fn defined(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            comparator: None,
            literal: None,
        }
    }

    /// A comparison against a literal value
    pub fn compare(
        variable: impl Into<String>,
        comparator: Comparator,
        literal: impl Into<String>,
    ) -> Self {
        Self {
            variable: variable.into(),
            comparator: Some(comparator),
            literal: Some(literal.into()),
        }
    }
}

/// Term-level comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// =
    Eq,
    /// >
    Gt,
    /// <
    Lt,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Eq => write!(f, "="),
            Comparator::Gt => write!(f, ">"),
            Comparator::Lt => write!(f, "<"),
        }
    }
}

/// Boolean operators joining terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    /// &&
    And,
    /// ||
    Or,
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolOp::And => write!(f, "&&"),
            BoolOp::Or => write!(f, "||"),
        }
    }
}
