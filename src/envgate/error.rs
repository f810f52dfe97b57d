// SPDX-License-Identifier: MIT

//! Typed error handling for envgate-rs
//!
//! `ConditionError` carries the condition-language failures with their
//! message text fixed for compatibility with existing test suites;
//! `GateError` wraps everything the loader and CLI layers can hit.

use thiserror::Error;

/// Top-level error type for envgate-rs
#[derive(Debug, Error)]
pub enum GateError {
    /// Condition parsing or evaluation failed
    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    /// Feature file not found when loading
    #[error("Feature file not found: {0}")]
    FeatureNotFound(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error wrapper for compatibility
    #[error("{0}")]
    Other(String),
}

/// Errors raised while parsing or evaluating a condition payload.
///
/// The display strings are load-bearing: downstream suites assert on them
/// verbatim, so they must not be reworded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// The payload opens with another tag name instead of a variable
    #[error("Error while parsing params. Format is: \"runOnEnv(PARAM)\", but found: {0}")]
    TagInPayload(String),

    /// The payload carries no usable first term
    #[error("Error while parsing params. Params must be at least one")]
    EmptyParams,

    /// Operator count does not line up with the term count
    #[error("Error in expression. Number of conditional operators plus 1 should be equal to the number of expressions.")]
    OperatorCount,

    /// An operator token other than `&&` or `||`
    #[error("Error in conditional operators. Operators should be && or ||.")]
    InvalidOperator,

    /// A version string with characters outside digits, `.` and `-`
    #[error("Error while parsing params. The versions have some characters that are not numbers, '.' or '-'")]
    VersionCharset,

    /// Ordered version segments with different numbers of dot-elements
    #[error("Error while parsing params. The versions must have the same number of elements")]
    VersionArity,
}

impl GateError {
    /// Create from a generic message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<String> for GateError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}
