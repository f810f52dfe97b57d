//! Dotted and hyphen-segmented version comparison
//!
//! A version-like value is one or more hyphen-separated segments, each a
//! dot-separated run of non-negative integers: `1.2.3`, `1.0-2.4.1`.
//! Comparison is numeric per element, left-to-right, first difference
//! decides. Two values whose compared elements are all equal are equal,
//! so both `>` and `<` report false.

use super::ast::Comparator;
use crate::envgate::error::ConditionError;
use std::cmp::Ordering;

/// A parsed version: hyphen segments of dot-separated integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    segments: Vec<Vec<u64>>,
}

impl Version {
    /// Parse a version string, rejecting anything outside digits, `.`, `-`
    pub fn parse(raw: &str) -> Result<Self, ConditionError> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
            return Err(ConditionError::VersionCharset);
        }

        let mut segments = Vec::new();
        for segment in raw.split('-') {
            let mut elements = Vec::new();
            for element in segment.split('.') {
                // Empty groups ("1..2", "1.", "-1.0") are malformed
                let value: u64 = element
                    .parse()
                    .map_err(|_| ConditionError::VersionCharset)?;
                elements.push(value);
            }
            segments.push(elements);
        }
        Ok(Self { segments })
    }

    /// Number of hyphen-separated segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Strict equality: same segment count, and every corresponding
    /// dot-segment holds the identical integer sequence. Mismatched
    /// lengths mean "not equal", never an error.
    pub fn strict_eq(&self, other: &Version) -> bool {
        self.segments == other.segments
    }

    /// Ordering over corresponding segments, element-wise left-to-right.
    ///
    /// The first differing element decides. A segment present on only one
    /// side compares as zero-valued, which gives a consistent total order
    /// for unequal segment counts (`1.0-1.0` sorts above `1.0`, and
    /// `1.0-0.0` ties with `1.0`). Within a compared pair the two
    /// dot-segments must have the same number of elements.
    pub fn ordered_cmp(&self, other: &Version) -> Result<Ordering, ConditionError> {
        let count = self.segments.len().max(other.segments.len());
        for i in 0..count {
            match (self.segments.get(i), other.segments.get(i)) {
                (Some(ours), Some(theirs)) => {
                    if ours.len() != theirs.len() {
                        return Err(ConditionError::VersionArity);
                    }
                    match ours.cmp(theirs) {
                        Ordering::Equal => {}
                        decided => return Ok(decided),
                    }
                }
                (Some(ours), None) => {
                    if ours.iter().any(|&n| n != 0) {
                        return Ok(Ordering::Greater);
                    }
                }
                (None, Some(theirs)) => {
                    if theirs.iter().any(|&n| n != 0) {
                        return Ok(Ordering::Less);
                    }
                }
                (None, None) => unreachable!("index bounded by the longer side"),
            }
        }
        Ok(Ordering::Equal)
    }
}

/// Compare two version-like strings under a condition comparator
pub fn compare(op: Comparator, current: &str, literal: &str) -> Result<bool, ConditionError> {
    let current = Version::parse(current)?;
    let literal = Version::parse(literal)?;
    Ok(match op {
        Comparator::Eq => current.strict_eq(&literal),
        Comparator::Gt => current.ordered_cmp(&literal)? == Ordering::Greater,
        Comparator::Lt => current.ordered_cmp(&literal)? == Ordering::Less,
    })
}
