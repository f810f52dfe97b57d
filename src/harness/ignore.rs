//! Ignore-tag reason classification
//!
//! Once a scenario carries `@ignore`, a companion tag says why. Later
//! recognized reason tags override earlier ones, and a bare `@ignore`
//! is a misuse the caller should surface.

use crate::harness::gate::{ENV_CONDITION_TAG, IGNORE_TAG};
use serde::Serialize;

const TILL_FIXED_PREFIX: &str = "@tillfixed(";
const UNIMPLEMENTED_TAG: &str = "@unimplemented";
const MANUAL_TAG: &str = "@manual";
const TOO_COMPLEX_TAG: &str = "@toocomplex";

/// Why an `@ignore`-tagged scenario is not being run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    /// No `@ignore` tag present
    NotIgnored,
    /// Skipped by the environment-condition gate
    EnvCondition,
    /// Marked `@unimplemented`
    Unimplemented,
    /// Marked `@manual`
    Manual,
    /// Marked `@toocomplex`
    TooComplex,
    /// `@tillfixed(TICKET)`: parked until the referenced ticket is fixed.
    /// Whether the ticket is actually fixed is the tracker integration's
    /// call, not ours.
    TicketPending(String),
    /// `@ignore` with no recognized reason tag
    NoReason,
}

/// Classify a scenario's tag list
pub fn classify(tags: &[String], scenario_name: &str) -> IgnoreReason {
    if !tags.iter().any(|t| t == IGNORE_TAG) {
        return IgnoreReason::NotIgnored;
    }

    let mut reason = IgnoreReason::NoReason;
    for tag in tags {
        if let Some(ticket) = tag
            .strip_prefix(TILL_FIXED_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
        {
            log::warn!("Scenario '{scenario_name}' ignored because of ticket: {ticket}");
            reason = IgnoreReason::TicketPending(ticket.to_string());
        }
    }
    if tags.iter().any(|t| t == ENV_CONDITION_TAG) {
        reason = IgnoreReason::EnvCondition;
    }
    if tags.iter().any(|t| t == UNIMPLEMENTED_TAG) {
        log::warn!("Scenario '{scenario_name}' ignored because it is not yet implemented.");
        reason = IgnoreReason::Unimplemented;
    }
    if tags.iter().any(|t| t == MANUAL_TAG) {
        log::warn!("Scenario '{scenario_name}' ignored because it is marked as manual test.");
        reason = IgnoreReason::Manual;
    }
    if tags.iter().any(|t| t == TOO_COMPLEX_TAG) {
        log::warn!("Scenario '{scenario_name}' ignored because the test is too complex.");
        reason = IgnoreReason::TooComplex;
    }

    if reason == IgnoreReason::NoReason {
        log::error!("Scenario '{scenario_name}' failed due to wrong use of the @ignore tag.");
    }
    reason
}
