//! Environment-condition gate for scenario execution
//!
//! Inspects a scenario's tags before it runs:
//! - `@runOnEnv(EXPR)` - the scenario runs only when EXPR is true
//! - `@skipOnEnv(EXPR)` - the scenario is skipped when EXPR is true;
//!   multiple skip tags are independent, any true one skips (AND is
//!   expressed with `&&` inside a single tag)
//!
//! Skips are recorded by injecting `@ignore` and `@envCondition` into the
//! scenario's tag list. A malformed condition is an author error: the
//! scenario is marked ignored without a reason tag and the error is
//! logged, so it never runs against an unintended default.

use crate::envgate::condition;
use crate::envgate::environment::EnvironmentView;
use crate::envgate::error::ConditionError;
use crate::harness::types::ScenarioDefinition;
use serde::Serialize;

/// Tag injected to mark a scenario as skipped
pub const IGNORE_TAG: &str = "@ignore";
/// Tag injected alongside [`IGNORE_TAG`] to record the skip reason
pub const ENV_CONDITION_TAG: &str = "@envCondition";

const RUN_ON_ENV: &str = "@runOnEnv";
const SKIP_ON_ENV: &str = "@skipOnEnv";

/// Pre-scenario extension point the surrounding runner calls.
///
/// The runner hands over the scenario's mutable tag/skip state right
/// before execution; the hook decides and records the outcome.
pub trait ScenarioHook {
    fn before_scenario(&self, scenario: &mut ScenarioDefinition) -> GateOutcome;
}

/// The gate's verdict for one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GateOutcome {
    /// All conditions passed
    Run,
    /// A condition told the gate to skip
    Skip { reason: String },
    /// A condition payload was malformed; the scenario must not run
    Error { message: String },
}

impl GateOutcome {
    pub fn is_run(&self) -> bool {
        matches!(self, GateOutcome::Run)
    }
}

/// Gates scenarios on `runOnEnv`/`skipOnEnv` tags against one snapshot
pub struct EnvConditionGate<'a> {
    env: &'a EnvironmentView,
}

impl<'a> EnvConditionGate<'a> {
    pub fn new(env: &'a EnvironmentView) -> Self {
        Self { env }
    }

    /// Decide run/skip for a tag list without mutating it.
    ///
    /// Tags are checked in order; the first one that triggers decides.
    pub fn decide(&self, tags: &[String]) -> GateOutcome {
        for tag in tags {
            if tag.contains(RUN_ON_ENV) {
                match self.evaluate_tag(tag) {
                    Ok(true) => {}
                    Ok(false) => {
                        return GateOutcome::Skip {
                            reason: "environment condition not met".to_string(),
                        }
                    }
                    Err(e) => {
                        return GateOutcome::Error {
                            message: e.to_string(),
                        }
                    }
                }
            } else if tag.contains(SKIP_ON_ENV) {
                match self.evaluate_tag(tag) {
                    Ok(true) => {
                        return GateOutcome::Skip {
                            reason: "environment skip condition met".to_string(),
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        return GateOutcome::Error {
                            message: e.to_string(),
                        }
                    }
                }
            }
        }
        GateOutcome::Run
    }

    fn evaluate_tag(&self, tag: &str) -> Result<bool, ConditionError> {
        condition::evaluate_payload(extract_payload(tag), self.env)
    }
}

/// Payload between the last `(` and the trailing `)`.
///
/// A tag without parentheses yields its own text (minus nothing), which
/// the parser then rejects through the leading-`@` guard.
fn extract_payload(tag: &str) -> &str {
    let start = tag.rfind('(').map(|i| i + 1).unwrap_or(0);
    let rest = &tag[start..];
    rest.strip_suffix(')').unwrap_or(rest)
}

impl ScenarioHook for EnvConditionGate<'_> {
    fn before_scenario(&self, scenario: &mut ScenarioDefinition) -> GateOutcome {
        let outcome = self.decide(&scenario.tags);
        match &outcome {
            GateOutcome::Run => {}
            GateOutcome::Skip { reason } => {
                log::info!("Scenario '{}' skipped: {}", scenario.name, reason);
                scenario.tags.push(IGNORE_TAG.to_string());
                scenario.tags.push(ENV_CONDITION_TAG.to_string());
            }
            GateOutcome::Error { message } => {
                log::error!("{message}");
                scenario.tags.push(IGNORE_TAG.to_string());
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(tags: &[&str]) -> ScenarioDefinition {
        ScenarioDefinition {
            name: "gated scenario".to_string(),
            line: Some(1),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn env_with(pairs: &[(&str, &str)]) -> EnvironmentView {
        EnvironmentView::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_extract_payload() {
        assert_eq!(extract_payload("@runOnEnv(FOO)"), "FOO");
        assert_eq!(extract_payload("@skipOnEnv(A=1&&B<2.0)"), "A=1&&B<2.0");
        // No parentheses: the tag text itself reaches the parser
        assert_eq!(extract_payload("@runOnEnv"), "@runOnEnv");
    }

    #[test]
    fn test_untagged_scenario_runs() {
        let gate_env = EnvironmentView::empty();
        let gate = EnvConditionGate::new(&gate_env);
        assert_eq!(gate.decide(&scenario(&["@smoke"]).tags), GateOutcome::Run);
    }

    #[test]
    fn test_run_on_env_met() {
        let env = env_with(&[("STAGE", "prod")]);
        let gate = EnvConditionGate::new(&env);
        assert!(gate.decide(&scenario(&["@runOnEnv(STAGE=prod)"]).tags).is_run());
    }

    #[test]
    fn test_run_on_env_not_met_skips_with_reason() {
        let env = EnvironmentView::empty();
        let gate = EnvConditionGate::new(&env);
        assert_eq!(
            gate.decide(&scenario(&["@runOnEnv(STAGE=prod)"]).tags),
            GateOutcome::Skip {
                reason: "environment condition not met".to_string()
            }
        );
    }

    #[test]
    fn test_skip_on_env_met_skips() {
        let env = env_with(&[("CI", "true")]);
        let gate = EnvConditionGate::new(&env);
        let outcome = gate.decide(&scenario(&["@skipOnEnv(CI)"]).tags);
        assert!(matches!(outcome, GateOutcome::Skip { .. }));
    }

    #[test]
    fn test_multiple_skip_tags_are_or_combined() {
        let env = env_with(&[("B", "1")]);
        let gate = EnvConditionGate::new(&env);
        let tags = scenario(&["@skipOnEnv(A)", "@skipOnEnv(B)"]).tags;
        assert!(matches!(gate.decide(&tags), GateOutcome::Skip { .. }));
    }

    #[test]
    fn test_skip_injects_ignore_and_env_condition_tags() {
        let env = EnvironmentView::empty();
        let gate = EnvConditionGate::new(&env);
        let mut s = scenario(&["@runOnEnv(MISSING)"]);
        let outcome = gate.before_scenario(&mut s);
        assert!(matches!(outcome, GateOutcome::Skip { .. }));
        assert!(s.has_tag(IGNORE_TAG));
        assert!(s.has_tag(ENV_CONDITION_TAG));
    }

    #[test]
    fn test_run_leaves_tags_untouched() {
        let env = env_with(&[("FOO", "1")]);
        let gate = EnvConditionGate::new(&env);
        let mut s = scenario(&["@runOnEnv(FOO)"]);
        gate.before_scenario(&mut s);
        assert_eq!(s.tags, vec!["@runOnEnv(FOO)"]);
    }

    #[test]
    fn test_malformed_payload_marks_ignored_without_reason() {
        let env = EnvironmentView::empty();
        let gate = EnvConditionGate::new(&env);
        let mut s = scenario(&["@runOnEnv(@ignore)"]);
        let outcome = gate.before_scenario(&mut s);
        match outcome {
            GateOutcome::Error { message } => {
                assert_eq!(
                    message,
                    "Error while parsing params. Format is: \"runOnEnv(PARAM)\", but found: @ignore"
                );
            }
            other => panic!("Expected Error outcome, got {other:?}"),
        }
        assert!(s.has_tag(IGNORE_TAG));
        assert!(!s.has_tag(ENV_CONDITION_TAG));
    }

    #[test]
    fn test_first_triggering_tag_decides() {
        let env = env_with(&[("A", "1")]);
        let gate = EnvConditionGate::new(&env);
        // skipOnEnv(A) fires before runOnEnv(MISSING) is consulted
        let tags = scenario(&["@skipOnEnv(A)", "@runOnEnv(MISSING)"]).tags;
        assert_eq!(
            gate.decide(&tags),
            GateOutcome::Skip {
                reason: "environment skip condition met".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_serializes_for_reports() {
        let outcome = GateOutcome::Skip {
            reason: "environment condition not met".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "skip");
        assert_eq!(json["reason"], "environment condition not met");
    }
}
