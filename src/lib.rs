// SPDX-License-Identifier: MIT

//! envgate-rs: environment-conditioned gating for test scenarios
//!
//! A scenario tagged `@runOnEnv(EXPR)` or `@skipOnEnv(EXPR)` runs or is
//! skipped based on a small boolean expression over environment
//! variables, with dotted version comparison and a left-to-right fold.
//!
//! - [`envgate`] - the condition language and environment snapshots
//! - [`harness`] - test-runner integration: feature loading, the gate
//!   hook and ignore-reason classification

pub mod envgate;
pub mod harness;
