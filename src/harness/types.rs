// SPDX-License-Identifier: MIT

//! YAML schema types for feature and scenario definitions
//!
//! The surrounding test runner describes its scenarios in YAML; the gate
//! only needs each scenario's name, source line and tag list.

use serde::{Deserialize, Serialize};

/// Top-level feature definition
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeatureDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDefinition>,
}

/// A scenario with its gating tags
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScenarioDefinition {
    pub name: String,
    /// Source line of the scenario, when known
    pub line: Option<u32>,
    /// Tag annotations, `@`-prefixed
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ScenarioDefinition {
    /// Whether the scenario carries an exact tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
