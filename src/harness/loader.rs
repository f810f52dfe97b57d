//! Feature loader - YAML file loading and parsing
//!
//! This module handles loading feature definitions from YAML files.

use super::types::FeatureDefinition;
use crate::envgate::error::GateError;
use std::fs;
use std::path::Path;

/// Loads feature definitions from YAML files
pub struct FeatureLoader;

impl FeatureLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a feature definition from a YAML file
    pub fn load_feature<P: AsRef<Path>>(&self, path: P) -> Result<FeatureDefinition, GateError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GateError::FeatureNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a feature definition from a YAML string
    pub fn parse_yaml(content: &str) -> Result<FeatureDefinition, GateError> {
        let def: FeatureDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }
}

impl Default for FeatureLoader {
    fn default() -> Self {
        Self::new()
    }
}
