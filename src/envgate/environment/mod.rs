// SPDX-License-Identifier: MIT

//! Read-only environment snapshots for condition evaluation
//!
//! The evaluator never reads process globals directly; it takes an
//! [`EnvironmentView`] built once at startup. This keeps evaluation a
//! pure function and lets tests supply their own maps.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static PROCESS_ENV: Lazy<EnvironmentView> = Lazy::new(EnvironmentView::capture);

/// Immutable name -> value map the evaluator reads
#[derive(Debug, Clone, Default)]
pub struct EnvironmentView {
    vars: HashMap<String, String>,
}

impl EnvironmentView {
    /// An empty view
    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Snapshot the current process environment
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a view from an existing map
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Build a view from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw lookup, including empty values
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Lookup for gating: unset and empty-string are both undefined
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// All defined variable names
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.vars.keys()
    }
}

/// Process-wide snapshot, captured on first access.
///
/// Binaries load `.env` files before touching this so dotenv-sourced
/// variables land in the snapshot.
pub fn process_env() -> &'static EnvironmentView {
    &PROCESS_ENV
}
