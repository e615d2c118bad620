//! Per-build environment access.

use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("build environment unavailable: {reason}")]
    EnvironmentUnavailable { reason: String },
}

/// Immutable snapshot of the variables visible to one build execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: BTreeMap<String, String>,
}

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the invoking process's own environment. Hosts normally
    /// supply a richer per-build snapshot instead.
    pub fn from_process_env() -> Self {
        std::env::vars().collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|value| value.as_str())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// Handle to the build execution axes are being rebuilt for.
///
/// The environment snapshot is obtained at most once per rebuild, and
/// obtaining it can fail (e.g. the host cannot collect contributed
/// variables). Callers decide how to degrade; axes never propagate the
/// failure into the build.
pub trait BuildContext {
    /// Identifier of the build execution, carried into log output.
    fn build_id(&self) -> Uuid;

    fn environment(&self) -> Result<EnvVars, ContextError>;
}

/// In-memory build context backed by a fixed snapshot.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    build_id: Uuid,
    vars: EnvVars,
}

impl EnvSnapshot {
    pub fn new(vars: EnvVars) -> Self {
        Self {
            build_id: Uuid::now_v7(),
            vars,
        }
    }

    pub fn empty() -> Self {
        Self::new(EnvVars::new())
    }
}

impl BuildContext for EnvSnapshot {
    fn build_id(&self) -> Uuid {
        self.build_id
    }

    fn environment(&self) -> Result<EnvVars, ContextError> {
        Ok(self.vars.clone())
    }
}
