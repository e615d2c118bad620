//! Configuration-time checks for source variable names.
//!
//! These run when an axis is being configured, not at rebuild time: rebuild
//! treats a bad name the same as an absent variable and falls back to the
//! default value.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static NON_PORTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("invalid portable-name regex"));

/// Outcome of checking a candidate source variable name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NameCheck {
    /// Empty name; the configuration must be rejected.
    Invalid { reason: String },
    /// Accepted, but flagged: the name is unlikely to survive the variable
    /// substitution mechanisms available at build time.
    Suspicious { reason: String },
    /// Set in this process's environment. `value` previews what would
    /// resolve outside a build context.
    Resolvable { value: String },
    /// Well-formed but unset here. The per-build snapshot may still provide
    /// it, so this is informational only.
    Unresolvable,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Ok,
}

impl NameCheck {
    pub fn severity(&self) -> Severity {
        match self {
            NameCheck::Invalid { .. } => Severity::Error,
            NameCheck::Suspicious { .. } | NameCheck::Unresolvable => Severity::Warning,
            NameCheck::Resolvable { .. } => Severity::Ok,
        }
    }
}

/// Classify a candidate source variable name.
///
/// The resolvability probe reads the checking process's own environment,
/// which is not the environment a build will see; a miss here is a warning,
/// never a rejection.
pub fn check_source_name(name: &str) -> NameCheck {
    if name.is_empty() {
        return NameCheck::Invalid {
            reason: "an environment variable name is required".to_string(),
        };
    }

    if NON_PORTABLE.is_match(name) {
        return NameCheck::Suspicious {
            reason: format!(
                "'{name}' contains characters outside letters, digits and underscore \
                 and may not be portable across build-time variable substitution"
            ),
        };
    }

    match std::env::var(name) {
        Ok(value) => NameCheck::Resolvable { value },
        Err(_) => NameCheck::Unresolvable,
    }
}
