//! Axis resolved from an environment variable at build time.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::axis::{Axis, DEFAULT_AXIS_VALUE};
use crate::context::BuildContext;
use crate::tokenizer::tokenize;

/// Matrix axis whose value list is recomputed on every build by reading a
/// named environment variable from the build's snapshot and tokenizing it.
///
/// All failure paths (snapshot unavailable, variable absent or empty)
/// degrade to the single `default` value; one unavailable variable must
/// never abort the surrounding matrix expansion.
pub struct DynamicAxis {
    name: String,
    var_name: String,
    cached_values: Mutex<Vec<String>>,
}

impl DynamicAxis {
    pub fn new(name: impl Into<String>, var_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var_name: var_name.into(),
            cached_values: Mutex::new(Vec::new()),
        }
    }

    /// Name of the environment variable this axis reads.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    // The cache is a plain list, so a poisoned lock is still usable.
    fn lock_values(&self) -> MutexGuard<'_, Vec<String>> {
        self.cached_values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Axis for DynamicAxis {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_label(&self) -> String {
        self.var_name.clone()
    }

    fn values(&self) -> Vec<String> {
        let mut values = self.lock_values();
        if values.is_empty() {
            values.push(DEFAULT_AXIS_VALUE.to_string());
        }
        values.clone()
    }

    fn rebuild(&self, context: &dyn BuildContext) -> Vec<String> {
        let mut rebuilt = match context.environment() {
            Ok(vars) => match vars.get(&self.var_name) {
                Some(raw) => {
                    debug!(
                        build_id = %context.build_id(),
                        var = %self.var_name,
                        value = %raw,
                        "rebuilding axis values from variable"
                    );
                    tokenize(raw)
                }
                None => Vec::new(),
            },
            Err(error) => {
                warn!(
                    build_id = %context.build_id(),
                    var = %self.var_name,
                    %error,
                    "failed to obtain build environment, falling back to default axis value"
                );
                Vec::new()
            }
        };

        if rebuilt.is_empty() {
            rebuilt.push(DEFAULT_AXIS_VALUE.to_string());
        }

        // Whole-list replacement under the same lock reads take, so a
        // concurrent `values` call sees either the old or the new list.
        let mut values = self.lock_values();
        values.clone_from(&rebuilt);

        debug!(axis = %self.name, values = ?rebuilt, "axis rebuilt");
        rebuilt
    }
}
