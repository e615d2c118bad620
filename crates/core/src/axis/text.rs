//! Statically configured axis.

use crate::axis::{Axis, DEFAULT_AXIS_VALUE};
use crate::context::BuildContext;

/// Matrix axis with a fixed value list supplied at configuration time.
/// Rebuilding is a no-op; the configured values are returned as-is, with
/// the usual non-empty guarantee.
pub struct TextAxis {
    name: String,
    values: Vec<String>,
}

impl TextAxis {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

impl Axis for TextAxis {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_label(&self) -> String {
        self.values.join(" ")
    }

    fn values(&self) -> Vec<String> {
        if self.values.is_empty() {
            return vec![DEFAULT_AXIS_VALUE.to_string()];
        }
        self.values.clone()
    }

    fn rebuild(&self, _context: &dyn BuildContext) -> Vec<String> {
        self.values()
    }
}
