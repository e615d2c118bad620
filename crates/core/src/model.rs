//! Persisted axis configuration.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, DynamicAxis, TextAxis};

/// Axis configuration as stored and exchanged by hosts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AxisDefinition {
    /// Values resolved from an environment variable on every build.
    Dynamic { name: String, var: String },
    /// Fixed value list.
    Text { name: String, values: Vec<String> },
}

impl AxisDefinition {
    pub fn name(&self) -> &str {
        match self {
            AxisDefinition::Dynamic { name, .. } => name,
            AxisDefinition::Text { name, .. } => name,
        }
    }

    pub fn into_axis(self) -> Box<dyn Axis> {
        match self {
            AxisDefinition::Dynamic { name, var } => Box::new(DynamicAxis::new(name, var)),
            AxisDefinition::Text { name, values } => Box::new(TextAxis::new(name, values)),
        }
    }
}
