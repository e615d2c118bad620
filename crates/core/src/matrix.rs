//! Matrix expansion over a set of axes.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::axis::Axis;
use crate::context::BuildContext;
use crate::model::AxisDefinition;

/// One cell of the expanded matrix: axis name mapped to the chosen value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Combination(BTreeMap<String, String>);

impl Combination {
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(|value| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// Ordered collection of the axes making up one matrix.
#[derive(Default)]
pub struct AxisList {
    axes: Vec<Box<dyn Axis>>,
}

impl AxisList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: Vec<AxisDefinition>) -> Self {
        Self {
            axes: definitions
                .into_iter()
                .map(AxisDefinition::into_axis)
                .collect(),
        }
    }

    pub fn push(&mut self, axis: Box<dyn Axis>) {
        self.axes.push(axis);
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Axis> {
        self.axes.iter().map(|axis| axis.as_ref())
    }

    /// Rebuild every axis against the same build context, in axis order.
    pub fn rebuild_all(&self, context: &dyn BuildContext) -> Vec<Vec<String>> {
        self.axes
            .iter()
            .map(|axis| axis.rebuild(context))
            .collect()
    }

    /// Cartesian expansion of the current axis values, first axis varying
    /// slowest. An empty axis list expands to a single empty combination.
    pub fn expand(&self) -> Vec<Combination> {
        let mut combinations = vec![BTreeMap::new()];

        for axis in &self.axes {
            let values = axis.values();
            let mut next = Vec::with_capacity(combinations.len() * values.len());
            for combination in &combinations {
                for value in &values {
                    let mut extended: BTreeMap<String, String> = combination.clone();
                    extended.insert(axis.name().to_string(), value.clone());
                    next.push(extended);
                }
            }
            combinations = next;
        }

        debug!(combinations = combinations.len(), "expanded matrix");
        combinations.into_iter().map(Combination).collect()
    }

    /// Rebuild then expand, the per-build sequence a host runs before
    /// scheduling sub-executions.
    pub fn rebuild_and_expand(&self, context: &dyn BuildContext) -> Vec<Combination> {
        self.rebuild_all(context);
        self.expand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{DynamicAxis, TextAxis, DEFAULT_AXIS_VALUE};
    use crate::context::EnvSnapshot;

    fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::new(pairs.iter().copied().collect())
    }

    fn sample_list() -> AxisList {
        let mut list = AxisList::new();
        list.push(Box::new(DynamicAxis::new("AXIS", "AXIS_VALUES")));
        list.push(Box::new(TextAxis::new(
            "os",
            vec!["linux".to_string(), "macos".to_string()],
        )));
        list
    }

    #[test]
    fn expands_the_cartesian_product() {
        let list = sample_list();
        let combinations =
            list.rebuild_and_expand(&snapshot(&[("AXIS_VALUES", "1 2 3")]));

        assert_eq!(combinations.len(), 6);
        assert_eq!(combinations[0].to_string(), "AXIS=1,os=linux");
        assert_eq!(combinations[5].to_string(), "AXIS=3,os=macos");
    }

    #[test]
    fn quoted_values_shrink_the_expansion() {
        let list = sample_list();

        let first = list.rebuild_and_expand(&snapshot(&[("AXIS_VALUES", "1 2 3")]));
        assert_eq!(first.len(), 6);

        let second =
            list.rebuild_and_expand(&snapshot(&[("AXIS_VALUES", r#"1 "2 3""#)]));
        assert_eq!(second.len(), 4);
        assert_eq!(second[2].get("AXIS"), Some("2 3"));
    }

    #[test]
    fn absent_variable_expands_through_the_default_value() {
        let list = sample_list();
        let combinations = list.rebuild_and_expand(&EnvSnapshot::empty());

        assert_eq!(combinations.len(), 2);
        assert_eq!(combinations[0].get("AXIS"), Some(DEFAULT_AXIS_VALUE));
    }

    #[test]
    fn empty_axis_list_yields_one_empty_combination() {
        let list = AxisList::new();
        let combinations = list.expand();
        assert_eq!(combinations.len(), 1);
        assert_eq!(combinations[0].to_string(), "");
    }

    #[test]
    fn expand_without_rebuild_uses_cached_values() {
        let list = sample_list();
        list.rebuild_all(&snapshot(&[("AXIS_VALUES", "a b")]));

        // A later read outside a rebuild cycle sees the same values.
        assert_eq!(list.expand().len(), 4);
        assert_eq!(list.expand().len(), 4);
    }

    #[test]
    fn builds_from_definitions() {
        let list = AxisList::from_definitions(vec![
            AxisDefinition::Dynamic {
                name: "AXIS".to_string(),
                var: "AXIS_VALUES".to_string(),
            },
            AxisDefinition::Text {
                name: "os".to_string(),
                values: vec!["linux".to_string()],
            },
        ]);
        assert_eq!(list.len(), 2);
        let names: Vec<&str> = list.iter().map(|axis| axis.name()).collect();
        assert_eq!(names, vec!["AXIS", "os"]);
    }
}
