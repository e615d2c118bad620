use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use maxis_core::{AxisDefinition, AxisList, EnvSnapshot, EnvVars};
use serde::Deserialize;

use crate::commands::OutputFormat;

/// Expand a matrix from an axis definition file
///
/// Axes are rebuilt against this process's environment, which previews what
/// a build would see when the host supplies the same variables.
#[derive(Debug, Parser)]
pub struct ExpandCommand {
    /// Path to the axis definition YAML file
    #[arg(value_name = "AXES")]
    pub axes_path: PathBuf,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

#[derive(Debug, Deserialize)]
struct AxisFile {
    axes: Vec<AxisDefinition>,
}

impl ExpandCommand {
    pub fn execute(&self) -> Result<i32> {
        let output = OutputFormat::parse(&self.output)?;
        let definitions = parse_axis_file(&self.axes_path)?;

        let list = AxisList::from_definitions(definitions);
        let context = EnvSnapshot::new(EnvVars::from_process_env());
        let combinations = list.rebuild_and_expand(&context);

        match output {
            OutputFormat::Human => {
                for axis in list.iter() {
                    println!("axis {} ({}): {:?}", axis.name(), axis.value_label(), axis.values());
                }
                println!();
                for combination in &combinations {
                    println!("{combination}");
                }
                println!("\n{} combination(s)", combinations.len());
            }
            OutputFormat::Json => {
                let axes: serde_json::Map<String, serde_json::Value> = list
                    .iter()
                    .map(|axis| (axis.name().to_string(), serde_json::json!(axis.values())))
                    .collect();
                let report = serde_json::json!({
                    "axes": axes,
                    "combinations": combinations,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(0)
    }
}

fn parse_axis_file(path: &Path) -> Result<Vec<AxisDefinition>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read axis file '{}'", path.display()))?;
    let file: AxisFile = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse axis file '{}'", path.display()))?;

    if file.axes.is_empty() {
        bail!("axis file '{}' defines no axes", path.display());
    }

    let mut seen = BTreeSet::new();
    for definition in &file.axes {
        if !seen.insert(definition.name()) {
            bail!("duplicate axis name '{}'", definition.name());
        }
    }

    Ok(file.axes)
}
