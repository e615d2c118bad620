use anyhow::Result;
use clap::Parser;
use maxis_core::{check_source_name, NameCheck, Severity};

use crate::commands::OutputFormat;

/// Validate a source variable name
///
/// Runs the same checks a host applies at configuration time. A name that is
/// unset here may still resolve at build time, so only an empty name fails.
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Source variable name to validate
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<i32> {
        let output = OutputFormat::parse(&self.output)?;
        let check = check_source_name(&self.name);

        match output {
            OutputFormat::Human => println!("{}", describe(&check)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&check)?),
        }

        Ok(match check.severity() {
            Severity::Error => 1,
            Severity::Warning | Severity::Ok => 0,
        })
    }
}

fn describe(check: &NameCheck) -> String {
    match check {
        NameCheck::Invalid { reason } => format!("error: {reason}"),
        NameCheck::Suspicious { reason } => format!("warning: {reason}"),
        NameCheck::Resolvable { value } => format!("ok: current value is '{value}'"),
        NameCheck::Unresolvable => {
            "warning: variable is not set in this environment; \
             it may still be provided at build time"
                .to_string()
        }
    }
}
