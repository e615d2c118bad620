mod check;
mod expand;

use anyhow::bail;

pub use check::CheckCommand;
pub use expand::ExpandCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}' (expected 'human' or 'json')"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(OutputFormat::parse("human").unwrap(), OutputFormat::Human);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(OutputFormat::parse("xml").is_err());
    }
}
