use anyhow::{anyhow, Result};
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parses an output format from string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!(
                "Unknown format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

/// Renders `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| anyhow!("Failed to serialize output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_formats() {
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("Json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn parse_unknown_format_fails() {
        let err = OutputFormat::parse("yaml").unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
