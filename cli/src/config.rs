//! Output configuration.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use std::num::ParseIntError;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading the output configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boolean variable holds something other than a boolean.
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    /// The indent width is not a number.
    #[error("LOGDOC_INDENT must be a number: {0}")]
    InvalidIndent(#[from] ParseIntError),

    /// Validation failed with details.
    #[error("Invalid output configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// How the finished document is written to stdout.
///
/// Configuration values can be set via environment variables:
/// - `LOGDOC_PRETTY`: Pretty-print the document (default: false)
/// - `LOGDOC_INDENT`: Spaces per indent level when pretty-printing (default: 2)
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct OutputConfig {
    /// Pretty-print instead of writing a single line.
    pub pretty: bool,
    /// Spaces per indent level.
    #[validate(range(min = 1, max = 8, message = "Indent must be between 1 and 8"))]
    pub indent: usize,
}

impl OutputConfig {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Creates a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let pretty = lookup("LOGDOC_PRETTY")
            .map(|value| parse_bool("LOGDOC_PRETTY", value))
            .transpose()?
            .unwrap_or(defaults.pretty);

        let indent = lookup("LOGDOC_INDENT")
            .map(|value| value.trim().parse::<usize>())
            .transpose()?
            .unwrap_or(defaults.indent);

        let config = Self { pretty, indent };
        config.validate()?;
        Ok(config)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = OutputConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, OutputConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config =
            OutputConfig::from_lookup(lookup(&[("LOGDOC_PRETTY", "yes"), ("LOGDOC_INDENT", "4")]))
                .unwrap();
        assert!(config.pretty);
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn test_invalid_bool() {
        let result = OutputConfig::from_lookup(lookup(&[("LOGDOC_PRETTY", "maybe")]));
        assert!(matches!(result, Err(ConfigError::InvalidBool { .. })));
    }

    #[test]
    fn test_invalid_indent() {
        let result = OutputConfig::from_lookup(lookup(&[("LOGDOC_INDENT", "wide")]));
        assert!(matches!(result, Err(ConfigError::InvalidIndent(_))));
    }

    #[test]
    fn test_indent_out_of_range() {
        let result = OutputConfig::from_lookup(lookup(&[("LOGDOC_INDENT", "0")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let result = OutputConfig::from_lookup(lookup(&[("LOGDOC_INDENT", "9")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
