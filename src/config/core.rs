use serde::{Deserialize, Serialize};

use crate::analysis::AnalyzerConfig;
use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;

/// Root configuration structure for respmap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespmapConfig {
    /// Analyzer settings
    #[serde(default)]
    pub analysis: AnalyzerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl RespmapConfig {
    /// Collect every invalid value instead of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.analysis.max_source_bytes == 0 {
            errors.push("analysis.max_source_bytes must be greater than 0".to_string());
        }
        errors.extend(
            self.analysis
                .extra_framework_types
                .iter()
                .filter(|name| !is_type_token(name))
                .map(|name| format!("analysis.extra_framework_types: `{name}` is not a type name")),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Colored terminal output (default: auto-detect based on TTY)
    #[serde(default)]
    pub color: ColorMode,
}

fn is_type_token(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '<' | '>' | ',' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RespmapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = RespmapConfig::default();
        config.analysis.max_source_bytes = 0;
        config.analysis.extra_framework_types = vec!["IMediator".into(), "".into(), "9Lives".into()];
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("max_source_bytes"));
    }

    #[test]
    fn test_sections_parse_from_toml() {
        let config: RespmapConfig = toml::from_str(
            r#"
            [analysis]
            filter_framework_types = false
            extra_framework_types = ["IMediator"]

            [output]
            default_format = "json"
            color = "never"
            "#,
        )
        .unwrap();
        assert!(!config.analysis.filter_framework_types);
        assert_eq!(config.analysis.max_source_bytes, 1024 * 1024);
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert_eq!(config.output.color, ColorMode::Never);
    }
}
