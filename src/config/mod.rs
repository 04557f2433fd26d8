//! Configuration loaded from `.respmap.toml`.
//!
//! ```toml
//! [analysis]
//! filter_framework_types = true
//! max_source_bytes = 1048576
//! extra_framework_types = ["IMediator"]
//!
//! [output]
//! default_format = "terminal"
//! color = "auto"
//! ```
//!
//! Command line flags take precedence over file values.

mod core;
mod loader;

pub use self::core::{OutputConfig, RespmapConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Contents written by `respmap init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# respmap configuration

[analysis]
# Ignore logging, configuration, caching and hosting services
filter_framework_types = true
# Reject larger inputs before analysis
max_source_bytes = 1048576
# Extra base type names to treat as framework services
extra_framework_types = []

[output]
# terminal, json, markdown or html
default_format = "terminal"
# auto, always or never
color = "auto"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_text_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, RespmapConfig::default());
    }
}
