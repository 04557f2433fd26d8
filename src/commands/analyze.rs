use crate::analysis::ResponsibilityAnalyzer;
use crate::config::{self, RespmapConfig};
use crate::errors::Error;
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::io::{self, create_writer, AnalysisReport, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Resolved `analyze` invocation. `None` fields fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub select: Option<String>,
    pub filter_framework_types: Option<bool>,
    pub max_bytes: Option<usize>,
    pub plain: bool,
    pub color: Option<ColorMode>,
    pub config_path: Option<PathBuf>,
}

/// Run one analysis and write the report.
///
/// Returns whether the class was flagged for mixed responsibilities.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<bool> {
    let file_config = load_file_config(config.config_path.as_deref())?;
    let settings = apply_overrides(file_config, &config);
    let formatting = formatting_config(&config, &settings);
    configure_output(&formatting);

    let source = io::read_source(&config.path)?;
    if source.trim().is_empty() {
        return Err(Error::EmptySource.into());
    }

    let analyzer = ResponsibilityAnalyzer::new(&settings.analysis);
    let result = analyzer.analyze(&source)?;
    tracing::info!(
        dependencies = result.dependencies.len(),
        methods = result.method_usages.len(),
        flagged = result.has_multiple_responsibilities,
        "analysis complete"
    );

    if let Some(selected) = config.select.as_deref() {
        if result.dependency(selected).is_none() {
            return Err(Error::UnknownDependency(selected.to_string()).into());
        }
    }

    let name = io::source_name(&config.path);
    let report =
        AnalysisReport::new(&name, &source, &result).with_selection(config.select.as_deref());

    let sink = open_sink(config.output.as_ref())?;
    let mut writer = create_writer(settings.output.default_format, sink, formatting);
    writer.write_report(&report)?;

    if let Some(path) = &config.output {
        log::info!("Wrote report to {}", path.display());
    }
    Ok(result.has_multiple_responsibilities)
}

fn load_file_config(explicit: Option<&std::path::Path>) -> Result<RespmapConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Command line values take precedence over the config file.
pub fn apply_overrides(mut settings: RespmapConfig, config: &AnalyzeConfig) -> RespmapConfig {
    if let Some(format) = config.format {
        settings.output.default_format = format;
    }
    if let Some(color) = config.color {
        settings.output.color = color;
    }
    if let Some(filter) = config.filter_framework_types {
        settings.analysis.filter_framework_types = filter;
    }
    if let Some(max_bytes) = config.max_bytes {
        settings.analysis.max_source_bytes = max_bytes;
    }
    settings
}

fn formatting_config(config: &AnalyzeConfig, settings: &RespmapConfig) -> FormattingConfig {
    if config.plain {
        return FormattingConfig::new(ColorMode::Never, EmojiMode::Never);
    }
    // Files only get escape codes when explicitly requested
    if config.output.is_some() && settings.output.color != ColorMode::Always {
        return FormattingConfig::plain();
    }
    FormattingConfig::from_env(settings.output.color)
}

fn configure_output(formatting: &FormattingConfig) {
    if formatting.color.should_use_color() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }
}

fn open_sink(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::io(path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
