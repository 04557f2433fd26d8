use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::writers::{HtmlWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use crate::analysis::AnalysisResult;
use crate::formatting::FormattingConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
    Html,
}

/// Everything a writer needs to render one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    /// File path, or `<stdin>`
    pub source_name: &'a str,
    #[serde(skip)]
    pub source: &'a str,
    pub selected: Option<&'a str>,
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(source_name: &'a str, source: &'a str, result: &'a AnalysisResult) -> Self {
        Self {
            source_name,
            source,
            selected: None,
            result,
        }
    }

    pub fn with_selection(mut self, selected: Option<&'a str>) -> Self {
        self.selected = selected;
        self
    }

    /// Highlighted markup of the source for the current selection.
    pub fn markup(&self) -> String {
        crate::highlight::highlight(self.source, self.result, self.selected)
    }

    pub fn verdict(&self) -> &'static str {
        if self.result.has_multiple_responsibilities {
            "Possible Single Responsibility violation"
        } else if self.result.is_empty() {
            "No injected dependencies found"
        } else {
            "Dependencies look cohesive"
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Html => Box::new(HtmlWriter::new(writer)),
    }
}
