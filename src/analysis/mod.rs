//! Dependency and responsibility analysis of a single class.
//!
//! The pipeline is strictly forward and every stage is a pure function:
//!
//! 1. [`extract_dependencies`] reads constructor parameters and readonly fields
//! 2. [`extract_method_usages`] maps method bodies to the dependencies they touch
//! 3. [`classify`] decides whether the class looks like several responsibilities
//!
//! [`crate::highlight::highlight`] renders the result over the original text.
//!
//! ```rust
//! use respmap::analysis::analyze;
//!
//! let source = r#"
//! public class Checkout(IOrderService orders, IEmailService mail)
//! {
//!     public void ProcessOrder(Order o) { orders.Submit(o); }
//!     public void SendConfirmationEmail(Order o) { mail.Send(o); }
//! }
//! "#;
//!
//! let result = analyze(source, true);
//! assert_eq!(result.dependencies.len(), 2);
//! assert!(result.has_multiple_responsibilities);
//! assert!(result.mixed_methods.is_empty());
//! ```

mod brace_scanner;
pub mod dependency_extractor;
pub mod framework_types;
mod grammar;
pub mod limitations;
pub mod palette;
pub mod responsibility_classifier;
pub mod types;
pub mod usage_mapper;

pub use dependency_extractor::{class_name, extract_dependencies, extract_dependencies_with};
pub use framework_types::{FrameworkFilter, DEFAULT_FRAMEWORK_TYPES};
pub use limitations::{detect_limitations, Limitation};
pub use palette::PALETTE;
pub use responsibility_classifier::{classify, exclusively_used_dependencies};
pub use types::{AnalysisResult, Classification, DependencyDescriptor, MethodUsage};
pub use usage_mapper::extract_method_usages;

pub(crate) use grammar::whole_word;

use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::errors::Error;

/// Analyze one class with the standard (or no) framework filter.
pub fn analyze(source: &str, filter_framework_types: bool) -> AnalysisResult {
    analyze_with(source, &FrameworkFilter::from_flag(filter_framework_types))
}

pub fn analyze_with(source: &str, filter: &FrameworkFilter) -> AnalysisResult {
    let _span = info_span!("analyze", bytes = source.len()).entered();

    let dependencies = extract_dependencies_with(source, filter);
    let method_usages = extract_method_usages(source, &dependencies);
    let Classification {
        has_multiple_responsibilities,
        mixed_methods,
    } = classify(&dependencies, &method_usages);

    AnalysisResult {
        dependencies,
        method_usages,
        has_multiple_responsibilities,
        mixed_methods,
        limitations: detect_limitations(source),
    }
}

pub fn default_filter_framework_types() -> bool {
    true
}

pub fn default_max_source_bytes() -> usize {
    1024 * 1024
}

/// Analyzer settings, read from the `[analysis]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Drop logging, configuration, caching and hosting services
    #[serde(default = "default_filter_framework_types")]
    pub filter_framework_types: bool,

    /// Inputs larger than this are rejected before any pattern runs
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,

    /// Additional base type names treated as framework services
    #[serde(default)]
    pub extra_framework_types: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            filter_framework_types: default_filter_framework_types(),
            max_source_bytes: default_max_source_bytes(),
            extra_framework_types: Vec::new(),
        }
    }
}

/// Configured entry point used by the command line shell.
#[derive(Debug, Clone)]
pub struct ResponsibilityAnalyzer {
    filter: FrameworkFilter,
    max_source_bytes: usize,
}

impl ResponsibilityAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        let filter = if config.filter_framework_types {
            FrameworkFilter::with_extra(&config.extra_framework_types)
        } else {
            FrameworkFilter::disabled()
        };
        Self {
            filter,
            max_source_bytes: config.max_source_bytes,
        }
    }

    pub fn analyze(&self, source: &str) -> Result<AnalysisResult, Error> {
        if source.len() > self.max_source_bytes {
            return Err(Error::SourceTooLarge {
                size: source.len(),
                limit: self.max_source_bytes,
            });
        }
        Ok(analyze_with(source, &self.filter))
    }
}

impl Default for ResponsibilityAnalyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}
