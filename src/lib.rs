// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod highlight;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::analysis::{
    analyze, analyze_with, classify, extract_dependencies, extract_method_usages,
    AnalysisResult, AnalyzerConfig, Classification, DependencyDescriptor, FrameworkFilter,
    Limitation, MethodUsage, ResponsibilityAnalyzer,
};

pub use crate::errors::{Error, Result};

pub use crate::highlight::highlight;

pub use crate::io::output::{create_writer, AnalysisReport, OutputFormat, OutputWriter};
