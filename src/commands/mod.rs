//! CLI command implementations.
//!
//! - **analyze**: map dependencies to methods for one source file
//! - **init**: write a default `.respmap.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
