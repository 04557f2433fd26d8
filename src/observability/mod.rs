//! Diagnostic logging for the command line shell.
//!
//! Analysis code emits `tracing` events (spans around each analysis, debug
//! events per discovered dependency). Nothing is printed unless a subscriber
//! is installed, which only the binary does:
//!
//! ```ignore
//! use respmap::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli_verbosity);
//! }
//! ```

mod tracing;

pub use self::tracing::{default_directive, init_tracing, LOG_ENV_VAR};
