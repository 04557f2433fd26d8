pub mod output;
pub mod writers;

pub use output::{create_writer, AnalysisReport, OutputFormat, OutputWriter};

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::{Error, Result};

/// Display name used for source read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Read source text from a file, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| Error::io(STDIN_NAME, e))?;
        return Ok(contents);
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        STDIN_NAME.to_string()
    } else {
        path.display().to_string()
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
