//! File and stdout handling for the CLI
//!
//! - Input documents: JSON files or encoded files
//! - Output: one JSON object per command on stdout
//! - UTF-8 only

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Open a file for buffered reading
pub fn open_input(path: &Path) -> CliResult<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| CliError::io_error(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Create a file for buffered writing, replacing any existing file
pub fn create_output(path: &Path) -> CliResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| CliError::io_error(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let reader = open_input(path)?;
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}

/// Write a JSON object as one line on stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
