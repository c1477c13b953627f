//! CLI module for ingestdoc
//!
//! Provides command-line interface for:
//! - encode: JSON document to wire format
//! - decode: wire format to JSON document
//! - compare: equality and hashes of two encoded documents

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    compare_files, decode_file, encode_file, load_config, run, run_command, Comparison,
    EncodeSummary,
};
pub use errors::{CliError, CliErrorCode, CliResult};
