//! CLI argument definitions using clap
//!
//! Commands:
//! - ingestdoc encode --input <doc.json> --output <doc.bin>
//! - ingestdoc decode --input <doc.bin>
//! - ingestdoc compare <left.bin> <right.bin>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ingestdoc - ingest document wire format tool
#[derive(Parser, Debug)]
#[command(name = "ingestdoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON document into the binary wire format
    Encode {
        /// JSON document with system_metadata, payload and local_metadata
        #[arg(long)]
        input: PathBuf,
        /// Destination for the encoded bytes
        #[arg(long)]
        output: PathBuf,
    },

    /// Decode an encoded document and print it as JSON
    Decode {
        /// Encoded document
        #[arg(long)]
        input: PathBuf,
    },

    /// Decode two documents and report whether they are equal
    Compare {
        /// First encoded document
        left: PathBuf,
        /// Second encoded document
        right: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
