//! CLI command implementations
//!
//! Every command loads the configuration first (or uses defaults), applies
//! the log level, then does its work. Data goes to stdout as one JSON
//! object; logs go to stderr.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::document::{DocumentJson, IngestDocument, WriteableDocument};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::stream::StreamOutput;

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{create_output, open_input, read_json, write_json};

/// Result of the `encode` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeSummary {
    pub status: String,
    pub bytes: u64,
}

/// Result of the `compare` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub equal: bool,
    pub hash_left: String,
    pub hash_right: String,
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_deref())?;
    Logger::set_min_severity(config.min_severity());

    match cli.command {
        Command::Encode { input, output } => {
            let bytes = encode_file(&config, &input, &output)?;
            write_json(&EncodeSummary {
                status: "ok".to_string(),
                bytes,
            })
        }
        Command::Decode { input } => write_json(&decode_file(&config, &input)?),
        Command::Compare { left, right } => write_json(&compare_files(&config, &left, &right)?),
    }
}

/// Load the configuration file, or defaults when none is given
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config = Config::load(path)?;
    let source = path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("log_level", config.log_level.as_str()),
            ("path", source.as_str()),
        ],
    );
    Ok(config)
}

/// Encode a JSON document file into `output`, returning the bytes written
pub fn encode_file(config: &Config, input: &Path, output: &Path) -> CliResult<u64> {
    let json: DocumentJson = read_json(input)?;
    let document = IngestDocument::from(json);

    if config.validate_system_metadata {
        if let Err(err) = config.system_fields().validate(&document) {
            log_event_with_fields(Event::MetadataRejected, &[("reason", err.message())]);
            return Err(err.into());
        }
    }

    let mut out = StreamOutput::new(create_output(output)?);
    WriteableDocument::new(document).write_to(&mut out)?;
    out.flush()?;

    Ok(out.bytes_written())
}

/// Decode an encoded document file into its JSON form
pub fn decode_file(config: &Config, input: &Path) -> CliResult<DocumentJson> {
    let document = read_document(config, input)?;
    Ok(DocumentJson::from(document.document()))
}

/// Decode two encoded document files and compare them
pub fn compare_files(config: &Config, left: &Path, right: &Path) -> CliResult<Comparison> {
    let left = read_document(config, left)?;
    let right = read_document(config, right)?;

    Ok(Comparison {
        equal: left == right,
        hash_left: format!("{:016x}", left.hash_code()),
        hash_right: format!("{:016x}", right.hash_code()),
    })
}

fn read_document(config: &Config, path: &Path) -> CliResult<WriteableDocument> {
    let reader = open_input(path)?;
    let document = WriteableDocument::read_from_reader(reader, config.decode_limits())?;
    Ok(document)
}
