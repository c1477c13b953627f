//! Configuration and CLI Command Tests
//!
//! Exercises config loading from disk and the encode/decode/compare
//! commands against files in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use ingestdoc::cli::{
    compare_files, decode_file, encode_file, load_config, CliErrorCode,
};
use ingestdoc::config::{Config, ConfigError};
use ingestdoc::document::{DocumentJson, IngestDocument, WriteableDocument};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn sample_json() -> serde_json::Value {
    json!({
        "system_metadata": {"_index": "logs", "_id": "42"},
        "payload": {
            "message": "disk full",
            "count": 3,
            "ratio": 0.5,
            "ok": false,
            "missing": null,
            "tags": ["a", "b"],
            "host": {"name": "node-1", "cores": 8}
        },
        "local_metadata": {"pipeline": "grok"}
    })
}

// =============================================================================
// Config Loading
// =============================================================================

#[test]
fn test_config_load_from_file() {
    let dir = create_temp_dir();
    let path = write_file(
        dir.path(),
        "config.json",
        r#"{"max_decode_depth": 4, "validate_system_metadata": true, "log_level": "warn"}"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.max_decode_depth, 4);
    assert!(config.validate_system_metadata);
    assert_eq!(config.system_fields().len(), 7);
}

#[test]
fn test_config_missing_file() {
    let dir = create_temp_dir();
    let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_load_config_without_path_uses_defaults() {
    assert_eq!(load_config(None).unwrap(), Config::default());
}

#[test]
fn test_load_config_invalid_file_maps_to_config_error() {
    let dir = create_temp_dir();
    let path = write_file(dir.path(), "config.json", r#"{"max_decode_depth": 0}"#);
    let err = load_config(Some(&path)).unwrap_err();
    assert_eq!(err.code(), CliErrorCode::ConfigError);
}

// =============================================================================
// Encode / Decode
// =============================================================================

#[test]
fn test_encode_then_decode_file() {
    let dir = create_temp_dir();
    let input = write_file(dir.path(), "doc.json", &sample_json().to_string());
    let output = dir.path().join("doc.bin");
    let config = Config::default();

    let bytes = encode_file(&config, &input, &output).unwrap();
    assert_eq!(fs::metadata(&output).unwrap().len(), bytes);

    let decoded = decode_file(&config, &output).unwrap();
    let expected: DocumentJson = serde_json::from_value(sample_json()).unwrap();
    assert_eq!(decoded, expected);
}

#[test]
fn test_encoded_file_matches_library_encoding() {
    let dir = create_temp_dir();
    let input = write_file(dir.path(), "doc.json", &sample_json().to_string());
    let output = dir.path().join("doc.bin");

    encode_file(&Config::default(), &input, &output).unwrap();

    let json: DocumentJson = serde_json::from_value(sample_json()).unwrap();
    let doc = WriteableDocument::new(IngestDocument::from(json));
    assert_eq!(fs::read(&output).unwrap(), doc.to_bytes());
}

#[test]
fn test_encode_rejects_unknown_system_field_when_enabled() {
    let dir = create_temp_dir();
    let input = write_file(
        dir.path(),
        "doc.json",
        r#"{"system_metadata": {"_index": "logs", "bogus": "x"}}"#,
    );
    let output = dir.path().join("doc.bin");

    let config = Config {
        validate_system_metadata: true,
        ..Config::default()
    };
    let err = encode_file(&config, &input, &output).unwrap_err();
    assert_eq!(err.code(), CliErrorCode::InvalidDocument);
    assert!(err.message().contains("bogus"));
    assert!(!output.exists());

    // Without validation the same document encodes
    encode_file(&Config::default(), &input, &output).unwrap();
}

#[test]
fn test_encode_rejects_invalid_json() {
    let dir = create_temp_dir();
    let input = write_file(dir.path(), "doc.json", "{not json");
    let err = encode_file(&Config::default(), &input, &dir.path().join("doc.bin")).unwrap_err();
    assert_eq!(err.code(), CliErrorCode::JsonError);
}

#[test]
fn test_decode_rejects_corrupt_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("doc.bin");
    fs::write(&path, [6, 0, 6, 1, 1, b'a', 9, 6, 0]).unwrap();

    let err = decode_file(&Config::default(), &path).unwrap_err();
    assert_eq!(err.code(), CliErrorCode::MalformedDocument);
}

#[test]
fn test_decode_honors_configured_depth() {
    let dir = create_temp_dir();
    let input = write_file(
        dir.path(),
        "doc.json",
        r#"{"payload": {"a": [[[[["deep"]]]]]}}"#,
    );
    let output = dir.path().join("doc.bin");
    encode_file(&Config::default(), &input, &output).unwrap();

    let shallow = Config {
        max_decode_depth: 3,
        ..Config::default()
    };
    let err = decode_file(&shallow, &output).unwrap_err();
    assert_eq!(err.code(), CliErrorCode::MalformedDocument);
    assert!(decode_file(&Config::default(), &output).is_ok());
}

#[test]
fn test_decode_missing_file() {
    let dir = create_temp_dir();
    let err = decode_file(&Config::default(), &dir.path().join("none.bin")).unwrap_err();
    assert_eq!(err.code(), CliErrorCode::IoError);
}

// =============================================================================
// Compare
// =============================================================================

#[test]
fn test_compare_equal_documents() {
    let dir = create_temp_dir();
    let config = Config::default();

    let left_json = write_file(
        dir.path(),
        "left.json",
        r#"{"system_metadata": {"_index": "i", "_id": "1"}, "payload": {"x": 1, "y": 2}}"#,
    );
    let right_json = write_file(
        dir.path(),
        "right.json",
        r#"{"payload": {"y": 2, "x": 1}, "system_metadata": {"_id": "1", "_index": "i"}}"#,
    );
    let left = dir.path().join("left.bin");
    let right = dir.path().join("right.bin");
    encode_file(&config, &left_json, &left).unwrap();
    encode_file(&config, &right_json, &right).unwrap();

    let cmp = compare_files(&config, &left, &right).unwrap();
    assert!(cmp.equal);
    assert_eq!(cmp.hash_left, cmp.hash_right);
    assert_eq!(cmp.hash_left.len(), 16);
}

#[test]
fn test_compare_different_documents() {
    let dir = create_temp_dir();
    let config = Config::default();

    let left_json = write_file(dir.path(), "left.json", r#"{"payload": {"x": 1}}"#);
    let right_json = write_file(dir.path(), "right.json", r#"{"payload": {"x": 1.0}}"#);
    let left = dir.path().join("left.bin");
    let right = dir.path().join("right.bin");
    encode_file(&config, &left_json, &left).unwrap();
    encode_file(&config, &right_json, &right).unwrap();

    let cmp = compare_files(&config, &left, &right).unwrap();
    assert!(!cmp.equal);
}
