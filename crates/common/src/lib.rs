//! Common utilities for JSON capabilities.
//!
//! This crate provides helpers for:
//! - Reading JSON input from stdin
//! - Writing JSON output to stdout
//! - Error handling patterns
//! - Stderr diagnostics (see [`log`])

use serde::{de::DeserializeOwned, Serialize};
use std::io::{self, Read, Write};

pub mod log;

// ============ Error Type ============

/// Error type for capability operations.
#[derive(Debug, Serialize)]
pub struct CapabilityError {
    pub error: String,
}

impl CapabilityError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for CapabilityError {}

// ============ Input/Output Helpers ============

/// Read and parse JSON input from any reader.
pub fn read_input_from<T, R>(mut reader: R) -> Result<T, CapabilityError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| CapabilityError::new(format!("Failed to read stdin: {}", e)))?;

    log::debug(format!("input: {}", log::truncate(&input, 200)));

    serde_json::from_str(&input)
        .map_err(|e| CapabilityError::new(format!("Invalid JSON input: {}", e)))
}

/// Write a successful JSON response as a single line.
pub fn write_output_to<W: Write, T: Serialize>(mut writer: W, output: &T) -> io::Result<()> {
    match serde_json::to_string(output) {
        Ok(json) => writeln!(writer, "{}", json),
        Err(e) => write_error_to(writer, &format!("Failed to serialize output: {}", e)),
    }
}

/// Write an error response as a single JSON line.
pub fn write_error_to<W: Write>(mut writer: W, msg: &str) -> io::Result<()> {
    let err = CapabilityError::new(msg);
    serde_json::to_writer(&mut writer, &err)?;
    writeln!(writer)
}

/// Run a capability with automatic error handling.
pub fn run<I, O, F>(handler: F)
where
    I: DeserializeOwned,
    O: Serialize,
    F: FnOnce(I) -> Result<O, CapabilityError>,
{
    if let Err(e) = run_with(io::stdin().lock(), io::stdout().lock(), handler) {
        log::error(format!("Failed to write stdout: {}", e));
    }
}

/// Run a capability over an arbitrary reader and writer.
///
/// Input and handler failures are reported as `{"error": ...}` on `writer`;
/// only a failing `writer` surfaces as `Err`.
pub fn run_with<I, O, F, R, W>(reader: R, mut writer: W, handler: F) -> io::Result<()>
where
    I: DeserializeOwned,
    O: Serialize,
    F: FnOnce(I) -> Result<O, CapabilityError>,
    R: Read,
    W: Write,
{
    let result = read_input_from::<I, R>(reader).and_then(handler);
    let written = match result {
        Ok(output) => write_output_to(&mut writer, &output),
        Err(e) => {
            log::error(&e);
            write_error_to(&mut writer, &e.error)
        }
    };
    written?;
    writer.flush()
}

// Re-export commonly used items
pub use serde;
pub use serde_json;
