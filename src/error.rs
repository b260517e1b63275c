//! Error types for ontofactory
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for ontofactory operations
pub type OntologyResult<T> = Result<T, OntologyError>;

/// Main error type for handle resolution and conversion
#[derive(Error, Debug)]
pub enum OntologyError {
    /// A local path the chosen strategy relies on does not exist
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    /// No classification rule accepts the handle
    #[error("unsupported ontology handle '{handle}': {reason}")]
    UnsupportedHandle { handle: String, reason: String },

    /// The conversion tool exited unsuccessfully
    #[error("converter failed with {}: {command}", describe_exit(.exit_code))]
    ExternalTool {
        exit_code: Option<i32>,
        command: String,
    },

    /// The conversion tool could not be started
    #[error("could not start converter '{command}': {source}")]
    ConverterUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The conversion tool ran past the configured timeout and was killed
    #[error("converter timed out after {timeout:?}: {command}")]
    ConverterTimeout { command: String, timeout: Duration },

    /// The artifact is not a valid obographs document
    #[error("cannot load {path} as obographs JSON: {message}")]
    Conversion { path: PathBuf, message: String },

    /// The remote query client rejected the identifier
    #[error("remote query for '{id}' failed: {message}")]
    RemoteQuery { id: String, message: String },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OntologyError {
    /// Exit code reported by the converter, if this is a converter failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExternalTool { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "termination by signal".to_string(),
    }
}
