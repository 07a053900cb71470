//! Error types for result loading.
//!
//! The ranking engine itself never fails: it is a total function over runner
//! records, and malformed numeric fields degrade to `0`. Errors only appear at
//! the edges of the crate, where raw documents are read, fetched and parsed.
//!
//! ## Error Categories
//!
//! - **File Errors**: result or configuration files that cannot be read
//! - **XML Errors**: documents that are not well-formed XML
//! - **Structural Errors**: documents without an `Event`, imports without any valid event
//! - **Fetch Errors**: a [`ResultSource`](crate::ResultSource) could not deliver a document
//! - **Configuration Errors**: invalid board configuration YAML
//!
//! ## Recovery and Retry
//!
//! ```rust
//! use ofresults::ResultsError;
//!
//! let error = ResultsError::fetch_failed("course.xml", "connection reset");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for result-list operations.
pub type Result<T, E = ResultsError> = std::result::Result<T, E>;

/// Main error type for loading and parsing result lists.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResultsError {
    #[error("Result file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error in {context}: {details}")]
    Xml { context: String, details: String },

    #[error("No Event element found in {file_name}")]
    NoEvent { file_name: String },

    #[error("No valid event found in the imported files")]
    NoValidEvent,

    #[error("Invalid result file name '{name}'")]
    InvalidFileName { name: String },

    #[error("Failed to fetch '{name}': {reason}")]
    Fetch {
        name: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {details}")]
    Config { details: String },
}

impl ResultsError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            ResultsError::Fetch { .. } => true,
            ResultsError::File { .. } => false,
            ResultsError::Xml { .. } => false,
            ResultsError::NoEvent { .. } => false,
            ResultsError::NoValidEvent => false,
            ResultsError::InvalidFileName { .. } => false,
            ResultsError::Config { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ResultsError::File { .. } => vec![
                "Check the file exists and is readable",
                "Verify the results directory setting",
                "Check file permissions",
            ],
            ResultsError::Xml { .. } => vec![
                "Re-export the result list from the timing software",
                "Check the file is complete and not truncated",
            ],
            ResultsError::NoEvent { .. } => vec![
                "Export an IOF XML ResultList, not a start list or entry list",
                "Check the Event element is present",
            ],
            ResultsError::NoValidEvent => vec![
                "Select at least one IOF XML ResultList file",
                "Check the logs for the reason each file was skipped",
            ],
            ResultsError::InvalidFileName { .. } => vec![
                "Use a plain file name without directory components",
                "Place the file directly in the results directory",
            ],
            ResultsError::Fetch { .. } => vec![
                "Retry the request",
                "Check the file has been published to the results directory",
            ],
            ResultsError::Config { .. } => vec![
                "Check the configuration YAML syntax",
                "Remove unknown keys from the configuration",
            ],
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        ResultsError::File { path, source }
    }

    /// Helper constructor for XML parse errors.
    pub fn xml_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        ResultsError::Xml { context: context.into(), details: details.into() }
    }

    /// Helper constructor for fetch failures.
    pub fn fetch_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ResultsError::Fetch { name: name.into(), reason: reason.into(), source: None }
    }

    /// Helper constructor for fetch failures with source.
    pub fn fetch_failed_with_source(
        name: impl Into<String>,
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        ResultsError::Fetch { name: name.into(), reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for configuration errors.
    pub fn config_error(details: impl Into<String>) -> Self {
        ResultsError::Config { details: details.into() }
    }
}

impl From<std::io::Error> for ResultsError {
    fn from(err: std::io::Error) -> Self {
        ResultsError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
