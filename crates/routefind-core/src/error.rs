//! Error types and exit codes for routefind
//!
//! Exit codes:
//! - 0: Success (including a valid query with no route)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed input, domain violation)
//!
//! Every error also carries an HTTP-style status for response rendering:
//! 400 for bad input, 500 for unexpected internal failure.

mod macros;

use thiserror::Error;

use crate::graph::types::NodeId;
use crate::response::ErrorResponse;

/// Exit codes for the routefind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input or invalid graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs and finding routes
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid node {node}: graph has {node_count} nodes")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("edge endpoint {node} out of range: graph declares {node_count} nodes")]
    OutOfRange { node: NodeId, node_count: usize },

    #[error("invalid weight {weight} on edge {from} -> {to}: weights must be non-negative")]
    InvalidWeight { from: NodeId, to: NodeId, weight: i64 },

    #[error("invalid node count {0}: a graph needs at least one node")]
    InvalidNodeCount(usize),

    #[error("graph of {requested} nodes exceeds the limit of {limit} nodes")]
    TooManyNodes { requested: String, limit: usize },

    #[error("empty input: expected a `source,destination` header")]
    EmptyInput,

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("cannot read input {path}: {reason}")]
    InputUnavailable { path: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed input record
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        RouteError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a failed IO operation with its target
    pub fn io_operation(
        operation: &str,
        target: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteError::FailedOperation {
            operation: format!("{} {}", operation, target),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::InvalidNode { .. }
            | RouteError::OutOfRange { .. }
            | RouteError::InvalidWeight { .. }
            | RouteError::InvalidNodeCount(_)
            | RouteError::TooManyNodes { .. }
            | RouteError::EmptyInput
            | RouteError::MalformedRecord { .. }
            | RouteError::InputUnavailable { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::FailedOperation { .. }
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// HTTP-style status: 400 when the caller's input is at fault, 500 otherwise
    pub fn status(&self) -> u16 {
        match self.exit_code() {
            ExitCode::Usage | ExitCode::Data => 400,
            ExitCode::Success | ExitCode::Failure => 500,
        }
    }

    /// Stable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::InvalidNode { .. } => "invalid_node",
            RouteError::OutOfRange { .. } => "out_of_range",
            RouteError::InvalidWeight { .. } => "invalid_weight",
            RouteError::InvalidNodeCount(_) => "invalid_node_count",
            RouteError::TooManyNodes { .. } => "too_many_nodes",
            RouteError::EmptyInput => "empty_input",
            RouteError::MalformedRecord { .. } => "malformed_record",
            RouteError::InputUnavailable { .. } => "input_unavailable",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::FailedOperation { .. } => "failed_operation",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(ErrorResponse::from(self))
    }
}

/// Result type alias for routefind operations
pub type Result<T> = std::result::Result<T, RouteError>;
