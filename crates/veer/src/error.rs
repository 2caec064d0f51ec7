//! Error types for veer operations.
//!
//! Traversal itself never fails: found, breached and exhausted are ordinary
//! step outcomes. These errors cover everything around the search engines,
//! such as loading graphs and configuration.

use std::io;
use thiserror::Error;

/// The error type for veer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A graph file could not be parsed or has an unsupported format.
    #[error("Graph format error: {0}")]
    GraphFormat(String),

    /// No built-in graph exists with the requested name.
    #[error("Unknown graph: {0}")]
    UnknownGraph(String),

    /// The node does not appear anywhere in the graph.
    #[error("Node not found: {0}")]
    UnknownNode(String),
}

/// A specialized Result type for veer operations.
pub type Result<T> = std::result::Result<T, Error>;
