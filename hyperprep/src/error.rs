//! Error types for the hyperprep utilities.
//!
//! - [`TsvError`] - Tab-delimited input errors
//! - [`NormalizeError`] - Hyperedge normalization errors
//! - [`AggregateError`] - Publication metadata aggregation errors
//!
//! Lower-level errors convert into the per-utility errors via `From`,
//! so `?` works across module boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// TSV Input Errors
// =============================================================================

/// Errors while reading a tab-delimited input file.
#[derive(Debug, Error)]
pub enum TsvError {
    /// Failed to open or read the file.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid delimited text.
    #[error("Invalid TSV in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header line.
    #[error("TSV file '{0}' is empty (no header line)")]
    EmptyFile(PathBuf),
}

// =============================================================================
// Normalization Errors
// =============================================================================

/// Errors during hyperedge normalization.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input could not be read.
    #[error(transparent)]
    Tsv(#[from] TsvError),

    /// Two roles point at the same column.
    #[error("Role columns must be distinct: {first} and {second} both use column {index}")]
    DuplicateRole {
        first: &'static str,
        second: &'static str,
        index: usize,
    },

    /// A role index does not exist in a row (line 1 is the header).
    #[error("Line {line}: {role} column {index} is out of range (row has {width} fields)")]
    ColumnOutOfRange {
        line: usize,
        role: &'static str,
        index: usize,
        width: usize,
    },

    /// The input path has no file name to derive output names from.
    #[error("Cannot derive output name from input path '{0}'")]
    NoBasename(PathBuf),

    /// Output directory or file could not be written.
    #[error("Failed to write '{path}': {message}")]
    Output { path: PathBuf, message: String },
}

// =============================================================================
// Aggregation Errors
// =============================================================================

/// Errors during publication metadata aggregation.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Directory listing failed.
    #[error("Cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be read.
    #[error("Cannot read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON.
    #[error("Malformed JSON in '{path}': {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output CSV could not be written.
    #[error("Failed to write '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for TSV input operations.
pub type TsvResult<T> = Result<T, TsvError>;

/// Result type for normalization operations.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Result type for aggregation operations.
pub type AggregateResult<T> = Result<T, AggregateError>;
