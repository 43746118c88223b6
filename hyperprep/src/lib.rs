//! # Hyperprep - graph import preparation
//!
//! Two independent batch utilities that prepare data for graph import:
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────────────┐
//! │ ixn.tsv     │────▶│  Normalize  │────▶│ node/source/target/array │
//! │ (hyperedge) │     │  (FactID)   │     │ TSV tables               │
//! └─────────────┘     └─────────────┘     └──────────────────────────┘
//!
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────────────┐
//! │ PMC JSON    │────▶│  Aggregate  │────▶│ publications CSV         │
//! │ directories │     │  (by pmid)  │     │                          │
//! └─────────────┘     └─────────────┘     └──────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hyperprep::{normalize_file, RoleColumns};
//! use std::path::Path;
//!
//! let roles = RoleColumns::new(1, 2, 3)?;
//! let report = normalize_file(Path::new("ixn.tsv"), Path::new("out"), roles)?;
//! println!("{} facts, {} array edges", report.rows, report.array_edges);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per utility
//! - [`logs`] - Leveled progress output
//! - [`models`] - Shared data structures
//! - [`parser`] - Tab-delimited input
//! - [`normalize`] - Hyperedge normalization
//! - [`aggregate`] - Publication metadata aggregation

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Input
pub mod parser;

// Utilities
pub mod aggregate;
pub mod normalize;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    AggregateError, AggregateResult, NormalizeError, NormalizeResult, TsvError, TsvResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    EdgeRole, FactId, NormalizedTables, PublicationRecord, RoleColumns, Table,
    AUTHOR_SEPARATOR, PUBLICATION_COLUMNS,
};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{parse_tsv, read_headers, read_tsv, ParsedTsv, TsvRow};

// =============================================================================
// Re-exports - Normalizer
// =============================================================================

pub use normalize::{
    fact_id, normalize_file, normalize_files, normalize_table, split_array, write_tables,
    NormalizeOptions, NormalizeReport, OutputPaths, ARRAY_SEPARATOR, FACT_ID_HEADER,
};

// =============================================================================
// Re-exports - Aggregator
// =============================================================================

pub use aggregate::{
    aggregate_dirs, collect_records, list_files, read_json_file, write_csv, AggregateOptions,
    AggregateReport, Aggregation,
};
