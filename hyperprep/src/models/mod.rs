//! Domain models shared by the normalizer and the aggregator.
//!
//! - [`FactId`] - Content-derived identifier of a fact node
//! - [`EdgeRole`] - Role column of a hyperedge record
//! - [`RoleColumns`] - Column indices of the three roles
//! - [`Table`] / [`NormalizedTables`] - In-memory output tables
//! - [`PublicationRecord`] - One row of the aggregated metadata CSV

use serde_json::Value;
use std::ffi::{OsStr, OsString};
use std::fmt;

use crate::error::{NormalizeError, NormalizeResult};

// =============================================================================
// Fact Identifier
// =============================================================================

/// Identifier of a fact node (lowercase hex SHA-256).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactId(String);

impl FactId {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Roles
// =============================================================================

/// Output table kinds, one file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRole {
    Node,
    Source,
    Target,
    Array,
}

impl EdgeRole {
    /// All output kinds in write order.
    pub const ALL: [EdgeRole; 4] = [Self::Node, Self::Source, Self::Target, Self::Array];

    /// File name prefix, without the dash.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Source => "source",
            Self::Target => "target",
            Self::Array => "array",
        }
    }

    /// Output file name for an input basename, byte-for-byte.
    pub fn file_name(&self, basename: &OsStr) -> OsString {
        let mut name = OsString::from(self.prefix());
        name.push("-");
        name.push(basename);
        name
    }
}

/// Zero-based column indices of the role fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColumns {
    pub source: usize,
    pub target: usize,
    pub array: usize,
}

impl RoleColumns {
    /// Build role columns, rejecting two roles on the same column.
    pub fn new(source: usize, target: usize, array: usize) -> NormalizeResult<Self> {
        let pairs = [
            ("source", source, "target", target),
            ("source", source, "array", array),
            ("target", target, "array", array),
        ];
        for (first, a, second, b) in pairs {
            if a == b {
                return Err(NormalizeError::DuplicateRole { first, second, index: a });
            }
        }
        Ok(Self { source, target, array })
    }

    /// Check that every role index exists in a row of `width` fields.
    pub fn check_width(&self, line: usize, width: usize) -> NormalizeResult<()> {
        for (role, index) in [("source", self.source), ("target", self.target), ("array", self.array)] {
            if index >= width {
                return Err(NormalizeError::ColumnOutOfRange { line, role, index, width });
            }
        }
        Ok(())
    }

    pub fn is_role(&self, index: usize) -> bool {
        index == self.source || index == self.target || index == self.array
    }
}

// =============================================================================
// Tables
// =============================================================================

/// A header plus rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The four tables derived from one hyperedge file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTables {
    pub nodes: Table,
    pub sources: Table,
    pub targets: Table,
    pub arrays: Table,
}

impl NormalizedTables {
    pub fn get(&self, role: EdgeRole) -> &Table {
        match role {
            EdgeRole::Node => &self.nodes,
            EdgeRole::Source => &self.sources,
            EdgeRole::Target => &self.targets,
            EdgeRole::Array => &self.arrays,
        }
    }
}

// =============================================================================
// Publication Metadata
// =============================================================================

/// Separator used to flatten the author list.
pub const AUTHOR_SEPARATOR: &str = "|";

/// Column names of the aggregated CSV, after the index column.
pub const PUBLICATION_COLUMNS: [&str; 6] = ["pmid", "pmcid", "title", "journal", "authors", "year"];

/// One publication with the attributes kept for import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    pub pmid: String,
    pub pmcid: Option<String>,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub authors: Vec<String>,
    pub year: Option<String>,
}

impl PublicationRecord {
    /// Extract a record from a parsed JSON document.
    ///
    /// Returns `None` when the document is not an object or has no `pmid` key.
    pub fn from_json(doc: &Value) -> Option<Self> {
        let obj = doc.as_object()?;
        let pmid = obj.get("pmid")?;

        let authors = match obj.get("authors") {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(other) => scalar_text(other).into_iter().collect(),
            None => Vec::new(),
        };

        Some(Self {
            pmid: scalar_text(pmid).unwrap_or_default(),
            pmcid: obj.get("pmcid").and_then(scalar_text),
            title: obj.get("title").and_then(scalar_text),
            journal: obj.get("journal").and_then(scalar_text),
            authors,
            year: obj.get("year").and_then(scalar_text),
        })
    }

    /// Authors joined with [`AUTHOR_SEPARATOR`].
    pub fn authors_joined(&self) -> String {
        self.authors.join(AUTHOR_SEPARATOR)
    }

    /// Cells in [`PUBLICATION_COLUMNS`] order.
    pub fn to_cells(&self) -> [String; 6] {
        [
            self.pmid.clone(),
            self.pmcid.clone().unwrap_or_default(),
            self.title.clone().unwrap_or_default(),
            self.journal.clone().unwrap_or_default(),
            self.authors_joined(),
            self.year.clone().unwrap_or_default(),
        ]
    }
}

/// Text form of a JSON value: strings verbatim, null as absent,
/// everything else as compact JSON.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
