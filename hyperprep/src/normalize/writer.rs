//! Tab-delimited output of the normalized tables.
//!
//! Cells are written as-is, without quoting, mirroring how the input is
//! read: a cell can never hold a tab or newline.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NormalizeError, NormalizeResult};
use crate::logs::log_success_indent;
use crate::models::{EdgeRole, NormalizedTables, Table};
use crate::parser::TSV_DELIMITER;

/// Paths of the files written for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub node: PathBuf,
    pub source: PathBuf,
    pub target: PathBuf,
    pub array: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, basename: &OsStr) -> Self {
        let path = |role: EdgeRole| output_dir.join(role.file_name(basename));
        Self {
            node: path(EdgeRole::Node),
            source: path(EdgeRole::Source),
            target: path(EdgeRole::Target),
            array: path(EdgeRole::Array),
        }
    }

    pub fn get(&self, role: EdgeRole) -> &Path {
        match role {
            EdgeRole::Node => &self.node,
            EdgeRole::Source => &self.source,
            EdgeRole::Target => &self.target,
            EdgeRole::Array => &self.array,
        }
    }
}

fn output_err(path: &Path, message: impl ToString) -> NormalizeError {
    NormalizeError::Output {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Write one table as tab-delimited text with its header row.
pub fn write_table(table: &Table, path: &Path) -> NormalizeResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(TSV_DELIMITER)
        .quote_style(csv::QuoteStyle::Never)
        .flexible(true)
        .from_path(path)
        .map_err(|e| output_err(path, e))?;

    wtr.write_record(&table.headers).map_err(|e| output_err(path, e))?;
    for row in &table.rows {
        wtr.write_record(row).map_err(|e| output_err(path, e))?;
    }
    wtr.flush().map_err(|e| output_err(path, e))
}

/// Write the four tables into `output_dir`, creating it if needed.
pub fn write_tables(
    tables: &NormalizedTables,
    output_dir: &Path,
    basename: &OsStr,
) -> NormalizeResult<OutputPaths> {
    fs::create_dir_all(output_dir).map_err(|e| output_err(output_dir, e))?;

    let paths = OutputPaths::new(output_dir, basename);
    for role in EdgeRole::ALL {
        let table = tables.get(role);
        let path = paths.get(role);
        write_table(table, path)?;
        log_success_indent(format!("{} rows written into {}", table.len(), path.display()), 1);
    }

    Ok(paths)
}
