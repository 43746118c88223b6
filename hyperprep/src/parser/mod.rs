//! Tab-delimited input reading.
//!
//! The first record is the header; every following non-empty line is a
//! data row. Rows may have a different width than the header, callers
//! decide what widths they accept. Quote characters carry no meaning:
//! every tab separates fields and every newline ends a row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{TsvError, TsvResult};

/// Field delimiter of hyperedge files.
pub const TSV_DELIMITER: u8 = b'\t';

/// One data row with its source line number (the header is line 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvRow {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parsed file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTsv {
    pub headers: Vec<String>,
    pub rows: Vec<TsvRow>,
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(TSV_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

/// Parse tab-delimited content from a reader.
///
/// `path` is only used to label errors.
pub fn parse_tsv<R: Read>(reader: R, path: &Path) -> TsvResult<ParsedTsv> {
    let mut records = reader_builder().from_reader(reader).into_records();
    let parse_err = |source| TsvError::Parse { path: path.to_path_buf(), source };

    let headers: Vec<String> = match records.next() {
        Some(header) => header.map_err(parse_err)?.iter().map(String::from).collect(),
        None => return Err(TsvError::EmptyFile(path.to_path_buf())),
    };

    let mut rows = Vec::new();
    for (idx, result) in records.enumerate() {
        let record = result.map_err(parse_err)?;
        // +1 for 0-index, +1 for header
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);
        rows.push(TsvRow {
            line,
            fields: record.iter().map(String::from).collect(),
        });
    }

    Ok(ParsedTsv { headers, rows })
}

/// Read a tab-delimited file from disk.
pub fn read_tsv(path: &Path) -> TsvResult<ParsedTsv> {
    let file = File::open(path).map_err(|source| TsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tsv(file, path)
}

/// Read only the header line of a tab-delimited file.
pub fn read_headers(path: &Path) -> TsvResult<Vec<String>> {
    let file = File::open(path).map_err(|source| TsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut records = reader_builder().from_reader(file).into_records();
    match records.next() {
        Some(header) => Ok(header
            .map_err(|source| TsvError::Parse { path: path.to_path_buf(), source })?
            .iter()
            .map(String::from)
            .collect()),
        None => Err(TsvError::EmptyFile(path.to_path_buf())),
    }
}
