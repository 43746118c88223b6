//! Publication metadata aggregation.
//!
//! Scans directories of PMC JSON documents and writes one CSV with a row
//! per publication that carries a `pmid`:
//!
//! ```text
//! ,pmid,pmcid,title,journal,authors,year
//! 0,12345,PMC1,A title,Some Journal,A|B|C,2019
//! ```
//!
//! The leading unnamed column is the row index. Documents without a `pmid`
//! are skipped with a warning; unreadable or malformed files abort the run.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AggregateError, AggregateResult};
use crate::logs::{log_info, log_success, log_warning};
use crate::models::{PublicationRecord, PUBLICATION_COLUMNS};

/// Options for one aggregator run
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Directories to scan, non-recursively, in order
    pub input_dirs: Vec<PathBuf>,

    /// Destination CSV
    pub output_file: PathBuf,
}

/// Records collected from a set of directories
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub records: Vec<PublicationRecord>,
    /// Files parsed but lacking a `pmid`
    pub skipped: Vec<PathBuf>,
}

/// Outcome of a whole run
#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub output: PathBuf,
    pub rows: usize,
    pub skipped: Vec<PathBuf>,
}

/// Regular files directly inside `dir`, sorted by name.
///
/// Symlinks to regular files count as files.
pub fn list_files(dir: &Path) -> AggregateResult<Vec<PathBuf>> {
    let read_dir_err = |source| AggregateError::ReadDir { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one JSON file.
pub fn read_json_file(path: &Path) -> AggregateResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| AggregateError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AggregateError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect publication records from every directory, in order.
pub fn collect_records(dirs: &[PathBuf]) -> AggregateResult<Aggregation> {
    let mut aggregation = Aggregation::default();

    for dir in dirs {
        log_info(format!("Reading files in directory: {}", dir.display()));
        for file in list_files(dir)? {
            let doc = read_json_file(&file)?;
            match PublicationRecord::from_json(&doc) {
                Some(record) => aggregation.records.push(record),
                None => {
                    log_warning(format!("File does not contain pmid: {}", file.display()));
                    aggregation.skipped.push(file);
                }
            }
        }
    }

    Ok(aggregation)
}

/// Write records as CSV with a leading row-index column.
pub fn write_csv(records: &[PublicationRecord], output: &Path) -> AggregateResult<()> {
    let output_err = |source| AggregateError::Output { path: output.to_path_buf(), source };

    let mut wtr = csv::Writer::from_path(output).map_err(output_err)?;

    let mut header = vec![""];
    header.extend(PUBLICATION_COLUMNS);
    wtr.write_record(&header).map_err(output_err)?;

    for (index, record) in records.iter().enumerate() {
        let cells = record.to_cells();
        let index = index.to_string();
        wtr.write_record(std::iter::once(index.as_str()).chain(cells.iter().map(String::as_str)))
            .map_err(output_err)?;
    }

    wtr.flush().map_err(|e| output_err(e.into()))
}

/// Scan the input directories and write the aggregated CSV.
pub fn aggregate_dirs(options: &AggregateOptions) -> AggregateResult<AggregateReport> {
    let aggregation = collect_records(&options.input_dirs)?;
    write_csv(&aggregation.records, &options.output_file)?;

    log_success(format!(
        "{} rows written into {}",
        aggregation.records.len(),
        options.output_file.display()
    ));

    Ok(AggregateReport {
        output: options.output_file.clone(),
        rows: aggregation.records.len(),
        skipped: aggregation.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_list_files_is_sorted_and_flat() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b.json", "{}");
        write(dir.path(), "a.json", "{}");
        fs::create_dir(dir.path().join("nested")).unwrap();
        write(&dir.path().join("nested"), "c.json", "{}");

        let files = list_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_missing_pmid_is_skipped() {
        let dir = tempdir().unwrap();
        let skipped = write(dir.path(), "nopmid.json", r#"{"pmcid":"PMC1","title":"X"}"#);

        let aggregation = collect_records(&[dir.path().to_path_buf()]).unwrap();

        assert!(aggregation.records.is_empty());
        assert_eq!(aggregation.skipped, vec![skipped]);
    }

    #[test]
    fn test_filter_counts_pmid_files() {
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        write(dir_a.path(), "1.json", r#"{"pmid":"1","authors":["A"]}"#);
        write(dir_a.path(), "2.json", r#"{"pmcid":"PMC2"}"#);
        write(dir_b.path(), "3.json", r#"{"pmid":3,"year":2001}"#);

        let aggregation =
            collect_records(&[dir_a.path().to_path_buf(), dir_b.path().to_path_buf()]).unwrap();

        let pmids: Vec<_> = aggregation.records.iter().map(|r| r.pmid.as_str()).collect();
        assert_eq!(pmids, vec!["1", "3"]);
        assert_eq!(aggregation.skipped.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempdir().unwrap();
        write(dir.path(), "ok.json", r#"{"pmid":"1"}"#);
        write(dir.path(), "zz.json", "{not json");

        let err = collect_records(&[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, AggregateError::MalformedJson { .. }));
        assert!(err.to_string().contains("zz.json"));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let err = collect_records(&[dir.path().join("absent")]).unwrap_err();
        assert!(matches!(err, AggregateError::ReadDir { .. }));
    }

    #[test]
    fn test_csv_layout() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "paper.json",
            r#"{"pmid":"123","pmcid":"PMC9","title":"Genes, and more","journal":"J","authors":["A","B","C"],"year":2020}"#,
        );
        let output = dir.path().join("out.csv");

        let report = aggregate_dirs(&AggregateOptions {
            input_dirs: vec![dir.path().to_path_buf()],
            output_file: output.clone(),
        })
        .unwrap();

        assert_eq!(report.rows, 1);
        let content = fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(",pmid,pmcid,title,journal,authors,year"));
        assert_eq!(lines.next(), Some(r#"0,123,PMC9,"Genes, and more",J,A|B|C,2020"#));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_aggregate_writes_header_only() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.csv");
        write_csv(&[], &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), ",pmid,pmcid,title,journal,authors,year\n");
    }
}
