//! Hyperedge normalization.
//!
//! Turns a tab-delimited file of n-ary records into four tables:
//!
//! ```text
//! ixn.tsv ──▶ read ──▶ normalize (in memory) ──▶ node-ixn.tsv
//!                                               source-ixn.tsv
//!                                               target-ixn.tsv
//!                                               array-ixn.tsv
//! ```
//!
//! The whole file is normalized before anything is written, so a malformed
//! row aborts the run without touching the output directory.

pub mod hash;
pub mod hyperedge;
pub mod writer;

pub use hash::fact_id;
pub use hyperedge::{normalize_table, split_array, ARRAY_SEPARATOR, FACT_ID_HEADER};
pub use writer::{write_table, write_tables, OutputPaths};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{NormalizeError, NormalizeResult};
use crate::logs::{log_info, log_success};
use crate::models::RoleColumns;
use crate::parser::read_tsv;

/// Options for one normalizer run
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Tab-delimited inputs, processed in order
    pub input_files: Vec<PathBuf>,

    /// Directory receiving the four tables per input
    pub output_dir: PathBuf,

    /// Role column indices
    pub roles: RoleColumns,
}

/// Outcome of normalizing one file
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    pub input: PathBuf,
    pub rows: usize,
    pub array_edges: usize,
    pub outputs: OutputPaths,
}

fn basename(path: &Path) -> NormalizeResult<&OsStr> {
    path.file_name()
        .ok_or_else(|| NormalizeError::NoBasename(path.to_path_buf()))
}

/// Normalize a single file into `output_dir`.
pub fn normalize_file(
    input: &Path,
    output_dir: &Path,
    roles: RoleColumns,
) -> NormalizeResult<NormalizeReport> {
    let name = basename(input)?;

    log_info(format!("📖 Reading {}", input.display()));
    let parsed = read_tsv(input)?;
    log_info(format!("{} columns, {} rows", parsed.headers.len(), parsed.rows.len()));

    let tables = normalize_table(&parsed, roles)?;
    let outputs = write_tables(&tables, output_dir, name)?;

    log_success(format!("Normalizing {} is complete", input.display()));

    Ok(NormalizeReport {
        input: input.to_path_buf(),
        rows: tables.nodes.len(),
        array_edges: tables.arrays.len(),
        outputs,
    })
}

/// Normalize every input of `options`, stopping at the first failure.
pub fn normalize_files(options: &NormalizeOptions) -> NormalizeResult<Vec<NormalizeReport>> {
    options
        .input_files
        .iter()
        .map(|input| normalize_file(input, &options.output_dir, options.roles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "id\tsrc\ttgt\tarr\n\
                          r1\ts1\tt1\ta1|a2\n\
                          r2\ts2\tt2\t\n";

    #[test]
    fn test_normalize_file_writes_four_tables() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ixn.tsv");
        fs::write(&input, SAMPLE).unwrap();
        let out = dir.path().join("out");

        let report = normalize_file(&input, &out, RoleColumns::new(1, 2, 3).unwrap()).unwrap();

        assert_eq!(report.rows, 2);
        assert_eq!(report.array_edges, 2);
        let h1 = fact_id(&["r1", "s1", "t1"]);
        let node = fs::read_to_string(out.join("node-ixn.tsv")).unwrap();
        assert_eq!(node.lines().next(), Some("FactID\tid"));
        assert_eq!(node.lines().nth(1), Some(format!("{}\tr1", h1).as_str()));
        let array = fs::read_to_string(&report.outputs.array).unwrap();
        assert_eq!(array.lines().count(), 3);
    }

    #[test]
    fn test_output_is_deterministic() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ixn.tsv");
        fs::write(&input, SAMPLE).unwrap();
        let roles = RoleColumns::new(1, 2, 3).unwrap();

        let a = normalize_file(&input, &dir.path().join("a"), roles).unwrap();
        let b = normalize_file(&input, &dir.path().join("b"), roles).unwrap();

        for role in crate::models::EdgeRole::ALL {
            let bytes_a = fs::read(a.outputs.get(role)).unwrap();
            let bytes_b = fs::read(b.outputs.get(role)).unwrap();
            assert_eq!(bytes_a, bytes_b);
        }
    }

    #[test]
    fn test_bad_row_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.tsv");
        fs::write(&input, "id\tsrc\ttgt\tarr\nr1\ts1\n").unwrap();
        let out = dir.path().join("out");

        let err = normalize_file(&input, &out, RoleColumns::new(1, 2, 3).unwrap()).unwrap_err();

        assert!(matches!(err, NormalizeError::ColumnOutOfRange { .. }));
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_basename_is_kept() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let input = dir.path().join(OsStr::from_bytes(b"ixn\xff.tsv"));
        fs::write(&input, SAMPLE).unwrap();
        let out = dir.path().join("out");

        let report = normalize_file(&input, &out, RoleColumns::new(1, 2, 3).unwrap()).unwrap();

        let expected = out.join(OsStr::from_bytes(b"node-ixn\xff.tsv"));
        assert_eq!(report.outputs.node, expected);
        assert!(expected.is_file());
        assert!(out.join(OsStr::from_bytes(b"array-ixn\xff.tsv")).is_file());
    }

    #[test]
    fn test_input_without_file_name() {
        let dir = tempdir().unwrap();
        let err = normalize_file(Path::new("/"), dir.path(), RoleColumns::new(1, 2, 3).unwrap())
            .unwrap_err();
        assert!(matches!(err, NormalizeError::NoBasename(_)));
    }

    #[test]
    fn test_multiple_inputs() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.tsv");
        let second = dir.path().join("second.tsv");
        fs::write(&first, SAMPLE).unwrap();
        fs::write(&second, "id\tsrc\ttgt\tarr\nr9\ts9\tt9\tz\n").unwrap();

        let options = NormalizeOptions {
            input_files: vec![first, second],
            output_dir: dir.path().join("out"),
            roles: RoleColumns::new(1, 2, 3).unwrap(),
        };
        let reports = normalize_files(&options).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].rows, 1);
        assert!(dir.path().join("out/target-second.tsv").is_file());
    }
}
