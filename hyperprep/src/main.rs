//! Hyperprep CLI - Prepare hyperedge and publication data for graph import
//!
//! ```bash
//! hyperprep normalize -i ixn.tsv -o out/ -s 1 -t 2 -a 3
//! hyperprep pmc-import -i pmc/a pmc/b -o publications.csv
//! hyperprep columns ixn.tsv          # show column indices
//! ```

use clap::{Parser, Subcommand};
use hyperprep::logs::{log_error, log_info, LOGGER};
use hyperprep::{
    aggregate_dirs, normalize_files, read_headers, AggregateOptions, NormalizeOptions,
    RoleColumns,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hyperprep")]
#[command(about = "Normalize hyperedge tables and aggregate publication metadata", long_about = None)]
struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a hyperedge TSV into node, source, target and array tables
    Normalize {
        /// Tab-delimited input file(s)
        #[arg(short = 'i', long = "input_file", num_args = 1.., required = true)]
        input_files: Vec<PathBuf>,

        /// Directory for the output tables
        #[arg(short = 'o', long = "output_dir")]
        output_dir: PathBuf,

        /// Zero-based index of the source column
        #[arg(short, long)]
        source: usize,

        /// Zero-based index of the target column
        #[arg(short, long)]
        target: usize,

        /// Zero-based index of the '|'-separated array column
        #[arg(short, long)]
        array: usize,
    },

    /// Aggregate PMC JSON files into one CSV
    PmcImport {
        /// Directories containing PMC JSON files
        #[arg(short = 'i', long = "input_dir", num_args = 1.., required = true)]
        input_dirs: Vec<PathBuf>,

        /// Output CSV file
        #[arg(short = 'o', long = "output_file")]
        output_file: PathBuf,
    },

    /// Show the columns of a TSV file with their indices
    Columns {
        /// Tab-delimited input file
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    LOGGER.set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Normalize {
            input_files,
            output_dir,
            source,
            target,
            array,
        } => cmd_normalize(input_files, output_dir, source, target, array),

        Commands::PmcImport {
            input_dirs,
            output_file,
        } => cmd_pmc_import(input_dirs, output_file),

        Commands::Columns { input } => cmd_columns(&input),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_normalize(
    input_files: Vec<PathBuf>,
    output_dir: PathBuf,
    source: usize,
    target: usize,
    array: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = NormalizeOptions {
        input_files,
        output_dir,
        roles: RoleColumns::new(source, target, array)?,
    };

    let reports = normalize_files(&options)?;
    let facts: usize = reports.iter().map(|r| r.rows).sum();
    log_info(format!("✨ {} file(s), {} facts", reports.len(), facts));
    Ok(())
}

fn cmd_pmc_import(
    input_dirs: Vec<PathBuf>,
    output_file: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = AggregateOptions {
        input_dirs,
        output_file,
    };

    let report = aggregate_dirs(&options)?;
    if !report.skipped.is_empty() {
        log_info(format!("{} file(s) skipped without pmid", report.skipped.len()));
    }
    Ok(())
}

fn cmd_columns(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let headers = read_headers(input)?;
    println!("📋 {} has {} columns:", input.display(), headers.len());
    for (i, col) in headers.iter().enumerate() {
        println!("  [{:2}] {}", i, col);
    }
    Ok(())
}
