//! Batch driver
//!
//! Runs the extraction pipeline over a list of (input, output) jobs. Each job
//! is processed to completion before the next starts, and a failing job is
//! logged and recorded without stopping the rest of the batch.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::emit::HeaderLanguage;
use crate::model::ColumnOrder;
use crate::{extract_columns, ExtractOptions, ExtractSummary};

/// One input/output pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ExtractJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// A job that did not produce output, with a human-readable reason
#[derive(Debug, Clone)]
pub struct JobFailure {
    pub job: ExtractJob,
    pub message: String,
}

/// Per-job outcomes of a batch, in job order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub succeeded: Vec<ExtractSummary>,
    pub failed: Vec<JobFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// True when every job wrote its output
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every job in order, collecting successes and failures
pub fn run_batch(jobs: &[ExtractJob], order: ColumnOrder, header: HeaderLanguage) -> BatchReport {
    let mut report = BatchReport::default();

    for job in jobs {
        let options = ExtractOptions {
            input_path: job.input.clone(),
            output_path: job.output.clone(),
            order,
            header,
        };

        match extract_columns(&options) {
            Ok(summary) => report.succeeded.push(summary),
            Err(e) => {
                let message = e.report();
                tracing::error!(input = %job.input.display(), "{}", message);
                report.failed.push(JobFailure {
                    job: job.clone(),
                    message,
                });
            }
        }
    }

    tracing::info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        "batch finished"
    );

    report
}

/// Resolve input sources into jobs.
///
/// A source may be a file, a directory (searched recursively for `.sql`
/// files) or a glob pattern. A source that is none of these is kept as a
/// plain file path so that it fails with a not-found report when run.
/// Outputs are `<stem>.csv`, placed in `out_dir` when given and next to the
/// input otherwise. Jobs are returned sorted by input path, without
/// duplicates.
pub fn discover_jobs(sources: &[String], out_dir: Option<&Path>) -> Vec<ExtractJob> {
    let mut inputs: Vec<PathBuf> = Vec::new();

    for source in sources {
        let path = Path::new(source);
        if path.is_dir() {
            inputs.extend(sql_files_in_dir(path));
        } else if path.exists() || !is_glob_pattern(source) {
            inputs.push(path.to_path_buf());
        } else {
            inputs.extend(glob_matches(source));
        }
    }

    inputs.sort();
    inputs.dedup();

    let mut outputs_seen = HashSet::new();
    inputs
        .into_iter()
        .map(|input| {
            let output = output_path_for(&input, out_dir);
            if !outputs_seen.insert(output.clone()) {
                tracing::warn!(
                    output = %output.display(),
                    input = %input.display(),
                    "several inputs map to the same output; the last one wins"
                );
            }
            ExtractJob { input, output }
        })
        .collect()
}

/// CSV path for an input: `<stem>.csv` in `out_dir` or beside the input
pub fn output_path_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let file_name = format!("{}.csv", stem);
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input
            .parent()
            .unwrap_or(Path::new("."))
            .join(file_name),
    }
}

fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("sql"))
}

fn is_glob_pattern(source: &str) -> bool {
    source.contains(['*', '?', '['])
}

fn sql_files_in_dir(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("skipping unreadable directory entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_sql_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

fn glob_matches(pattern: &str) -> Vec<PathBuf> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!(pattern, "invalid glob pattern: {}", e);
            return Vec::new();
        }
    };

    let matches: Vec<PathBuf> = paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    if matches.is_empty() {
        tracing::warn!(pattern, "glob pattern matched no files");
    }
    matches
}
