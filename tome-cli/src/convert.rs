//! Batch conversion of entry files
//!
//! Files are converted in parallel with one shared [`Converter`]. A failing file
//! never stops the others; failures are reported together once the batch is done.

use crate::source::{self, SourceError};
use anyhow::bail;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tome_parser::tome::{Converter, Document};
use tracing::{debug, error, info};

/// Where converted documents go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Next to each input, or under the given directory.
    Files { out_dir: Option<PathBuf> },
    /// Concatenated on stdout, in input order.
    Stdout,
}

fn convert_one(converter: &Converter, path: &Path) -> Result<Document, SourceError> {
    let lines = source::read_lines(path)?;
    debug!(path = %path.display(), lines = lines.len(), "read entry");
    Ok(converter.convert(lines))
}

fn convert_to_file(converter: &Converter, path: &Path, target: &Path) -> Result<(), SourceError> {
    let document = convert_one(converter, path)?;
    source::write_document(target, &document)
}

/// Pair every input with its output file, refusing inputs that would overwrite
/// each other.
fn plan_targets(paths: &[PathBuf], out_dir: Option<&Path>) -> anyhow::Result<Vec<(PathBuf, PathBuf)>> {
    let mut seen = HashSet::new();
    paths
        .iter()
        .map(|path| {
            let target = source::output_path(path, out_dir);
            if !seen.insert(target.clone()) {
                bail!(
                    "{} would overwrite the output of an earlier input ({})",
                    path.display(),
                    target.display()
                );
            }
            Ok((path.clone(), target))
        })
        .collect()
}

/// Convert every path, writing results to `destination`.
pub fn run(converter: &Converter, paths: &[PathBuf], destination: &Destination) -> anyhow::Result<()> {
    let failures: Vec<SourceError> = match destination {
        Destination::Files { out_dir } => plan_targets(paths, out_dir.as_deref())?
            .par_iter()
            .filter_map(|(path, target)| match convert_to_file(converter, path, target) {
                Ok(()) => {
                    info!(output = %target.display(), "converted");
                    None
                }
                Err(err) => Some(err),
            })
            .collect(),
        Destination::Stdout => {
            let results: Vec<_> = paths
                .par_iter()
                .map(|path| convert_one(converter, path))
                .collect();

            let mut failures = Vec::new();
            let mut first = true;
            for result in results {
                match result {
                    Ok(document) => {
                        if !first {
                            println!();
                        }
                        print!("{}", document);
                        first = false;
                    }
                    Err(err) => failures.push(err),
                }
            }
            failures
        }
    };

    for failure in &failures {
        error!("{}", FailureReport(failure));
    }
    if !failures.is_empty() {
        bail!("{} of {} files failed", failures.len(), paths.len());
    }
    Ok(())
}

/// Renders a failure together with its chain of causes.
#[derive(Debug)]
struct FailureReport<'a>(&'a SourceError);

impl std::fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut cause = std::error::Error::source(self.0);
        while let Some(err) = cause {
            write!(f, ": {}", err)?;
            cause = err.source();
        }
        Ok(())
    }
}
