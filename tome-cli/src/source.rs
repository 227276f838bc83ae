//! Reading entries from disk and writing converted documents back
//!
//! Only plain `.txt` transcriptions are accepted as input. Output files take the
//! input's stem with an `.md` extension.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tome_parser::tome::Document;

pub const INPUT_EXTENSION: &str = "txt";
pub const OUTPUT_EXTENSION: &str = "md";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{}: '{extension}' is an invalid format for this program (expected .{INPUT_EXTENSION})", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the lines of an entry, terminators removed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if !extension.eq_ignore_ascii_case(INPUT_EXTENSION) {
        return Err(SourceError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    let source = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(source.lines().map(str::to_string).collect())
}

/// Where the converted form of `input` is written.
pub fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let dir = out_dir
        .or_else(|| input.parent())
        .unwrap_or_else(|| Path::new(""));
    // Appended rather than set, so a dotted stem keeps every part.
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    dir.join(name)
}

/// Write every document line followed by a newline, creating parent directories.
pub fn write_document(path: &Path, document: &Document) -> Result<(), SourceError> {
    let write_err = |source| SourceError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, document.to_string()).map_err(write_err)
}
