//! Input file resolution.
//!
//! Turns the declared `kafkalo.input_dirs` patterns into the list of
//! definition files to read, and resolves schema references against the
//! configured schema root.

use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Only `*` marks a pattern as a glob. `?` and `[` are ordinary filename
/// characters in a literal path such as `topics[v1].yaml`.
const WILDCARD_MARKER: char = '*';

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Whether `pattern` needs glob expansion.
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(WILDCARD_MARKER)
}

/// Resolve patterns to existing regular files.
///
/// Patterns are processed in declaration order and glob matches keep their
/// expansion order. Candidates that do not exist or are not regular files
/// are skipped. Duplicates across patterns are kept. Any malformed glob
/// fails the whole resolution before the filesystem is touched.
pub fn resolve<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>, InputError> {
    for pattern in patterns.iter().map(AsRef::as_ref).filter(|p| is_glob(p)) {
        glob::Pattern::new(pattern).map_err(|source| InputError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
    }

    let mut files = Vec::new();
    for pattern in patterns.iter().map(AsRef::as_ref) {
        if is_glob(pattern) {
            let matches = glob::glob(pattern).map_err(|source| InputError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
            for entry in matches {
                match entry {
                    Ok(path) => {
                        if is_valid_input_file(&path) {
                            files.push(path);
                        }
                    }
                    Err(err) => {
                        info!(path = %err.path().display(), error = %err.error(), "Ignoring unreadable input");
                    }
                }
            }
        } else {
            let path = PathBuf::from(pattern);
            if is_valid_input_file(&path) {
                files.push(path);
            }
        }
    }

    debug!(count = files.len(), "Resolved input files");
    Ok(files)
}

/// An input file must exist and be a regular file (symlinks are followed).
fn is_valid_input_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => true,
        Ok(_) => {
            info!(path = %path.display(), "Ignoring input because it is not a regular file");
            false
        }
        Err(err) => {
            info!(path = %path.display(), error = %err, "Ignoring input");
            false
        }
    }
}

/// Resolve a schema reference against the schema root.
///
/// An empty `schema_dir` leaves the path unchanged. Otherwise the reference
/// always lands under `schema_dir`: a leading root is dropped before joining,
/// so `/a.avsc` becomes `<schema_dir>/a.avsc`.
pub fn normalize_schema_path(path: impl AsRef<Path>, schema_dir: &str) -> PathBuf {
    let path = path.as_ref();
    if schema_dir.is_empty() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    Path::new(schema_dir).join(relative)
}
