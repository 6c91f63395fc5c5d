use crate::error::RunError;

use glob::glob;
use std::path::{Path, PathBuf};

/// Log files directly inside `dir` whose names match `pattern`, sorted.
///
/// Directories and unreadable entries are left out. A malformed pattern is an
/// error; no match is an empty list.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, RunError> {
    let pattern = resolve_glob(dir, pattern);
    let mut paths: Vec<PathBuf> = glob(&pattern)
        .map_err(|e| RunError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

fn resolve_glob(dir: &Path, pattern: &str) -> String {
    dir.join(pattern).to_string_lossy().into_owned()
}
