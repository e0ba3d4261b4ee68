//! Source file discovery

use super::PipelineError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Suffix of the submissions that receive feedback
pub const SOURCE_EXTENSION: &str = ".py";

/// Lists the direct entries of `dir` that are files named `*<extension>`
///
/// Subdirectories are not descended into. The order is whatever the
/// directory listing yields.
pub fn discover_source_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let discovery_error = |source| PipelineError::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery_error)? {
        let entry = entry.map_err(discovery_error)?;
        let name = entry.file_name();

        if !name.to_string_lossy().ends_with(extension) {
            continue;
        }
        // file_type does not follow symlinks; metadata does
        if !entry.path().is_file() {
            trace!("Skipping non-file entry: {}", entry.path().display());
            continue;
        }

        files.push(entry.path());
    }

    debug!(
        "Discovered {} {} file(s) in {}",
        files.len(),
        extension,
        dir.display()
    );
    Ok(files)
}
