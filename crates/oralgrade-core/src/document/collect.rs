//! Expand command-line paths into the documents to process

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::GradingConfig;
use crate::error::{OralgradeError, Result};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Files under `dir` with a configured extension, sorted by path
fn walk_directory(dir: &Path, config: &GradingConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| OralgradeError::io_operation("walk", dir.display(), e))?;
        if entry.file_type().is_file() && config.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Resolve each path to the documents it names.
///
/// Files are taken as given regardless of extension, directories are walked
/// recursively, and paths that do not exist are passed through so the caller
/// can report them as missing.
pub fn collect_documents(paths: &[PathBuf], config: &GradingConfig) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = walk_directory(path, config)?;
            tracing::debug!(dir = %path.display(), files = found.len(), "walked directory");
            documents.extend(found);
        } else {
            documents.push(path.clone());
        }
    }
    Ok(documents)
}
