//! Corpus file access: discovery, reading and writing.

use std::fs;
use std::path::{Path, PathBuf};

use crfprep_core::{CrfPrepError, Result};
use walkdir::WalkDir;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CrfPrepError + '_ {
    move |source| CrfPrepError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Every regular file under `root`, recursively, in sorted path order.
///
/// Symlinked directories are not descended into; symlinks to files are kept.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            CrfPrepError::Io {
                path,
                source: err.into(),
            }
        })?;
        let file_type = entry.file_type();
        if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// The files a run should process: `input` itself, or everything under it
/// when it is a directory.
pub fn resolve_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(input).map_err(io_error(input))?;
    if metadata.is_dir() {
        discover_files(input)
    } else {
        Ok(vec![input.to_path_buf()])
    }
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(io_error(path))
}

/// Write `text` to `path`, creating missing parent directories.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(path, text).map_err(io_error(path))
}
