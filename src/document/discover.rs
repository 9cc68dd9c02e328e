use super::DocumentFormat;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand the given paths into the list of documents to process.
///
/// Files are taken as given, whatever their extension, so an unsupported one
/// is reported later. Directories are walked recursively for `.json` and
/// `.toml` files, in sorted order.
pub fn discover(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_dir() {
            found.extend(walk(path)?);
        } else {
            found.push(path.clone());
        }
    }

    Ok(found)
}

fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if DocumentFormat::from_path(&path).is_ok() {
            found.push(path);
        } else {
            log::debug!("skipping {}", path.display());
        }
    }

    Ok(found)
}
