use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write `contents` to `dir/name`, creating `dir` if needed.
///
/// An existing file with the same name is replaced.
pub fn write_document(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

pub fn card_file_name(number: usize) -> String {
    format!("card_{number:02}.html")
}

pub fn sheet_file_name(number: usize) -> String {
    format!("sheet_{number:02}.html")
}
