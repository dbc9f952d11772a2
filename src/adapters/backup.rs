use crate::utils::error::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the data folder into a timestamped sibling directory and returns
/// its path. The source is created first if it does not exist yet, so a
/// backup taken before any export still succeeds.
pub fn backup_folder(data_folder: &Path) -> Result<PathBuf> {
    if !data_folder.exists() {
        fs::create_dir_all(data_folder)?;
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let name = format!("backup_{}", stamp);
    let target = data_folder
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(name);

    copy_recursively(data_folder, &target)?;
    tracing::info!(path = %target.display(), "backup created");
    Ok(target)
}

/// Total size in bytes of every regular file under `folder`.
pub fn folder_size(folder: &Path) -> Result<u64> {
    let mut total = 0;
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_dir() {
            total += folder_size(&entry.path())?;
        } else {
            total += meta.len();
        }
    }
    Ok(total)
}

fn copy_recursively(source: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.metadata()?.is_dir() {
            copy_recursively(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
