//! File I/O utilities with atomic writes
//!
//! Provides whole-file replacement that won't leave a half-written store
//! behind on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};

/// Sibling path used while a file is being rewritten
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the file at `path` with whatever `write` produces
///
/// The content goes to a temp file in the same directory which is then
/// renamed over the target, so the file is either completely written or not
/// modified at all.
pub fn write_atomic<P, F>(path: P, write: F) -> BudgetResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> BudgetResult<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                BudgetError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    if let Err(e) = write(&mut writer) {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
